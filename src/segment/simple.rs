//! 유니코드 단어 경계 기반 분할
//!
//! UAX #29 단어 경계를 기본으로 하되 다음을 보정합니다.
//! - 띄어쓰기 없이 쓰는 문자(한자, 히라가나, 태국 문자 등)의 연속은 한 토큰
//! - 모음 앞 생략 접두사(l', qu' 등)는 따로 분리
//! - 성 중립 표기의 @, @s 어미(tod@s, l@s)는 단어에 포함
//! - 문장 부호는 `include_punctuation`일 때만 토큰으로 남김

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::Token;

static SPACELESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\p{Ideographic}\p{Hiragana}\p{Thai}\p{Khmer}\p{Lao}\p{Myanmar}\p{Tai_Le}\p{New_Tai_Lue}\p{Tai_Tham}ー々〻〆]+",
    )
    .expect("valid regex")
});
static WORD_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\p{So}]").expect("valid regex"));
static PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{P}").expect("valid regex"));
static ELISION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w\w?'").expect("valid regex"));
static WORD_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w").expect("valid regex"));

/// 생략 접두사 뒤에 올 수 있는 글자 (모음과 h)
const ELISION_FOLLOWERS: &str = "AEHIOUYÁÉÍÓÚÀÈÌÒÙÂÊÎÔÛÅÏÖŒaehiouyáéíóúàèìòùâêîôûåïöœ";

/// 정규화된 텍스트를 토큰으로 분할
///
/// 문장 부호를 제외하면 토큰 앞뒤의 아포스트로피도 떼어 냅니다.
pub fn simple_segment(text: &str, include_punctuation: bool) -> Vec<Token> {
    scan(text, include_punctuation)
        .into_iter()
        .filter_map(|(token, is_punctuation)| {
            let token = if include_punctuation {
                token
            } else {
                token.trim_matches('\'')
            };
            (!token.is_empty()).then(|| Token::new(token, is_punctuation))
        })
        .collect()
}

/// `simple_segment`의 토큰 문자열만 반환
///
/// # Examples
/// ```
/// use wordfreq::segment::simple_tokenize;
/// assert_eq!(simple_tokenize("l'heure du flip-flop", false), vec!["l", "heure", "du", "flip", "flop"]);
/// ```
pub fn simple_tokenize(text: &str, include_punctuation: bool) -> Vec<String> {
    simple_segment(text, include_punctuation)
        .into_iter()
        .map(|token| token.text)
        .collect()
}

/// 토큰 위치 탐색 (문장 부호 여부 포함)
fn scan(text: &str, include_punctuation: bool) -> Vec<(&str, bool)> {
    let graphemes: Vec<usize> = text.grapheme_indices(true).map(|(i, _)| i).collect();
    let mut boundaries: HashSet<usize> = text.split_word_bound_indices().map(|(i, _)| i).collect();
    boundaries.insert(text.len());

    // 바이트 위치 이상인 첫 글자소 인덱스
    let grapheme_at = |pos: usize| graphemes.partition_point(|&start| start < pos);
    let grapheme_start = |index: usize| graphemes.get(index).copied().unwrap_or(text.len());

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < graphemes.len() {
        let start = graphemes[i];
        let rest = &text[start..];

        if let Some(m) = SPACELESS_RE.find(rest) {
            let end = grapheme_start(grapheme_at(start + m.end()));
            tokens.push((&text[start..end], false));
            i = grapheme_at(end);
            continue;
        }

        if rest.starts_with("@s") && !starts_with_word_char(&rest[2..]) {
            tokens.push((&rest[..2], false));
            i = grapheme_at(start + 2);
            continue;
        }

        let first = &text[start..grapheme_start(i + 1)];

        if WORD_START_RE.is_match(first) {
            if let Some(m) = ELISION_RE.find(rest) {
                let follows_vowel = rest[m.end()..]
                    .chars()
                    .next()
                    .is_some_and(|c| ELISION_FOLLOWERS.contains(c));
                if follows_vowel {
                    tokens.push((&rest[..m.end()], false));
                    i = grapheme_at(start + m.end());
                    continue;
                }
            }

            let mut j = i + 1;
            let end = loop {
                let pos = grapheme_start(j);
                if let Some(len) = at_sign_ending(&text[pos..]) {
                    break pos + len;
                }
                if boundaries.contains(&pos) {
                    break pos;
                }
                j += 1;
            };
            tokens.push((&text[start..end], false));
            i = grapheme_at(end);
            continue;
        }

        if include_punctuation && PUNCT_RE.is_match(first) {
            let mut j = i + 1;
            while j < graphemes.len() && is_punctuation_only(&text[graphemes[j]..]) {
                j += 1;
            }
            tokens.push((&text[start..grapheme_start(j)], true));
            i = j;
            continue;
        }

        i += 1;
    }

    tokens
}

/// 단어 글자가 아닌 문장 부호로 시작하는지 확인
fn is_punctuation_only(text: &str) -> bool {
    PUNCT_RE.is_match(text) && !WORD_START_RE.is_match(text)
}

fn starts_with_word_char(text: &str) -> bool {
    WORD_CHAR_RE.is_match(text)
}

/// 단어 끝의 "@s" 또는 "@" 길이 (뒤에 단어 글자가 오면 None)
fn at_sign_ending(text: &str) -> Option<usize> {
    if text.starts_with("@s") && !starts_with_word_char(&text[2..]) {
        Some(2)
    } else if text.starts_with('@') && !starts_with_word_char(&text[1..]) {
        Some(1)
    } else {
        None
    }
}
