//! 외부 분할기 연동
//!
//! 일본어/한국어 형태소 분석기와 중국어 사전 분할기는 이 크레이트에 포함되지
//! 않습니다. 호출자가 `ExternalSegmenter`를 구현해 등록합니다.

use std::sync::LazyLock;

use regex::Regex;

use super::Token;
use crate::core::chinese::{original_offset, ChineseConverter};

static PUNCT_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{P}").expect("valid regex"));

/// 외부 분할기 인터페이스
///
/// 입력은 이미 정규화된 텍스트이며, 반환하는 토큰은 입력의 부분 문자열을
/// 순서대로 담아야 합니다. 공백 토큰은 무시됩니다.
pub trait ExternalSegmenter: Send + Sync {
    /// 텍스트를 토큰으로 분할
    fn segment(&self, text: &str, language: &str) -> Vec<String>;
}

impl<F> ExternalSegmenter for F
where
    F: Fn(&str, &str) -> Vec<String> + Send + Sync,
{
    fn segment(&self, text: &str, language: &str) -> Vec<String> {
        self(text, language)
    }
}

/// 공백 토큰과 (필요하면) 문장 부호로 시작하는 토큰 제거
pub fn filter_tokens(tokens: Vec<String>, include_punctuation: bool) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| !token.trim().is_empty())
        .filter_map(|token| {
            let is_punctuation = PUNCT_START_RE.is_match(&token);
            (include_punctuation || !is_punctuation).then(|| Token::new(token, is_punctuation))
        })
        .collect()
}

/// 간체로 바꾼 텍스트를 분할한 뒤 토큰을 원문 구간으로 되돌림
///
/// 분할기가 변환문에서 찾을 수 없는 토큰을 돌려주면 그 토큰을 그대로 사용합니다.
pub fn segment_simplified(
    segmenter: &dyn ExternalSegmenter,
    converter: &ChineseConverter,
    text: &str,
    language: &str,
) -> Vec<String> {
    let (simplified, offsets) = converter.simplify_with_offsets(text);
    let mut cursor = 0;
    let mut tokens = Vec::new();

    for token in segmenter.segment(&simplified, language) {
        if token.is_empty() {
            continue;
        }
        match simplified[cursor..].find(token.as_str()) {
            Some(found) => {
                let start = cursor + found;
                let end = start + token.len();
                let original_start = original_offset(&offsets, start, false);
                let original_end = original_offset(&offsets, end, true);
                tokens.push(text[original_start..original_end].to_string());
                cursor = end;
            }
            None => tokens.push(token),
        }
    }

    tokens
}
