//! 언어별 텍스트 정규화
//!
//! 처리 순서: 유니코드 정규형 → 문자 변환 → 결합 부호 제거 → 대소문자 접기
//! → s/t 발음 구별 기호 통일. 같은 입력과 프로필이면 항상 같은 결과를 냅니다.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::transliterate::transliterate;
use crate::language::{DiacriticMode, LanguageProfile, NormalForm, Transliteration};

/// 결합 부호(Mn)와 아랍어 타트윌(U+0640)
static MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Mn}\x{0640}]").expect("valid regex"));

/// 프로필 규칙에 따라 텍스트 정규화
pub fn normalize(text: &str, profile: &LanguageProfile) -> String {
    let mut text: String = match profile.normal_form {
        NormalForm::Nfc => text.nfc().collect(),
        NormalForm::Nfkc => text.nfkc().collect(),
    };

    if profile.transliteration != Transliteration::None {
        text = transliterate(&text, profile.transliteration);
    }

    if profile.strip_marks {
        text = remove_marks(&text);
    }

    text = if profile.dotless_i {
        casefold_with_i_dots(&text)
    } else {
        casefold(&text)
    };

    match profile.diacritics {
        DiacriticMode::None => text,
        DiacriticMode::Cedillas => commas_to_cedillas(&text),
        DiacriticMode::Commas => cedillas_to_commas(&text),
    }
}

/// 결합 부호와 타트윌 제거 (아랍어, 히브리어)
pub fn remove_marks(text: &str) -> String {
    MARK_RE.replace_all(text, "").into_owned()
}

/// 유니코드 대소문자 접기
///
/// 한 글자씩 소문자로 바꾼 뒤 소문자 변환만으로는 같아지지 않는
/// 글자(ß, 어말 시그마, 합자 등)를 추가로 펼칩니다. 체로키 문자는
/// 유니코드 대소문자 접기 규칙대로 대문자로 모읍니다.
///
/// 유니코드 CaseFolding.txt 전체가 아니라 소문자 변환과 다른 결과를 내는
/// 글자만 표로 다룹니다. 그 밖의 차이(그리스어 일부 기호, 조지아어
/// 음트라브룰리 등)는 소문자 변환 결과를 따릅니다.
///
/// # Examples
/// ```
/// use wordfreq::core::casefold;
/// assert_eq!(casefold("Straße"), "strasse");
/// assert_eq!(casefold("ΣΟΦΌΣ"), casefold("σοφός"));
/// ```
pub fn casefold(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(upper) = fold_cherokee(c) {
            result.push(upper);
            continue;
        }
        for lower in c.to_lowercase() {
            match fold_special(lower) {
                Some(folded) => result.push_str(folded),
                None => result.push(lower),
            }
        }
    }
    result
}

fn fold_special(c: char) -> Option<&'static str> {
    let folded = match c {
        'ß' => "ss",
        'ς' => "σ",
        'ſ' => "s",
        'ϐ' => "β",
        'ϑ' => "θ",
        'ϕ' => "φ",
        'ϖ' => "π",
        'ϰ' => "κ",
        'ϱ' => "ρ",
        'ϵ' => "ε",
        'ﬀ' => "ff",
        'ﬁ' => "fi",
        'ﬂ' => "fl",
        'ﬃ' => "ffi",
        'ﬄ' => "ffl",
        'ﬅ' | 'ﬆ' => "st",
        'ŉ' => "ʼn",
        _ => return None,
    };
    Some(folded)
}

/// 체로키 문자 접기 (소문자 → 대문자)
fn fold_cherokee(c: char) -> Option<char> {
    let folded = match c as u32 {
        // Ꭰ..Ᏽ는 이미 접힌 형태
        0x13A0..=0x13F5 => return Some(c),
        0x13F8..=0x13FD => c as u32 - 8,
        0xAB70..=0xABBF => c as u32 - 0xAB70 + 0x13A0,
        _ => return None,
    };
    char::from_u32(folded)
}

/// 터키어식 대소문자 접기 (İ → i, I → ı)
///
/// 결합 점(U+0307)이 붙은 I도 İ로 합쳐지도록 먼저 NFC를 적용합니다.
pub fn casefold_with_i_dots(text: &str) -> String {
    let composed: String = text
        .nfc()
        .map(|c| match c {
            'İ' => 'i',
            'I' => 'ı',
            other => other,
        })
        .collect();
    casefold(&composed)
}

/// ș/ț(쉼표) → ş/ţ(세디유)
pub fn commas_to_cedillas(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{0219}' => '\u{015F}',
            '\u{021B}' => '\u{0163}',
            other => other,
        })
        .collect()
}

/// ş/ţ(세디유) → ș/ț(쉼표)
pub fn cedillas_to_commas(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{015F}' => '\u{0219}',
            '\u{0163}' => '\u{021B}',
            other => other,
        })
        .collect()
}
