//! 언어 태그 파싱과 최근접 매칭
//!
//! 지역/문자 서브태그는 매칭에 영향을 주지 않으므로 파싱할 때 버립니다.
//! "zh-TW", "zh-Hant", "cmn"은 모두 "zh"와 거리 0으로 매칭됩니다.

/// 매칭 불가를 나타내는 거리
pub const NO_MATCH: u32 = 1000;

/// 파싱된 언어 태그
///
/// 매칭에는 주 언어 코드만 쓰이므로 문자/지역/변이 서브태그는 읽고 버립니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    /// 정규화된 주 언어 코드 (알 수 없으면 "und")
    pub language: String,
}

impl LanguageTag {
    /// 하이픈/밑줄로 구분된 태그 파싱. 실패하지 않음
    pub fn parse(tag: &str) -> Self {
        let primary = tag.trim().split(['-', '_']).find(|p| !p.is_empty());

        let language = match primary {
            Some(primary)
                if (2..=8).contains(&primary.len())
                    && primary.chars().all(|c| c.is_ascii_alphabetic()) =>
            {
                canonical_language(&primary.to_ascii_lowercase())
            }
            _ => "und".to_string(),
        };

        Self { language }
    }

    /// 언어 코드를 알 수 없는 태그인지 확인
    pub fn is_undetermined(&self) -> bool {
        self.language == "und"
    }
}

/// 3글자 코드, 폐지된 코드, 매크로언어 코드를 대표 코드로 변환
pub fn canonical_language(code: &str) -> String {
    language_alias(code).unwrap_or(code).to_string()
}

fn language_alias(code: &str) -> Option<&'static str> {
    let canonical = match code {
        "afr" => "af",
        "ara" | "arb" => "ar",
        "aze" | "azj" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bos" => "bs",
        "bul" => "bg",
        "bur" | "mya" => "my",
        "cat" => "ca",
        "ces" | "cze" => "cs",
        "chi" | "zho" | "cmn" => "zh",
        "cym" | "wel" => "cy",
        "dan" => "da",
        "deu" | "ger" => "de",
        "dut" | "nld" => "nl",
        "ell" | "gre" => "el",
        "eng" => "en",
        "est" => "et",
        "eus" | "baq" => "eu",
        "fas" | "per" | "pes" => "fa",
        "fin" => "fi",
        "fra" | "fre" => "fr",
        "glg" => "gl",
        "heb" | "iw" => "he",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" | "arm" => "hy",
        "ind" | "in" => "id",
        "isl" | "ice" => "is",
        "ita" => "it",
        "jpn" => "ja",
        "kat" | "geo" => "ka",
        "kaz" => "kk",
        "khm" => "km",
        "kor" => "ko",
        "lao" => "lo",
        "lav" | "lvs" => "lv",
        "lit" => "lt",
        "mac" | "mkd" => "mk",
        "mal" => "ml",
        "may" | "msa" | "zsm" => "ms",
        "mo" | "mol" | "ron" | "rum" => "ro",
        "nob" => "nb",
        "nno" => "nn",
        "nor" => "no",
        "pol" => "pl",
        "por" => "pt",
        "rus" => "ru",
        "sh" | "hbs" | "srp" => "sr",
        "slk" | "slo" => "sk",
        "slv" => "sl",
        "spa" => "es",
        "sqi" | "alb" => "sq",
        "swe" => "sv",
        "tam" => "ta",
        "tgl" | "tl" => "fil",
        "tha" => "th",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "vie" => "vi",
        "yid" | "ji" => "yi",
        _ => return None,
    };
    Some(canonical)
}

/// 서로 다른 언어지만 대체 사용이 가능한 조합 (요청 → 지원, 거리)
#[rustfmt::skip]
const RELATED_LANGUAGES: &[(&str, &str, u32)] = &[
    ("yue", "zh", 10),  // 광둥어 → 중국어
    ("no", "nb", 1),    // 노르웨이어 → 보크몰
    ("nb", "no", 1),
    ("nn", "nb", 10),   // 뉘노르스크 → 보크몰
    ("bs", "hr", 4),
    ("hr", "bs", 4),
    ("bs", "sr", 4),
    ("af", "nl", 20),
];

/// 두 태그 사이의 거리. 같은 언어면 0, 관련 언어면 표의 값, 그 외 `NO_MATCH`
pub fn language_distance(desired: &LanguageTag, supported: &LanguageTag) -> u32 {
    if desired.is_undetermined() || supported.is_undetermined() {
        return NO_MATCH;
    }
    if desired.language == supported.language {
        return 0;
    }
    RELATED_LANGUAGES
        .iter()
        .find(|(d, s, _)| *d == desired.language && *s == supported.language)
        .map(|&(_, _, distance)| distance)
        .unwrap_or(NO_MATCH)
}

/// 지원 목록에서 가장 가까운 태그 탐색
///
/// 거리가 `max_distance` 이하인 후보 중 가장 가까운 것을 반환합니다.
/// 동률이면 먼저 나온 후보를 선택합니다.
pub fn closest_match<'a, I>(desired: &str, supported: I, max_distance: u32) -> Option<(&'a str, u32)>
where
    I: IntoIterator<Item = &'a str>,
{
    let desired = LanguageTag::parse(desired);
    let mut best: Option<(&'a str, u32)> = None;

    for candidate in supported {
        let distance = language_distance(&desired, &LanguageTag::parse(candidate));
        if distance > max_distance {
            continue;
        }
        if best.map(|(_, d)| distance < d).unwrap_or(true) {
            best = Some((candidate, distance));
        }
    }

    best
}
