//! 언어별 처리 규칙 묶음
//!
//! 언어 태그를 고정된 규칙 묶음(`LanguageProfile`)으로 변환합니다.
//! 카탈로그는 언어별 대표 문자(script) 표이며, 규칙은 언어와 문자로부터
//! 결정됩니다. 카탈로그에 없는 태그는 일반 프로필(regex, NFKC)로 처리합니다.

use std::sync::Arc;

use dashmap::DashMap;

use super::tag::closest_match;

/// 토큰 분할 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationStrategy {
    /// 유니코드 단어 경계 + 띄어쓰기 없는 문자 묶음
    Regex,
    /// 외부 분할기에 위임
    External(Backend),
    /// 띄어쓰기 없는 문자인데 분할기가 없음 (regex로 처리하되 결과가 거침)
    Unsegmented,
}

/// 외부 분할기 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// 일본어/한국어 형태소 분석기
    Morphological,
    /// 중국어 사전 기반 분할기
    Chinese,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Morphological => "morphological",
            Backend::Chinese => "chinese",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 유니코드 정규화 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalForm {
    Nfc,
    Nfkc,
}

/// s/t 아래 붙는 발음 구별 기호 처리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiacriticMode {
    None,
    /// 쉼표 → 세디유 (터키어 계열)
    Cedillas,
    /// 세디유 → 쉼표 (루마니아어)
    Commas,
}

/// 분할 전에 적용하는 문자 변환
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transliteration {
    None,
    SerbianLatin,
    AzeriLatin,
}

/// 조회할 때만 적용하는 손실 변환
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTransliteration {
    None,
    ChineseSimplified,
}

/// 언어별 정규화/분할 규칙
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    /// 매칭된 카탈로그 언어 코드 ("und"면 일반 프로필)
    pub language: String,
    /// 전처리 후 토큰이 속하는 문자 (ISO 15924)
    pub script: &'static str,
    pub strategy: SegmentationStrategy,
    pub normal_form: NormalForm,
    /// 결합 부호(Mn)와 타트윌 제거 여부
    pub strip_marks: bool,
    /// 터키어식 점 없는 i 대소문자 처리
    pub dotless_i: bool,
    pub diacritics: DiacriticMode,
    pub transliteration: Transliteration,
    pub lookup_transliteration: LookupTransliteration,
}

/// 띄어쓰기 없이 쓰는 문자. 가타카나는 일부러 제외
/// (히라가나 → 가타카나 전환을 토큰 경계로 인식하기 위해)
pub const SPACELESS_SCRIPTS: &[&str] = &["Hira", "Thai", "Khmr", "Laoo", "Mymr", "Tale", "Talu", "Lana"];

/// 언어별 대표 문자
#[rustfmt::skip]
const LIKELY_SCRIPTS: &[(&str, &str)] = &[
    ("af", "Latn"), ("am", "Ethi"), ("ar", "Arab"), ("az", "Latn"), ("be", "Cyrl"),
    ("bg", "Cyrl"), ("bn", "Beng"), ("bo", "Tibt"), ("bs", "Latn"), ("ca", "Latn"),
    ("ckb", "Arab"), ("cs", "Latn"), ("cy", "Latn"), ("da", "Latn"), ("de", "Latn"),
    ("el", "Grek"), ("en", "Latn"), ("eo", "Latn"), ("es", "Latn"), ("et", "Latn"),
    ("eu", "Latn"), ("fa", "Arab"), ("fi", "Latn"), ("fil", "Latn"), ("fr", "Latn"),
    ("ga", "Latn"), ("gl", "Latn"), ("gu", "Gujr"), ("he", "Hebr"), ("hi", "Deva"),
    ("hr", "Latn"), ("hu", "Latn"), ("hy", "Armn"), ("id", "Latn"), ("is", "Latn"),
    ("it", "Latn"), ("ja", "Jpan"), ("ka", "Geor"), ("khb", "Talu"), ("kk", "Cyrl"),
    ("km", "Khmr"), ("kn", "Knda"), ("ko", "Kore"), ("ky", "Cyrl"), ("la", "Latn"),
    ("lo", "Laoo"), ("lt", "Latn"), ("lv", "Latn"), ("mk", "Cyrl"), ("ml", "Mlym"),
    ("mn", "Cyrl"), ("mr", "Deva"), ("ms", "Latn"), ("my", "Mymr"), ("nb", "Latn"),
    ("ne", "Deva"), ("nl", "Latn"), ("nn", "Latn"), ("no", "Latn"), ("nod", "Lana"),
    ("pa", "Guru"), ("pl", "Latn"), ("ps", "Arab"), ("pt", "Latn"), ("ro", "Latn"),
    ("ru", "Cyrl"), ("sd", "Arab"), ("si", "Sinh"), ("sk", "Latn"), ("sl", "Latn"),
    ("sq", "Latn"), ("sr", "Cyrl"), ("sv", "Latn"), ("sw", "Latn"), ("ta", "Taml"),
    ("tdd", "Tale"), ("te", "Telu"), ("tg", "Cyrl"), ("th", "Thai"), ("tr", "Latn"),
    ("tt", "Cyrl"), ("ug", "Arab"), ("uk", "Cyrl"), ("ur", "Arab"), ("uz", "Latn"),
    ("vi", "Latn"), ("yi", "Hebr"), ("zh", "Hans"),
    ("an", "Latn"), ("as", "Beng"), ("ast", "Latn"), ("ba", "Cyrl"), ("br", "Latn"),
    ("ce", "Cyrl"), ("ceb", "Latn"), ("co", "Latn"), ("cv", "Cyrl"), ("dv", "Thaa"),
    ("fo", "Latn"), ("fy", "Latn"), ("gd", "Latn"), ("gn", "Latn"), ("ha", "Latn"),
    ("ht", "Latn"), ("ia", "Latn"), ("ig", "Latn"), ("jv", "Latn"), ("ku", "Latn"),
    ("lb", "Latn"), ("ln", "Latn"), ("mg", "Latn"), ("mi", "Latn"), ("mt", "Latn"),
    ("oc", "Latn"), ("or", "Orya"), ("os", "Cyrl"), ("qu", "Latn"), ("rm", "Latn"),
    ("rw", "Latn"), ("sa", "Deva"), ("sm", "Latn"), ("sn", "Latn"), ("so", "Latn"),
    ("st", "Latn"), ("su", "Latn"), ("ti", "Ethi"), ("tk", "Latn"), ("wa", "Latn"),
    ("xh", "Latn"), ("yo", "Latn"), ("zu", "Latn"),
];

/// 카탈로그에 있는 언어 코드
pub fn catalog_languages() -> impl Iterator<Item = &'static str> {
    LIKELY_SCRIPTS.iter().map(|(language, _)| *language)
}

impl LanguageProfile {
    /// 카탈로그에 없는 태그용 일반 프로필
    pub fn generic() -> Self {
        Self {
            language: "und".to_string(),
            script: "Zyyy",
            strategy: SegmentationStrategy::Regex,
            normal_form: NormalForm::Nfkc,
            strip_marks: false,
            dotless_i: false,
            diacritics: DiacriticMode::None,
            transliteration: Transliteration::None,
            lookup_transliteration: LookupTransliteration::None,
        }
    }

    /// 태그에 맞는 프로필 계산 (캐시 없음)
    pub fn for_tag(tag: &str, match_cutoff: u32) -> Self {
        match closest_match(tag, catalog_languages(), match_cutoff) {
            Some((language, _)) => {
                let script = LIKELY_SCRIPTS
                    .iter()
                    .find(|(lang, _)| *lang == language)
                    .map(|(_, script)| *script)
                    .unwrap_or("Zyyy");
                Self::from_language(language, script)
            }
            None => Self::generic(),
        }
    }

    /// 언어와 문자로부터 규칙 결정
    fn from_language(language: &str, script: &'static str) -> Self {
        let mut profile = Self {
            language: language.to_string(),
            script,
            ..Self::generic()
        };

        profile.strategy = match language {
            "ja" | "ko" => SegmentationStrategy::External(Backend::Morphological),
            "zh" => SegmentationStrategy::External(Backend::Chinese),
            _ if SPACELESS_SCRIPTS.contains(&script) => SegmentationStrategy::Unsegmented,
            _ => SegmentationStrategy::Regex,
        };

        // 대소문자가 있는 알파벳 문자는 NFC로 충분
        if matches!(script, "Latn" | "Grek" | "Cyrl") {
            profile.normal_form = NormalForm::Nfc;
        }

        if matches!(script, "Arab" | "Hebr") {
            profile.strip_marks = true;
        }

        match language {
            "tr" | "az" | "kk" => {
                profile.dotless_i = true;
                profile.diacritics = DiacriticMode::Cedillas;
            }
            "ro" => profile.diacritics = DiacriticMode::Commas,
            _ => {}
        }

        profile.transliteration = match language {
            "sr" => Transliteration::SerbianLatin,
            "az" => Transliteration::AzeriLatin,
            _ => Transliteration::None,
        };

        if language == "zh" {
            profile.lookup_transliteration = LookupTransliteration::ChineseSimplified;
        }

        profile
    }
}

/// 태그별 프로필 캐시 (프로세스 수명 동안 유지)
#[derive(Debug)]
pub struct ProfileResolver {
    cache: DashMap<String, Arc<LanguageProfile>>,
    match_cutoff: u32,
}

impl ProfileResolver {
    pub fn new(match_cutoff: u32) -> Self {
        Self {
            cache: DashMap::new(),
            match_cutoff,
        }
    }

    /// 태그에 맞는 프로필 반환. 실패하지 않음
    pub fn resolve(&self, tag: &str) -> Arc<LanguageProfile> {
        if let Some(profile) = self.cache.get(tag) {
            return Arc::clone(profile.value());
        }
        let profile = Arc::new(LanguageProfile::for_tag(tag, self.match_cutoff));
        Arc::clone(
            self.cache
                .entry(tag.to_string())
                .or_insert(profile)
                .value(),
        )
    }
}
