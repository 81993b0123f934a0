//! 언어 태그 해석
//!
//! 임의의 언어 태그를 정규화/분할 규칙 묶음으로 변환합니다.
//!
//! ```
//! use wordfreq::language::{LanguageProfile, NormalForm};
//!
//! let profile = LanguageProfile::for_tag("pt-BR", 25);
//! assert_eq!(profile.language, "pt");
//! assert_eq!(profile.normal_form, NormalForm::Nfc);
//! ```

mod profile;
mod tag;

pub use profile::{
    catalog_languages, Backend, DiacriticMode, LanguageProfile, LookupTransliteration, NormalForm,
    ProfileResolver, SegmentationStrategy, Transliteration, SPACELESS_SCRIPTS,
};
pub use tag::{canonical_language, closest_match, language_distance, LanguageTag, NO_MATCH};
