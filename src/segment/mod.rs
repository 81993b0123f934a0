//! 언어별 토큰 분할
//!
//! 프로필의 분할 방식에 따라 유니코드 단어 경계 분할 또는 외부 분할기를
//! 사용합니다. 어느 경로든 먼저 텍스트를 정규화합니다.

pub mod external;
pub mod simple;

use std::sync::Arc;

use dashmap::DashSet;

use crate::core::{normalize, ChineseConverter};
use crate::error::{Result, WordfreqError};
use crate::language::{Backend, LanguageProfile, SegmentationStrategy};

pub use external::ExternalSegmenter;
pub use simple::{simple_segment, simple_tokenize};

/// 정규화된 부분 문자열과 문장 부호 여부
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub is_punctuation: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, is_punctuation: bool) -> Self {
        Self {
            text: text.into(),
            is_punctuation,
        }
    }
}

/// 분할 옵션
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// 문장 부호 토큰 유지
    pub include_punctuation: bool,
    /// 중국어를 빈도 테이블에 맞추지 않고 분할기 자체 사전으로 분할
    pub external_wordlist: bool,
}

impl TokenizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_punctuation(mut self, include: bool) -> Self {
        self.include_punctuation = include;
        self
    }

    pub fn with_external_wordlist(mut self, external: bool) -> Self {
        self.external_wordlist = external;
        self
    }
}

/// 토큰 분할기
///
/// 외부 분할기는 선택 사항이며, 필요한 언어에서 등록되지 않았으면
/// `MissingSegmenter` 에러를 반환합니다.
#[derive(Default)]
pub struct Segmenter {
    morphological: Option<Arc<dyn ExternalSegmenter>>,
    chinese: Option<Arc<dyn ExternalSegmenter>>,
    chinese_general: Option<Arc<dyn ExternalSegmenter>>,
    converter: ChineseConverter,
    /// 분할기 없음 경고를 이미 출력한 언어
    warned: DashSet<String>,
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("morphological", &self.morphological.is_some())
            .field("chinese", &self.chinese.is_some())
            .field("chinese_general", &self.chinese_general.is_some())
            .finish()
    }
}

impl Segmenter {
    pub fn new(converter: ChineseConverter) -> Self {
        Self {
            converter,
            ..Self::default()
        }
    }

    /// 일본어/한국어 형태소 분석기 등록
    pub fn with_morphological(mut self, segmenter: Arc<dyn ExternalSegmenter>) -> Self {
        self.morphological = Some(segmenter);
        self
    }

    /// 빈도 테이블 어휘에 맞춘 중국어 분할기 등록 (간체 입력을 받음)
    pub fn with_chinese(mut self, segmenter: Arc<dyn ExternalSegmenter>) -> Self {
        self.chinese = Some(segmenter);
        self
    }

    /// 분할기 자체 사전을 쓰는 중국어 분할기 등록 (`external_wordlist`용)
    pub fn with_chinese_general(mut self, segmenter: Arc<dyn ExternalSegmenter>) -> Self {
        self.chinese_general = Some(segmenter);
        self
    }

    pub fn converter(&self) -> &ChineseConverter {
        &self.converter
    }

    /// 정규화 후 분할한 토큰 문자열
    pub fn tokenize(
        &self,
        text: &str,
        profile: &LanguageProfile,
        options: TokenizeOptions,
    ) -> Result<Vec<String>> {
        Ok(self
            .segment(text, profile, options)?
            .into_iter()
            .map(|token| token.text)
            .collect())
    }

    /// 정규화 후 분할 (문장 부호 여부 포함)
    pub fn segment(
        &self,
        text: &str,
        profile: &LanguageProfile,
        options: TokenizeOptions,
    ) -> Result<Vec<Token>> {
        let normalized = normalize(text, profile);

        match profile.strategy {
            SegmentationStrategy::Regex => {
                Ok(simple_segment(&normalized, options.include_punctuation))
            }
            SegmentationStrategy::Unsegmented => {
                if self.warned.insert(profile.language.clone()) {
                    log::warn!(
                        "{} 텍스트는 띄어쓰기 없이 쓰이지만 분할기가 없습니다. 토큰이 지나치게 길 수 있습니다",
                        profile.language
                    );
                }
                Ok(simple_segment(&normalized, options.include_punctuation))
            }
            SegmentationStrategy::External(Backend::Morphological) => {
                let segmenter = self.require(&self.morphological, profile, Backend::Morphological)?;
                let tokens = segmenter.segment(&normalized, &profile.language);
                Ok(external::filter_tokens(tokens, options.include_punctuation))
            }
            SegmentationStrategy::External(Backend::Chinese) => {
                let tokens = if options.external_wordlist {
                    let segmenter = self.require(&self.chinese_general, profile, Backend::Chinese)?;
                    segmenter.segment(&normalized, &profile.language)
                } else {
                    let segmenter = self.require(&self.chinese, profile, Backend::Chinese)?;
                    external::segment_simplified(
                        &**segmenter,
                        &self.converter,
                        &normalized,
                        &profile.language,
                    )
                };
                Ok(external::filter_tokens(tokens, options.include_punctuation))
            }
        }
    }

    fn require<'a>(
        &self,
        slot: &'a Option<Arc<dyn ExternalSegmenter>>,
        profile: &LanguageProfile,
        backend: Backend,
    ) -> Result<&'a Arc<dyn ExternalSegmenter>> {
        slot.as_ref().ok_or_else(|| WordfreqError::MissingSegmenter {
            language: profile.language.clone(),
            backend: backend.name().to_string(),
        })
    }
}
