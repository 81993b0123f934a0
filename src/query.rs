//! 단어 빈도 조회 서비스
//!
//! 언어 프로필 캐시, 분할기, 빈도 테이블 저장소, 구문 점수 메모 캐시를
//! 하나로 묶습니다. 모든 메서드는 `&self`로 호출되며 여러 스레드에서
//! 동시에 사용할 수 있습니다.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::WordfreqConfig;
use crate::core::ChineseConverter;
use crate::error::{Result, WordfreqError};
use crate::freq::{freq_to_zipf, zipf_to_freq, FrequencyStore, FrequencyTable};
use crate::language::{
    Backend, LanguageProfile, LookupTransliteration, ProfileResolver, SegmentationStrategy,
};
use crate::score::{round_significant, score_tokens};
use crate::segment::{ExternalSegmenter, Segmenter, Token, TokenizeOptions};

/// 메모 캐시 키: (텍스트, 언어, 단어 목록, 하한 빈도 비트)
type MemoKey = (String, String, String, u64);

/// 단어 빈도 조회기
#[derive(Debug)]
pub struct Wordfreq {
    config: WordfreqConfig,
    profiles: ProfileResolver,
    segmenter: Segmenter,
    store: FrequencyStore,
    memo: DashMap<MemoKey, f64>,
}

impl Wordfreq {
    /// 설정으로 조회기 생성
    ///
    /// 데이터 디렉토리에 중국어 변환 표가 있으면 함께 읽습니다.
    pub fn new(config: WordfreqConfig) -> Result<Self> {
        let converter = ChineseConverter::from_data_dir(&config.data_dir)?;
        Ok(Self {
            profiles: ProfileResolver::new(config.match_cutoff),
            segmenter: Segmenter::new(converter),
            store: FrequencyStore::new(config.data_dir.clone(), config.match_cutoff),
            memo: DashMap::new(),
            config,
        })
    }

    /// 일본어/한국어 형태소 분석기 등록
    pub fn with_morphological_segmenter(mut self, segmenter: Arc<dyn ExternalSegmenter>) -> Self {
        self.segmenter = self.segmenter.with_morphological(segmenter);
        self
    }

    /// 빈도 테이블 어휘에 맞춘 중국어 분할기 등록
    pub fn with_chinese_segmenter(mut self, segmenter: Arc<dyn ExternalSegmenter>) -> Self {
        self.segmenter = self.segmenter.with_chinese(segmenter);
        self
    }

    /// 일반 어휘 중국어 분할기 등록
    pub fn with_chinese_general_segmenter(mut self, segmenter: Arc<dyn ExternalSegmenter>) -> Self {
        self.segmenter = self.segmenter.with_chinese_general(segmenter);
        self
    }

    pub fn config(&self) -> &WordfreqConfig {
        &self.config
    }

    /// 언어 태그의 처리 규칙
    pub fn profile(&self, language: &str) -> Arc<LanguageProfile> {
        self.profiles.resolve(language)
    }

    /// 정규화 후 토큰 분할 (문장 부호 제외)
    pub fn tokenize(&self, text: &str, language: &str) -> Result<Vec<String>> {
        self.tokenize_with(text, language, TokenizeOptions::default())
    }

    /// 옵션을 지정한 토큰 분할
    pub fn tokenize_with(
        &self,
        text: &str,
        language: &str,
        options: TokenizeOptions,
    ) -> Result<Vec<String>> {
        let profile = self.profile(language);
        self.segmenter.tokenize(text, &profile, options)
    }

    /// 문장 부호 여부를 포함한 토큰
    pub fn segment(&self, text: &str, language: &str, options: TokenizeOptions) -> Result<Vec<Token>> {
        let profile = self.profile(language);
        self.segmenter.segment(text, &profile, options)
    }

    /// 빈도 조회용 분할 (중국어 간체화, 둥근 따옴표 → 곧은 따옴표)
    pub fn lossy_tokenize(&self, text: &str, language: &str) -> Result<Vec<String>> {
        self.lossy_tokenize_with(text, language, TokenizeOptions::default())
    }

    pub fn lossy_tokenize_with(
        &self,
        text: &str,
        language: &str,
        options: TokenizeOptions,
    ) -> Result<Vec<String>> {
        let profile = self.profile(language);
        let tokens = self.segmenter.tokenize(text, &profile, options)?;
        let simplify = profile.lookup_transliteration == LookupTransliteration::ChineseSimplified;

        Ok(tokens
            .into_iter()
            .map(|token| {
                let token = if simplify {
                    self.segmenter.converter().simplify(&token)
                } else {
                    token
                };
                token.replace('\u{2019}', "'")
            })
            .collect())
    }

    /// 단어 목록에 대해 사용할 수 있는 언어 → 파일 경로
    pub fn available_languages(&self, wordlist: &str) -> Result<BTreeMap<String, PathBuf>> {
        self.store.available_languages(wordlist)
    }

    /// 언어 태그에 가장 가까운 빈도 테이블
    pub fn frequency_table(&self, language: &str, wordlist: &str) -> Result<Arc<FrequencyTable>> {
        self.store.get(language, wordlist)
    }

    /// 텍스트의 빈도 (0 ~ 1, 유효숫자 3자리)
    ///
    /// 여러 토큰이면 역수 합으로 결합합니다. 테이블에 없는 토큰이 하나라도
    /// 있으면 `floor`를 반환하고, 결과는 `floor`보다 작아지지 않습니다.
    pub fn word_frequency(&self, text: &str, language: &str, wordlist: &str, floor: f64) -> Result<f64> {
        let key = (
            text.to_string(),
            language.to_string(),
            wordlist.to_string(),
            floor.to_bits(),
        );
        if let Some(freq) = self.memo.get(&key) {
            return Ok(*freq);
        }

        let freq = self.compute_word_frequency(text, language, wordlist, floor)?;
        if self.memo.len() >= self.config.cache_size {
            self.memo.clear();
        }
        self.memo.insert(key, freq);
        Ok(freq)
    }

    fn compute_word_frequency(
        &self,
        text: &str,
        language: &str,
        wordlist: &str,
        floor: f64,
    ) -> Result<f64> {
        let tokens = self.lossy_tokenize(text, language)?;
        if tokens.is_empty() {
            return Ok(floor);
        }
        let table = self.frequency_table(language, wordlist)?;
        let profile = self.profile(language);

        // 사전 분할기가 추정한 경계는 실제 띄어쓰기보다 불확실
        let damping = match profile.strategy {
            SegmentationStrategy::External(Backend::Chinese) => {
                Some(self.config.inferred_space_factor)
            }
            _ => None,
        };

        match score_tokens(&table, &tokens, damping) {
            Some(freq) => {
                let unrounded = freq.max(floor);
                Ok(round_significant(unrounded))
            }
            None => Ok(floor),
        }
    }

    /// 텍스트의 Zipf 빈도 (소수점 둘째 자리)
    ///
    /// 0은 십억 단어에 한 번 미만, 흔한 단어는 6~7 정도입니다.
    pub fn zipf_frequency(&self, text: &str, language: &str, wordlist: &str, floor_zipf: f64) -> Result<f64> {
        let floor = zipf_to_freq(floor_zipf);
        let freq = self.word_frequency(text, language, wordlist, floor)?;
        let zipf = freq_to_zipf(freq)?;
        Ok((zipf * 100.0).round() / 100.0)
    }

    /// 가장 흔한 단어 n개
    ///
    /// `ascii_only`면 ASCII 출력 가능 문자로만 된 단어만 셉니다.
    pub fn top_n_list(&self, language: &str, n: usize, wordlist: &str, ascii_only: bool) -> Result<Vec<String>> {
        let table = self.frequency_table(language, wordlist)?;
        Ok(table
            .iter()
            .filter(|word| !ascii_only || word.chars().all(|c| c <= '~'))
            .take(n)
            .map(str::to_string)
            .collect())
    }

    /// 빈도 내림차순으로 단어 나열
    pub fn iter_wordlist(&self, language: &str, wordlist: &str) -> Result<WordlistIter> {
        Ok(WordlistIter::new(self.frequency_table(language, wordlist)?))
    }

    /// 흔한 단어 `2^bits_per_word`개 중에서 무작위로 골라 공백으로 연결
    pub fn random_words(
        &self,
        language: &str,
        wordlist: &str,
        nwords: usize,
        bits_per_word: u32,
        ascii_only: bool,
    ) -> Result<String> {
        let mut rng = rand::rng();
        self.random_words_with_rng(language, wordlist, nwords, bits_per_word, ascii_only, &mut rng)
    }

    /// ASCII 단어만 쓰는 `random_words`
    pub fn random_ascii_words(
        &self,
        language: &str,
        wordlist: &str,
        nwords: usize,
        bits_per_word: u32,
    ) -> Result<String> {
        self.random_words(language, wordlist, nwords, bits_per_word, true)
    }

    /// 난수 생성기를 지정한 `random_words`
    pub fn random_words_with_rng<R: Rng + ?Sized>(
        &self,
        language: &str,
        wordlist: &str,
        nwords: usize,
        bits_per_word: u32,
        ascii_only: bool,
        rng: &mut R,
    ) -> Result<String> {
        let n_choices = 1usize
            .checked_shl(bits_per_word)
            .ok_or(WordfreqError::InsufficientData {
                bits: bits_per_word,
                available: 0,
            })?;

        let choices = self.top_n_list(language, n_choices, wordlist, ascii_only)?;
        if choices.len() < n_choices {
            return Err(WordfreqError::InsufficientData {
                bits: bits_per_word,
                available: choices.len(),
            });
        }

        let words: Vec<&str> = (0..nwords)
            .filter_map(|_| choices.choose(&mut *rng).map(String::as_str))
            .collect();
        Ok(words.join(" "))
    }

    /// 메모 캐시에 저장된 구문 수
    pub fn cached_phrases(&self) -> usize {
        self.memo.len()
    }
}

/// 빈도 테이블 단어 순회 (테이블을 소유하므로 다시 만들어 재시작 가능)
#[derive(Debug, Clone)]
pub struct WordlistIter {
    table: Arc<FrequencyTable>,
    bucket: usize,
    position: usize,
}

impl WordlistIter {
    pub fn new(table: Arc<FrequencyTable>) -> Self {
        Self {
            table,
            bucket: 0,
            position: 0,
        }
    }
}

impl Iterator for WordlistIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let buckets = self.table.buckets();
        while let Some(bucket) = buckets.get(self.bucket) {
            if let Some(word) = bucket.get(self.position) {
                self.position += 1;
                return Some(word.clone());
            }
            self.bucket += 1;
            self.position = 0;
        }
        None
    }
}
