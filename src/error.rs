//! 에러 타입 정의

use thiserror::Error;

/// wordfreq 전체에서 사용하는 에러
#[derive(Error, Debug)]
pub enum WordfreqError {
    /// 요청한 언어/단어 목록과 충분히 가까운 테이블이 없음
    #[error("No wordlist {wordlist:?} available for language {language:?}")]
    NotFound { language: String, wordlist: String },

    /// 테이블 헤더(format/version) 불일치 또는 잘못된 페이로드
    #[error("Invalid cBpack data: {0}")]
    Format(String),

    /// 요청한 엔트로피가 단어 목록 크기보다 큼
    #[error("There aren't enough words in the wordlist to provide {bits} bits of entropy per word ({available} words available)")]
    InsufficientData { bits: u32, available: usize },

    /// 로그 스케일 변환 등에서 범위를 벗어난 입력
    #[error("Invalid value: {0}")]
    Validation(String),

    /// 해당 언어에 필요한 외부 분할기가 등록되지 않음
    #[error("Language {language:?} needs the {backend} segmenter, which was not configured")]
    MissingSegmenter { language: String, backend: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// msgpack 디코딩/인코딩 실패
    #[error("Failed to decode table data: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, WordfreqError>;
