//! 단어 빈도 데이터: cBpack 파일 형식, 테이블, 저장소, 척도 변환

pub mod cbpack;
pub mod scale;
pub mod store;
pub mod table;

pub use cbpack::{freqs_to_buckets, read_cbpack, write_cbpack, DEFAULT_CUTOFF};
pub use scale::{cb_to_freq, cb_to_zipf, freq_to_zipf, zipf_to_freq};
pub use store::FrequencyStore;
pub use table::FrequencyTable;
