//! 빈도 점수 계산: 숫자 모델과 토큰 결합

pub mod combine;
pub mod digits;

pub use combine::{combine_frequencies, round_significant, score_tokens, token_frequency};
pub use digits::{benford_freq, digit_freq, smash_numbers, year_freq};
