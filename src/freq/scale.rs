//! 빈도 척도 변환
//!
//! - centibel(cB): 빈도의 상용로그 × 100. 0 이하의 정수
//! - Zipf: 십억 단어당 출현 횟수의 상용로그 (`log10(f) + 9`)

use crate::error::{Result, WordfreqError};

/// centibel → 빈도. 양수는 1보다 큰 빈도이므로 에러
pub fn cb_to_freq(cb: i32) -> Result<f64> {
    if cb > 0 {
        return Err(WordfreqError::Validation(format!(
            "centibel 값은 0 이하여야 합니다: {}",
            cb
        )));
    }
    Ok(10f64.powf(cb as f64 / 100.0))
}

/// centibel → Zipf
pub fn cb_to_zipf(cb: i32) -> f64 {
    (cb as f64 + 900.0) / 100.0
}

/// Zipf → 빈도
pub fn zipf_to_freq(zipf: f64) -> f64 {
    10f64.powf(zipf) / 1e9
}

/// 빈도 → Zipf. 0 이하의 빈도는 로그를 취할 수 없으므로 에러
pub fn freq_to_zipf(freq: f64) -> Result<f64> {
    if freq <= 0.0 || freq.is_nan() {
        return Err(WordfreqError::Validation(format!(
            "빈도는 양수여야 합니다: {}",
            freq
        )));
    }
    Ok(freq.log10() + 9.0)
}
