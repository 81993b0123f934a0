//! 토큰 빈도 결합
//!
//! 여러 토큰의 빈도는 역수 합으로 결합합니다: `1/f = Σ 1/f_i`.
//! 결과는 가장 작은 토큰 빈도를 넘지 않고, 순서와 묶는 방식에 무관합니다.

use super::digits::{digit_freq, smash_numbers};
use crate::freq::FrequencyTable;

/// 역수 합으로 빈도 결합. 빈 입력이나 0 이하 빈도가 있으면 0
pub fn combine_frequencies<I>(freqs: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut one_over = 0.0;
    for freq in freqs {
        if freq <= 0.0 {
            return 0.0;
        }
        one_over += 1.0 / freq;
    }
    if one_over == 0.0 {
        0.0
    } else {
        1.0 / one_over
    }
}

/// 토큰 하나의 빈도 (숫자 모델 적용). 테이블에 없으면 None
pub fn token_frequency(table: &FrequencyTable, token: &str) -> Option<f64> {
    let smashed = smash_numbers(token);
    let freq = table.lookup(&smashed)?;
    if smashed == token {
        Some(freq)
    } else {
        Some(freq * digit_freq(token))
    }
}

/// 토큰 목록의 결합 빈도. 하나라도 테이블에 없으면 None
///
/// `inferred_space_factor`가 주어지면 분할기가 추정한 경계 하나마다
/// 그 값으로 나눕니다 (토큰 n개면 n-1번).
pub fn score_tokens(
    table: &FrequencyTable,
    tokens: &[String],
    inferred_space_factor: Option<f64>,
) -> Option<f64> {
    let freqs = tokens
        .iter()
        .map(|token| token_frequency(table, token))
        .collect::<Option<Vec<f64>>>()?;
    let mut freq = combine_frequencies(freqs);

    if let Some(factor) = inferred_space_factor {
        let boundaries = tokens.len().saturating_sub(1) as i32;
        freq /= factor.powi(boundaries);
    }
    Some(freq)
}

/// 유효숫자 3자리로 반올림 (첫 유효숫자 앞의 0 개수 + 3 자리)
pub fn round_significant(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let leading_zeroes = (-value.abs().log10()).floor() as i32;
    let places = leading_zeroes + 3;
    if places > 300 {
        return value;
    }
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FrequencyTable {
        // 0 cB: "a", 100 cB: "b", 200 cB: "0000"
        let mut buckets = vec![Vec::new(); 201];
        buckets[0] = vec!["a".to_string()];
        buckets[100] = vec!["b".to_string()];
        buckets[200] = vec!["0000".to_string()];
        FrequencyTable::from_buckets(buckets)
    }

    #[test]
    fn test_combine_reciprocal() {
        let combined = combine_frequencies([0.1, 0.1]);
        assert!((combined - 0.05).abs() < 1e-15);
        assert_eq!(combine_frequencies([0.1, 0.0]), 0.0);
        assert_eq!(combine_frequencies(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_combined_never_exceeds_min() {
        let freqs = [0.3, 0.002, 0.07];
        let combined = combine_frequencies(freqs);
        assert!(combined <= 0.002);
    }

    #[test]
    fn test_commutative_and_associative() {
        let ab = combine_frequencies([0.01, 0.002]);
        let ba = combine_frequencies([0.002, 0.01]);
        assert!((ab - ba).abs() < 1e-18);
        let nested = combine_frequencies([combine_frequencies([0.01, 0.002]), 0.5]);
        let flat = combine_frequencies([0.01, 0.002, 0.5]);
        assert!((nested - flat).abs() < 1e-15);
    }

    #[test]
    fn test_token_frequency_digits() {
        let table = table();
        let year = token_frequency(&table, "2010").unwrap();
        assert!((year - 0.01 * digit_freq("2010")).abs() < 1e-15);
        assert_eq!(token_frequency(&table, "12345"), None);
        assert_eq!(token_frequency(&table, "zzz"), None);
    }

    #[test]
    fn test_score_tokens_damping() {
        let table = table();
        let tokens = vec!["b".to_string(), "b".to_string()];
        let plain = score_tokens(&table, &tokens, None).unwrap();
        let damped = score_tokens(&table, &tokens, Some(10.0)).unwrap();
        assert!((plain - 0.05).abs() < 1e-12);
        assert!((damped - 0.005).abs() < 1e-12);

        let missing = vec!["b".to_string(), "zzz".to_string()];
        assert_eq!(score_tokens(&table, &missing, None), None);
    }

    #[test]
    fn test_round_significant() {
        assert_eq!(round_significant(0.0), 0.0);
        assert!((round_significant(0.012345) - 0.0123).abs() < 1e-15);
        assert!((round_significant(1.23456e-7) - 1.23e-7).abs() < 1e-18);
        assert!((round_significant(0.5) - 0.5).abs() < f64::EPSILON);
    }
}
