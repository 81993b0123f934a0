//! 숫자 토큰 빈도 모델
//!
//! 빈도 테이블은 두 자리 이상의 숫자를 모두 0으로 바꿔 저장합니다
//! ("2010" → "0000"). 조회할 때는 바뀐 형태의 빈도에 원래 숫자의
//! 조건부 확률을 곱합니다.
//! - 4자리: 연도 분포 (기준 연도 부근이 가장 흔함) + 연도가 아닐 확률
//! - 그 외: 벤포드 법칙 (첫 자리 분포 × 나머지 자리 균등)

use std::sync::LazyLock;

use regex::{Captures, Regex};

static MULTI_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d.,]+").expect("valid regex"));
static PURE_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));
static SINGLE_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("valid regex"));

/// 첫 자리 숫자 분포 (0으로 시작하는 숫자도 드물게 있음)
pub const DIGIT_FREQS: [f64; 10] = [0.009, 0.300, 0.175, 0.124, 0.096, 0.078, 0.066, 0.057, 0.050, 0.045];

/// 가장 흔한 연도의 log10 확률
const YEAR_LOG_PEAK: f64 = -1.875;
/// 4자리 숫자가 연도가 아닐 확률
const NOT_YEAR_PROB: f64 = 0.006;
/// 데이터 수집 기준 연도
const REFERENCE_YEAR: i64 = 2019;
/// 기준 연도 이후 빈도가 유지되는 기간
const PLATEAU_WIDTH: i64 = 20;
/// 과거로 1년 갈 때마다 줄어드는 log10 확률
const PAST_DECAY: f64 = 0.0083;
/// 정체 구간 이후 미래로 1년 갈 때마다 줄어드는 log10 확률
const FUTURE_DECAY: f64 = 0.2;

/// 십진 숫자 하나인지 확인 (유니코드 Nd)
fn is_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    let mut buf = [0u8; 4];
    SINGLE_DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// 십진 숫자의 값
///
/// 유니코드 십진 숫자는 0~9가 연속으로 배치되므로 연속 구간의 시작을
/// 찾아 위치를 계산합니다.
fn digit_value(c: char) -> u32 {
    if let Some(value) = c.to_digit(10) {
        return value;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_digit(prev) {
            break;
        }
        start -= 1;
    }
    (c as u32 - start) % 10
}

/// 두 자리 이상 숫자열의 숫자를 모두 0으로 치환 (구분자는 유지)
///
/// # Examples
/// ```
/// use wordfreq::score::smash_numbers;
/// assert_eq!(smash_numbers("2010년"), "0000년");
/// assert_eq!(smash_numbers("3.14"), "0.00");
/// assert_eq!(smash_numbers("1"), "1");
/// ```
pub fn smash_numbers(text: &str) -> String {
    MULTI_DIGIT_RE
        .replace_all(text, |caps: &Captures| {
            caps[0]
                .chars()
                .map(|c| if is_digit(c) { '0' } else { c })
                .collect::<String>()
        })
        .into_owned()
}

/// 벤포드 법칙에 따른 숫자열 확률
pub fn benford_freq(digits: &str) -> f64 {
    let mut chars = digits.chars();
    let Some(first) = chars.next() else {
        return 1.0;
    };
    let rest = chars.count() as i32;
    DIGIT_FREQS[digit_value(first) as usize] / 10f64.powi(rest)
}

/// 4자리 숫자열의 확률 (연도 분포 + 연도가 아닌 경우)
pub fn year_freq(digits: &str) -> f64 {
    let year = digits
        .chars()
        .fold(0i64, |acc, c| acc * 10 + digit_value(c) as i64);

    let year_log_freq = if year <= REFERENCE_YEAR {
        YEAR_LOG_PEAK - PAST_DECAY * (REFERENCE_YEAR - year) as f64
    } else if year <= REFERENCE_YEAR + PLATEAU_WIDTH {
        YEAR_LOG_PEAK
    } else {
        YEAR_LOG_PEAK - FUTURE_DECAY * (year - (REFERENCE_YEAR + PLATEAU_WIDTH)) as f64
    };

    10f64.powf(year_log_freq) + NOT_YEAR_PROB * benford_freq(digits)
}

/// 토큰 안 숫자열들의 조건부 확률 곱
///
/// `smash_numbers`로 바뀌는 부분만 계산하므로 한 자리 숫자는 영향이 없습니다.
pub fn digit_freq(text: &str) -> f64 {
    let mut freq = 1.0;
    for group in MULTI_DIGIT_RE.find_iter(text) {
        for digits in PURE_DIGIT_RE.find_iter(group.as_str()) {
            let digits = digits.as_str();
            if digits.chars().count() == 4 {
                freq *= year_freq(digits);
            } else {
                freq *= benford_freq(digits);
            }
        }
    }
    freq
}
