//! cBpack 파일 읽기/쓰기
//!
//! # 파일 형식
//! gzip으로 압축한 msgpack 배열입니다.
//! ```text
//! [ {"format": "cB", "version": 1}, [bucket 0], [bucket 1], ... ]
//! ```
//! i번째 버킷의 단어는 빈도 `10^(-i/100)`을 가집니다 (i centibel 아래).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::{json, Value};

use crate::error::{Result, WordfreqError};

/// 지원하는 형식 이름
pub const FORMAT_NAME: &str = "cB";
/// 지원하는 형식 버전
pub const FORMAT_VERSION: u64 = 1;
/// 이보다 드문(-600 cB 미만) 단어는 기록하지 않음
pub const DEFAULT_CUTOFF: usize = 600;

/// cBpack 파일을 버킷 목록으로 읽기
pub fn read_cbpack(path: &Path) -> Result<Vec<Vec<String>>> {
    let file = File::open(path)?;
    read_cbpack_from(BufReader::new(file))
}

/// gzip 스트림에서 버킷 목록 읽기
pub fn read_cbpack_from<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let values: Vec<Value> = rmp_serde::from_read(GzDecoder::new(reader))
        .map_err(|e| WordfreqError::Decode(e.to_string()))?;
    parse_cbpack(values)
}

/// 디코딩된 배열에서 헤더를 검증하고 버킷 추출
pub fn parse_cbpack(values: Vec<Value>) -> Result<Vec<Vec<String>>> {
    let mut values = values.into_iter();

    let header = values
        .next()
        .ok_or_else(|| WordfreqError::Format("헤더가 없습니다".to_string()))?;
    let format = header.get("format").and_then(|v| v.as_str());
    let version = header.get("version").and_then(|v| v.as_u64());
    if format != Some(FORMAT_NAME) || version != Some(FORMAT_VERSION) {
        return Err(WordfreqError::Format(format!(
            "지원하지 않는 헤더: {}",
            header
        )));
    }

    let mut buckets = Vec::new();
    for (index, bucket) in values.enumerate() {
        let words = bucket.as_array().ok_or_else(|| {
            WordfreqError::Format(format!("{}번 버킷이 배열이 아닙니다", index))
        })?;
        let mut parsed = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_str().ok_or_else(|| {
                WordfreqError::Format(format!("{}번 버킷에 문자열이 아닌 값: {}", index, word))
            })?;
            parsed.push(word.to_string());
        }
        buckets.push(parsed);
    }

    Ok(buckets)
}

/// 버킷 목록을 cBpack 파일로 저장
pub fn write_cbpack(path: &Path, buckets: &[Vec<String>]) -> Result<()> {
    let file = File::create(path)?;
    write_cbpack_to(BufWriter::new(file), buckets)
}

/// 버킷 목록을 gzip 스트림으로 기록
pub fn write_cbpack_to<W: Write>(writer: W, buckets: &[Vec<String>]) -> Result<()> {
    let mut values = Vec::with_capacity(buckets.len() + 1);
    values.push(json!({ "format": FORMAT_NAME, "version": FORMAT_VERSION }));
    values.extend(buckets.iter().map(|bucket| json!(bucket)));

    let mut encoder = GzEncoder::new(writer, Compression::default());
    rmp_serde::encode::write(&mut encoder, &values)
        .map_err(|e| WordfreqError::Decode(e.to_string()))?;
    encoder.finish()?.flush()?;
    Ok(())
}

/// 단어별 빈도를 centibel 버킷으로 묶기
///
/// 빈도가 0 이하이거나 `-cutoff` centibel보다 드문 단어는 버립니다.
/// 각 버킷은 알파벳순으로 정렬됩니다.
pub fn freqs_to_buckets<I, S>(freqs: I, cutoff: usize) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<String>,
{
    let mut grouped: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (word, freq) in freqs {
        if freq <= 0.0 || freq.is_nan() {
            continue;
        }
        let neg_cb = (-(freq.log10() * 100.0).round()).max(0.0) as usize;
        if neg_cb > cutoff {
            continue;
        }
        grouped.entry(neg_cb).or_default().push(word.into());
    }

    let len = grouped.keys().next_back().map(|&i| i + 1).unwrap_or(0);
    let mut buckets = vec![Vec::new(); len];
    for (index, mut words) in grouped {
        words.sort();
        buckets[index] = words;
    }
    buckets
}
