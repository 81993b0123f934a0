//! 단어 빈도 테이블

use std::collections::HashMap;
use std::path::Path;

use super::cbpack::read_cbpack;
use crate::error::Result;

/// 한 언어/단어 목록의 빈도 테이블 (읽기 전용)
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// centibel 버킷 (0번이 가장 흔함), 버킷 안은 알파벳순
    buckets: Vec<Vec<String>>,
    index: HashMap<String, f64>,
}

/// 버킷 번호 → 빈도
fn bucket_freq(index: usize) -> f64 {
    10f64.powf(-(index as f64) / 100.0)
}

impl FrequencyTable {
    /// 버킷 목록으로 테이블 생성
    ///
    /// 같은 단어가 여러 버킷에 있으면 가장 흔한 쪽만 남깁니다.
    pub fn from_buckets(mut buckets: Vec<Vec<String>>) -> Self {
        let mut index = HashMap::new();
        for (i, bucket) in buckets.iter_mut().enumerate() {
            bucket.sort();
            bucket.dedup();
            let freq = bucket_freq(i);
            bucket.retain(|word| {
                if index.contains_key(word) {
                    return false;
                }
                index.insert(word.clone(), freq);
                true
            });
        }
        Self { buckets, index }
    }

    /// cBpack 파일에서 로드
    pub fn load(path: &Path) -> Result<Self> {
        let table = Self::from_buckets(read_cbpack(path)?);
        log::debug!("빈도 테이블 로드: {} ({}단어)", path.display(), table.len());
        Ok(table)
    }

    /// 단어 빈도 (없으면 None)
    pub fn lookup(&self, word: &str) -> Option<f64> {
        self.index.get(word).copied()
    }

    /// 단어 빈도 (없으면 0)
    pub fn get(&self, word: &str) -> f64 {
        self.lookup(word).unwrap_or(0.0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// 단어 수
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn buckets(&self) -> &[Vec<String>] {
        &self.buckets
    }

    /// 빈도 내림차순, 같은 빈도 안에서는 알파벳순으로 단어 나열
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.iter().flatten().map(String::as_str)
    }

    /// `iter`와 같은 순서로 (단어, 빈도) 나열
    pub fn iter_with_freq(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.buckets.iter().enumerate().flat_map(|(i, bucket)| {
            let freq = bucket_freq(i);
            bucket.iter().map(move |word| (word.as_str(), freq))
        })
    }
}
