//! 빈도 테이블 저장소
//!
//! 데이터 디렉토리의 `<wordlist>_<lang>.msgpack.gz` 파일을 찾아 로드하고
//! 프로세스 수명 동안 캐시합니다. 같은 파일은 동시에 여러 스레드가 처음
//! 요청해도 한 번만 읽습니다.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use super::table::FrequencyTable;
use crate::error::{Result, WordfreqError};
use crate::language::closest_match;

const TABLE_SUFFIX: &str = ".msgpack.gz";

/// 파일 하나에 대한 로드 슬롯
type LoadSlot = Arc<Mutex<Option<Arc<FrequencyTable>>>>;

/// 빈도 테이블 저장소
#[derive(Debug)]
pub struct FrequencyStore {
    data_dir: PathBuf,
    match_cutoff: u32,
    /// 파일 경로별 로드 결과
    by_path: DashMap<PathBuf, LoadSlot>,
    /// (요청 태그, 단어 목록) → 테이블
    resolved: DashMap<(String, String), Arc<FrequencyTable>>,
}

impl FrequencyStore {
    pub fn new(data_dir: impl Into<PathBuf>, match_cutoff: u32) -> Self {
        Self {
            data_dir: data_dir.into(),
            match_cutoff,
            by_path: DashMap::new(),
            resolved: DashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// 단어 목록에 대해 사용할 수 있는 언어 → 파일 경로
    ///
    /// "best"는 "small"과 "large"를 합친 목록이며 겹치면 "large"를 씁니다.
    /// "combined"는 "small"의 예전 이름입니다.
    pub fn available_languages(&self, wordlist: &str) -> Result<BTreeMap<String, PathBuf>> {
        match wordlist {
            "best" => {
                let mut available = self.available_languages("small")?;
                available.extend(self.available_languages("large")?);
                Ok(available)
            }
            "combined" => {
                log::warn!("단어 목록 'combined'는 'small'로 이름이 바뀌었습니다");
                self.available_languages("small")
            }
            _ => self.scan(wordlist),
        }
    }

    fn scan(&self, wordlist: &str) -> Result<BTreeMap<String, PathBuf>> {
        let mut available = BTreeMap::new();
        if !self.data_dir.is_dir() {
            log::debug!("데이터 디렉토리 없음: {}", self.data_dir.display());
            return Ok(available);
        }

        let prefix = format!("{}_", wordlist);
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('_') {
                continue;
            }
            let language = name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(TABLE_SUFFIX));
            if let Some(language) = language {
                if !language.is_empty() {
                    available.insert(language.to_string(), path.clone());
                }
            }
        }
        Ok(available)
    }

    /// 언어 태그에 가장 가까운 테이블 반환
    pub fn get(&self, language: &str, wordlist: &str) -> Result<Arc<FrequencyTable>> {
        let key = (language.to_string(), wordlist.to_string());
        if let Some(table) = self.resolved.get(&key) {
            return Ok(Arc::clone(table.value()));
        }

        let available = self.available_languages(wordlist)?;
        let (matched, distance) =
            closest_match(language, available.keys().map(String::as_str), self.match_cutoff)
                .ok_or_else(|| WordfreqError::NotFound {
                    language: language.to_string(),
                    wordlist: wordlist.to_string(),
                })?;

        if distance > 0 {
            log::warn!(
                "'{}' 단어 목록에 {} 언어가 없어 {} 언어를 대신 사용합니다",
                wordlist,
                language,
                matched
            );
        }

        let path = &available[matched];
        let table = self.load_path(path)?;
        log::debug!(
            "{} ({}) → {}: 구간 {}개, 단어 {}개",
            language,
            wordlist,
            matched,
            table.buckets().len(),
            table.len()
        );
        self.resolved.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// 경로별로 한 번만 로드
    fn load_path(&self, path: &Path) -> Result<Arc<FrequencyTable>> {
        // DashMap 잠금을 쥔 채로 파일을 읽지 않도록 슬롯만 복제
        let slot: LoadSlot = Arc::clone(
            self.by_path
                .entry(path.to_path_buf())
                .or_default()
                .value(),
        );

        let mut guard = slot
            .lock()
            .map_err(|_| WordfreqError::Decode(format!("로드 중단됨: {}", path.display())))?;
        if let Some(table) = guard.as_ref() {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(FrequencyTable::load(path)?);
        *guard = Some(Arc::clone(&table));
        Ok(table)
    }
}
