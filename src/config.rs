//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// wordfreq 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WordfreqConfig {
    /// `<wordlist>_<lang>.msgpack.gz` 테이블이 들어 있는 디렉토리
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// 구문 빈도 메모 캐시 크기 (가득 차면 비움)
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
    /// 언어 태그 최근접 매칭에서 허용하는 최대 거리
    #[serde(default = "default_match_cutoff")]
    pub match_cutoff: u32,
    /// 사전 기반 분할기가 추정한 경계 하나당 나누는 값
    #[serde(default = "default_inferred_space_factor")]
    pub inferred_space_factor: f64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_cache_size() -> usize {
    100_000
}

fn default_match_cutoff() -> u32 {
    25
}

fn default_inferred_space_factor() -> f64 {
    10.0
}

impl Default for WordfreqConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cache_size: default_cache_size(),
            match_cutoff: default_match_cutoff(),
            inferred_space_factor: default_inferred_space_factor(),
        }
    }
}

impl WordfreqConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 데이터 디렉토리 설정
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// 메모 캐시 크기 설정
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// 매칭 거리 상한 설정
    pub fn with_match_cutoff(mut self, cutoff: u32) -> Self {
        self.match_cutoff = cutoff;
        self
    }

    /// 추정 경계 감쇠 값 설정
    pub fn with_inferred_space_factor(mut self, factor: f64) -> Self {
        self.inferred_space_factor = factor;
        self
    }
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: &Path) -> WordfreqConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            WordfreqConfig::default()
        }),
        Err(_) => WordfreqConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(path: &Path, config: &WordfreqConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WordfreqConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.cache_size, 100_000);
        assert_eq!(config.match_cutoff, 25);
        assert!((config.inferred_space_factor - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_pattern() {
        let config = WordfreqConfig::new()
            .with_data_dir("/tmp/wordlists")
            .with_cache_size(10)
            .with_match_cutoff(5)
            .with_inferred_space_factor(4.0);

        assert_eq!(config.data_dir, PathBuf::from("/tmp/wordlists"));
        assert_eq!(config.cache_size, 10);
        assert_eq!(config.match_cutoff, 5);
        assert!((config.inferred_space_factor - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 예전 설정 파일에 없는 필드는 기본값 사용
        let json = r#"{"data_dir": "/srv/wordfreq"}"#;
        let config: WordfreqConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/wordfreq"));
        assert_eq!(config.cache_size, 100_000);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = WordfreqConfig::new().with_cache_size(42);

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded.cache_size, 42);
    }

    #[test]
    fn test_load_missing_or_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_config(&dir.path().join("nope.json"));
        assert_eq!(missing.cache_size, 100_000);

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(load_config(&broken).match_cutoff, 25);
    }
}
