//! wordfreq - 표준 입력의 각 줄을 토큰으로 나누고 Zipf 빈도를 출력
//!
//! 사용법: `wordfreq <언어> [단어 목록] [설정 파일]`

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use wordfreq::config::{load_config, WordfreqConfig};
use wordfreq::Wordfreq;

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(language) = args.first() else {
        eprintln!("사용법: wordfreq <언어> [단어 목록] [설정 파일]");
        return ExitCode::from(2);
    };
    let wordlist = args.get(1).map(String::as_str).unwrap_or("best");
    let config = match args.get(2) {
        Some(path) => load_config(Path::new(path)),
        None => WordfreqConfig::default(),
    };

    let wordfreq = match Wordfreq::new(config) {
        Ok(wordfreq) => wordfreq,
        Err(e) => {
            eprintln!("초기화 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("입력 읽기 실패: {}", e);
                return ExitCode::FAILURE;
            }
        };

        let tokens = match wordfreq.tokenize(&line, language) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        };

        for token in tokens {
            match wordfreq.zipf_frequency(&token, language, wordlist, 0.0) {
                Ok(zipf) => {
                    if writeln!(out, "{}\t{:.2}", token, zipf).is_err() {
                        return ExitCode::SUCCESS;
                    }
                }
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
