//! 통합 테스트 - 분할, 빈도 조회, 숫자 모델, 외부 분할기

use std::io::Write;
use std::sync::Arc;

use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::json;
use tempfile::TempDir;

use wordfreq::freq::{freqs_to_buckets, write_cbpack, DEFAULT_CUTOFF};
use wordfreq::score::round_significant;
use wordfreq::{digit_freq, ExternalSegmenter, TokenizeOptions, Wordfreq, WordfreqConfig, WordfreqError};

fn write_table(dir: &TempDir, name: &str, freqs: &[(&str, f64)]) {
    let buckets = freqs_to_buckets(freqs.iter().map(|&(w, f)| (w, f)), DEFAULT_CUTOFF);
    write_cbpack(&dir.path().join(name), &buckets).unwrap();
}

/// 테스트용 데이터 디렉토리
fn fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let english = [
        ("the", 0.05),
        ("of", 0.03),
        ("and", 0.03),
        ("i", 0.02),
        ("it", 0.01),
        ("isn't", 1e-4),
        ("café", 1e-4),
        ("0000", 1e-3),
        ("00000", 1e-4),
        ("flip", 1e-5),
        ("flop", 5e-6),
    ];
    write_table(&dir, "small_en.msgpack.gz", &english);

    let mut large = english.to_vec();
    large.push(("largeword", 1e-6));
    write_table(&dir, "large_en.msgpack.gz", &large);

    write_table(&dir, "small_zh.msgpack.gz", &[("谢谢", 1e-4), ("你", 0.01), ("好", 0.005)]);
    write_table(&dir, "small_ja.msgpack.gz", &[("おはよう", 1e-4), ("ござい", 1e-4), ("ます", 0.01)]);
    dir
}

/// 사전의 가장 긴 단어부터 맞추고, 없으면 한 글자씩 자르는 분할기
fn lexicon(words: &'static [&'static str]) -> Arc<dyn ExternalSegmenter> {
    Arc::new(move |text: &str, _language: &str| {
        let mut tokens = Vec::new();
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            let len = words
                .iter()
                .filter(|w| rest.starts_with(**w))
                .map(|w| w.len())
                .max()
                .unwrap_or(c.len_utf8());
            tokens.push(rest[..len].to_string());
            rest = &rest[len..];
        }
        tokens
    })
}

fn service(dir: &TempDir) -> Wordfreq {
    Wordfreq::new(WordfreqConfig::new().with_data_dir(dir.path()))
        .unwrap()
        .with_chinese_segmenter(lexicon(&["谢谢", "你", "好"]))
        .with_morphological_segmenter(lexicon(&["おはよう", "ござい", "ます"]))
}

#[test]
fn test_apostrophes() {
    let dir = fixture();
    let wf = service(&dir);
    assert_eq!(wf.tokenize("Isn't it", "en").unwrap(), vec!["isn't", "it"]);
    assert_eq!(wf.tokenize("l'heure", "fr").unwrap(), vec!["l", "heure"]);
    assert_eq!(wf.tokenize("aujourd'hui", "fr").unwrap(), vec!["aujourd'hui"]);
}

#[test]
fn test_apostrophe_sentence() {
    let dir = fixture();
    let wf = service(&dir);
    let text = "I don't split at apostrophes, you see.";
    assert_eq!(
        wf.tokenize(text, "en").unwrap(),
        vec!["i", "don't", "split", "at", "apostrophes", "you", "see"]
    );
    let options = TokenizeOptions::new().with_punctuation(true);
    assert_eq!(
        wf.tokenize_with(text, "en", options).unwrap(),
        vec!["i", "don't", "split", "at", "apostrophes", ",", "you", "see", "."]
    );
    assert_eq!(
        wf.tokenize("M'acabo d'instal·lar.", "ca").unwrap(),
        vec!["m", "acabo", "d", "instal·lar"]
    );
    assert_eq!(
        wf.tokenize_with("L'Hôpital", "fr", options).unwrap(),
        vec!["l'", "hôpital"]
    );
}

#[test]
fn test_curly_apostrophe_lookup() {
    let dir = fixture();
    let wf = service(&dir);
    assert_eq!(wf.lossy_tokenize("isn\u{2019}t", "en").unwrap(), vec!["isn't"]);
    let curly = wf.word_frequency("isn\u{2019}t", "en", "best", 0.0).unwrap();
    let straight = wf.word_frequency("isn't", "en", "best", 0.0).unwrap();
    assert_eq!(curly, straight);
    assert!(straight > 0.0);
}

#[test]
fn test_flip_flop() {
    let dir = fixture();
    let wf = service(&dir);
    assert_eq!(wf.tokenize("flip-flop", "en").unwrap(), vec!["flip", "flop"]);

    let flip = wf.word_frequency("flip", "en", "best", 0.0).unwrap();
    let flop = wf.word_frequency("flop", "en", "best", 0.0).unwrap();
    let both = wf.word_frequency("flip-flop", "en", "best", 0.0).unwrap();
    assert!(both > 0.0);
    assert!(both <= flip.min(flop));
    let expected = round_significant(1.0 / (1.0 / flip + 1.0 / flop));
    assert!((both - expected).abs() / expected < 0.01);
}

#[test]
fn test_absent_word_returns_floor() {
    let dir = fixture();
    let wf = service(&dir);
    assert_eq!(wf.word_frequency("esquivalience", "en", "best", 0.0).unwrap(), 0.0);
    assert_eq!(wf.word_frequency("esquivalience", "en", "best", 1e-8).unwrap(), 1e-8);
    assert_eq!(wf.zipf_frequency("esquivalience", "en", "best", 0.0).unwrap(), 0.0);
    // 구문 안에 없는 단어가 하나라도 있으면 하한값
    assert_eq!(wf.word_frequency("the esquivalience", "en", "best", 0.0).unwrap(), 0.0);
}

#[test]
fn test_empty_text_returns_floor() {
    let dir = fixture();
    let wf = service(&dir);
    assert_eq!(wf.word_frequency("", "en", "best", 0.0).unwrap(), 0.0);
    assert_eq!(wf.word_frequency("...", "en", "best", 1e-6).unwrap(), 1e-6);
}

#[test]
fn test_empty_text_needs_no_table() {
    let dir = tempfile::tempdir().unwrap();
    let wf = Wordfreq::new(WordfreqConfig::new().with_data_dir(dir.path())).unwrap();
    assert_eq!(wf.word_frequency("", "en", "best", 1e-6).unwrap(), 1e-6);
    assert_eq!(wf.word_frequency("?!", "en", "best", 0.0).unwrap(), 0.0);
    // 토큰이 있으면 테이블이 필요
    let result = wf.word_frequency("word", "en", "best", 0.0);
    assert!(matches!(result, Err(WordfreqError::NotFound { .. })));
}

#[test]
fn test_floor_is_lower_bound() {
    let dir = fixture();
    let wf = service(&dir);
    assert_eq!(wf.word_frequency("flop", "en", "best", 0.5).unwrap(), 0.5);
}

#[test]
fn test_zipf_scale() {
    let dir = fixture();
    let wf = service(&dir);
    let zipf = wf.zipf_frequency("the", "en", "best", 0.0).unwrap();
    assert!((zipf - 7.7).abs() < 0.011, "zipf = {}", zipf);
    assert_eq!(wf.zipf_frequency("esquivalience", "en", "best", 3.0).unwrap(), 3.0);
}

#[test]
fn test_numbers() {
    let dir = fixture();
    let wf = service(&dir);
    let f = |text: &str| wf.word_frequency(text, "en", "best", 0.0).unwrap();

    assert!(f("24601") > f("90210"));
    assert!(f("90210") > 0.0);
    assert!(f("2010") > f("1910"));
    assert!(f("2010") > f("3010"));
    assert!(f("3010") > 0.0);
    // 한 자리 숫자는 치환하지 않으므로 테이블에 없음
    assert_eq!(f("7"), 0.0);
}

#[test]
fn test_digit_mass() {
    let four: f64 = (0..10_000).map(|i| digit_freq(&format!("{:04}", i))).sum();
    assert!((four - 1.0).abs() < 1e-3, "four-digit total = {}", four);

    let three: f64 = (0..1_000).map(|i| digit_freq(&format!("{:03}", i))).sum();
    assert!((three - 1.0).abs() < 1e-9, "three-digit total = {}", three);
}

#[test]
fn test_monotonic_and_commutative() {
    let dir = fixture();
    let wf = service(&dir);
    let f = |text: &str| wf.word_frequency(text, "en", "best", 0.0).unwrap();

    let phrase = f("the flip");
    assert!(phrase <= f("the").min(f("flip")));
    assert_eq!(f("the flip"), f("flip the"));
    assert!(f("the flip flop") <= phrase);
}

#[test]
fn test_tokenize_idempotent() {
    let dir = fixture();
    let wf = service(&dir);
    for (text, lang) in [
        ("Isn't it the FLIP-flop?", "en"),
        ("KİŞİ ve İSTANBUL", "tr"),
        ("Ђорђе Пример", "sr"),
        ("Straße 2010", "de"),
    ] {
        let once = wf.tokenize(text, lang).unwrap();
        let again = wf.tokenize(&once.join(" "), lang).unwrap();
        assert_eq!(once, again, "{}", lang);
    }
}

#[test]
fn test_turkish_and_serbian() {
    let dir = fixture();
    let wf = service(&dir);
    assert_eq!(wf.tokenize("KİŞİ KISIR", "tr").unwrap(), vec!["kişi", "kısır"]);
    assert_eq!(wf.tokenize("Пример", "sr").unwrap(), vec!["primer"]);
    assert_eq!(wf.tokenize("Пример", "sh").unwrap(), vec!["primer"]);
}

#[test]
fn test_japanese_segmenter() {
    let dir = fixture();
    let wf = service(&dir);
    let tokens = wf.tokenize("おはようございます", "ja").unwrap();
    assert_eq!(tokens, vec!["おはよう", "ござい", "ます"]);

    let freq = wf.word_frequency("おはようございます", "ja", "best", 0.0).unwrap();
    assert!(freq > 0.0);
    // 일본어는 분할기 경계에 감쇠를 적용하지 않음
    let expected = round_significant(1.0 / (1.0 / 1e-4 + 1.0 / 1e-4 + 1.0 / 0.01));
    assert!((freq - expected).abs() / expected < 1e-6);
}

#[test]
fn test_missing_segmenter() {
    let dir = fixture();
    let wf = Wordfreq::new(WordfreqConfig::new().with_data_dir(dir.path())).unwrap();
    let result = wf.tokenize("おはようございます", "ja");
    assert!(matches!(result, Err(WordfreqError::MissingSegmenter { .. })));
    let result = wf.word_frequency("谢谢", "zh", "best", 0.0);
    assert!(matches!(result, Err(WordfreqError::MissingSegmenter { .. })));
}

#[test]
fn test_chinese_tag_equivalence() {
    let dir = fixture();
    let wf = service(&dir);
    let base = wf.word_frequency("谢谢", "zh", "best", 0.0).unwrap();
    assert!(base > 0.0);
    for (text, lang) in [("謝謝", "zh-TW"), ("谢谢", "cmn"), ("謝謝", "zh-Hant"), ("谢谢", "zh-CN")] {
        assert_eq!(wf.word_frequency(text, lang, "best", 0.0).unwrap(), base, "{}", lang);
    }
    // 토큰은 원문 그대로, 조회용 토큰은 간체
    assert_eq!(wf.tokenize("謝謝", "zh-TW").unwrap(), vec!["謝謝"]);
    assert_eq!(wf.lossy_tokenize("謝謝", "zh-TW").unwrap(), vec!["谢谢"]);
}

#[test]
fn test_chinese_inferred_boundary() {
    let dir = fixture();
    let wf = service(&dir);
    let once = wf.word_frequency("谢谢", "zh", "best", 0.0).unwrap();
    let twice = wf.word_frequency("谢谢谢谢", "zh", "best", 0.0).unwrap();
    assert!((twice - once / 20.0).abs() / twice < 1e-9, "{} vs {}", twice, once);
}

#[test]
fn test_glued_round_trip() {
    let dir = fixture();
    let wf = service(&dir);
    let text = "谢谢你，好";
    let options = TokenizeOptions::new().with_punctuation(true);
    let tokens = wf.tokenize_with(text, "zh", options).unwrap();
    let profile = wf.profile("zh");
    assert_eq!(tokens.concat(), wordfreq::core::normalize(text, &profile));

    let without = wf.tokenize(text, "zh").unwrap();
    assert_eq!(without, vec!["谢谢", "你", "好"]);
}

#[test]
fn test_top_n_and_iteration() {
    let dir = fixture();
    let wf = service(&dir);
    assert_eq!(wf.top_n_list("en", 3, "small", false).unwrap(), vec!["the", "and", "of"]);

    let all = wf.top_n_list("en", 100, "small", false).unwrap();
    let ascii = wf.top_n_list("en", 100, "small", true).unwrap();
    assert!(all.iter().any(|w| w == "café"));
    assert!(!ascii.iter().any(|w| w == "café"));

    let table = wf.frequency_table("en", "small").unwrap();
    let iterated: Vec<String> = wf.iter_wordlist("en", "small").unwrap().collect();
    assert_eq!(iterated.len(), table.len());
    assert_eq!(iterated, all);
}

#[test]
fn test_best_wordlist_prefers_large() {
    let dir = fixture();
    let wf = service(&dir);
    assert!(wf.word_frequency("largeword", "en", "best", 0.0).unwrap() > 0.0);
    assert!(wf.word_frequency("largeword", "en", "large", 0.0).unwrap() > 0.0);
    assert_eq!(wf.word_frequency("largeword", "en", "small", 0.0).unwrap(), 0.0);

    let available = wf.available_languages("best").unwrap();
    assert_eq!(available.keys().collect::<Vec<_>>(), vec!["en", "ja", "zh"]);
}

#[test]
fn test_random_words() {
    let dir = fixture();
    let wf = service(&dir);
    assert_eq!(wf.random_words("en", "small", 4, 0, false).unwrap(), "the the the the");

    let words = wf.random_ascii_words("en", "small", 10, 1).unwrap();
    assert!(words.split(' ').all(|w| w == "the" || w == "and"));
    assert_eq!(words.split(' ').count(), 10);

    let result = wf.random_words("en", "small", 5, 10, false);
    assert!(matches!(result, Err(WordfreqError::InsufficientData { bits: 10, .. })));
}

#[test]
fn test_not_found() {
    let dir = fixture();
    let wf = service(&dir);
    let result = wf.word_frequency("qapla'", "tlh", "best", 0.0);
    assert!(matches!(result, Err(WordfreqError::NotFound { .. })));
    // 가까운 언어가 있으면 대신 사용
    assert!(wf.word_frequency("谢谢", "yue", "best", 0.0).unwrap() > 0.0);
}

#[test]
fn test_format_error_on_bad_header() {
    let dir = fixture();
    let values = vec![json!({"format": "cB", "version": 2}), json!(["hallo"])];
    let bytes = rmp_serde::to_vec(&values).unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&bytes).unwrap();
    std::fs::write(dir.path().join("small_de.msgpack.gz"), encoder.finish().unwrap()).unwrap();

    let wf = service(&dir);
    let result = wf.word_frequency("hallo", "de", "small", 0.0);
    assert!(matches!(result, Err(WordfreqError::Format(_))));
}

#[test]
fn test_memo_cache_is_bounded() {
    let dir = fixture();
    let wf = Wordfreq::new(WordfreqConfig::new().with_data_dir(dir.path()).with_cache_size(2)).unwrap();
    for word in ["the", "of", "and", "flip", "flop"] {
        wf.word_frequency(word, "en", "best", 0.0).unwrap();
        assert!(wf.cached_phrases() <= 2);
    }
    // 캐시를 비운 뒤에도 같은 값
    assert_eq!(
        wf.word_frequency("the", "en", "best", 0.0).unwrap(),
        wf.word_frequency("the", "en", "best", 0.0).unwrap()
    );
}

#[test]
fn test_concurrent_queries() {
    let dir = fixture();
    let wf = Arc::new(service(&dir));
    let expected = wf.word_frequency("flip-flop", "en", "best", 0.0).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let wf = Arc::clone(&wf);
            std::thread::spawn(move || {
                let lang = if i % 2 == 0 { "en" } else { "en-US" };
                wf.word_frequency("flip-flop", lang, "best", 0.0).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_config_file() {
    let dir = fixture();
    let path = dir.path().join("config.json");
    let config = WordfreqConfig::new().with_data_dir(dir.path()).with_inferred_space_factor(2.0);
    wordfreq::config::save_config(&path, &config).unwrap();

    let wf = Wordfreq::new(wordfreq::config::load_config(&path))
        .unwrap()
        .with_chinese_segmenter(lexicon(&["谢谢"]));
    let once = wf.word_frequency("谢谢", "zh", "best", 0.0).unwrap();
    let twice = wf.word_frequency("谢谢谢谢", "zh", "best", 0.0).unwrap();
    assert!((twice - once / 4.0).abs() / twice < 1e-9);
}
