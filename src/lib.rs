pub mod config;
pub mod core;
pub mod error;
pub mod freq;
pub mod language;
pub mod query;
pub mod score;
pub mod segment;

pub use config::WordfreqConfig;
pub use error::{Result, WordfreqError};
pub use freq::{cb_to_freq, cb_to_zipf, freq_to_zipf, zipf_to_freq, FrequencyTable};
pub use language::LanguageProfile;
pub use query::{Wordfreq, WordlistIter};
pub use score::{digit_freq, smash_numbers};
pub use segment::{ExternalSegmenter, Token, TokenizeOptions};
