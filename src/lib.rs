pub mod cli;
pub mod config;
pub mod model;
pub mod splitter;

pub use config::Config;
pub use model::lexicon::{FstLexicon, Lexicon};
pub use model::{FrequencyModel, FrequencyTable};
pub use splitter::Splitter;

/// Outcome of splitting one identifier.
#[derive(Debug, Clone)]
pub struct SplitResult {
    pub identifier: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("identifier of {len} bytes exceeds the maximum of {max}")]
    InputTooLarge { len: usize, max: usize },
}
