use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    #[error("missing entry for canonical key {0}")]
    MissingEntry(u32),
    #[error("key {0} is not in the canonical key set")]
    NonCanonicalKey(u32),
}

pub type Result<T> = std::result::Result<T, LexiconError>;
