use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Word count {requested} is out of range ({min}-{max} allowed)")]
    WordCount {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("Seed phrase cannot be empty")]
    EmptySeed,

    #[error("Unknown separator \"{0}\"")]
    UnknownSeparator(String),

    #[error("Unknown capitalization \"{0}\"")]
    UnknownCapitalization(String),
}

pub type Result<T> = std::result::Result<T, Error>;
