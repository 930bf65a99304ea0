use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error("word {word:?} is {width} cells wide, which exceeds the limit of {limit}")]
    /// A word could not fit within the requested limit, and the caller asked for the
    /// limit to be enforced rather than raised
    WordTooWide {
        word: String,
        width: usize,
        limit: usize,
    },
}
