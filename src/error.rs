//! Errors returned by this crate.
use thiserror::Error;

/// A `Result` alias whose error type is [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;

/// Everything that can go wrong while loading a dataset,
/// growing a tree, or classifying an example.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The input has no header row.
    #[error("the dataset is empty (no header row)")]
    EmptyDataset,

    /// An attribute name that is not part of the header.
    #[error("the attribute `{name}` does not exist")]
    UnknownAttribute {
        /// The requested name.
        name: String,
    },

    /// A row whose width differs from the header.
    #[error("line {line} has {found} fields, but the header has {expected}")]
    RaggedRow {
        /// 1-indexed line number (the header is line 1).
        line: usize,
        /// Number of attributes in the header.
        expected: usize,
        /// Number of fields on the offending line.
        found: usize,
    },

    /// A [`Vocabulary`](crate::Vocabulary) that cannot drive induction.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// The value of a tested attribute matches no branch of the tree.
    #[error("no branch for `{attribute} = {value}`")]
    UnseenBranch {
        /// Display name of the tested attribute.
        attribute: String,
        /// The value found in the example.
        value: String,
    },

    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A malformed JSON configuration.
    #[error(transparent)]
    Config(#[from] serde_json::Error),

    /// Importing a `polars::DataFrame` failed.
    #[error(transparent)]
    DataFrame(#[from] polars::prelude::PolarsError),
}
