//! Error types for decoding range text.

/// Reason a single token was rejected by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatErrorKind {
    /// The token is empty (e.g. `1,,2` or a trailing comma).
    #[error("empty token")]
    EmptyToken,

    /// An interval bound is not a decimal integer.
    #[error("`{0}` is not a valid integer")]
    InvalidInteger(String),

    /// An interval bound does not fit in an `i64`.
    #[error("integer `{0}` is out of range")]
    IntegerOverflow(String),

    /// The range bounds are inverted.
    #[error("range start {start} is greater than end {end}")]
    InvertedRange {
        /// First bound of the range.
        start: i64,
        /// Second bound of the range.
        end: i64,
    },

    /// The count is not a decimal integer.
    #[error("`{0}` is not a valid count")]
    InvalidCount(String),

    /// The count is zero.
    #[error("count must be positive, got 0")]
    ZeroCount,

    /// The count carries a minus sign.
    #[error("count must be positive, got `{0}`")]
    NegativeCount(String),

    /// The count does not fit in a `u64`.
    #[error("count `{0}` is out of range")]
    CountOverflow(String),

    /// More `:` or `-` separators than the grammar allows.
    #[error("unexpected `{0}` separator")]
    ExtraSeparator(char),
}

/// A token that violates the range grammar.
///
/// Carries the position of the first offending token so callers can point
/// at it; nothing after it is inspected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid token #{index} `{token}`: {kind}")]
pub struct FormatError {
    /// Zero-based position of the token in the comma-separated list.
    pub index: usize,
    /// Raw text of the token.
    pub token: String,
    /// Why the token was rejected.
    pub kind: FormatErrorKind,
}

/// Errors returned by [`crate::MultisetCodec::decode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The input text is not valid range text.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The text describes more values than the codec is allowed to produce.
    #[error("decoded length {requested} exceeds the limit of {limit} values")]
    LimitExceeded {
        /// Configured maximum number of decoded values.
        limit: usize,
        /// Number of values the text expands to.
        requested: u128,
    },
}
