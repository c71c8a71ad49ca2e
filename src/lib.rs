//! Multiset compression into run/range text.
//!
//! `multirange` encodes a bag of integers (duplicates allowed, order
//! irrelevant) as a short, human-readable list of ranges and repeat counts,
//! and decodes it back to the same multiset.
//!
//! - `1-5` is the values 1, 2, 3, 4 and 5 once each
//! - `7:50` is the value 7, fifty times
//! - `1-5,2,4:2` is 1, 2, 2, 3, 4, 4, 4, 5
//!
//! # Encoding
//!
//! The encoder counts every value, then peels the counts off in layers.
//! Each layer walks the remaining distinct values in ascending order,
//! groups consecutive integers into runs and emits one token per run using
//! the smallest count in that run. Values left over after a layer show up
//! again in the next one. The text is canonical: single values never use
//! `n-n` and a count of one is never written.
//!
//! # Decoding
//!
//! Decoding is strict. Every token is validated before anything is
//! expanded, and the first malformed token is reported with its position.
//! A decoding limit can be configured to reject texts that expand to more
//! values than a caller is willing to hold.
//!
//! # Example
//!
//! ```rust
//! use multirange::{MultisetCodec, RangeCodec};
//!
//! let codec = RangeCodec::new();
//! let values = vec![1i64, 2, 2, 3, 4, 4, 4, 5];
//!
//! // Encode
//! let text = codec.encode(&values);
//! assert_eq!(text, "1-5,2,4:2");
//!
//! // Decode
//! let mut decoded = codec.decode(&text).unwrap();
//! decoded.sort_unstable();
//! assert_eq!(values, decoded);
//! ```
//!
//! Compression is not guaranteed: isolated values cost at least as much as
//! their decimal form.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codec;
mod decoder;
mod encoder;
mod error;
mod frequency;
mod report;
mod run;
mod token;
mod traits;

pub use codec::RangeCodec;
pub use encoder::Layers;
pub use error::{CodecError, FormatError, FormatErrorKind};
pub use frequency::FrequencyTable;
pub use report::{average_ratio, same_multiset, RoundTripReport, FAILED_RATIO, MIN_RATIO};
pub use run::Run;
pub use token::Token;
pub use traits::MultisetCodec;

/// Encodes `values` with the default [`RangeCodec`].
///
/// ```rust
/// assert_eq!(multirange::encode(&[3, 1, 2]), "1-3");
/// assert_eq!(multirange::encode(&[]), "");
/// ```
pub fn encode(values: &[i64]) -> String {
    RangeCodec::default().encode(values)
}

/// Decodes `text` with the default [`RangeCodec`].
///
/// ```rust
/// assert_eq!(multirange::decode("7:3").unwrap(), vec![7, 7, 7]);
/// assert!(multirange::decode("3-1").is_err());
/// ```
pub fn decode(text: &str) -> Result<Vec<i64>, CodecError> {
    RangeCodec::default().decode(text)
}

/// Tokens of `values` in emission order, before they are joined into text.
pub fn tokens(values: &[i64]) -> Vec<Token> {
    encoder::tokens(values)
}

/// Parses range text into tokens without expanding them.
pub fn parse(text: &str) -> Result<Vec<Token>, FormatError> {
    decoder::parse(text)
}
