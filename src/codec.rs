//! Range codec for integer multisets.
//!
//! Values are grouped into runs of consecutive integers and repeat counts
//! are factored out, producing text such as `1-5,2,4:2`.
//!
//! # Format
//!
//! A comma-separated list of tokens, each `value` or `start-end`, with an
//! optional `:count` suffix when every value of the token occurs `count`
//! times. See [`crate::Token`] for the exact grammar.
//!
//! # Performance
//!
//! - Encoding: one ordered pass per distinct multiplicity layer
//! - Best case: uniform runs collapse to a single token (`1-300:2`)
//! - Worst case: isolated values cost one token each, larger than the input

use crate::decoder;
use crate::encoder;
use crate::error::CodecError;
use crate::traits::MultisetCodec;

/// Run/range text codec.
///
/// Stateless apart from its configuration; a single instance can be shared
/// between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeCodec {
    /// Maximum number of values a single decode may produce.
    max_decoded_len: Option<usize>,
}

impl RangeCodec {
    /// Create a codec without a decoding limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec that refuses to decode more than `limit` values.
    ///
    /// Guards against small inputs such as `0-9223372036854775807` that
    /// expand to an unbounded amount of memory.
    pub fn with_max_decoded_len(limit: usize) -> Self {
        Self {
            max_decoded_len: Some(limit),
        }
    }

    /// Configured decoding limit, if any.
    pub fn max_decoded_len(&self) -> Option<usize> {
        self.max_decoded_len
    }
}

impl MultisetCodec for RangeCodec {
    fn encode(&self, values: &[i64]) -> String {
        let text = encoder::encode(values);
        tracing::debug!(values = values.len(), bytes = text.len(), "encoded multiset");
        text
    }

    fn decode(&self, text: &str) -> Result<Vec<i64>, CodecError> {
        let values = decoder::decode(text, self.max_decoded_len)?;
        tracing::debug!(bytes = text.len(), values = values.len(), "decoded multiset");
        Ok(values)
    }
}
