use crate::error::CodecError;

/// A lossless text codec for multisets of integers.
///
/// Only values and their multiplicities survive a round trip; input order
/// does not.
pub trait MultisetCodec {
    /// Encodes a multiset into text.
    ///
    /// Total for every input; the empty multiset encodes to `""`.
    fn encode(&self, values: &[i64]) -> String;

    /// Decodes text produced by [`MultisetCodec::encode`] (or any text
    /// following the same grammar).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Format`] for the first malformed token.
    fn decode(&self, text: &str) -> Result<Vec<i64>, CodecError>;

    /// Size in bytes of the encoded text for `values`.
    fn estimate_size(&self, values: &[i64]) -> usize {
        self.encode(values).len()
    }
}
