//! Range text parsing and expansion.
//!
//! Decoding is all-or-nothing: every token is validated before a single
//! value is produced, and the first invalid token rejects the whole input.

use crate::error::{CodecError, FormatError};
use crate::token::{Token, TOKEN_SEPARATOR};

/// Upper bound on the values reserved up front; larger outputs grow on
/// demand.
const MAX_PREALLOCATION: usize = 1 << 20;

/// Parses range text into tokens.
///
/// The empty string holds no tokens. Parsing stops at the first invalid
/// token, which is reported with its position.
pub fn parse(text: &str) -> Result<Vec<Token>, FormatError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(TOKEN_SEPARATOR)
        .enumerate()
        .map(|(index, raw)| {
            raw.parse::<Token>().map_err(|kind| {
                tracing::trace!(index, token = raw, %kind, "rejected token");
                FormatError {
                    index,
                    token: raw.to_string(),
                    kind,
                }
            })
        })
        .collect()
}

/// Total number of values `tokens` expand to.
pub fn decoded_len(tokens: &[Token]) -> u128 {
    tokens
        .iter()
        .fold(0u128, |total, token| total.saturating_add(token.len()))
}

/// Expands tokens into values, in token order.
///
/// Fails with [`CodecError::LimitExceeded`] before allocating when the
/// tokens describe more than `limit` values.
pub fn expand(tokens: &[Token], limit: Option<usize>) -> Result<Vec<i64>, CodecError> {
    let requested = decoded_len(tokens);
    if let Some(limit) = limit {
        if requested > limit as u128 {
            return Err(CodecError::LimitExceeded { limit, requested });
        }
    }

    let capacity = usize::try_from(requested)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATION);
    let mut values = Vec::with_capacity(capacity);
    for token in tokens {
        values.extend(token.values());
    }
    Ok(values)
}

/// Decodes range text into its values.
pub fn decode(text: &str, limit: Option<usize>) -> Result<Vec<i64>, CodecError> {
    let tokens = parse(text)?;
    expand(&tokens, limit)
}
