//! Round-trip checks with a compression ratio.
//!
//! The ratio compares the encoded text with the JSON array of the original
//! values, e.g. `[1,2,2,3]`.

use std::fmt;

use crate::error::CodecError;
use crate::traits::MultisetCodec;

/// Smallest ratio counted by [`average_ratio`].
pub const MIN_RATIO: f64 = 0.01;

/// Ratio counted by [`average_ratio`] for a failed round trip.
pub const FAILED_RATIO: f64 = 1.0;

/// Outcome of encoding and decoding one multiset.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripReport {
    original_len: usize,
    encoded: String,
    valid: bool,
}

impl RoundTripReport {
    /// Encodes then decodes `values` with `codec` and compares the result
    /// as a multiset.
    ///
    /// # Errors
    ///
    /// A decode failure is returned as is rather than recorded as a
    /// mismatch.
    pub fn run<C>(codec: &C, values: &[i64]) -> Result<Self, CodecError>
    where
        C: MultisetCodec + ?Sized,
    {
        let original_len = json_len(values);
        let encoded = codec.encode(values);
        let decoded = codec.decode(&encoded)?;
        let valid = same_multiset(values, &decoded);

        if !valid {
            tracing::warn!(encoded = %encoded, "round trip mismatch");
        }

        Ok(Self {
            original_len,
            encoded,
            valid,
        })
    }

    /// Whether the decoded values match the original multiset.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Encoded text.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Length of the JSON array of the original values.
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Length of the encoded text.
    pub fn encoded_len(&self) -> usize {
        self.encoded.len()
    }

    /// Encoded length divided by original length.
    pub fn ratio(&self) -> f64 {
        self.encoded_len() as f64 / self.original_len as f64
    }
}

impl fmt::Display for RoundTripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} bytes (ratio {:.2}): {}",
            self.original_len,
            self.encoded_len(),
            self.ratio(),
            if self.valid { "ok" } else { "MISMATCH" }
        )
    }
}

/// Mean ratio over `reports`, floored at [`MIN_RATIO`] per report, with
/// failed round trips counted as [`FAILED_RATIO`].
///
/// Returns `None` for an empty slice.
pub fn average_ratio(reports: &[RoundTripReport]) -> Option<f64> {
    if reports.is_empty() {
        return None;
    }

    let total: f64 = reports
        .iter()
        .map(|report| {
            if report.is_valid() {
                report.ratio().max(MIN_RATIO)
            } else {
                FAILED_RATIO
            }
        })
        .sum();

    Some(total / reports.len() as f64)
}

/// Compares two value lists as multisets.
pub fn same_multiset(a: &[i64], b: &[i64]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Length of `values` serialized as a JSON array.
fn json_len(values: &[i64]) -> usize {
    // Serializing integers into a String cannot fail
    serde_json::to_string(values).map_or(0, |json| json.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeCodec;
    use test_case::test_case;

    /// Codec that drops the last value on decode.
    struct LossyCodec;

    impl MultisetCodec for LossyCodec {
        fn encode(&self, values: &[i64]) -> String {
            RangeCodec::new().encode(values)
        }

        fn decode(&self, text: &str) -> Result<Vec<i64>, CodecError> {
            let mut values = RangeCodec::new().decode(text)?;
            values.pop();
            Ok(values)
        }
    }

    /// Codec that produces text it cannot read back.
    struct BrokenCodec;

    impl MultisetCodec for BrokenCodec {
        fn encode(&self, _values: &[i64]) -> String {
            "3-1".to_string()
        }

        fn decode(&self, text: &str) -> Result<Vec<i64>, CodecError> {
            RangeCodec::new().decode(text)
        }
    }

    #[test]
    fn test_report_for_mixed_counts() {
        let report =
            RoundTripReport::run(&RangeCodec::new(), &[1, 2, 2, 3, 4, 4, 4, 5]).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.encoded(), "1-5,2,4:2");
        assert_eq!(report.original_len(), "[1,2,2,3,4,4,4,5]".len());
        assert_eq!(report.encoded_len(), 9);
        assert!((report.ratio() - 9.0 / 17.0).abs() < 1e-9);
        assert_eq!(report.to_string(), "17 -> 9 bytes (ratio 0.53): ok");
    }

    #[test]
    fn test_report_for_empty_input() {
        let report = RoundTripReport::run(&RangeCodec::new(), &[]).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.original_len(), 2);
        assert_eq!(report.ratio(), 0.0);
    }

    #[test]
    fn test_mismatch_is_reported() {
        let report = RoundTripReport::run(&LossyCodec, &[1, 2, 3]).unwrap();
        assert!(!report.is_valid());
        assert!(report.to_string().ends_with("MISMATCH"));
    }

    #[test]
    fn test_format_error_is_not_masked() {
        let result = RoundTripReport::run(&BrokenCodec, &[1, 2, 3]);
        assert!(matches!(result, Err(CodecError::Format(_))));
    }

    #[test]
    fn test_average_ratio() {
        let codec = RangeCodec::new();
        let values: Vec<i64> = (0..2).flat_map(|_| 1..=300).collect();
        let uniform = RoundTripReport::run(&codec, &values).unwrap();
        let lossy = RoundTripReport::run(&LossyCodec, &[1, 2, 3]).unwrap();

        assert_eq!(average_ratio(&[]), None);

        // "1-300:2" against a 2.2 KB array is below the floor
        assert_eq!(average_ratio(&[uniform.clone()]), Some(MIN_RATIO));
        assert_eq!(
            average_ratio(&[uniform, lossy]),
            Some((MIN_RATIO + FAILED_RATIO) / 2.0)
        );
    }

    #[test_case(&[], &[] => true; "both empty")]
    #[test_case(&[1, 2, 2], &[2, 1, 2] => true; "reordered")]
    #[test_case(&[1, 2, 2], &[1, 1, 2] => false; "different multiplicity")]
    #[test_case(&[1, 2], &[1, 2, 2] => false; "different length")]
    fn test_same_multiset(a: &[i64], b: &[i64]) -> bool {
        same_multiset(a, b)
    }
}
