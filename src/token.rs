//! Tokens of the range grammar.
//!
//! ```text
//! text     := "" | token ("," token)*
//! token    := interval [":" count]
//! interval := integer | integer "-" integer
//! count    := positive-integer        ; omitted means 1
//! integer  := ["-"] digit+
//! ```
//!
//! `Display` always writes the canonical form (`n` rather than `n-n`, no
//! `:1` suffix). `FromStr` also accepts the non-canonical forms.

use std::fmt;
use std::iter;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::FormatErrorKind;
use crate::run::Run;

/// Separator between tokens.
pub const TOKEN_SEPARATOR: char = ',';

/// Separator between an interval and its count.
pub const COUNT_SEPARATOR: char = ':';

/// Separator between the bounds of an interval.
pub const RANGE_SEPARATOR: char = '-';

/// One token: every value of `start..=end`, each repeated `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    start: i64,
    end: i64,
    count: u64,
}

impl Token {
    /// Builds the token emitted for `run` with the given repeat count.
    pub fn from_run(run: &Run, count: u64) -> Self {
        Self {
            start: run.start(),
            end: run.end(),
            count,
        }
    }

    /// First value of the interval.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last value of the interval.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// How many times each value of the interval occurs.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Interval covered by the token.
    pub fn range(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }

    /// Number of values the token expands to.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u128 {
        let width = u128::from(self.end.abs_diff(self.start)) + 1;
        width.saturating_mul(u128::from(self.count))
    }

    /// Expands the token: each value of the interval, `count` times, in
    /// ascending order.
    pub fn values(&self) -> impl Iterator<Item = i64> {
        let count = usize::try_from(self.count).unwrap_or(usize::MAX);
        self.range()
            .flat_map(move |value| iter::repeat(value).take(count))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)?;
        } else {
            write!(f, "{}{RANGE_SEPARATOR}{}", self.start, self.end)?;
        }
        if self.count != 1 {
            write!(f, "{COUNT_SEPARATOR}{}", self.count)?;
        }
        Ok(())
    }
}

impl FromStr for Token {
    type Err = FormatErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FormatErrorKind::EmptyToken);
        }

        let (interval, count) = match s.split_once(COUNT_SEPARATOR) {
            Some((interval, count)) => (interval, Some(count)),
            None => (s, None),
        };

        let (start, end) = parse_interval(interval)?;
        if start > end {
            return Err(FormatErrorKind::InvertedRange { start, end });
        }

        let count = match count {
            Some(count) => parse_count(count)?,
            None => 1,
        };

        Ok(Self { start, end, count })
    }
}

/// Parses `integer` or `integer-integer`.
fn parse_interval(text: &str) -> Result<(i64, i64), FormatErrorKind> {
    let (start, rest) = parse_integer(text)?;
    if rest.is_empty() {
        return Ok((start, start));
    }

    let Some(end_text) = rest.strip_prefix(RANGE_SEPARATOR) else {
        return Err(FormatErrorKind::InvalidInteger(field(text).to_string()));
    };

    let (end, rest) = parse_integer(end_text)?;
    if rest.starts_with(RANGE_SEPARATOR) {
        return Err(FormatErrorKind::ExtraSeparator(RANGE_SEPARATOR));
    }
    if !rest.is_empty() {
        return Err(FormatErrorKind::InvalidInteger(field(end_text).to_string()));
    }

    Ok((start, end))
}

/// Parses the leading `["-"] digit+` of `text`, returning the value and the
/// unparsed remainder.
fn parse_integer(text: &str) -> Result<(i64, &str), FormatErrorKind> {
    let sign = usize::from(text.starts_with(RANGE_SEPARATOR));
    let digits = text[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(FormatErrorKind::InvalidInteger(field(text).to_string()));
    }

    let (number, rest) = text.split_at(sign + digits);
    let value = number
        .parse::<i64>()
        .map_err(|_| FormatErrorKind::IntegerOverflow(number.to_string()))?;

    Ok((value, rest))
}

/// Parses a strictly positive decimal count.
fn parse_count(text: &str) -> Result<u64, FormatErrorKind> {
    if text.contains(COUNT_SEPARATOR) {
        return Err(FormatErrorKind::ExtraSeparator(COUNT_SEPARATOR));
    }

    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatErrorKind::InvalidCount(text.to_string()));
    }
    if digits.len() != text.len() {
        return Err(FormatErrorKind::NegativeCount(text.to_string()));
    }

    match text.parse::<u64>() {
        Ok(0) => Err(FormatErrorKind::ZeroCount),
        Ok(count) => Ok(count),
        Err(_) => Err(FormatErrorKind::CountOverflow(text.to_string())),
    }
}

/// The leading field of `text`: everything up to the first range separator
/// that is not a sign.
fn field(text: &str) -> &str {
    let end = text
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == RANGE_SEPARATOR)
        .map_or(text.len(), |(i, _)| i);
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use test_case::test_case;

    #[test_case("5" => (5, 5, 1); "singleton")]
    #[test_case("1-5" => (1, 5, 1); "range")]
    #[test_case("7:50" => (7, 7, 50); "repeated singleton")]
    #[test_case("1-50:3" => (1, 50, 3); "repeated range")]
    #[test_case("-3" => (-3, -3, 1); "negative singleton")]
    #[test_case("-3-1" => (-3, 1, 1); "range across zero")]
    #[test_case("-5--4:2" => (-5, -4, 2); "negative range")]
    #[test_case("4-4" => (4, 4, 1); "equal bounds")]
    #[test_case("4:1" => (4, 4, 1); "explicit count of one")]
    #[test_case("007" => (7, 7, 1); "leading zeros")]
    #[test_case("-9223372036854775808-9223372036854775807" => (i64::MIN, i64::MAX, 1); "full domain")]
    fn test_parse_valid(text: &str) -> (i64, i64, u64) {
        let token: Token = text.parse().expect("token should parse");
        (token.start(), token.end(), token.count())
    }

    #[test_case("" => FormatErrorKind::EmptyToken; "empty")]
    #[test_case("a" => FormatErrorKind::InvalidInteger("a".into()); "letter")]
    #[test_case("a-b" => FormatErrorKind::InvalidInteger("a".into()); "letter range")]
    #[test_case("1-b" => FormatErrorKind::InvalidInteger("b".into()); "letter end")]
    #[test_case("12x" => FormatErrorKind::InvalidInteger("12x".into()); "trailing garbage")]
    #[test_case("-" => FormatErrorKind::InvalidInteger("-".into()); "sign only")]
    #[test_case("+5" => FormatErrorKind::InvalidInteger("+5".into()); "plus sign")]
    #[test_case(" 5" => FormatErrorKind::InvalidInteger(" 5".into()); "whitespace")]
    #[test_case("3-1" => FormatErrorKind::InvertedRange { start: 3, end: 1 }; "inverted")]
    #[test_case("1-2-3" => FormatErrorKind::ExtraSeparator('-'); "extra dash")]
    #[test_case("1:2:3" => FormatErrorKind::ExtraSeparator(':'); "extra colon")]
    #[test_case("5:0" => FormatErrorKind::ZeroCount; "zero count")]
    #[test_case("5:-2" => FormatErrorKind::NegativeCount("-2".into()); "negative count")]
    #[test_case("5:" => FormatErrorKind::InvalidCount("".into()); "missing count")]
    #[test_case("5:x" => FormatErrorKind::InvalidCount("x".into()); "letter count")]
    #[test_case("9223372036854775808" => FormatErrorKind::IntegerOverflow("9223372036854775808".into()); "integer overflow")]
    #[test_case("5:18446744073709551616" => FormatErrorKind::CountOverflow("18446744073709551616".into()); "count overflow")]
    fn test_parse_invalid(text: &str) -> FormatErrorKind {
        text.parse::<Token>().expect_err("token should be rejected")
    }

    #[test]
    fn test_multibyte_input_is_rejected() {
        assert_matches!("é-1".parse::<Token>(), Err(FormatErrorKind::InvalidInteger(_)));
        assert_matches!("1-é".parse::<Token>(), Err(FormatErrorKind::InvalidInteger(_)));
    }

    #[test_case(1, 1, 1 => "1"; "singleton")]
    #[test_case(1, 5, 1 => "1-5"; "range")]
    #[test_case(7, 7, 50 => "7:50"; "repeated singleton")]
    #[test_case(-5, -4, 2 => "-5--4:2"; "negative range")]
    fn test_display_is_canonical(start: i64, end: i64, count: u64) -> String {
        Token { start, end, count }.to_string()
    }

    #[test]
    fn test_non_canonical_input_displays_canonically() {
        let token: Token = "4-4:1".parse().unwrap();
        assert_eq!(token.to_string(), "4");
    }

    #[test]
    fn test_values_expand_in_order() {
        let token: Token = "2-4:2".parse().unwrap();
        assert_eq!(token.len(), 6);
        assert_eq!(token.values().collect::<Vec<_>>(), vec![2, 2, 3, 3, 4, 4]);
    }

    #[test]
    fn test_len_does_not_overflow() {
        let token = Token {
            start: i64::MIN,
            end: i64::MAX,
            count: u64::MAX,
        };
        assert_eq!(token.len(), (1u128 << 64) * u128::from(u64::MAX));
    }
}
