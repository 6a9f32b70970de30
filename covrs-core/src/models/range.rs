use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::RangeParseError;

/// Represent a closed range `[start, end]`, inclusive on both ends.
///
/// The range is generic over any value type with a total order: integer
/// light levels, floating-point distances, timestamps. Callers are
/// responsible for two preconditions that are never checked at runtime:
///
/// - `start <= end`. An inverted range is not repaired; it can never act as
///   a container for another range and is of no practical use as a
///   candidate.
/// - the comparison on `T` is a total order. Types like `f64` satisfy this
///   only while no `NaN` is present; feeding `NaN` bounds yields an
///   unspecified (but non-panicking) result.
///
/// # Examples
///
/// ```
/// use covrs_core::models::Range;
///
/// let envelope = Range::new(100, 500);
/// assert!(envelope.contains(&Range::new(150, 400)));
/// assert!(envelope.overlaps(&Range::new(400, 1000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T>
where
    T: PartialOrd + Copy,
{
    pub start: T,
    pub end: T,
}

impl<T> Range<T>
where
    T: PartialOrd + Copy,
{
    /// Create a new range from its two bounds. No validation is performed.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Range { start, end }
    }

    /// Check if this range fully encloses `other`.
    ///
    /// Both endpoints are inclusive, so a range contains itself.
    ///
    /// ```
    /// use covrs_core::models::Range;
    ///
    /// let a = Range::new(0, 10);
    /// assert!(a.contains(&Range::new(0, 10)));
    /// assert!(a.contains(&Range::new(3, 7)));
    /// assert!(!a.contains(&Range::new(5, 11)));
    /// ```
    #[inline]
    pub fn contains(&self, other: &Range<T>) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Check if this range shares at least one point with `other`.
    ///
    /// Endpoints are inclusive: two ranges that merely touch overlap.
    ///
    /// ```
    /// use covrs_core::models::Range;
    ///
    /// let a = Range::new(0, 10);
    /// assert!(a.overlaps(&Range::new(10, 20)));
    /// assert!(!a.overlaps(&Range::new(11, 20)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Range<T>) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

impl<T> Display for Range<T>
where
    T: PartialOrd + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> FromStr for Range<T>
where
    T: PartialOrd + Copy + FromStr,
{
    type Err = RangeParseError;

    ///
    /// Parse a range from its `start:end` text form, e.g. `0.5:15.0`.
    ///
    /// ```
    /// use covrs_core::models::Range;
    ///
    /// let required: Range<f64> = "0.5:15.0".parse().unwrap();
    /// assert_eq!(required, Range::new(0.5, 15.0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| RangeParseError::MissingSeparator(s.to_string()))?;

        let start = start
            .trim()
            .parse::<T>()
            .map_err(|_| RangeParseError::InvalidBound(s.to_string(), start.trim().to_string()))?;
        let end = end
            .trim()
            .parse::<T>()
            .map_err(|_| RangeParseError::InvalidBound(s.to_string(), end.trim().to_string()))?;

        Ok(Range { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Range::new(0, 10), Range::new(3, 7), true)]
    #[case(Range::new(0, 10), Range::new(0, 10), true)]
    #[case(Range::new(0, 10), Range::new(0, 11), false)]
    #[case(Range::new(0, 10), Range::new(-1, 5), false)]
    #[case(Range::new(3, 7), Range::new(0, 10), false)]
    fn test_contains(#[case] a: Range<i32>, #[case] b: Range<i32>, #[case] expected: bool) {
        assert_eq!(a.contains(&b), expected);
    }

    #[rstest]
    #[case(Range::new(0, 10), Range::new(5, 15), true)]
    #[case(Range::new(0, 10), Range::new(10, 20), true)] // touching endpoints count
    #[case(Range::new(0, 10), Range::new(11, 20), false)]
    #[case(Range::new(5, 15), Range::new(0, 10), true)]
    #[case(Range::new(5, 5), Range::new(5, 5), true)]
    fn test_overlaps(#[case] a: Range<i32>, #[case] b: Range<i32>, #[case] expected: bool) {
        assert_eq!(a.overlaps(&b), expected);
    }

    #[rstest]
    fn test_overlaps_is_symmetric() {
        let a = Range::new(0.5, 5.0);
        let b = Range::new(4.0, 10.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Range::new(100, 500).to_string(), "[100, 500]");
    }

    #[rstest]
    fn test_parse_int_range() {
        let range: Range<i32> = "100:1500".parse().unwrap();
        assert_eq!(range, Range::new(100, 1500));
    }

    #[rstest]
    fn test_parse_trims_whitespace() {
        let range: Range<f64> = " 0.5 : 15.0 ".parse().unwrap();
        assert_eq!(range, Range::new(0.5, 15.0));
    }

    #[rstest]
    fn test_parse_missing_separator() {
        let result = "100-1500".parse::<Range<i32>>();
        assert!(matches!(result, Err(RangeParseError::MissingSeparator(_))));
    }

    #[rstest]
    fn test_parse_invalid_bound() {
        let result = "abc:10".parse::<Range<i32>>();
        assert!(matches!(result, Err(RangeParseError::InvalidBound(_, _))));
    }
}
