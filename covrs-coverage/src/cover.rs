use std::cmp::Ordering;

use covrs_core::models::Range;

/// Decide whether `available` ranges jointly cover every point of `required`.
///
/// This runs a greedy sweep: candidates are sorted by start, and a coverage
/// frontier advances from `required.start` through every candidate that
/// reaches back to it. Coverage holds as soon as the frontier passes
/// `required.end`. Sorting dominates the cost, so a query is `O(n log n)` in
/// the number of candidates. The input slice is never mutated; the sweep
/// works on its own copy.
///
/// Ranges are closed, so candidates that merely touch chain together. A
/// `required` range whose end does not exceed its start is trivially covered,
/// even by an empty candidate set. Coordinates are assumed to be totally
/// ordered; `f64::NAN` endpoints make the verdict undefined.
///
/// # Arguments
///
/// * `required` - The span that must be covered end to end
/// * `available` - The candidate ranges to cover it with
///
/// # Examples
///
/// ```
/// use covrs_core::Range;
/// use covrs_coverage::can_cover_range;
///
/// let required = Range::new(0, 10);
///
/// // overlapping candidates chain into full coverage
/// let chain = [Range::new(0, 4), Range::new(3, 7), Range::new(6, 10)];
/// assert!(can_cover_range(&required, &chain));
///
/// // a gap between 4 and 6 breaks the chain
/// let gapped = [Range::new(0, 4), Range::new(6, 10)];
/// assert!(!can_cover_range(&required, &gapped));
/// ```
pub fn can_cover_range<T>(required: &Range<T>, available: &[Range<T>]) -> bool
where
    T: PartialOrd + Copy,
{
    let mut frontier = required.start;
    if frontier >= required.end {
        return true;
    }

    let mut candidates = available.to_vec();
    candidates.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal));

    for candidate in candidates {
        // a candidate only helps if it starts at or behind the frontier
        // and reaches at least up to it
        if candidate.start <= frontier && candidate.end >= frontier {
            frontier = candidate.end;
        }
        if frontier >= required.end {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rstest::{fixture, rstest};

    #[fixture]
    fn chain() -> Vec<Range<i32>> {
        vec![Range::new(0, 4), Range::new(3, 7), Range::new(6, 10)]
    }

    #[rstest]
    fn test_chained_candidates_cover(chain: Vec<Range<i32>>) {
        assert!(can_cover_range(&Range::new(0, 10), &chain));
    }

    #[rstest]
    #[case(vec![Range::new(0, 4), Range::new(6, 10)])] // gap in the middle
    #[case(vec![Range::new(2, 3)])] // never reaches the start
    #[case(vec![Range::new(0, 4), Range::new(4, 9)])] // stops short of the end
    #[case(vec![Range::new(1, 10)])] // starts past the frontier
    #[case(vec![])]
    fn test_incomplete_candidates_rejected(#[case] available: Vec<Range<i32>>) {
        assert_eq!(can_cover_range(&Range::new(0, 10), &available), false);
    }

    #[rstest]
    fn test_single_containing_candidate_covers() {
        let required = Range::new(0, 10);
        assert!(can_cover_range(&required, &[Range::new(-5, 15)]));
        assert!(can_cover_range(&required, &[Range::new(0, 10)]));
    }

    #[rstest]
    fn test_touching_endpoints_chain() {
        let required = Range::new(0, 10);
        let touching = [Range::new(0, 5), Range::new(5, 10)];
        assert!(can_cover_range(&required, &touching));
    }

    #[rstest]
    fn test_degenerate_required_trivially_covered() {
        // start meets or passes end, so there is nothing left to cover
        assert!(can_cover_range(&Range::new(5, 5), &[]));
        assert!(can_cover_range(&Range::new(10, 0), &[]));
        assert!(can_cover_range(&Range::new(5, 5), &[Range::new(7, 9)]));
    }

    #[rstest]
    fn test_inverted_candidate_is_inert() {
        // an end-before-start candidate can never advance the frontier
        assert_eq!(can_cover_range(&Range::new(3, 7), &[Range::new(7, 3)]), false);
    }

    #[rstest]
    fn test_duplicate_candidates_are_harmless(chain: Vec<Range<i32>>) {
        let mut doubled = chain.clone();
        doubled.extend(chain);
        assert!(can_cover_range(&Range::new(0, 10), &doubled));
    }

    #[rstest]
    fn test_input_left_untouched(chain: Vec<Range<i32>>) {
        let required = Range::new(0, 10);
        let before = chain.clone();

        let first = can_cover_range(&required, &chain);
        let second = can_cover_range(&required, &chain);

        assert_eq!(chain, before);
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_verdict_independent_of_candidate_order(chain: Vec<Range<i32>>) {
        let required = Range::new(0, 10);
        let mut gapped = vec![Range::new(0, 4), Range::new(6, 10), Range::new(7, 9)];

        let mut shuffled = chain.clone();
        for seed in 0..8u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffled.shuffle(&mut rng);
            assert!(can_cover_range(&required, &shuffled));
            gapped.shuffle(&mut rng);
            assert_eq!(can_cover_range(&required, &gapped), false);
        }
    }

    #[rstest]
    fn test_extra_candidates_never_revoke_coverage(chain: Vec<Range<i32>>) {
        let required = Range::new(0, 10);
        let extras = [
            Range::new(-10, -2),
            Range::new(20, 30),
            Range::new(9, 3),
            Range::new(2, 8),
        ];

        for extra in extras {
            let mut grown = chain.clone();
            grown.push(extra);
            assert!(can_cover_range(&required, &grown));
        }
    }

    #[rstest]
    fn test_float_coordinates() {
        let required = Range::new(0.5, 15.0);
        let focus = [
            Range::new(0.5, 5.0),
            Range::new(4.0, 10.0),
            Range::new(9.0, 20.0),
        ];
        assert!(can_cover_range(&required, &focus));

        // losing the middle camera leaves 5.0..9.0 unreachable
        let gapped = [Range::new(0.5, 5.0), Range::new(9.0, 20.0)];
        assert_eq!(can_cover_range(&required, &gapped), false);
    }
}
