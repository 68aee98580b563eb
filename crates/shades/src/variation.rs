//! Darker/lighter variation selection.
//!
//! Candidates are split by the sign of their lightness difference, the
//! ones nearest the target are kept, and each bucket is reversed so the
//! color furthest from the target leads:
//!
//! ```text
//! darker bucket        target      lighter bucket
//! [far, near]     →   selected  →  [far, near]
//! lumDiff: 30, 10                  lumDiff: -30, -10
//! ```
//!
//! The darker side therefore climbs towards the target, while the lighter
//! side opens with its lightest color.

use std::cmp::Reverse;

use crate::similarity::SimilarityCandidate;

/// Which side of the target a variation falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Lower HSL lightness than the target (`lumDiff > 0`).
    Darker,
    /// Higher HSL lightness than the target (`lumDiff < 0`).
    Lighter,
}

impl Direction {
    /// Whether a lightness difference belongs to this side. Zero belongs
    /// to neither.
    pub fn accepts(self, lightness_diff: i16) -> bool {
        match self {
            Self::Darker => lightness_diff > 0,
            Self::Lighter => lightness_diff < 0,
        }
    }
}

/// Pick up to two variations on one side of the target.
///
/// - [`Direction::Darker`]: the two smallest positive differences,
///   returned with the larger difference (darker color) first.
/// - [`Direction::Lighter`]: the two negative differences closest to zero,
///   returned with the more negative difference (lighter color) first.
///
/// Fewer than two qualifying candidates are returned as-is; the result is
/// never padded.
pub fn variations_by_lightness(
    candidates: &[SimilarityCandidate],
    direction: Direction,
) -> Vec<SimilarityCandidate> {
    variations_by_lightness_with(candidates, direction, 2)
}

pub fn variations_by_lightness_with(
    candidates: &[SimilarityCandidate],
    direction: Direction,
    count: usize,
) -> Vec<SimilarityCandidate> {
    let mut bucket: Vec<SimilarityCandidate> = candidates
        .iter()
        .filter(|c| direction.accepts(c.lightness_diff))
        .cloned()
        .collect();

    // Stable sorts: equal differences keep dictionary order.
    match direction {
        Direction::Darker => bucket.sort_by_key(|c| c.lightness_diff),
        Direction::Lighter => bucket.sort_by_key(|c| Reverse(c.lightness_diff)),
    }

    bucket.truncate(count);
    bucket.reverse();
    bucket
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(hex: &str, lightness: u8, lightness_diff: i16) -> SimilarityCandidate {
        SimilarityCandidate {
            hex: hex.to_string(),
            score: 10.0,
            lightness,
            lightness_diff,
        }
    }

    fn grays() -> Vec<SimilarityCandidate> {
        vec![
            candidate("#000000", 0, 50),
            candidate("#333333", 20, 30),
            candidate("#CCCCCC", 80, -30),
            candidate("#FFFFFF", 100, -50),
        ]
    }

    fn diffs(bucket: &[SimilarityCandidate]) -> Vec<i16> {
        bucket.iter().map(|c| c.lightness_diff).collect()
    }

    #[test]
    fn test_darker_variations() {
        let darker = variations_by_lightness(&grays(), Direction::Darker);
        assert_eq!(diffs(&darker), [50, 30]);
        assert!(darker[0].lightness_diff > darker[1].lightness_diff);
    }

    #[test]
    fn test_lighter_variations() {
        let lighter = variations_by_lightness(&grays(), Direction::Lighter);
        assert_eq!(diffs(&lighter), [-50, -30]);
        assert!(lighter[0].lightness_diff < lighter[1].lightness_diff);
    }

    #[test]
    fn test_keeps_nearest_two() {
        let candidates = vec![
            candidate("#111111", 7, 43),
            candidate("#444444", 27, 23),
            candidate("#222222", 13, 37),
            candidate("#555555", 33, 17),
        ];
        let darker = variations_by_lightness(&candidates, Direction::Darker);
        let hexes: Vec<_> = darker.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(hexes, ["#444444", "#555555"]);
    }

    #[test]
    fn test_zero_difference_belongs_to_neither() {
        let candidates = vec![candidate("#808080", 50, 0)];
        assert!(variations_by_lightness(&candidates, Direction::Darker).is_empty());
        assert!(variations_by_lightness(&candidates, Direction::Lighter).is_empty());
    }

    #[test]
    fn test_never_pads() {
        let candidates = vec![candidate("#333333", 20, 30)];
        assert_eq!(variations_by_lightness(&candidates, Direction::Darker).len(), 1);
        assert!(variations_by_lightness(&candidates, Direction::Lighter).is_empty());
        assert!(variations_by_lightness(&[], Direction::Darker).is_empty());
    }

    #[test]
    fn test_equal_differences_keep_dictionary_order() {
        let candidates = vec![
            candidate("#first", 40, 10),
            candidate("#second", 40, 10),
            candidate("#third", 40, 10),
        ];
        let darker = variations_by_lightness(&candidates, Direction::Darker);
        let hexes: Vec<_> = darker.iter().map(|c| c.hex.as_str()).collect();
        // first two survive the cut, then the bucket is reversed
        assert_eq!(hexes, ["#second", "#first"]);
    }

    #[test]
    fn test_lighter_keeps_nearest_two() {
        let candidates = vec![
            candidate("#eeeeee", 93, -43),
            candidate("#bbbbbb", 73, -23),
            candidate("#aaaaaa", 67, -17),
        ];
        let lighter = variations_by_lightness(&candidates, Direction::Lighter);
        assert_eq!(diffs(&lighter), [-23, -17]);
    }

    #[test]
    fn test_custom_count() {
        let candidates = vec![
            candidate("#a", 10, 40),
            candidate("#b", 20, 30),
            candidate("#c", 30, 20),
        ];
        let darker = variations_by_lightness_with(&candidates, Direction::Darker, 3);
        assert_eq!(diffs(&darker), [40, 30, 20]);
    }
}
