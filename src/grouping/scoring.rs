//! Confidence scoring seam
//!
//! Grouping and misplacement heuristics currently carry fixed confidence
//! constants. They live behind `ConfidenceModel` so a graded scorer can
//! replace them without touching any orchestration code.

use crate::models::Strategy;

pub trait ConfidenceModel: Send + Sync {
    /// Confidence for a proposed group of `members` produced by `strategy`.
    fn group_confidence(&self, strategy: Strategy, members: &[String]) -> f64;

    /// Confidence that a file is misplaced, given how many of its resolved
    /// imports point at the dominant directory out of the total resolved.
    fn misplaced_confidence(&self, dominant_count: usize, total_resolved: usize) -> f64;
}

/// The placeholder model: strategy-constant scores.
pub struct FixedConfidence;

impl FixedConfidence {
    pub const FUNCTIONAL: f64 = 0.8;
    pub const LAYERED: f64 = 0.7;
    pub const MISPLACED: f64 = 0.7;
}

impl ConfidenceModel for FixedConfidence {
    fn group_confidence(&self, strategy: Strategy, _members: &[String]) -> f64 {
        match strategy {
            Strategy::Functional => Self::FUNCTIONAL,
            Strategy::Layered | Strategy::Domain => Self::LAYERED,
        }
    }

    fn misplaced_confidence(&self, _dominant_count: usize, _total_resolved: usize) -> f64 {
        Self::MISPLACED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_scores() {
        let model = FixedConfidence;
        assert_eq!(model.group_confidence(Strategy::Functional, &[]), 0.8);
        assert_eq!(model.group_confidence(Strategy::Layered, &[]), 0.7);
        assert_eq!(model.misplaced_confidence(3, 4), 0.7);
    }
}
