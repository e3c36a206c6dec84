//! The pinned factor weight table.
//!
//! Weights are part of the scoring contract: stored scores are only
//! comparable within a single weighting, so [`MATCHING_VERSION`] is
//! bumped whenever this table or any factor threshold changes. The table
//! is a compile-time constant, not runtime configuration, which keeps
//! the version tag truthful across every process that scores.

/// Version tag stamped on every match result.
pub const MATCHING_VERSION: &str = "2.1.0";

/// Points available per factor.
///
/// The table totals 100, so factor points translate directly into score
/// points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    /// Coverage of the listing's required skills
    pub required_skills: f64,
    /// Overlap with the listing's target majors
    pub majors: f64,
    /// Weekly availability vs the listed hours band
    pub hours: f64,
    /// Work-mode and location compatibility
    pub location: f64,
    /// Coverage of the listing's preferred skills
    pub preferred_skills: f64,
    /// Term/season alignment
    pub term: f64,
}

impl FactorWeights {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.required_skills
            + self.majors
            + self.hours
            + self.location
            + self.preferred_skills
            + self.term
    }
}

/// The production weight table. Required skills dominate, preferred
/// skills count for a third of the required weight.
pub const DEFAULT_WEIGHTS: FactorWeights = FactorWeights {
    required_skills: 30.0,
    majors: 20.0,
    hours: 15.0,
    location: 15.0,
    preferred_skills: 10.0,
    term: 10.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_total_one_hundred() {
        assert!((DEFAULT_WEIGHTS.total() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_required_outweighs_preferred() {
        assert!(DEFAULT_WEIGHTS.required_skills > DEFAULT_WEIGHTS.preferred_skills);
    }

    #[test]
    fn test_every_factor_carries_weight() {
        for weight in [
            DEFAULT_WEIGHTS.required_skills,
            DEFAULT_WEIGHTS.majors,
            DEFAULT_WEIGHTS.hours,
            DEFAULT_WEIGHTS.location,
            DEFAULT_WEIGHTS.preferred_skills,
            DEFAULT_WEIGHTS.term,
        ] {
            assert!(weight > 0.0);
        }
    }
}
