use serde::{Deserialize, Serialize};

use crate::core::listing::ListingFeatures;
use crate::core::profile::ProfileFeatures;
use crate::core::types::MatchBand;
use crate::matching::factors::{self, FactorOutcome};
use crate::matching::weights::{FactorWeights, DEFAULT_WEIGHTS, MATCHING_VERSION};

/// A scored listing/profile pair, in the shape callers persist.
///
/// `reasons` are ordered by descending contribution, `gaps` by
/// descending missed points, so the first entry of each list is always
/// the headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "match_score")]
    pub score: u8,

    #[serde(rename = "match_reasons")]
    pub reasons: Vec<String>,

    #[serde(rename = "match_gaps")]
    pub gaps: Vec<String>,

    #[serde(rename = "matching_version")]
    pub version: String,
}

impl MatchResult {
    /// Qualitative band for this score.
    #[must_use]
    pub fn band(&self) -> MatchBand {
        MatchBand::from_score(self.score)
    }
}

/// Scores listing/profile pairs against the pinned weight table.
///
/// Scoring is a deterministic pure function of the two feature structs:
/// no catalog access, no clock, no randomness. The same pair always
/// produces identical results under one `MATCHING_VERSION`.
#[derive(Debug)]
pub struct MatchScorer {
    weights: FactorWeights,
}

impl MatchScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }

    #[must_use]
    pub fn score(&self, listing: &ListingFeatures, profile: &ProfileFeatures) -> MatchResult {
        let outcomes = factors::evaluate_all(listing, profile, &self.weights);

        let earned: f64 = outcomes.iter().map(|o| o.points).sum();
        let available: f64 = outcomes.iter().map(|o| o.weight).sum();
        let score = if available > 0.0 {
            clamp_score(earned / available * 100.0)
        } else {
            0
        };

        MatchResult {
            score,
            reasons: ordered_reasons(&outcomes),
            gaps: ordered_gaps(&outcomes),
            version: MATCHING_VERSION.to_string(),
        }
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Reasons sorted by contribution, largest first. The sort is stable, so
/// ties keep the factor declaration order.
fn ordered_reasons(outcomes: &[FactorOutcome]) -> Vec<String> {
    let mut entries: Vec<(f64, &str)> = outcomes
        .iter()
        .filter_map(|o| o.reason.as_deref().map(|r| (o.points, r)))
        .collect();
    entries.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    entries.into_iter().map(|(_, r)| r.to_string()).collect()
}

/// Gaps sorted by missed points, largest first.
fn ordered_gaps(outcomes: &[FactorOutcome]) -> Vec<String> {
    let mut entries: Vec<(f64, &str)> = outcomes
        .iter()
        .filter_map(|o| o.gap.as_deref().map(|g| (o.missed_points(), g)))
        .collect();
    entries.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    entries.into_iter().map(|(_, g)| g.to_string()).collect()
}

/// Round and clamp raw points into the 0-100 contract range.
#[inline]
fn clamp_score(points: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        points.round().clamp(0.0, 100.0) as u8
    }
}
