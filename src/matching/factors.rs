//! Per-factor scoring.
//!
//! Each factor inspects one slice of the listing/profile pair and
//! returns points plus the strings that explain them. The conventions
//! are uniform across factors:
//!
//! - A criterion the listing does not state awards full points silently:
//!   a listing that asks for nothing cannot be unmet.
//! - Profile-side data that is missing (rather than empty-by-choice)
//!   awards half points with a gap, so incomplete profiles trend toward
//!   the middle instead of the extremes.
//! - Partially-met factors produce both a reason (for the earned part)
//!   and a gap (for the missed part).

use crate::core::listing::ListingFeatures;
use crate::core::profile::ProfileFeatures;
use crate::core::types::{SkillId, WorkMode};
use crate::matching::weights::FactorWeights;

/// Credit fraction for factors that cannot be evaluated on the profile side
const UNKNOWN_CREDIT: f64 = 0.5;

/// Hours below the listed minimum by at most this much earn half credit
const HOURS_NEAR_MISS: f64 = 5.0;

/// Share of the location factor carried by work-mode agreement; the rest
/// is geographic
const MODE_SHARE: f64 = 0.5;

/// One factor's contribution to a match score.
#[derive(Debug, Clone)]
pub struct FactorOutcome {
    /// Points awarded, between 0 and `weight`
    pub points: f64,
    /// Points available
    pub weight: f64,
    /// Positive explanation, present when anything was earned
    pub reason: Option<String>,
    /// Unmet or partially-met criterion, present when anything was missed
    pub gap: Option<String>,
}

impl FactorOutcome {
    fn full(weight: f64, reason: Option<String>) -> Self {
        Self {
            points: weight,
            weight,
            reason,
            gap: None,
        }
    }

    fn missed(weight: f64, gap: String) -> Self {
        Self {
            points: 0.0,
            weight,
            reason: None,
            gap: Some(gap),
        }
    }

    fn partial(points: f64, weight: f64, reason: Option<String>, gap: Option<String>) -> Self {
        Self {
            points,
            weight,
            reason,
            gap,
        }
    }

    /// Points this factor failed to earn.
    #[must_use]
    pub fn missed_points(&self) -> f64 {
        self.weight - self.points
    }
}

/// Evaluate every factor. The order here is the tie-break order for
/// reason and gap sorting.
#[must_use]
pub fn evaluate_all(
    listing: &ListingFeatures,
    profile: &ProfileFeatures,
    weights: &FactorWeights,
) -> Vec<FactorOutcome> {
    vec![
        required_skills(listing, profile, weights.required_skills),
        majors(listing, profile, weights.majors),
        hours(listing, profile, weights.hours),
        location(listing, profile, weights.location),
        preferred_skills(listing, profile, weights.preferred_skills),
        term(listing, profile, weights.term),
    ]
}

#[must_use]
pub fn required_skills(
    listing: &ListingFeatures,
    profile: &ProfileFeatures,
    weight: f64,
) -> FactorOutcome {
    skill_overlap(&listing.required_skills, &profile.skills, weight, "required")
}

#[must_use]
pub fn preferred_skills(
    listing: &ListingFeatures,
    profile: &ProfileFeatures,
    weight: f64,
) -> FactorOutcome {
    skill_overlap(
        &listing.preferred_skills,
        &profile.skills,
        weight,
        "preferred",
    )
}

/// Fractional coverage of `wanted` by `offered`.
fn skill_overlap(wanted: &[SkillId], offered: &[SkillId], weight: f64, kind: &str) -> FactorOutcome {
    if wanted.is_empty() {
        return FactorOutcome::full(weight, None);
    }

    let offered: std::collections::HashSet<&str> =
        offered.iter().map(|id| id.0.as_str()).collect();
    let (matched, missing): (Vec<&SkillId>, Vec<&SkillId>) = wanted
        .iter()
        .partition(|id| offered.contains(id.0.as_str()));

    let fraction = count_to_f64(matched.len()) / count_to_f64(wanted.len());
    let points = weight * fraction;
    let reason = if matched.is_empty() {
        None
    } else if missing.is_empty() {
        Some(format!("Has all {} {kind} skills", wanted.len()))
    } else {
        Some(format!(
            "Has {} of {} {kind} skills",
            matched.len(),
            wanted.len()
        ))
    };
    let gap = if missing.is_empty() {
        None
    } else {
        Some(format!("Missing {kind} skills: {}", join_ids(&missing)))
    };
    FactorOutcome::partial(points, weight, reason, gap)
}

#[must_use]
pub fn majors(listing: &ListingFeatures, profile: &ProfileFeatures, weight: f64) -> FactorOutcome {
    if listing.majors.is_empty() {
        return FactorOutcome::full(weight, None);
    }
    if profile.majors.is_empty() {
        return FactorOutcome::partial(
            weight * UNKNOWN_CREDIT,
            weight,
            None,
            Some("No major listed on the profile".to_string()),
        );
    }

    let declared: std::collections::HashSet<String> =
        profile.majors.iter().map(|m| m.to_lowercase()).collect();
    match listing
        .majors
        .iter()
        .find(|major| declared.contains(&major.to_lowercase()))
    {
        Some(major) => FactorOutcome::full(
            weight,
            Some(format!("Major matches the listing's target majors ({major})")),
        ),
        None => FactorOutcome::missed(
            weight,
            format!(
                "Major not in the listing's target majors ({})",
                listing.majors.join(", ")
            ),
        ),
    }
}

#[must_use]
pub fn hours(listing: &ListingFeatures, profile: &ProfileFeatures, weight: f64) -> FactorOutcome {
    let Some(band) = listing.hours else {
        return FactorOutcome::full(weight, None);
    };
    let Some(available) = profile.weekly_hours else {
        return FactorOutcome::partial(
            weight * UNKNOWN_CREDIT,
            weight,
            None,
            Some("Weekly availability not provided".to_string()),
        );
    };

    if available >= band.min {
        FactorOutcome::full(
            weight,
            Some(format!(
                "Weekly availability ({available} hrs) meets the listed {band}"
            )),
        )
    } else if available >= band.min - HOURS_NEAR_MISS {
        FactorOutcome::partial(
            weight * 0.5,
            weight,
            None,
            Some(format!(
                "Weekly availability ({available} hrs) is just under the listed {band}"
            )),
        )
    } else {
        FactorOutcome::missed(
            weight,
            format!("Weekly availability ({available} hrs) falls short of the listed {band}"),
        )
    }
}

/// Work-mode and location compatibility, one factor with two halves.
///
/// The remote-only rule comes first: a candidate who will only work
/// remotely scores zero here against any on-site or hybrid listing, and
/// the gap says so explicitly.
#[must_use]
pub fn location(listing: &ListingFeatures, profile: &ProfileFeatures, weight: f64) -> FactorOutcome {
    if profile.remote_only {
        match listing.work_mode {
            Some(WorkMode::Remote) => {}
            Some(mode) => {
                return FactorOutcome::missed(
                    weight,
                    format!("Candidate is remote-only but the listing is {mode}"),
                );
            }
            None => {
                return FactorOutcome::partial(
                    weight * UNKNOWN_CREDIT,
                    weight,
                    None,
                    Some("Candidate is remote-only and the listing does not state a work mode".to_string()),
                );
            }
        }
    }

    if listing.work_mode == Some(WorkMode::Remote) {
        // No geography to check on a remote listing.
        let reason = (profile.remote_only
            || profile.preferred_work_modes.contains(&WorkMode::Remote))
        .then(|| "Remote listing matches the candidate's remote preference".to_string());
        return FactorOutcome::full(weight, reason);
    }

    let mut reasons = Vec::new();
    let mut gaps = Vec::new();
    let mut points = 0.0;

    // In both halves an empty preference list means "anywhere", not
    // "unknown": preferences are opt-in constraints, so leaving them
    // blank earns full credit silently.

    // Work-mode half
    let mode_weight = weight * MODE_SHARE;
    match listing.work_mode {
        None => points += mode_weight,
        Some(mode) => {
            if profile.preferred_work_modes.is_empty()
                || profile.preferred_work_modes.contains(&mode)
            {
                points += mode_weight;
                if profile.preferred_work_modes.contains(&mode) {
                    reasons.push(format!("Work mode ({mode}) matches the candidate's preference"));
                }
            } else {
                gaps.push(format!(
                    "Work mode is {mode}, candidate prefers {}",
                    join_modes(&profile.preferred_work_modes)
                ));
            }
        }
    }

    // Geographic half
    let geo_weight = weight - mode_weight;
    match &listing.location {
        None => points += geo_weight,
        Some(spot) => {
            if profile.preferred_locations.is_empty() {
                points += geo_weight;
            } else if profile
                .preferred_locations
                .iter()
                .any(|preferred| preferred.matches(spot))
            {
                points += geo_weight;
                reasons.push(format!(
                    "Location ({spot}) is among the candidate's preferred locations"
                ));
            } else {
                gaps.push(format!(
                    "Location ({spot}) is not among the candidate's preferred locations"
                ));
            }
        }
    }

    FactorOutcome::partial(
        points,
        weight,
        non_empty_join(&reasons),
        non_empty_join(&gaps),
    )
}

#[must_use]
pub fn term(listing: &ListingFeatures, profile: &ProfileFeatures, weight: f64) -> FactorOutcome {
    let Some(season) = listing.term else {
        return FactorOutcome::full(weight, None);
    };
    let candidate_terms = profile.effective_terms();
    if candidate_terms.is_empty() {
        return FactorOutcome::partial(
            weight * UNKNOWN_CREDIT,
            weight,
            None,
            Some("No preferred terms or start month on the profile".to_string()),
        );
    }

    if candidate_terms.contains(&season) {
        FactorOutcome::full(weight, Some(format!("Available for the {season} term")))
    } else {
        FactorOutcome::missed(
            weight,
            format!(
                "Listing runs in {season}, candidate's terms: {}",
                candidate_terms
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        )
    }
}

/// Helper function to convert usize count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

fn join_ids(ids: &[&SkillId]) -> String {
    ids.iter()
        .map(|id| id.0.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_modes(modes: &[WorkMode]) -> String {
    modes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_empty_join(parts: &[String]) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}
