use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::canon::fields::{clean_text, parse_hours_band, string_list, RawField};
use crate::canon::tags::{parse_location, parse_season, parse_work_mode};
use crate::core::types::{CanonicalLocation, Season, SkillId, WorkMode};

/// Weekly hours commitment advertised on a listing.
///
/// `max = None` means open-ended ("20+ hrs").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoursBand {
    pub min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl HoursBand {
    #[must_use]
    pub fn exact(hours: f64) -> Self {
        Self {
            min: hours,
            max: Some(hours),
        }
    }

    #[must_use]
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    #[must_use]
    pub fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }
}

impl std::fmt::Display for HoursBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{} hrs/week", self.min),
            Some(max) => write!(f, "{}-{} hrs/week", self.min, max),
            None => write!(f, "{}+ hrs/week", self.min),
        }
    }
}

/// A listing record as callers send it. Every field is optional and
/// loosely typed; canonicalization decides what survives.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub majors: Option<RawField>,
    #[serde(default)]
    pub required_skills: Option<RawField>,
    #[serde(default)]
    pub preferred_skills: Option<RawField>,
    #[serde(default)]
    pub hours_per_week: Option<serde_json::Value>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub work_mode: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Canonical, immutable snapshot of the listing fields that matter for
/// match scoring.
#[derive(Debug, Clone, Serialize)]
pub struct ListingFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Target majors, first-occurrence casing kept. Empty means open to
    /// all majors.
    pub majors: Vec<String>,

    /// Required skill ids. Must-have side of the skill overlap factor.
    pub required_skills: Vec<SkillId>,

    /// Preferred skill ids, disjoint from the required set (required
    /// wins when a skill appears in both).
    pub preferred_skills: Vec<SkillId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<HoursBand>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<CanonicalLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_mode: Option<WorkMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<Season>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ListingFeatures {
    #[must_use]
    pub fn from_raw(raw: RawListing) -> Self {
        let required_skills: Vec<SkillId> = string_list(raw.required_skills.as_ref())
            .into_iter()
            .map(SkillId::new)
            .collect();
        let required_set: HashSet<&str> =
            required_skills.iter().map(|id| id.0.as_str()).collect();
        let preferred_skills: Vec<SkillId> = string_list(raw.preferred_skills.as_ref())
            .into_iter()
            .filter(|id| !required_set.contains(id.as_str()))
            .map(SkillId::new)
            .collect();

        Self {
            id: clean_text(raw.id),
            majors: string_list(raw.majors.as_ref()),
            required_skills,
            preferred_skills,
            hours: raw.hours_per_week.as_ref().and_then(parse_hours_band),
            location: raw.location.as_deref().and_then(parse_location),
            work_mode: raw.work_mode.as_deref().and_then(parse_work_mode),
            term: raw.term.as_deref().and_then(parse_season),
            category: clean_text(raw.category),
        }
    }
}
