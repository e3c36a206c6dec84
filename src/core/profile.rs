use serde::{Deserialize, Serialize};

use crate::canon::fields::{parse_number, string_list, RawField};
use crate::canon::tags::{parse_location, parse_month, parse_season, parse_work_mode};
use crate::core::types::{CanonicalLocation, Season, SkillId, WorkMode};

/// A candidate profile record as callers send it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub majors: Option<RawField>,
    #[serde(default)]
    pub skills: Option<RawField>,
    #[serde(default)]
    pub coursework: Option<RawField>,
    #[serde(default)]
    pub start_month: Option<serde_json::Value>,
    #[serde(default)]
    pub weekly_hours: Option<serde_json::Value>,
    #[serde(default)]
    pub preferred_terms: Option<RawField>,
    #[serde(default)]
    pub preferred_locations: Option<RawField>,
    #[serde(default)]
    pub preferred_work_modes: Option<RawField>,
    #[serde(default)]
    pub remote_only: Option<bool>,
}

/// Canonical snapshot of a candidate profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileFeatures {
    pub majors: Vec<String>,

    /// Resolved skill ids from the candidate's profile.
    pub skills: Vec<SkillId>,

    pub coursework: Vec<String>,

    /// Availability start month (1-12), the term-alignment fallback when
    /// no preferred terms are declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_month: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_hours: Option<f64>,

    pub preferred_terms: Vec<Season>,
    pub preferred_locations: Vec<CanonicalLocation>,
    pub preferred_work_modes: Vec<WorkMode>,

    /// Hard constraint: the candidate will not consider non-remote work.
    pub remote_only: bool,
}

impl ProfileFeatures {
    #[must_use]
    pub fn from_raw(raw: RawProfile) -> Self {
        let mut preferred_work_modes: Vec<WorkMode> = string_list(raw.preferred_work_modes.as_ref())
            .iter()
            .filter_map(|entry| parse_work_mode(entry))
            .collect();

        // "Remote" routinely shows up in the locations list; fold it into
        // the work-mode preferences instead of dropping it.
        let mut preferred_locations = Vec::new();
        for entry in string_list(raw.preferred_locations.as_ref()) {
            if let Some(mode) = parse_work_mode(&entry) {
                preferred_work_modes.push(mode);
            } else if let Some(location) = parse_location(&entry) {
                preferred_locations.push(location);
            }
        }
        dedup_modes(&mut preferred_work_modes);

        let mut preferred_terms: Vec<Season> = string_list(raw.preferred_terms.as_ref())
            .iter()
            .filter_map(|entry| parse_season(entry))
            .collect();
        dedup_seasons(&mut preferred_terms);

        Self {
            majors: string_list(raw.majors.as_ref()),
            skills: string_list(raw.skills.as_ref())
                .into_iter()
                .map(SkillId::new)
                .collect(),
            coursework: string_list(raw.coursework.as_ref()),
            start_month: raw.start_month.as_ref().and_then(month_value),
            weekly_hours: raw.weekly_hours.as_ref().and_then(parse_number),
            preferred_terms,
            preferred_locations,
            preferred_work_modes,
            remote_only: raw.remote_only.unwrap_or(false),
        }
    }

    /// Terms the candidate can work: the declared preferences, or the
    /// season around the availability start month when none are declared.
    #[must_use]
    pub fn effective_terms(&self) -> Vec<Season> {
        if !self.preferred_terms.is_empty() {
            return self.preferred_terms.clone();
        }
        self.start_month
            .and_then(Season::from_month)
            .into_iter()
            .collect()
    }
}

fn month_value(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| (1..=12).contains(n)),
        serde_json::Value::String(s) => parse_month(s),
        _ => None,
    }
}

fn dedup_modes(modes: &mut Vec<WorkMode>) {
    let mut seen = std::collections::HashSet::new();
    modes.retain(|mode| seen.insert(*mode));
}

fn dedup_seasons(seasons: &mut Vec<Season>) {
    let mut seen = std::collections::HashSet::new();
    seasons.retain(|season| seen.insert(*season));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(value: serde_json::Value) -> ProfileFeatures {
        let raw: RawProfile = serde_json::from_value(value).expect("raw profile");
        ProfileFeatures::from_raw(raw)
    }

    #[test]
    fn test_from_raw_full_record() {
        let features = profile(json!({
            "majors": "Computer Science; Data Science",
            "skills": ["skill-react", "skill-ts"],
            "coursework": ["Databases"],
            "start_month": "June",
            "weekly_hours": "15 hrs",
            "preferred_terms": ["Summer 2026", "fall"],
            "preferred_locations": ["San Francisco, CA", "Remote"],
            "preferred_work_modes": "hybrid",
            "remote_only": false,
        }));

        assert_eq!(features.majors, vec!["Computer Science", "Data Science"]);
        assert_eq!(features.skills.len(), 2);
        assert_eq!(features.start_month, Some(6));
        assert_eq!(features.weekly_hours, Some(15.0));
        assert_eq!(features.preferred_terms, vec![Season::Summer, Season::Fall]);
        assert_eq!(features.preferred_locations.len(), 1);
        assert_eq!(
            features.preferred_work_modes,
            vec![WorkMode::Hybrid, WorkMode::Remote]
        );
        assert!(!features.remote_only);
    }

    #[test]
    fn test_work_modes_round_trip_through_delimited_string() {
        let from_array = profile(json!({
            "preferred_work_modes": ["remote", "hybrid"],
        }));
        let from_string = profile(json!({
            "preferred_work_modes": "remote, hybrid",
        }));
        assert_eq!(
            from_array.preferred_work_modes,
            from_string.preferred_work_modes
        );
    }

    #[test]
    fn test_effective_terms_prefers_declared() {
        let features = profile(json!({
            "preferred_terms": ["fall"],
            "start_month": 6,
        }));
        assert_eq!(features.effective_terms(), vec![Season::Fall]);
    }

    #[test]
    fn test_effective_terms_falls_back_to_start_month() {
        let features = profile(json!({ "start_month": 7 }));
        assert_eq!(features.effective_terms(), vec![Season::Summer]);
        let features = profile(json!({}));
        assert!(features.effective_terms().is_empty());
    }

    #[test]
    fn test_numeric_start_month_bounds() {
        assert_eq!(profile(json!({ "start_month": 12 })).start_month, Some(12));
        assert_eq!(profile(json!({ "start_month": 0 })).start_month, None);
        assert_eq!(profile(json!({ "start_month": 13 })).start_month, None);
    }
}
