use serde::{Deserialize, Serialize};

use crate::canon::fields::clean_text;
use crate::core::types::VerificationTier;

/// Overview text shorter than this is treated as absent.
const MIN_OVERVIEW_CHARS: usize = 40;

/// Employer and listing signals as callers send them for a quality audit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQualitySignals {
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub has_logo: Option<bool>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub pay: Option<serde_json::Value>,
    #[serde(default)]
    pub hours_per_week: Option<serde_json::Value>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub external_apply_url: Option<String>,
    #[serde(default)]
    pub recent_post_count: Option<u32>,
    #[serde(default)]
    pub near_duplicate_count: Option<u32>,
}

/// Canonical quality-audit input.
///
/// Presence booleans are decided here, once; the scorer only applies
/// deltas. Website and apply URL stay textual because the scorer
/// compares their normalized hosts.
#[derive(Debug, Clone, Serialize)]
pub struct QualitySignals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub has_overview: bool,
    pub has_logo: bool,
    pub tier: VerificationTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    pub has_pay: bool,
    pub has_hours: bool,
    pub has_location: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_apply_url: Option<String>,
    pub recent_post_count: u32,
    pub near_duplicate_count: u32,
}

impl QualitySignals {
    #[must_use]
    pub fn from_raw(raw: RawQualitySignals) -> Self {
        let has_overview = raw
            .overview
            .as_deref()
            .is_some_and(|text| text.trim().chars().count() >= MIN_OVERVIEW_CHARS);

        Self {
            website: clean_text(raw.website),
            has_overview,
            has_logo: raw.has_logo.unwrap_or(false),
            tier: raw
                .tier
                .as_deref()
                .map_or(VerificationTier::Free, VerificationTier::parse),
            contact_email: clean_text(raw.contact_email),
            has_pay: raw.pay.as_ref().is_some_and(value_present),
            has_hours: raw.hours_per_week.as_ref().is_some_and(value_present),
            has_location: clean_text(raw.location).is_some(),
            external_apply_url: clean_text(raw.external_apply_url),
            recent_post_count: raw.recent_post_count.unwrap_or(0),
            near_duplicate_count: raw.near_duplicate_count.unwrap_or(0),
        }
    }
}

/// A filled-in field: a number, or a non-blank string.
fn value_present(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Number(_) => true,
        serde_json::Value::String(s) => !s.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signals(value: serde_json::Value) -> QualitySignals {
        let raw: RawQualitySignals = serde_json::from_value(value).expect("raw signals");
        QualitySignals::from_raw(raw)
    }

    #[test]
    fn test_overview_needs_substance() {
        let short = signals(json!({ "overview": "We are a startup." }));
        assert!(!short.has_overview);
        let real = signals(json!({
            "overview": "We build inventory tooling for independent grocers across the US midwest.",
        }));
        assert!(real.has_overview);
    }

    #[test]
    fn test_tier_parsing_defaults_to_free() {
        assert_eq!(signals(json!({})).tier, VerificationTier::Free);
        assert_eq!(signals(json!({ "tier": "PRO" })).tier, VerificationTier::Pro);
        assert_eq!(
            signals(json!({ "tier": "starter" })).tier,
            VerificationTier::Starter
        );
        assert_eq!(
            signals(json!({ "tier": "mystery" })).tier,
            VerificationTier::Free
        );
    }

    #[test]
    fn test_pay_presence_accepts_text_and_numbers() {
        assert!(signals(json!({ "pay": 22 })).has_pay);
        assert!(signals(json!({ "pay": "$18-22/hr" })).has_pay);
        assert!(!signals(json!({ "pay": "  " })).has_pay);
        assert!(!signals(json!({ "pay": null })).has_pay);
        assert!(!signals(json!({})).has_pay);
    }

    #[test]
    fn test_counts_default_to_zero() {
        let s = signals(json!({}));
        assert_eq!(s.recent_post_count, 0);
        assert_eq!(s.near_duplicate_count, 0);
    }
}
