use serde::{Deserialize, Serialize};

use crate::canon::host::{email_domain, host_matches, normalize_host};
use crate::core::signals::QualitySignals;
use crate::core::types::VerificationTier;

/// Version tag stamped on every quality report.
pub const QUALITY_VERSION: &str = "1.3.0";

/// Every audit starts here; deltas move it in both directions.
pub const BASELINE: i32 = 50;

// Completeness and verification bonuses
pub const WEBSITE_BONUS: i32 = 8;
pub const OVERVIEW_BONUS: i32 = 6;
pub const LOGO_BONUS: i32 = 4;
pub const STARTER_TIER_BONUS: i32 = 5;
pub const PRO_TIER_BONUS: i32 = 10;
pub const EMAIL_DOMAIN_BONUS: i32 = 7;
pub const PAY_BONUS: i32 = 6;
pub const HOURS_BONUS: i32 = 4;
pub const LOCATION_BONUS: i32 = 4;

// Integrity penalties
pub const POSTING_VOLUME_PENALTY: i32 = 10;
pub const DUPLICATE_PENALTY: i32 = 8;
pub const DOMAIN_MISMATCH_PENALTY: i32 = 12;

/// Posting more than this many listings in the rolling window reads as
/// volume spam
pub const POSTING_VOLUME_THRESHOLD: u32 = 10;

/// Near-duplicate count at which the duplicate penalty applies
pub const DUPLICATE_THRESHOLD: u32 = 2;

/// Outcome of a listing quality audit.
///
/// Flags are appended in a fixed evaluation order (volume, duplicates,
/// domain mismatch, missing pay on a paid tier) so repeated audits of
/// the same signals produce identical reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    #[serde(rename = "quality_score")]
    pub score: u8,

    pub flags: Vec<String>,

    /// The external apply URL points at an unrelated domain.
    pub external_domain_mismatch: bool,

    #[serde(rename = "quality_version")]
    pub version: String,
}

impl QualityReport {
    /// Audit one listing's trust signals.
    #[must_use]
    pub fn audit(signals: &QualitySignals) -> Self {
        let mut score = BASELINE;
        let mut flags = Vec::new();

        if signals.website.is_some() {
            score += WEBSITE_BONUS;
        }
        if signals.has_overview {
            score += OVERVIEW_BONUS;
        }
        if signals.has_logo {
            score += LOGO_BONUS;
        }
        score += match signals.tier {
            VerificationTier::Free => 0,
            VerificationTier::Starter => STARTER_TIER_BONUS,
            VerificationTier::Pro => PRO_TIER_BONUS,
        };
        if email_matches_website(signals) {
            score += EMAIL_DOMAIN_BONUS;
        }
        if signals.has_pay {
            score += PAY_BONUS;
        }
        if signals.has_hours {
            score += HOURS_BONUS;
        }
        if signals.has_location {
            score += LOCATION_BONUS;
        }

        if signals.recent_post_count > POSTING_VOLUME_THRESHOLD {
            score -= POSTING_VOLUME_PENALTY;
            flags.push(format!(
                "High posting volume: {} listings in the recent window",
                signals.recent_post_count
            ));
        }
        if signals.near_duplicate_count >= DUPLICATE_THRESHOLD {
            score -= DUPLICATE_PENALTY;
            flags.push(format!(
                "Near-duplicate listings detected: {} share this description",
                signals.near_duplicate_count
            ));
        }

        let external_domain_mismatch = apply_url_mismatch(signals);
        if external_domain_mismatch {
            score -= DOMAIN_MISMATCH_PENALTY;
            let apply_host = signals
                .external_apply_url
                .as_deref()
                .map(normalize_host)
                .unwrap_or_default();
            flags.push(format!(
                "External apply URL points to {apply_host}, not the employer website"
            ));
        }

        // Informational only: the missing pay bonus is already priced in,
        // so the flag itself moves nothing.
        if signals.tier.is_paid() && !signals.has_pay {
            flags.push("Paid tier but no pay information provided".to_string());
        }

        Self {
            score: clamp_score(score),
            flags,
            external_domain_mismatch,
            version: QUALITY_VERSION.to_string(),
        }
    }
}

/// Contact email domain matches the website host, exactly or as a
/// subdomain of it.
fn email_matches_website(signals: &QualitySignals) -> bool {
    match (&signals.contact_email, &signals.website) {
        (Some(email), Some(site)) => {
            let domain = email_domain(email);
            !domain.is_empty() && host_matches(&domain, site)
        }
        _ => false,
    }
}

/// Mismatch requires both hosts to resolve: a malformed URL normalizes
/// to an empty host and cannot be declared unrelated.
fn apply_url_mismatch(signals: &QualitySignals) -> bool {
    match (&signals.external_apply_url, &signals.website) {
        (Some(apply), Some(site)) => {
            let apply_host = normalize_host(apply);
            let site_host = normalize_host(site);
            !apply_host.is_empty() && !site_host.is_empty() && !host_matches(apply, site)
        }
        _ => false,
    }
}

#[inline]
fn clamp_score(score: i32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        score.clamp(0, 100) as u8
    }
}
