use serde::{Deserialize, Serialize};

/// Unique identifier for a skill in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillId(pub String);

impl SkillId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Work arrangement for a listing or a candidate preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Remote,
    Hybrid,
    OnSite,
}

impl std::fmt::Display for WorkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Hybrid => write!(f, "hybrid"),
            Self::OnSite => write!(f, "on-site"),
        }
    }
}

/// Academic season/term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Season containing a calendar month (1-12).
    ///
    /// Fixed quarters: Jun-Aug is summer, Sep-Nov is fall, Dec-Feb is
    /// winter, Mar-May is spring. No hemisphere adjustment.
    #[must_use]
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            3..=5 => Some(Self::Spring),
            6..=8 => Some(Self::Summer),
            9..=11 => Some(Self::Fall),
            12 | 1 | 2 => Some(Self::Winter),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spring => write!(f, "spring"),
            Self::Summer => write!(f, "summer"),
            Self::Fall => write!(f, "fall"),
            Self::Winter => write!(f, "winter"),
        }
    }
}

/// Employer verification tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationTier {
    Free,
    Starter,
    Pro,
}

impl VerificationTier {
    /// Parse a tier string; unknown tiers count as free.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pro" | "professional" | "premium" => Self::Pro,
            "starter" | "basic" | "plus" => Self::Starter,
            _ => Self::Free,
        }
    }

    #[must_use]
    pub fn is_paid(self) -> bool {
        matches!(self, Self::Starter | Self::Pro)
    }
}

impl std::fmt::Display for VerificationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Starter => write!(f, "starter"),
            Self::Pro => write!(f, "pro"),
        }
    }
}

/// A location reduced to its comparable parts: a city (kept as written,
/// for display) and/or a USPS state code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl CanonicalLocation {
    /// Two locations are compatible when they share a city or a state.
    /// Cities are compared under key normalization, so casing and
    /// punctuation differences do not break a match.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        use crate::canon::tags::table_key;
        let same_city = match (&self.city, &other.city) {
            (Some(a), Some(b)) => table_key(a) == table_key(b),
            _ => false,
        };
        let same_state = match (&self.state, &other.state) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        same_city || same_state
    }
}

impl std::fmt::Display for CanonicalLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => write!(f, "{city}, {state}"),
            (Some(city), None) => write!(f, "{city}"),
            (None, Some(state)) => write!(f, "{state}"),
            (None, None) => write!(f, "unspecified"),
        }
    }
}

/// Qualitative band for a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Weak,
    Fair,
    Good,
    Strong,
}

impl MatchBand {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Strong
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Fair
        } else {
            Self::Weak
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_quarters() {
        assert_eq!(Season::from_month(6), Some(Season::Summer));
        assert_eq!(Season::from_month(8), Some(Season::Summer));
        assert_eq!(Season::from_month(9), Some(Season::Fall));
        assert_eq!(Season::from_month(11), Some(Season::Fall));
        assert_eq!(Season::from_month(12), Some(Season::Winter));
        assert_eq!(Season::from_month(2), Some(Season::Winter));
        assert_eq!(Season::from_month(3), Some(Season::Spring));
        assert_eq!(Season::from_month(5), Some(Season::Spring));
    }

    #[test]
    fn test_season_rejects_out_of_range_month() {
        assert_eq!(Season::from_month(0), None);
        assert_eq!(Season::from_month(13), None);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(MatchBand::from_score(100), MatchBand::Strong);
        assert_eq!(MatchBand::from_score(80), MatchBand::Strong);
        assert_eq!(MatchBand::from_score(79), MatchBand::Good);
        assert_eq!(MatchBand::from_score(60), MatchBand::Good);
        assert_eq!(MatchBand::from_score(59), MatchBand::Fair);
        assert_eq!(MatchBand::from_score(40), MatchBand::Fair);
        assert_eq!(MatchBand::from_score(39), MatchBand::Weak);
        assert_eq!(MatchBand::from_score(0), MatchBand::Weak);
    }
}
