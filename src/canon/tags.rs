//! Enum-string canonicalization via static synonym tables.
//!
//! Marketplace forms collect work modes, terms, and locations as free
//! text, so each canonical tag is reachable from every spelling seen in
//! production data. Lookup keys are normalized first (lowercase,
//! punctuation collapsed to spaces), which is why e.g. `"On-Site"`,
//! `"on site"`, and `"ON_SITE"` all land on the same table entry.
//! Unrecognized input yields `None`, never an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::types::{CanonicalLocation, Season, WorkMode};

/// (canonical mode, recognized spellings after key normalization)
const WORK_MODE_SYNONYMS: &[(WorkMode, &[&str])] = &[
    (
        WorkMode::Remote,
        &[
            "remote",
            "remote only",
            "fully remote",
            "full remote",
            "100 remote",
            "work from home",
            "wfh",
            "virtual",
            "telecommute",
        ],
    ),
    (
        WorkMode::Hybrid,
        &[
            "hybrid",
            "flexible",
            "flex",
            "partially remote",
            "partial remote",
            "remote friendly",
            "remote ok",
            "remote optional",
            "mixed",
        ],
    ),
    (
        WorkMode::OnSite,
        &[
            "onsite",
            "on site",
            "in person",
            "in office",
            "on location",
            "office",
            "no remote",
        ],
    ),
];

static WORK_MODE_TABLE: LazyLock<HashMap<&'static str, WorkMode>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for (mode, spellings) in WORK_MODE_SYNONYMS {
        for spelling in *spellings {
            table.insert(*spelling, *mode);
        }
    }
    table
});

const SEASON_SYNONYMS: &[(Season, &[&str])] = &[
    (Season::Spring, &["spring"]),
    (Season::Summer, &["summer"]),
    (Season::Fall, &["fall", "autumn"]),
    (Season::Winter, &["winter", "j term", "jterm", "january term"]),
];

static SEASON_TABLE: LazyLock<HashMap<&'static str, Season>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for (season, spellings) in SEASON_SYNONYMS {
        for spelling in *spellings {
            table.insert(*spelling, *season);
        }
    }
    table
});

/// US states plus DC and PR, full name to USPS code. Codes themselves are
/// also valid lookup input.
const STATES: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
    ("district of columbia", "DC"),
    ("washington dc", "DC"),
    ("puerto rico", "PR"),
];

static STATE_TABLE: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for (name, code) in STATES {
        table.insert((*name).to_string(), *code);
        table.insert(code.to_lowercase(), *code);
    }
    table
});

/// Normalize free text into a table lookup key: lowercase, every
/// non-alphanumeric run collapsed to a single space, trimmed.
#[must_use]
pub fn table_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.chars() {
        if c.is_alphanumeric() {
            if pending_space && !key.is_empty() {
                key.push(' ');
            }
            pending_space = false;
            key.extend(c.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    key
}

/// Canonicalize a work-mode string.
#[must_use]
pub fn parse_work_mode(raw: &str) -> Option<WorkMode> {
    WORK_MODE_TABLE.get(table_key(raw).as_str()).copied()
}

/// Canonicalize a season/term label.
///
/// Labels often embed a year ("Summer 2026") or a qualifier ("Fall
/// semester"), so an exact table miss falls back to scanning the label's
/// words for a season token.
#[must_use]
pub fn parse_season(raw: &str) -> Option<Season> {
    let key = table_key(raw);
    if let Some(season) = SEASON_TABLE.get(key.as_str()) {
        return Some(*season);
    }
    key.split(' ')
        .find_map(|word| SEASON_TABLE.get(word).copied())
}

/// Parse a month given as a name, a three-letter abbreviation, or a
/// numeral 1-12.
#[must_use]
pub fn parse_month(raw: &str) -> Option<u32> {
    let key = table_key(raw);
    if let Ok(n) = key.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    match key.as_str() {
        "january" | "jan" => Some(1),
        "february" | "feb" => Some(2),
        "march" | "mar" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sept" | "sep" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => None,
    }
}

/// Canonicalize a state given as a full name or an existing USPS code.
#[must_use]
pub fn state_code(raw: &str) -> Option<&'static str> {
    STATE_TABLE.get(&table_key(raw)).copied()
}

/// Split a location string into comparable parts.
///
/// Handles `"San Francisco, CA"`, a bare state (`"California"`), and a
/// bare city. Trailing country segments like `"USA"` are ignored.
#[must_use]
pub fn parse_location(raw: &str) -> Option<CanonicalLocation> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(code) = state_code(trimmed) {
        return Some(CanonicalLocation {
            city: None,
            state: Some(code.to_string()),
        });
    }

    let segments: Vec<&str> = trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && !is_country_noise(s))
        .collect();
    // City keeps its original casing; it shows up verbatim in reason
    // and gap strings, and comparison normalizes on its own.
    let city = segments
        .first()
        .filter(|s| !table_key(s).is_empty())
        .map(|s| (*s).to_string());
    let state = segments
        .iter()
        .skip(1)
        .rev()
        .find_map(|s| state_code(s))
        .map(str::to_string);
    if city.is_none() && state.is_none() {
        return None;
    }
    Some(CanonicalLocation { city, state })
}

fn is_country_noise(segment: &str) -> bool {
    matches!(
        table_key(segment).as_str(),
        "usa" | "us" | "united states" | "united states of america"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_mode_synonyms() {
        assert_eq!(parse_work_mode("Remote"), Some(WorkMode::Remote));
        assert_eq!(parse_work_mode(" WFH "), Some(WorkMode::Remote));
        assert_eq!(parse_work_mode("100% Remote"), Some(WorkMode::Remote));
        assert_eq!(parse_work_mode("On-Site"), Some(WorkMode::OnSite));
        assert_eq!(parse_work_mode("IN_PERSON"), Some(WorkMode::OnSite));
        assert_eq!(parse_work_mode("remote-friendly"), Some(WorkMode::Hybrid));
        assert_eq!(parse_work_mode("underwater"), None);
    }

    #[test]
    fn test_season_labels() {
        assert_eq!(parse_season("Summer"), Some(Season::Summer));
        assert_eq!(parse_season("Summer 2026"), Some(Season::Summer));
        assert_eq!(parse_season("Fall Semester"), Some(Season::Fall));
        assert_eq!(parse_season("autumn"), Some(Season::Fall));
        assert_eq!(parse_season("J-Term"), Some(Season::Winter));
        assert_eq!(parse_season("rolling"), None);
    }

    #[test]
    fn test_month_parsing() {
        assert_eq!(parse_month("June"), Some(6));
        assert_eq!(parse_month("sept"), Some(9));
        assert_eq!(parse_month("12"), Some(12));
        assert_eq!(parse_month("0"), None);
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("soon"), None);
    }

    #[test]
    fn test_state_codes() {
        assert_eq!(state_code("California"), Some("CA"));
        assert_eq!(state_code("ca"), Some("CA"));
        assert_eq!(state_code("New  York"), Some("NY"));
        assert_eq!(state_code("Washington DC"), Some("DC"));
        assert_eq!(state_code("Ontario"), None);
    }

    #[test]
    fn test_location_city_and_state() {
        let loc = parse_location("San Francisco, CA").unwrap();
        assert_eq!(loc.city.as_deref(), Some("San Francisco"));
        assert_eq!(loc.state.as_deref(), Some("CA"));
    }

    #[test]
    fn test_location_display_keeps_casing() {
        let loc = parse_location("St. Paul, Minnesota").unwrap();
        assert_eq!(loc.to_string(), "St. Paul, MN");
    }

    #[test]
    fn test_location_bare_state() {
        let loc = parse_location("California").unwrap();
        assert_eq!(loc.city, None);
        assert_eq!(loc.state.as_deref(), Some("CA"));
    }

    #[test]
    fn test_location_ignores_country_suffix() {
        let loc = parse_location("Boston, MA, USA").unwrap();
        assert_eq!(loc.city.as_deref(), Some("Boston"));
        assert_eq!(loc.state.as_deref(), Some("MA"));
    }

    #[test]
    fn test_location_matching() {
        let sf = parse_location("San Francisco, CA").unwrap();
        let state_only = parse_location("California").unwrap();
        let austin = parse_location("Austin, TX").unwrap();
        assert!(sf.matches(&state_only));
        assert!(!sf.matches(&austin));
    }

    #[test]
    fn test_location_matching_ignores_city_casing() {
        let a = parse_location("SAN FRANCISCO").unwrap();
        let b = parse_location("San Francisco, CA").unwrap();
        assert!(a.matches(&b));
    }

    #[test]
    fn test_location_empty_input() {
        assert_eq!(parse_location("   "), None);
        assert_eq!(parse_location(", ,"), None);
    }
}
