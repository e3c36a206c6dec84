//! List and numeric field canonicalization.

use std::collections::HashSet;

use serde::Deserialize;

use crate::core::listing::HoursBand;

/// A list-like field as callers actually send it: a JSON array, a single
/// (possibly delimited) string, or some other value entirely.
///
/// Wrap in `Option` to accept `null`/absent as well.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Many(Vec<serde_json::Value>),
    One(String),
    Other(serde_json::Value),
}

/// Canonicalize a list-like field into an ordered, deduplicated list.
///
/// Array entries that are not strings are dropped. String entries (and
/// plain string fields) are split on `,`, `;`, and newlines. Every item
/// is trimmed, blanks are removed, and duplicates are collapsed
/// case-insensitively keeping the first occurrence's casing and position.
#[must_use]
pub fn string_list(raw: Option<&RawField>) -> Vec<String> {
    let mut items = Vec::new();
    match raw {
        None | Some(RawField::Other(_)) => {}
        Some(RawField::One(text)) => collect_segments(text, &mut items),
        Some(RawField::Many(values)) => {
            for value in values {
                if let Some(text) = value.as_str() {
                    collect_segments(text, &mut items);
                }
            }
        }
    }
    dedup_case_insensitive(items)
}

fn collect_segments(text: &str, out: &mut Vec<String>) {
    for segment in text.split([',', ';', '\n']) {
        let trimmed = segment.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
}

/// Trim an optional text field, mapping blank to absent.
#[must_use]
pub fn clean_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Drop later duplicates, comparing case-insensitively.
#[must_use]
pub fn dedup_case_insensitive(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}

/// Pull a number out of a JSON value that may be a number or a
/// numeric-ish string like `"15"`, `" 20 hrs "`, or `"$18.50/hr"`.
#[must_use]
pub fn parse_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => leading_number(s),
        _ => None,
    }
}

/// First numeric token in a string, ignoring any prefix or suffix text.
fn leading_number(s: &str) -> Option<f64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    rest[..end].trim_end_matches('.').parse().ok()
}

/// Parse an hours-per-week field into a band.
///
/// Accepts a plain number (`15`), a single numeric string (`"15 hrs"`),
/// an open-ended minimum (`"20+"`), and a range (`"10-20"`, `"10 to 20"`).
/// Reversed range endpoints are reordered.
#[must_use]
pub fn parse_hours_band(value: &serde_json::Value) -> Option<HoursBand> {
    if let Some(n) = value.as_f64() {
        return Some(HoursBand::exact(n));
    }
    let text = value.as_str()?.trim();
    if text.is_empty() {
        return None;
    }

    let normalized = text.replace(" to ", "-").replace('\u{2013}', "-");
    if let Some((low, high)) = normalized.split_once('-') {
        let low = leading_number(low)?;
        let high = leading_number(high)?;
        return Some(HoursBand::range(low.min(high), low.max(high)));
    }
    let n = leading_number(&normalized)?;
    if normalized.contains('+') {
        Some(HoursBand::at_least(n))
    } else {
        Some(HoursBand::exact(n))
    }
}
