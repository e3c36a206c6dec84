//! Canonicalization of raw marketplace fields.
//!
//! Listing and profile records reach the engine from several producers
//! (web forms, CSV imports, partner feeds), so the same logical field
//! arrives in different physical shapes. Everything is normalized here
//! once, at the boundary, and the scorers only ever see canonical values.
//!
//! | Field kind        | Accepted shapes                      | Canonical form |
//! |-------------------|--------------------------------------|----------------|
//! | List fields       | JSON array, delimited string, null   | ordered deduplicated `Vec<String>` |
//! | Enum strings      | free-text synonyms                   | [`WorkMode`], [`Season`], USPS state code |
//! | Numeric-ish       | JSON number, "15", "10-20 hrs", "20+"| `f64` / hours band |
//! | URLs and emails   | full URL, bare domain, mailbox       | lowercase host, `www.` stripped |
//!
//! Canonicalization never fails: unrecognized input becomes `None`, an
//! empty list, or an empty host, and the scorers treat those as neutral.
//!
//! [`WorkMode`]: crate::core::types::WorkMode
//! [`Season`]: crate::core::types::Season

pub mod fields;
pub mod host;
pub mod tags;
