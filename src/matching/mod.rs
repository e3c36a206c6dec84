//! Listing/profile match scoring.
//!
//! This module provides the core scoring functionality:
//!
//! - [`MatchScorer`]: Main entry point for scoring a listing/profile pair
//! - [`MatchResult`]: Score, ordered reasons, ordered gaps, version tag
//! - [`FactorWeights`]: The pinned weight table behind every score
//!
//! ## Scoring
//!
//! Six factors contribute, each worth a fixed number of points:
//!
//! | Factor            | Points | Rule |
//! |-------------------|--------|------|
//! | Required skills   | 30     | fraction of the listing's required set covered |
//! | Majors            | 20     | any overlap with the target majors earns full credit |
//! | Hours             | 15     | availability vs the listed band, half credit within 5 hrs |
//! | Work mode/location| 15     | remote-only vs non-remote listing is a hard miss |
//! | Preferred skills  | 10     | fraction of the preferred set covered |
//! | Term alignment    | 10     | declared terms, else the season of the start month |
//!
//! The final score is the earned fraction of 100, rounded and clamped.
//! Reasons and gaps are ordered by how much each factor contributed or
//! missed, so downstream surfaces can truncate the lists and keep the
//! headline.
//!
//! ## Example
//!
//! ```rust,no_run
//! use match_engine::core::listing::{ListingFeatures, RawListing};
//! use match_engine::core::profile::{ProfileFeatures, RawProfile};
//! use match_engine::MatchScorer;
//!
//! let listing = ListingFeatures::from_raw(RawListing::default());
//! let profile = ProfileFeatures::from_raw(RawProfile::default());
//!
//! let result = MatchScorer::new().score(&listing, &profile);
//! println!("{} ({:?})", result.score, result.band());
//! for gap in &result.gaps {
//!     println!("gap: {gap}");
//! }
//! ```
//!
//! [`MatchScorer`]: engine::MatchScorer
//! [`MatchResult`]: engine::MatchResult
//! [`FactorWeights`]: weights::FactorWeights

pub mod engine;
pub mod factors;
pub mod weights;
