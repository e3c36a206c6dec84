//! # match-engine
//!
//! The scoring and canonicalization core of an internship marketplace.
//!
//! Listings and candidate profiles arrive as loosely-typed records from
//! several producers (web forms, imports, partner feeds). This library
//! normalizes them once, at the boundary, then computes deterministic,
//! versioned scores with human-readable explanations:
//!
//! - **Match scoring**: how well a listing fits a candidate, as a 0-100
//!   score with ordered reasons and gaps
//! - **Skill resolution**: free-text skill labels to canonical catalog
//!   ids, via alias and slug lookup in two batched reads
//! - **Quality auditing**: a listing trust score with integrity flags
//!   from employer signals and cross-field consistency
//!
//! All three are pure transforms: identical inputs always produce
//! identical outputs under one version tag, so stored results can be
//! invalidated by comparing tags instead of recomputing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use match_engine::core::listing::{ListingFeatures, RawListing};
//! use match_engine::core::profile::{ProfileFeatures, RawProfile};
//! use match_engine::MatchScorer;
//!
//! // Canonicalize raw records once, at the boundary
//! let listing = ListingFeatures::from_raw(RawListing::default());
//! let profile = ProfileFeatures::from_raw(RawProfile::default());
//!
//! // Score the pair
//! let result = MatchScorer::new().score(&listing, &profile);
//!
//! println!("{}/100 ({:?})", result.score, result.band());
//! for gap in &result.gaps {
//!     println!("gap: {gap}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`canon`]: Canonicalization of raw fields, tags, and hosts
//! - [`core`]: Canonical feature types for listings, profiles, signals
//! - [`catalog`]: Skill catalog storage and batched lookup
//! - [`resolver`]: Free-text skill label resolution
//! - [`matching`]: Match scoring engine and weight table
//! - [`quality`]: Listing quality auditing
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON API server

pub mod canon;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod quality;
pub mod resolver;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::catalog::store::{CatalogSkill, SkillCatalog, SkillStore};
pub use crate::core::listing::ListingFeatures;
pub use crate::core::profile::ProfileFeatures;
pub use crate::core::signals::QualitySignals;
pub use crate::core::types::*;
pub use crate::matching::engine::{MatchResult, MatchScorer};
pub use crate::quality::scorer::QualityReport;
pub use crate::resolver::engine::{ResolveError, SkillResolution, SkillResolver};
