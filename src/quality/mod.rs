//! Listing quality auditing.
//!
//! Produces a trust score for a single listing from employer
//! completeness and integrity signals, independent of any candidate:
//!
//! - [`QualityReport`]: Score 0-100, ordered flags, domain-mismatch bit
//! - [`scorer`]: The pinned baseline, bonus, and penalty constants
//!
//! Scores start from a neutral baseline and move by fixed deltas, so an
//! employer can always tell which missing signal costs them standing.
//! Penalties cover volume spam, near-duplicate listings, and apply URLs
//! that leave the employer's own domain.
//!
//! [`QualityReport`]: scorer::QualityReport

pub mod scorer;
