//! Core data types for match scoring and quality audits.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`ListingFeatures`]: Canonical snapshot of a listing's matchable fields
//! - [`ProfileFeatures`]: Canonical snapshot of a candidate profile
//! - [`QualitySignals`]: Canonical employer/listing trust signals
//! - [`SkillId`], [`WorkMode`], [`Season`], [`VerificationTier`]: Identity and tag types
//! - [`MatchBand`]: Qualitative classification of a match score
//!
//! Each `*Features` struct is built exactly once from its `Raw*`
//! counterpart, so the scorers never see uncanonicalized data. Raw
//! records are maximally lenient: every field is optional, list fields
//! accept arrays or delimited strings, and unparseable values degrade to
//! absent rather than erroring.
//!
//! [`ListingFeatures`]: listing::ListingFeatures
//! [`ProfileFeatures`]: profile::ProfileFeatures
//! [`QualitySignals`]: signals::QualitySignals
//! [`SkillId`]: types::SkillId
//! [`WorkMode`]: types::WorkMode
//! [`Season`]: types::Season
//! [`VerificationTier`]: types::VerificationTier
//! [`MatchBand`]: types::MatchBand

pub mod listing;
pub mod profile;
pub mod signals;
pub mod types;
