//! Free-text skill label resolution.
//!
//! Turns messy labels ("React.js", " REACT ") into canonical catalog
//! ids, or reports them as unknown:
//!
//! - [`SkillResolver`]: Main entry point for resolving label batches
//! - [`SkillResolution`]: Resolved ids plus unresolved original labels
//! - [`slug`]: The key forms a label is looked up under
//!
//! ## Resolution order
//!
//! For each label, up to three candidates are generated (slug form,
//! compact form, raw lowercase form). The alias table is consulted
//! first, first candidate hit winning; the slug-form candidate then
//! falls back to the canonical slug table. Labels with no hit surface in
//! their original spelling so callers can prompt for corrections.
//!
//! The store is read exactly twice per call - one batched alias lookup
//! and one batched slug lookup over the distinct candidates of the whole
//! input - and the two reads run concurrently.
//!
//! ## Example
//!
//! ```rust,no_run
//! use match_engine::{SkillCatalog, SkillResolver};
//!
//! async fn resolve_some() {
//!     let catalog = SkillCatalog::load_embedded().unwrap();
//!     let resolver = SkillResolver::new(&catalog);
//!
//!     let labels = vec!["React.js".to_string(), "basket weaving".to_string()];
//!     let resolution = resolver.resolve(&labels).await.unwrap();
//!
//!     println!("resolved: {:?}", resolution.skill_ids);
//!     println!("unknown:  {:?}", resolution.unknown);
//! }
//! ```
//!
//! [`SkillResolver`]: engine::SkillResolver
//! [`SkillResolution`]: engine::SkillResolution

pub mod engine;
pub mod slug;
