//! Skill catalog storage and lookup indexes.
//!
//! The catalog holds every canonical skill together with its slug and
//! known alternate spellings. An embedded catalog is compiled into the
//! binary, but custom catalogs can also be loaded from JSON files or
//! built from the persisted entry/alias tables.
//!
//! ## Lookup tables
//!
//! Resolution consults two tables, in order:
//!
//! 1. **Alias table**: lowercased alias text -> skill (first hit wins)
//! 2. **Slug table**: canonical slug -> skill
//!
//! Both are exposed behind the batched [`SkillStore`] trait so a
//! database-backed implementation can replace the in-memory one without
//! touching the resolver.
//!
//! ## Example
//!
//! ```rust,no_run
//! use match_engine::SkillCatalog;
//! use match_engine::core::types::SkillId;
//!
//! // Load embedded catalog
//! let catalog = SkillCatalog::load_embedded().unwrap();
//!
//! // List all skills
//! for skill in &catalog.skills {
//!     println!("{} ({})", skill.name, skill.id);
//! }
//!
//! // Get a specific skill
//! let react = catalog.get(&SkillId::new("skill-react"));
//! ```
//!
//! ## Custom Catalogs
//!
//! Custom catalogs can be created by exporting and modifying the embedded
//! catalog:
//!
//! ```rust,no_run
//! use match_engine::SkillCatalog;
//! use std::path::Path;
//!
//! // Export to JSON
//! let catalog = SkillCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! // Load from custom file
//! let custom = SkillCatalog::load_from_file(Path::new("my_skills.json")).unwrap();
//! ```
//!
//! [`SkillStore`]: store::SkillStore

pub mod store;
