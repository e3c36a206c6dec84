use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::types::SkillId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Conflicting catalog entry: {0}")]
    Conflict(String),
}

/// A lookup backend failure, distinct from "no hit".
///
/// The in-memory catalog never produces one, but network-backed stores
/// do, and resolution surfaces it to the caller instead of misfiling
/// labels as unknown.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Skill lookup backend unavailable: {0}")]
    Unavailable(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub skills: Vec<CatalogSkill>,
}

/// A canonical skill with its lookup aliases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSkill {
    pub id: SkillId,

    /// Canonical slug, unique across the catalog
    pub slug: String,

    /// Human-readable display name
    pub name: String,

    /// Known alternate spellings, unique across the catalog
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

/// Batched lookups over the skill tables.
///
/// Both methods take every distinct candidate for a whole request and
/// return only the hits, so one resolution pass costs at most two reads
/// no matter how many labels it covers. The two tables are independent,
/// which lets callers issue both reads concurrently.
#[async_trait]
pub trait SkillStore: Send + Sync {
    /// Alias text -> skill id, for each candidate with an alias row.
    async fn aliases_by_text(
        &self,
        candidates: &[String],
    ) -> Result<HashMap<String, SkillId>, StoreError>;

    /// Canonical slug -> skill id, for each slug with a catalog row.
    async fn skills_by_slug(
        &self,
        slugs: &[String],
    ) -> Result<HashMap<String, SkillId>, StoreError>;
}

/// The in-memory skill catalog with lookup indexes
#[derive(Debug)]
pub struct SkillCatalog {
    /// All known skills
    pub skills: Vec<CatalogSkill>,

    /// Index: skill ID -> index in skills vec
    id_to_index: HashMap<SkillId, usize>,

    /// Index: lowercased alias text -> index in skills vec
    alias_to_skill: HashMap<String, usize>,

    /// Index: slug -> index in skills vec
    /// Separate from alias_to_skill because resolution checks aliases first
    slug_to_skill: HashMap<String, usize>,
}

impl SkillCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            skills: Vec::new(),
            id_to_index: HashMap::new(),
            alias_to_skill: HashMap::new(),
            slug_to_skill: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/skills.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            eprintln!(
                "Warning: Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION, data.version
            );
        }

        let mut catalog = Self::new();
        for skill in data.skills {
            catalog.add_skill(skill)?;
        }

        Ok(catalog)
    }

    /// Build a catalog from the two persisted tables: skill rows and
    /// (alias text, skill id) rows.
    pub fn from_rows(
        entries: Vec<CatalogSkill>,
        alias_rows: Vec<(String, SkillId)>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.add_skill(entry)?;
        }
        for (alias, id) in alias_rows {
            catalog.add_alias(alias, &id)?;
        }
        Ok(catalog)
    }

    /// Add a skill to the catalog.
    ///
    /// Rejects duplicate ids, slugs, and aliases: the lookup tables carry
    /// unique constraints and a silent overwrite here would change which
    /// skill a label resolves to.
    pub fn add_skill(&mut self, skill: CatalogSkill) -> Result<(), CatalogError> {
        let index = self.skills.len();

        if self.id_to_index.contains_key(&skill.id) {
            return Err(CatalogError::Conflict(format!(
                "duplicate skill id '{}'",
                skill.id
            )));
        }
        let slug = skill.slug.trim().to_lowercase();
        if slug.is_empty() {
            return Err(CatalogError::Conflict(format!(
                "skill '{}' has an empty slug",
                skill.id
            )));
        }
        if self.slug_to_skill.contains_key(&slug) {
            return Err(CatalogError::Conflict(format!(
                "duplicate slug '{slug}'"
            )));
        }

        self.id_to_index.insert(skill.id.clone(), index);
        self.slug_to_skill.insert(slug, index);
        for alias in &skill.aliases {
            insert_alias(&mut self.alias_to_skill, alias, index)?;
        }
        self.skills.push(skill);
        Ok(())
    }

    /// Attach an alias row to an already-loaded skill
    pub fn add_alias(&mut self, alias: String, id: &SkillId) -> Result<(), CatalogError> {
        let Some(&index) = self.id_to_index.get(id) else {
            return Err(CatalogError::Conflict(format!(
                "alias '{alias}' references unknown skill id '{id}'"
            )));
        };
        insert_alias(&mut self.alias_to_skill, &alias, index)?;
        self.skills[index].aliases.push(alias);
        Ok(())
    }

    /// Get a skill by ID
    pub fn get(&self, id: &SkillId) -> Option<&CatalogSkill> {
        self.id_to_index.get(id).map(|&idx| &self.skills[idx])
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            skills: self.skills.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of skills in catalog
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

fn insert_alias(
    table: &mut HashMap<String, usize>,
    alias: &str,
    index: usize,
) -> Result<(), CatalogError> {
    let key = alias.trim().to_lowercase();
    if key.is_empty() {
        return Err(CatalogError::Conflict("empty alias text".to_string()));
    }
    if table.insert(key, index).is_some() {
        return Err(CatalogError::Conflict(format!(
            "duplicate alias '{alias}'"
        )));
    }
    Ok(())
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SkillStore for SkillCatalog {
    async fn aliases_by_text(
        &self,
        candidates: &[String],
    ) -> Result<HashMap<String, SkillId>, StoreError> {
        Ok(candidates
            .iter()
            .filter_map(|candidate| {
                self.alias_to_skill
                    .get(&candidate.to_lowercase())
                    .map(|&idx| (candidate.clone(), self.skills[idx].id.clone()))
            })
            .collect())
    }

    async fn skills_by_slug(
        &self,
        slugs: &[String],
    ) -> Result<HashMap<String, SkillId>, StoreError> {
        Ok(slugs
            .iter()
            .filter_map(|slug| {
                self.slug_to_skill
                    .get(&slug.to_lowercase())
                    .map(|&idx| (slug.clone(), self.skills[idx].id.clone()))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: &str, slug: &str, name: &str, aliases: &[&str]) -> CatalogSkill {
        CatalogSkill {
            id: SkillId::new(id),
            slug: slug.to_string(),
            name: name.to_string(),
            aliases: aliases.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = SkillCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_get_by_id() {
        let catalog = SkillCatalog::load_embedded().unwrap();

        let react = catalog.get(&SkillId::new("skill-react"));
        assert!(react.is_some());
        let react = react.unwrap();
        assert_eq!(react.slug, "react");
        assert!(!react.aliases.is_empty());
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = SkillCatalog::load_embedded().unwrap();
        let result = catalog.get(&SkillId::new("nonexistent-skill"));
        assert!(result.is_none());
    }

    #[test]
    fn test_catalog_to_json() {
        let catalog = SkillCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"skills\""));
        assert!(json.contains("skill-react"));
    }

    #[test]
    fn test_add_skill() {
        let mut catalog = SkillCatalog::new();
        assert_eq!(catalog.len(), 0);

        catalog
            .add_skill(skill("skill-zig", "zig", "Zig", &["ziglang"]))
            .unwrap();
        assert_eq!(catalog.len(), 1);

        let retrieved = catalog.get(&SkillId::new("skill-zig"));
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().name, "Zig");
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let mut catalog = SkillCatalog::new();
        catalog
            .add_skill(skill("skill-a", "alpha", "Alpha", &["shared"]))
            .unwrap();
        let err = catalog
            .add_skill(skill("skill-b", "beta", "Beta", &["SHARED"]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(_)));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut catalog = SkillCatalog::new();
        catalog
            .add_skill(skill("skill-a", "alpha", "Alpha", &[]))
            .unwrap();
        let err = catalog
            .add_skill(skill("skill-b", "Alpha", "Alpha Again", &[]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(_)));
    }

    #[test]
    fn test_from_rows_attaches_aliases() {
        let catalog = SkillCatalog::from_rows(
            vec![skill("skill-react", "react", "React", &[])],
            vec![("reactjs".to_string(), SkillId::new("skill-react"))],
        )
        .unwrap();
        let react = catalog.get(&SkillId::new("skill-react")).unwrap();
        assert_eq!(react.aliases, vec!["reactjs"]);
    }

    #[test]
    fn test_from_rows_rejects_orphan_alias() {
        let err = SkillCatalog::from_rows(
            vec![],
            vec![("reactjs".to_string(), SkillId::new("skill-react"))],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_batched_alias_lookup() {
        let catalog = SkillCatalog::from_rows(
            vec![skill("skill-react", "react", "React", &["reactjs"])],
            vec![],
        )
        .unwrap();

        let hits = catalog
            .aliases_by_text(&["reactjs".to_string(), "missing".to_string()])
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits["reactjs"], SkillId::new("skill-react"));
    }

    #[tokio::test]
    async fn test_batched_slug_lookup() {
        let catalog = SkillCatalog::load_embedded().unwrap();
        let hits = catalog
            .skills_by_slug(&["react".to_string(), "no-such-slug".to_string()])
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits["react"], SkillId::new("skill-react"));
    }
}
