use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::catalog::store::{SkillStore, StoreError};
use crate::core::types::SkillId;
use crate::resolver::slug::{compact, slugify};

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of resolving a batch of labels.
///
/// Every non-blank input label lands in exactly one bucket: its resolved
/// id in `skill_ids` (first-seen order, deduplicated) or its original
/// text in `unknown` (deduplicated case-insensitively).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResolution {
    pub skill_ids: Vec<SkillId>,
    pub unknown: Vec<String>,
}

/// Lookup candidates for one label: slug form, compact form, raw
/// lowercase form. Empty and duplicate forms are dropped.
#[must_use]
pub fn lookup_candidates(label: &str) -> Vec<String> {
    let mut candidates = Vec::with_capacity(3);
    for form in [slugify(label), compact(label), label.trim().to_lowercase()] {
        if !form.is_empty() && !candidates.contains(&form) {
            candidates.push(form);
        }
    }
    candidates
}

/// Resolves free-text skill labels to canonical catalog ids.
///
/// Candidate generation is pure; the store is consulted with exactly two
/// batched reads per call (alias table, then slug table), issued
/// concurrently since the tables are independent. A store failure aborts
/// the whole resolution rather than misfiling labels as unknown.
pub struct SkillResolver<'a, S: SkillStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SkillStore + ?Sized> SkillResolver<'a, S> {
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, labels: &[String]) -> Result<SkillResolution, ResolveError> {
        let cleaned: Vec<&str> = labels
            .iter()
            .map(|label| label.trim())
            .filter(|label| !label.is_empty())
            .collect();
        if cleaned.is_empty() {
            return Ok(SkillResolution::default());
        }

        // Distinct candidate batches across the whole input.
        let per_label: Vec<(&str, Vec<String>, String)> = cleaned
            .iter()
            .map(|label| (*label, lookup_candidates(label), slugify(label)))
            .collect();
        let mut alias_batch = Vec::new();
        let mut seen_candidates = HashSet::new();
        let mut slug_batch = Vec::new();
        let mut seen_slugs = HashSet::new();
        for (_, candidates, slug_form) in &per_label {
            for candidate in candidates {
                if seen_candidates.insert(candidate.clone()) {
                    alias_batch.push(candidate.clone());
                }
            }
            if !slug_form.is_empty() && seen_slugs.insert(slug_form.clone()) {
                slug_batch.push(slug_form.clone());
            }
        }

        let (alias_hits, slug_hits) = tokio::try_join!(
            self.store.aliases_by_text(&alias_batch),
            self.store.skills_by_slug(&slug_batch),
        )?;

        let mut resolution = SkillResolution::default();
        let mut seen_ids = HashSet::new();
        let mut seen_unknown = HashSet::new();
        for (label, candidates, slug_form) in &per_label {
            match resolve_one(candidates, slug_form, &alias_hits, &slug_hits) {
                Some(id) => {
                    if seen_ids.insert(id.clone()) {
                        resolution.skill_ids.push(id);
                    }
                }
                None => {
                    if seen_unknown.insert(label.to_lowercase()) {
                        resolution.unknown.push((*label).to_string());
                    }
                }
            }
        }
        Ok(resolution)
    }
}

/// Alias table first (first candidate hit wins), then the slug table.
fn resolve_one(
    candidates: &[String],
    slug_form: &str,
    alias_hits: &HashMap<String, SkillId>,
    slug_hits: &HashMap<String, SkillId>,
) -> Option<SkillId> {
    candidates
        .iter()
        .find_map(|candidate| alias_hits.get(candidate))
        .or_else(|| slug_hits.get(slug_form))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory store that records every batch it is asked for.
    #[derive(Default)]
    struct RecordingStore {
        aliases: HashMap<String, SkillId>,
        slugs: HashMap<String, SkillId>,
        alias_calls: AtomicUsize,
        slug_calls: AtomicUsize,
        alias_batches: Mutex<Vec<Vec<String>>>,
    }

    impl RecordingStore {
        fn with_alias(mut self, alias: &str, id: &str) -> Self {
            self.aliases.insert(alias.to_string(), SkillId::new(id));
            self
        }

        fn with_slug(mut self, slug: &str, id: &str) -> Self {
            self.slugs.insert(slug.to_string(), SkillId::new(id));
            self
        }
    }

    #[async_trait]
    impl SkillStore for RecordingStore {
        async fn aliases_by_text(
            &self,
            candidates: &[String],
        ) -> Result<HashMap<String, SkillId>, StoreError> {
            self.alias_calls.fetch_add(1, Ordering::SeqCst);
            self.alias_batches
                .lock()
                .unwrap()
                .push(candidates.to_vec());
            Ok(candidates
                .iter()
                .filter_map(|c| self.aliases.get(c).map(|id| (c.clone(), id.clone())))
                .collect())
        }

        async fn skills_by_slug(
            &self,
            slugs: &[String],
        ) -> Result<HashMap<String, SkillId>, StoreError> {
            self.slug_calls.fetch_add(1, Ordering::SeqCst);
            Ok(slugs
                .iter()
                .filter_map(|s| self.slugs.get(s).map(|id| (s.clone(), id.clone())))
                .collect())
        }
    }

    /// Store whose reads always fail.
    struct DownStore;

    #[async_trait]
    impl SkillStore for DownStore {
        async fn aliases_by_text(
            &self,
            _candidates: &[String],
        ) -> Result<HashMap<String, SkillId>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn skills_by_slug(
            &self,
            _slugs: &[String],
        ) -> Result<HashMap<String, SkillId>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_lookup_candidates_are_distinct_and_ordered() {
        assert_eq!(
            lookup_candidates("React.js"),
            vec!["react-js", "reactjs", "react.js"]
        );
        // all three forms collapse for an already-clean label
        assert_eq!(lookup_candidates("react"), vec!["react"]);
        assert!(lookup_candidates("!!!").len() == 1); // raw "!!!" only
    }

    #[tokio::test]
    async fn test_alias_variants_collapse_to_one_skill() {
        let store = RecordingStore::default()
            .with_alias("reactjs", "skill-react")
            .with_slug("react", "skill-react");
        let resolver = SkillResolver::new(&store);

        let resolution = resolver
            .resolve(&labels(&["React.js", "react", " REACT "]))
            .await
            .unwrap();

        assert_eq!(resolution.skill_ids, vec![SkillId::new("skill-react")]);
        assert!(resolution.unknown.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_labels_keep_original_text() {
        let store = RecordingStore::default().with_slug("react", "skill-react");
        let resolver = SkillResolver::new(&store);

        let resolution = resolver
            .resolve(&labels(&["Underwater Basket Weaving", "react"]))
            .await
            .unwrap();

        assert_eq!(resolution.skill_ids, vec![SkillId::new("skill-react")]);
        assert_eq!(resolution.unknown, vec!["Underwater Basket Weaving"]);
    }

    #[tokio::test]
    async fn test_unknown_dedup_is_case_insensitive() {
        let store = RecordingStore::default();
        let resolver = SkillResolver::new(&store);

        let resolution = resolver
            .resolve(&labels(&["Blorbo", "blorbo", "BLORBO "]))
            .await
            .unwrap();

        assert_eq!(resolution.unknown, vec!["Blorbo"]);
    }

    #[tokio::test]
    async fn test_alias_hit_beats_slug_hit() {
        // compact form hits an alias pointing at a different skill than
        // the slug table would give
        let store = RecordingStore::default()
            .with_alias("reactjs", "skill-react")
            .with_slug("react-js", "skill-imposter");
        let resolver = SkillResolver::new(&store);

        let resolution = resolver.resolve(&labels(&["React.js"])).await.unwrap();
        assert_eq!(resolution.skill_ids, vec![SkillId::new("skill-react")]);
    }

    #[tokio::test]
    async fn test_empty_input_performs_no_lookups() {
        let store = RecordingStore::default();
        let resolver = SkillResolver::new(&store);

        let resolution = resolver.resolve(&labels(&["", "   "])).await.unwrap();

        assert_eq!(resolution, SkillResolution::default());
        assert_eq!(store.alias_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.slug_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_whole_input_costs_two_reads() {
        let store = RecordingStore::default()
            .with_alias("reactjs", "skill-react")
            .with_slug("python", "skill-python");
        let resolver = SkillResolver::new(&store);

        resolver
            .resolve(&labels(&["React.js", "Python", "TypeScript", "react"]))
            .await
            .unwrap();

        assert_eq!(store.alias_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.slug_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_duplicate_labels_share_batch_entries() {
        let store = RecordingStore::default();
        let resolver = SkillResolver::new(&store);

        resolver
            .resolve(&labels(&["react", "React", " REACT "]))
            .await
            .unwrap();

        let batches = store.alias_batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0], vec!["react"]);
    }

    #[tokio::test]
    async fn test_store_outage_is_an_error_not_unknown() {
        let resolver = SkillResolver::new(&DownStore);
        let err = resolver.resolve(&labels(&["react"])).await.unwrap_err();
        assert!(matches!(err, ResolveError::Store(_)));
    }
}
