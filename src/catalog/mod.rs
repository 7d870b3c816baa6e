//! Partitioned catalog store.
//!
//! A catalog owns the fixed record collections for one domain (communities
//! or places), partitioned by a closed set of category keys. Catalogs are
//! built once at startup from compiled-in fixture data and never mutated.

pub mod communities;
pub mod places;

use std::collections::HashSet;

use serde::Serialize;

use crate::errors::AppError;

/// Closed, ordered set of partition keys for one catalog domain.
pub trait CategoryKey: Copy + Eq + 'static {
    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// Stable wire key, e.g. `"joined"`.
    fn key(&self) -> &'static str;

    /// Display label, e.g. `"For a Cause"`.
    fn label(&self) -> &'static str;

    /// Parse a raw key. Unknown keys are not an error, just absent.
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }
}

/// A displayable catalog entry with searchable text fields.
pub trait Record {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
    /// Free-text detail field (description or reason), when the record
    /// has one.
    fn details(&self) -> Option<&str>;
    fn location(&self) -> &str;
}

/// Summary of one partition, as shown in the frontend tab bar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub count: usize,
}

/// Immutable partitioned record store for one domain.
#[derive(Debug, Clone)]
pub struct Catalog<C: CategoryKey, R: Record> {
    partitions: Vec<(C, Vec<R>)>,
}

impl<C: CategoryKey, R: Record> Catalog<C, R> {
    /// Build a catalog from its partitions.
    ///
    /// Record ids must be unique across the whole catalog, not just within
    /// a partition; `by_id` searches the union, and a duplicate would make
    /// it silently shadow one of the records. Duplicates are rejected here
    /// so that lookup can never return the wrong record.
    pub fn new(partitions: Vec<(C, Vec<R>)>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for (category, records) in &partitions {
            for record in records {
                if !seen.insert(record.id()) {
                    return Err(AppError::Catalog(format!(
                        "duplicate record id {} in partition {}",
                        record.id(),
                        category.key()
                    )));
                }
            }
        }
        Ok(Self { partitions })
    }

    /// Records for a raw category key. Unknown keys are a valid "no data"
    /// case and yield an empty slice, matching the frontend tab switch.
    pub fn by_category(&self, key: &str) -> &[R] {
        match C::from_key(key) {
            Some(category) => self.partition(category),
            None => &[],
        }
    }

    /// Records for a known category key.
    pub fn partition(&self, category: C) -> &[R] {
        self.partitions
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, records)| records.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a record by id across the union of all partitions,
    /// partition declaration order first, record order within.
    pub fn by_id(&self, id: u32) -> Option<&R> {
        self.iter().find(|record| record.id() == id)
    }

    /// All records, partition declaration order then record order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.partitions.iter().flat_map(|(_, records)| records.iter())
    }

    /// Total record count across all partitions.
    pub fn len(&self) -> usize {
        self.partitions.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Partition summaries in declaration order, with live counts.
    pub fn categories(&self) -> Vec<CategoryInfo> {
        self.partitions
            .iter()
            .map(|(category, records)| CategoryInfo {
                key: category.key(),
                label: category.label(),
                count: records.len(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::communities::CommunityCategory;
    use super::*;
    use crate::models::Community;

    fn community(id: u32, name: &str) -> Community {
        Community {
            id,
            name: name.to_string(),
            description: String::new(),
            location: String::new(),
            members: 0,
            image: String::new(),
            category: String::new(),
            is_joined: false,
            last_activity: String::new(),
            rating: None,
            cause: None,
            impact: None,
        }
    }

    fn test_catalog() -> Catalog<CommunityCategory, Community> {
        Catalog::new(vec![
            (
                CommunityCategory::Joined,
                vec![community(1, "Pacific Northwest Hikers")],
            ),
            (
                CommunityCategory::Active,
                vec![community(3, "Climate Action Network")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_by_category_known_key() {
        let catalog = test_catalog();
        let joined = catalog.by_category("joined");
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].id, 1);
    }

    #[test]
    fn test_by_category_unknown_key() {
        let catalog = test_catalog();
        assert!(catalog.by_category("archived").is_empty());
        assert!(catalog.by_category("").is_empty());
        // Keys are case-sensitive, as in the frontend tab switch.
        assert!(catalog.by_category("Joined").is_empty());
    }

    #[test]
    fn test_by_category_enumerated_key_without_partition() {
        let catalog = test_catalog();
        assert!(catalog.by_category("regional").is_empty());
    }

    #[test]
    fn test_by_id_searches_union() {
        let catalog = test_catalog();
        assert_eq!(catalog.by_id(1).unwrap().name, "Pacific Northwest Hikers");
        assert_eq!(catalog.by_id(3).unwrap().name, "Climate Action Network");
        assert!(catalog.by_id(999).is_none());
    }

    #[test]
    fn test_duplicate_id_across_partitions_rejected() {
        // A shared id would make by_id silently shadow one record, so
        // construction must refuse it outright.
        let result = Catalog::new(vec![
            (CommunityCategory::Joined, vec![community(1, "First")]),
            (CommunityCategory::Active, vec![community(1, "Shadowed")]),
        ]);
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_duplicate_id_within_partition_rejected() {
        let result = Catalog::new(vec![(
            CommunityCategory::Joined,
            vec![community(2, "First"), community(2, "Second")],
        )]);
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_categories_report_counts_in_order() {
        let catalog = test_catalog();
        let categories = catalog.categories();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].key, "joined");
        assert_eq!(categories[0].label, "Joined");
        assert_eq!(categories[0].count, 1);
        assert_eq!(categories[1].key, "active");
        assert_eq!(categories[1].count, 1);
    }

    #[test]
    fn test_iter_preserves_declaration_order() {
        let catalog = test_catalog();
        let ids: Vec<u32> = catalog.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(catalog.len(), 2);
    }
}
