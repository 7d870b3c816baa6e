//! Community catalog fixtures.
//!
//! Data is defined once at startup and mirrors the frontend's centralized
//! community data file, partitioned the way the Communities screen tabs
//! present it.

use super::{Catalog, CategoryKey};
use crate::errors::AppError;
use crate::models::Community;

/// Community partition keys, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityCategory {
    Joined,
    Active,
    Cause,
    Regional,
}

impl CategoryKey for CommunityCategory {
    const ALL: &'static [Self] = &[
        CommunityCategory::Joined,
        CommunityCategory::Active,
        CommunityCategory::Cause,
        CommunityCategory::Regional,
    ];

    fn key(&self) -> &'static str {
        match self {
            CommunityCategory::Joined => "joined",
            CommunityCategory::Active => "active",
            CommunityCategory::Cause => "cause",
            CommunityCategory::Regional => "regional",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CommunityCategory::Joined => "Joined",
            CommunityCategory::Active => "Active",
            CommunityCategory::Cause => "For a Cause",
            CommunityCategory::Regional => "Regional",
        }
    }
}

/// Build the community catalog.
pub fn catalog() -> Result<Catalog<CommunityCategory, Community>, AppError> {
    Catalog::new(vec![
        (CommunityCategory::Joined, joined_communities()),
        (CommunityCategory::Active, active_communities()),
        (CommunityCategory::Cause, cause_based_communities()),
        (CommunityCategory::Regional, regional_communities()),
    ])
}

/// Communities the user has already joined.
fn joined_communities() -> Vec<Community> {
    vec![
        Community {
            id: 1,
            name: "Pacific Northwest Hikers".into(),
            description: "Exploring the beautiful trails and forests of the Pacific Northwest region.".into(),
            location: "Washington, USA".into(),
            members: 1247,
            image: "https://images.pexels.com/photos/1179229/pexels-photo-1179229.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
            category: "Hiking".into(),
            is_joined: true,
            last_activity: "2 hours ago".into(),
            rating: None,
            cause: None,
            impact: None,
        },
        Community {
            id: 2,
            name: "Urban Wildlife Watchers".into(),
            description: "Documenting and protecting wildlife in urban environments.".into(),
            location: "San Francisco, CA".into(),
            members: 892,
            image: "https://images.pexels.com/photos/631317/pexels-photo-631317.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
            category: "Wildlife".into(),
            is_joined: true,
            last_activity: "5 hours ago".into(),
            rating: None,
            cause: None,
            impact: None,
        },
    ]
}

/// Communities with high recent activity.
fn active_communities() -> Vec<Community> {
    vec![
        Community {
            id: 3,
            name: "Climate Action Network".into(),
            description: "Taking immediate action against climate change through community initiatives.".into(),
            location: "Global".into(),
            members: 5432,
            image: "https://images.pexels.com/photos/1108701/pexels-photo-1108701.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
            category: "Climate".into(),
            is_joined: false,
            last_activity: "15 minutes ago".into(),
            rating: Some(4.8),
            cause: None,
            impact: None,
        },
        Community {
            id: 4,
            name: "Ocean Cleanup Initiative".into(),
            description: "Organizing beach cleanups and marine conservation efforts worldwide.".into(),
            location: "Coastal Regions".into(),
            members: 3210,
            image: "https://images.pexels.com/photos/1001682/pexels-photo-1001682.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
            category: "Marine".into(),
            is_joined: false,
            last_activity: "1 hour ago".into(),
            rating: Some(4.9),
            cause: None,
            impact: None,
        },
    ]
}

/// Communities focused on specific environmental causes.
fn cause_based_communities() -> Vec<Community> {
    vec![
        Community {
            id: 5,
            name: "Save the Amazon".into(),
            description: "Protecting the Amazon rainforest through awareness and direct action.".into(),
            location: "Amazon Basin".into(),
            members: 12450,
            image: "https://images.pexels.com/photos/1108701/pexels-photo-1108701.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
            category: "Conservation".into(),
            is_joined: false,
            last_activity: "3 hours ago".into(),
            rating: None,
            cause: Some("Prevent deforestation and protect indigenous communities".into()),
            impact: Some("2.3M trees protected, 15 communities supported".into()),
        },
        Community {
            id: 6,
            name: "Coral Reef Restoration".into(),
            description: "Restoring damaged coral reefs and protecting marine biodiversity.".into(),
            location: "Great Barrier Reef".into(),
            members: 8760,
            image: "https://images.pexels.com/photos/1001682/pexels-photo-1001682.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
            category: "Marine".into(),
            is_joined: false,
            last_activity: "6 hours ago".into(),
            rating: None,
            cause: Some("Restore coral reefs affected by bleaching".into()),
            impact: Some("500 coral fragments planted, 12 reef sites restored".into()),
        },
    ]
}

/// Location-based communities.
fn regional_communities() -> Vec<Community> {
    vec![
        Community {
            id: 7,
            name: "California Coastal Guardians".into(),
            description: "Protecting California's coastline and marine ecosystems.".into(),
            location: "California, USA".into(),
            members: 2340,
            image: "https://images.pexels.com/photos/1001682/pexels-photo-1001682.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
            category: "Regional".into(),
            is_joined: false,
            last_activity: "4 hours ago".into(),
            rating: None,
            cause: None,
            impact: None,
        },
        Community {
            id: 8,
            name: "European Forest Alliance".into(),
            description: "Preserving Europe's ancient forests and promoting sustainable forestry.".into(),
            location: "Europe".into(),
            members: 4567,
            image: "https://images.pexels.com/photos/1179229/pexels-photo-1179229.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
            category: "Regional".into(),
            is_joined: false,
            last_activity: "1 day ago".into(),
            rating: None,
            cause: None,
            impact: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_partitions_match_source_data() {
        let catalog = catalog().unwrap();

        let ids = |key: &str| -> Vec<u32> {
            catalog.by_category(key).iter().map(|c| c.id).collect()
        };

        assert_eq!(ids("joined"), vec![1, 2]);
        assert_eq!(ids("active"), vec![3, 4]);
        assert_eq!(ids("cause"), vec![5, 6]);
        assert_eq!(ids("regional"), vec![7, 8]);
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_fixture_tab_bar_metadata() {
        let catalog = catalog().unwrap();
        let categories = catalog.categories();

        let labels: Vec<&str> = categories.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Joined", "Active", "For a Cause", "Regional"]);
        assert!(categories.iter().all(|c| c.count == 2));
    }

    #[test]
    fn test_only_joined_partition_is_joined() {
        let catalog = catalog().unwrap();
        assert!(catalog.by_category("joined").iter().all(|c| c.is_joined));
        assert!(catalog.by_category("active").iter().all(|c| !c.is_joined));
    }
}
