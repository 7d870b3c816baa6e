//! Place models matching the frontend VisitedPlace/WishlistPlace interfaces.
//!
//! The frontend uses a structural union and `'key' in place` checks; here the
//! two shapes are a single `Place` with a tagged `kind` payload so every
//! consumer pattern-matches exhaustively instead of probing for fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Record;

/// Geographic position of a place marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Wishlist priority level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Kind-specific payload of a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlaceDetails {
    /// A place the user has already been to.
    #[serde(rename_all = "camelCase")]
    Visited {
        visit_date: NaiveDate,
        #[serde(skip_serializing_if = "Option::is_none")]
        photos: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        rating: Option<u8>,
    },
    /// A place the user wants to visit.
    #[serde(rename_all = "camelCase")]
    Wishlist {
        priority: Priority,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

/// A place on the map explorer, visited or wishlisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub coordinates: Coordinates,
    #[serde(flatten)]
    pub details: PlaceDetails,
}

impl Record for Place {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// The wishlist reason is the only free-text detail a place carries;
    /// visited places have none, which must never match a search.
    fn details(&self) -> Option<&str> {
        match &self.details {
            PlaceDetails::Visited { .. } => None,
            PlaceDetails::Wishlist { reason, .. } => reason.as_deref(),
        }
    }

    fn location(&self) -> &str {
        &self.location
    }
}
