//! Place catalog fixtures.
//!
//! Mirrors the frontend's centralized places data: visited places and
//! wishlist locations, partitioned the way the map explorer's mode toggle
//! presents them.

use chrono::NaiveDate;

use super::{Catalog, CategoryKey};
use crate::errors::AppError;
use crate::models::{Coordinates, Place, PlaceDetails, Priority};

/// Place partition keys, in mode-toggle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceCategory {
    Visited,
    Wishlist,
}

impl CategoryKey for PlaceCategory {
    const ALL: &'static [Self] = &[PlaceCategory::Visited, PlaceCategory::Wishlist];

    fn key(&self) -> &'static str {
        match self {
            PlaceCategory::Visited => "visited",
            PlaceCategory::Wishlist => "wishlist",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PlaceCategory::Visited => "Visited",
            PlaceCategory::Wishlist => "Wishlist",
        }
    }
}

/// Build the place catalog.
pub fn catalog() -> Result<Catalog<PlaceCategory, Place>, AppError> {
    Catalog::new(vec![
        (PlaceCategory::Visited, visited_places()),
        (PlaceCategory::Wishlist, wishlist_places()),
    ])
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn visited_places() -> Vec<Place> {
    vec![
        Place {
            id: 1,
            name: "Yosemite National Park".into(),
            location: "California, USA".into(),
            coordinates: Coordinates { lat: 37.8651, lng: -119.5383 },
            details: PlaceDetails::Visited {
                visit_date: date(2024, 1, 15),
                photos: Some(12),
                rating: Some(5),
            },
        },
        Place {
            id: 2,
            name: "Banff National Park".into(),
            location: "Alberta, Canada".into(),
            coordinates: Coordinates { lat: 51.4968, lng: -115.9281 },
            details: PlaceDetails::Visited {
                visit_date: date(2024, 2, 20),
                photos: Some(8),
                rating: Some(5),
            },
        },
        Place {
            id: 3,
            name: "Torres del Paine".into(),
            location: "Patagonia, Chile".into(),
            coordinates: Coordinates { lat: -51.0, lng: -73.0 },
            details: PlaceDetails::Visited {
                visit_date: date(2024, 3, 10),
                photos: Some(15),
                rating: Some(5),
            },
        },
        Place {
            id: 4,
            name: "Milford Sound".into(),
            location: "New Zealand".into(),
            coordinates: Coordinates { lat: -44.6717, lng: 167.925 },
            details: PlaceDetails::Visited {
                visit_date: date(2023, 12, 5),
                photos: Some(20),
                rating: Some(5),
            },
        },
        Place {
            id: 5,
            name: "Yellowstone National Park".into(),
            location: "Wyoming, USA".into(),
            coordinates: Coordinates { lat: 44.428, lng: -110.5885 },
            details: PlaceDetails::Visited {
                visit_date: date(2023, 8, 15),
                photos: Some(18),
                rating: Some(4),
            },
        },
    ]
}

fn wishlist_places() -> Vec<Place> {
    vec![
        Place {
            id: 6,
            name: "Iceland Highlands".into(),
            location: "Iceland".into(),
            coordinates: Coordinates { lat: 64.9631, lng: -19.0208 },
            details: PlaceDetails::Wishlist {
                priority: Priority::High,
                reason: Some("Northern Lights and glaciers".into()),
            },
        },
        Place {
            id: 7,
            name: "Socotra Island".into(),
            location: "Yemen".into(),
            coordinates: Coordinates { lat: 12.4634, lng: 53.8237 },
            details: PlaceDetails::Wishlist {
                priority: Priority::Medium,
                reason: Some("Unique endemic flora".into()),
            },
        },
        Place {
            id: 8,
            name: "Raja Ampat".into(),
            location: "Indonesia".into(),
            coordinates: Coordinates { lat: -0.232, lng: 130.5755 },
            details: PlaceDetails::Wishlist {
                priority: Priority::High,
                reason: Some("Marine biodiversity hotspot".into()),
            },
        },
        Place {
            id: 9,
            name: "Faroe Islands".into(),
            location: "Denmark".into(),
            coordinates: Coordinates { lat: 61.8926, lng: -6.9118 },
            details: PlaceDetails::Wishlist {
                priority: Priority::Medium,
                reason: Some("Dramatic landscapes".into()),
            },
        },
        Place {
            id: 10,
            name: "Madagascar".into(),
            location: "Madagascar".into(),
            coordinates: Coordinates { lat: -18.7669, lng: 46.8691 },
            details: PlaceDetails::Wishlist {
                priority: Priority::High,
                reason: Some("Unique wildlife and baobab trees".into()),
            },
        },
        Place {
            id: 11,
            name: "Lofoten Islands".into(),
            location: "Norway".into(),
            coordinates: Coordinates { lat: 68.1102, lng: 13.6929 },
            details: PlaceDetails::Wishlist {
                priority: Priority::Medium,
                reason: Some("Arctic beauty and midnight sun".into()),
            },
        },
    ]
}
