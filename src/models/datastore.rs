//! Datastore model matching the frontend Datastore interface.

use serde::{Deserialize, Serialize};

use super::{Community, Place};

/// The root datastore containing all catalog data, used by the frontend
/// for its initial load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastore {
    pub communities: Vec<Community>,
    pub places: Vec<Place>,
}
