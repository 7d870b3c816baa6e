//! Community model matching the frontend Community interface.

use serde::{Deserialize, Serialize};

use crate::catalog::Record;

/// A community group the user can discover, join, or follow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub members: u32,
    pub image: String,
    /// Display tag such as "Hiking" or "Marine". Not the catalog partition.
    pub category: String,
    pub is_joined: bool,
    pub last_activity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

impl Record for Community {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn details(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn location(&self) -> &str {
        &self.location
    }
}
