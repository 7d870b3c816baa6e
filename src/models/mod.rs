//! Data models for the TerraVerde discovery views.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod community;
mod datastore;
mod place;

pub use community::*;
pub use datastore::*;
pub use place::*;
