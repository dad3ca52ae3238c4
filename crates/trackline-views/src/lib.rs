//! Trackline Views
//!
//! This crate prepares render-ready view models for the Trackline
//! project tracker from its GraphQL API, including:
//! - Query documents for every screen (dashboard, projects, workflows)
//! - A typed GraphQL HTTP client (`GraphClient`)
//! - Page loaders that fan out queries and compose view models
//! - Graceful degradation when any query fails

pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod pages;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::graph::{GraphClient, GraphQueryExecutor};
    pub use crate::pages::project_detail::ProjectPageViewModel;
}
