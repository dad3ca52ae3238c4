//! GraphQL plumbing
//!
//! This module provides:
//! - Query documents for every Trackline screen
//! - The `GraphQueryExecutor` capability page loaders are built against
//! - An HTTP client implementing that capability over reqwest

pub mod documents;

mod client;
mod executor;

pub use client::{GraphClient, GraphClientBuilder};
pub use documents::QueryDocument;
pub use executor::{GraphQueryExecutor, decode};
