//! Page loaders
//!
//! One module per Trackline screen. Each loader takes an injected
//! [`GraphQueryExecutor`](crate::graph::GraphQueryExecutor), issues the
//! queries its screen needs, and always returns a total view model:
//! on failure the page degrades to an empty shape with a fixed message
//! instead of propagating the error upward.
//!
//! Only `project_detail` fans out more than one query; the rest are
//! single-query loads.

pub mod dashboard;
pub mod project_detail;
pub mod projects;
pub mod workflow_detail;
pub mod workflows;
