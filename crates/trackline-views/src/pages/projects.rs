//! Project list page

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::graph::{GraphQueryExecutor, decode, documents};
use crate::models::{ProjectListData, ProjectSummary};

const LOAD_FAILED: &str = "Failed to load projects.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectListViewModel {
    pub projects: Vec<ProjectSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Load the project list
pub async fn load(executor: &dyn GraphQueryExecutor) -> ProjectListViewModel {
    let outcome = executor
        .execute(&documents::PROJECT_LIST, Value::Null)
        .await
        .and_then(decode::<ProjectListData>);

    match outcome {
        Ok(data) => ProjectListViewModel {
            projects: data.get_projects,
            error: None,
        },
        Err(err) => {
            error!(error = %err, "Error fetching projects");
            ProjectListViewModel {
                projects: Vec::new(),
                error: Some(LOAD_FAILED.to_string()),
            }
        }
    }
}
