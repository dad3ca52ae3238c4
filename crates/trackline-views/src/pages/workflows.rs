//! Workflow catalog page
//!
//! Lists templates with their descriptions. The project detail page
//! uses a slimmer id+name document instead; see
//! [`documents::WORKFLOW_TEMPLATE_LIST`].

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::graph::{GraphQueryExecutor, decode, documents};
use crate::models::{WorkflowCatalogData, WorkflowTemplateSummary};

const LOAD_FAILED: &str = "Failed to load workflow templates.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowCatalogViewModel {
    pub templates: Vec<WorkflowTemplateSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Load the workflow template catalog
pub async fn load(executor: &dyn GraphQueryExecutor) -> WorkflowCatalogViewModel {
    let outcome = executor
        .execute(&documents::WORKFLOW_CATALOG, Value::Null)
        .await
        .and_then(decode::<WorkflowCatalogData>);

    match outcome {
        Ok(data) => WorkflowCatalogViewModel {
            templates: data.get_workflow_templates,
            error: None,
        },
        Err(err) => {
            error!(error = %err, "Error fetching workflow templates");
            WorkflowCatalogViewModel {
                templates: Vec::new(),
                error: Some(LOAD_FAILED.to_string()),
            }
        }
    }
}
