//! Workflow template detail page

use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::graph::{GraphQueryExecutor, decode, documents};
use crate::models::{WorkflowTemplateDetail, WorkflowTemplateDetailData};

const LOAD_FAILED: &str = "Failed to load template.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowDetailViewModel {
    /// None on an unknown id (no `error`) or on a failed load (`error`
    /// set), same convention as the project page
    pub template: Option<WorkflowTemplateDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Load one workflow template with its ordered steps
pub async fn load(executor: &dyn GraphQueryExecutor, template_id: &str) -> WorkflowDetailViewModel {
    let outcome = executor
        .execute(&documents::WORKFLOW_TEMPLATE_DETAIL, json!({ "id": template_id }))
        .await
        .and_then(decode::<WorkflowTemplateDetailData>);

    match outcome {
        Ok(data) => WorkflowDetailViewModel {
            template: data.get_workflow_template_by_id,
            error: None,
        },
        Err(err) => {
            error!(template_id, error = %err, "Error fetching template details");
            WorkflowDetailViewModel {
                template: None,
                error: Some(LOAD_FAILED.to_string()),
            }
        }
    }
}
