//! Project detail page
//!
//! The one aggregation with real composition: the page needs a project
//! with its tasks, the full user directory (the RACI pickers can't
//! render without it), and the workflow template list. The three
//! queries are independent, so they run concurrently and the load
//! settles when the slowest one does.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::error::Result;
use crate::graph::{GraphQueryExecutor, decode, documents};
use crate::models::{
    Project, ProjectDetailData, User, UserDirectoryData, WorkflowTemplateListData,
    WorkflowTemplateRef,
};

/// Message shown when any of the three queries fails
const LOAD_FAILED: &str = "Failed to load project page.";

/// Everything the project detail page renders from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPageViewModel {
    /// None either when the id was not found (no `error`) or when the
    /// load failed (`error` set); the two cases render differently
    pub project: Option<Project>,
    pub users: Vec<User>,
    pub templates: Vec<WorkflowTemplateRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProjectPageViewModel {
    /// The degraded shape: no project, empty lists, fixed message
    fn degraded() -> Self {
        Self {
            project: None,
            users: Vec::new(),
            templates: Vec::new(),
            error: Some(LOAD_FAILED.to_string()),
        }
    }
}

/// Load the project detail page.
///
/// The id is forwarded verbatim; an empty or malformed id is the
/// server's to reject. All three queries must succeed for any data to
/// surface, since the page can't offer role assignment without the
/// directory. A project id that resolves to nothing is not a failure:
/// the view model comes back with `project: None` and no error.
pub async fn load(executor: &dyn GraphQueryExecutor, project_id: &str) -> ProjectPageViewModel {
    let variables = json!({ "id": project_id });

    let (project_res, users_res, templates_res) = tokio::join!(
        executor.execute(&documents::PROJECT_DETAIL, variables),
        executor.execute(&documents::USER_DIRECTORY, Value::Null),
        executor.execute(&documents::WORKFLOW_TEMPLATE_LIST, Value::Null),
    );

    match compose(project_res, users_res, templates_res) {
        Ok(view) => view,
        Err(err) => {
            error!(project_id, error = %err, "Error fetching project page data");
            ProjectPageViewModel::degraded()
        }
    }
}

/// Join the three settled outcomes into one view model
fn compose(
    project_res: Result<Value>,
    users_res: Result<Value>,
    templates_res: Result<Value>,
) -> Result<ProjectPageViewModel> {
    let project: ProjectDetailData = decode(project_res?)?;
    let users: UserDirectoryData = decode(users_res?)?;
    let templates: WorkflowTemplateListData = decode(templates_res?)?;

    Ok(ProjectPageViewModel {
        project: project.get_project_by_id,
        users: users.get_users,
        templates: templates.get_workflow_templates,
        error: None,
    })
}
