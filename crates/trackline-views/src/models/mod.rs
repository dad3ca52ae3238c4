//! Entity snapshots received from the GraphQL API
//!
//! Everything here is an immutable snapshot: deserialized once per page
//! load, never mutated, discarded when the next load begins. Field names
//! follow the wire format (camelCase) via serde renames.
//!
//! `Task::status` and RACI `role` are open strings. The backend renders
//! them from closed enums ("InProgress", "Responsible", ...), but the
//! client has never validated them and unknown values must keep
//! rendering permissively.

use serde::{Deserialize, Serialize};

/// A project with its tasks, as returned by the detail query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Date string as the server formats it; opaque to this layer
    pub deadline: Option<String>,
    /// Order as returned by the source, not guaranteed sorted
    pub tasks: Vec<Task>,
}

/// Project summary for the list page (no tasks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub deadline: Option<String>,
}

/// A task within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: String,
    /// External ticket reference, carried through unvalidated
    pub jira_ticket_id: Option<String>,
    pub raci_assignments: Vec<RaciAssignment>,
}

/// Links a task to a person through a RACI role label.
///
/// The user here is a denormalized embed keyed by email, not a foreign
/// key into the directory; matching the two up is the renderer's call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaciAssignment {
    pub role: String,
    pub user: RaciUserRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaciUserRef {
    pub email: String,
}

/// Directory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Template picker entry (id + name), used on the project detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTemplateRef {
    pub id: String,
    pub name: String,
}

/// Template summary for the workflow catalog page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTemplateSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// A template with its ordered steps, from the detail query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTemplateDetail {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Ordered by stepOrder, ascending; the server sorts
    pub steps: Vec<WorkflowStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: String,
    pub step_name: String,
    pub step_order: i32,
    pub role: Option<String>,
}

// Response envelopes, one per query document. Each mirrors the root
// field of its document exactly.

#[derive(Debug, Clone, Deserialize)]
pub struct HealthData {
    pub health: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectListData {
    #[serde(rename = "getProjects")]
    pub get_projects: Vec<ProjectSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDetailData {
    /// None when the id does not exist; a successful query can still
    /// carry no project
    #[serde(rename = "getProjectById")]
    pub get_project_by_id: Option<Project>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDirectoryData {
    #[serde(rename = "getUsers")]
    pub get_users: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowTemplateListData {
    #[serde(rename = "getWorkflowTemplates")]
    pub get_workflow_templates: Vec<WorkflowTemplateRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowCatalogData {
    #[serde(rename = "getWorkflowTemplates")]
    pub get_workflow_templates: Vec<WorkflowTemplateSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowTemplateDetailData {
    #[serde(rename = "getWorkflowTemplateById")]
    pub get_workflow_template_by_id: Option<WorkflowTemplateDetail>,
}
