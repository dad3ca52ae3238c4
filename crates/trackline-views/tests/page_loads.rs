//! Page loader tests against a scripted executor
//!
//! These cover the aggregation contract of every page, with the project
//! detail page exercised hardest: join correctness, the all-or-nothing
//! failure policy, the not-found/failure distinction, and settle-order
//! independence.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use trackline_views::error::{Error, Result};
use trackline_views::graph::{GraphQueryExecutor, QueryDocument};
use trackline_views::models::{
    Project, ProjectSummary, RaciAssignment, RaciUserRef, Task, User, WorkflowTemplateRef,
};
use trackline_views::pages::dashboard::{self, HealthStatus};
use trackline_views::pages::{project_detail, projects, workflow_detail, workflows};

/// What the fake should do when an operation is executed
enum Outcome {
    Data(Value),
    Fail(&'static str),
}

/// Scripted [`GraphQueryExecutor`]: outcomes and settle delays keyed by
/// operation name, with every call recorded for inspection.
#[derive(Default)]
struct FakeExecutor {
    outcomes: HashMap<&'static str, Outcome>,
    delays: HashMap<&'static str, Duration>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl FakeExecutor {
    fn new() -> Self {
        Self::default()
    }

    fn respond(mut self, operation: &'static str, data: Value) -> Self {
        self.outcomes.insert(operation, Outcome::Data(data));
        self
    }

    fn fail(mut self, operation: &'static str, message: &'static str) -> Self {
        self.outcomes.insert(operation, Outcome::Fail(message));
        self
    }

    fn delay(mut self, operation: &'static str, delay: Duration) -> Self {
        self.delays.insert(operation, delay);
        self
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphQueryExecutor for FakeExecutor {
    async fn execute(&self, document: &QueryDocument, variables: Value) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((document.operation_name.to_string(), variables));

        if let Some(delay) = self.delays.get(document.operation_name) {
            tokio::time::sleep(*delay).await;
        }

        match self.outcomes.get(document.operation_name) {
            Some(Outcome::Data(data)) => Ok(data.clone()),
            Some(Outcome::Fail(message)) => Err(Error::Graph(message.to_string())),
            None => panic!("unscripted operation: {}", document.operation_name),
        }
    }
}

fn project_detail_payload() -> Value {
    json!({
        "getProjectById": {
            "id": "proj-1",
            "name": "Launch",
            "description": null,
            "deadline": null,
            "tasks": [{
                "id": "t1",
                "title": "Design",
                "status": "open",
                "jiraTicketId": null,
                "raciAssignments": [
                    {"role": "Responsible", "user": {"email": "a@x.com"}}
                ]
            }]
        }
    })
}

fn users_payload() -> Value {
    json!({"getUsers": [{"id": "u1", "email": "a@x.com"}]})
}

fn templates_payload() -> Value {
    json!({"getWorkflowTemplates": [{"id": "w1", "name": "Standard Rollout"}]})
}

fn expected_project() -> Project {
    Project {
        id: "proj-1".to_string(),
        name: "Launch".to_string(),
        description: None,
        deadline: None,
        tasks: vec![Task {
            id: "t1".to_string(),
            title: "Design".to_string(),
            status: "open".to_string(),
            jira_ticket_id: None,
            raci_assignments: vec![RaciAssignment {
                role: "Responsible".to_string(),
                user: RaciUserRef {
                    email: "a@x.com".to_string(),
                },
            }],
        }],
    }
}

#[tokio::test]
async fn test_project_page_full_success_mirrors_payloads() {
    let executor = FakeExecutor::new()
        .respond("GetProjectDetails", project_detail_payload())
        .respond("GetUsers", users_payload())
        .respond("GetWorkflowTemplates", templates_payload());

    let view = project_detail::load(&executor, "proj-1").await;

    assert_eq!(view.project, Some(expected_project()));
    assert_eq!(
        view.users,
        vec![User {
            id: "u1".to_string(),
            email: "a@x.com".to_string(),
        }]
    );
    assert_eq!(
        view.templates,
        vec![WorkflowTemplateRef {
            id: "w1".to_string(),
            name: "Standard Rollout".to_string(),
        }]
    );
    assert!(view.error.is_none());
}

#[tokio::test]
async fn test_project_page_not_found_has_no_error() {
    let executor = FakeExecutor::new()
        .respond("GetProjectDetails", json!({"getProjectById": null}))
        .respond("GetUsers", users_payload())
        .respond("GetWorkflowTemplates", templates_payload());

    let view = project_detail::load(&executor, "proj-missing").await;

    // Not found is a valid state, distinct from a failed load
    assert!(view.project.is_none());
    assert!(view.error.is_none());
    assert_eq!(view.users.len(), 1);
    assert_eq!(view.templates.len(), 1);
}

#[tokio::test]
async fn test_project_page_users_failure_degrades_everything() {
    let executor = FakeExecutor::new()
        .respond("GetProjectDetails", project_detail_payload())
        .fail("GetUsers", "transport exploded")
        .respond("GetWorkflowTemplates", templates_payload());

    let view = project_detail::load(&executor, "proj-1").await;

    // No partial data leaks: the successful project fetch is discarded
    assert!(view.project.is_none());
    assert!(view.users.is_empty());
    assert!(view.templates.is_empty());
    assert_eq!(view.error.as_deref(), Some("Failed to load project page."));
}

#[tokio::test]
async fn test_project_page_each_single_failure_degrades() {
    for failing in ["GetProjectDetails", "GetUsers", "GetWorkflowTemplates"] {
        let mut executor = FakeExecutor::new()
            .respond("GetProjectDetails", project_detail_payload())
            .respond("GetUsers", users_payload())
            .respond("GetWorkflowTemplates", templates_payload());
        executor = executor.fail(failing, "boom");

        let view = project_detail::load(&executor, "proj-1").await;

        assert!(view.project.is_none(), "{failing} should degrade the page");
        assert!(view.users.is_empty());
        assert!(view.templates.is_empty());
        assert_eq!(view.error.as_deref(), Some("Failed to load project page."));
    }
}

#[tokio::test]
async fn test_project_page_all_failures_degrade() {
    let executor = FakeExecutor::new()
        .fail("GetProjectDetails", "down")
        .fail("GetUsers", "down")
        .fail("GetWorkflowTemplates", "down");

    let view = project_detail::load(&executor, "proj-1").await;

    assert!(view.project.is_none());
    assert!(view.users.is_empty());
    assert!(view.templates.is_empty());
    assert_eq!(view.error.as_deref(), Some("Failed to load project page."));
}

#[tokio::test]
async fn test_project_page_malformed_payload_degrades() {
    let executor = FakeExecutor::new()
        .respond("GetProjectDetails", project_detail_payload())
        .respond("GetUsers", json!({"getUsers": "not-a-list"}))
        .respond("GetWorkflowTemplates", templates_payload());

    let view = project_detail::load(&executor, "proj-1").await;

    assert!(view.project.is_none());
    assert_eq!(view.error.as_deref(), Some("Failed to load project page."));
}

#[tokio::test(start_paused = true)]
async fn test_project_page_settle_order_does_not_matter() {
    // Same payloads, opposite settle orders
    let slow_project = FakeExecutor::new()
        .respond("GetProjectDetails", project_detail_payload())
        .respond("GetUsers", users_payload())
        .respond("GetWorkflowTemplates", templates_payload())
        .delay("GetProjectDetails", Duration::from_secs(5));

    let slow_templates = FakeExecutor::new()
        .respond("GetProjectDetails", project_detail_payload())
        .respond("GetUsers", users_payload())
        .respond("GetWorkflowTemplates", templates_payload())
        .delay("GetWorkflowTemplates", Duration::from_secs(5));

    let first = project_detail::load(&slow_project, "proj-1").await;
    let second = project_detail::load(&slow_templates, "proj-1").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_project_page_forwards_id_verbatim() {
    let executor = FakeExecutor::new()
        .respond("GetProjectDetails", json!({"getProjectById": null}))
        .respond("GetUsers", users_payload())
        .respond("GetWorkflowTemplates", templates_payload());

    project_detail::load(&executor, "").await;

    let calls = executor.calls();
    let (_, variables) = calls
        .iter()
        .find(|(op, _)| op == "GetProjectDetails")
        .expect("project query was issued");
    assert_eq!(variables, &json!({"id": ""}));
}

#[tokio::test]
async fn test_project_page_issues_all_three_queries() {
    let executor = FakeExecutor::new()
        .respond("GetProjectDetails", project_detail_payload())
        .respond("GetUsers", users_payload())
        .respond("GetWorkflowTemplates", templates_payload());

    project_detail::load(&executor, "proj-1").await;

    let mut operations: Vec<String> = executor.calls().into_iter().map(|(op, _)| op).collect();
    operations.sort();
    assert_eq!(
        operations,
        vec!["GetProjectDetails", "GetUsers", "GetWorkflowTemplates"]
    );
}

#[tokio::test]
async fn test_dashboard_reports_server_message() {
    let executor =
        FakeExecutor::new().respond("HealthCheck", json!({"health": "Server is up and running!"}));

    let view = dashboard::load(&executor).await;

    assert_eq!(view.status, HealthStatus::Ok);
    assert_eq!(view.message, "Server is up and running!");
}

#[tokio::test]
async fn test_dashboard_degrades_on_failure() {
    let executor = FakeExecutor::new().fail("HealthCheck", "connection refused");

    let view = dashboard::load(&executor).await;

    assert_eq!(view.status, HealthStatus::Error);
    assert_eq!(view.message, "Failed to connect to the backend.");
}

#[tokio::test]
async fn test_project_list_success() {
    let executor = FakeExecutor::new().respond(
        "GetProjects",
        json!({"getProjects": [
            {"id": "p1", "name": "Launch", "description": "Q3 rollout", "deadline": null}
        ]}),
    );

    let view = projects::load(&executor).await;

    assert_eq!(
        view.projects,
        vec![ProjectSummary {
            id: "p1".to_string(),
            name: "Launch".to_string(),
            description: Some("Q3 rollout".to_string()),
            deadline: None,
        }]
    );
    assert!(view.error.is_none());
}

#[tokio::test]
async fn test_project_list_degrades_to_empty() {
    let executor = FakeExecutor::new().fail("GetProjects", "boom");

    let view = projects::load(&executor).await;

    assert!(view.projects.is_empty());
    assert_eq!(view.error.as_deref(), Some("Failed to load projects."));
}

#[tokio::test]
async fn test_workflow_catalog_success_and_failure() {
    let ok = FakeExecutor::new().respond(
        "GetWorkflowTemplates",
        json!({"getWorkflowTemplates": [
            {"id": "w1", "name": "Standard Rollout", "description": null}
        ]}),
    );
    let view = workflows::load(&ok).await;
    assert_eq!(view.templates.len(), 1);
    assert!(view.error.is_none());

    let broken = FakeExecutor::new().fail("GetWorkflowTemplates", "boom");
    let view = workflows::load(&broken).await;
    assert!(view.templates.is_empty());
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to load workflow templates.")
    );
}

#[tokio::test]
async fn test_workflow_detail_steps_and_not_found() {
    let executor = FakeExecutor::new().respond(
        "GetTemplateDetails",
        json!({"getWorkflowTemplateById": {
            "id": "w1",
            "name": "Standard Rollout",
            "description": "Release checklist",
            "steps": [
                {"id": "s1", "stepName": "Draft", "stepOrder": 1, "role": "Responsible"},
                {"id": "s2", "stepName": "Review", "stepOrder": 2, "role": null}
            ]
        }}),
    );

    let view = workflow_detail::load(&executor, "w1").await;
    let template = view.template.expect("template should be present");
    assert_eq!(template.steps.len(), 2);
    assert_eq!(template.steps[0].step_name, "Draft");
    assert_eq!(template.steps[1].step_order, 2);
    assert!(view.error.is_none());

    let missing =
        FakeExecutor::new().respond("GetTemplateDetails", json!({"getWorkflowTemplateById": null}));
    let view = workflow_detail::load(&missing, "w-missing").await;
    assert!(view.template.is_none());
    assert!(view.error.is_none());
}

#[tokio::test]
async fn test_workflow_detail_degrades_on_failure() {
    let executor = FakeExecutor::new().fail("GetTemplateDetails", "boom");

    let view = workflow_detail::load(&executor, "w1").await;

    assert!(view.template.is_none());
    assert_eq!(view.error.as_deref(), Some("Failed to load template."));
}
