//! Query documents for the Trackline GraphQL API
//!
//! Each document is a pure value: the operation name the server sees and
//! the query text itself. Field sets here are the single source of truth
//! for what the page loaders expect back; the response envelopes in
//! `crate::models` mirror them one to one.

/// A fixed, parameterized GraphQL query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDocument {
    /// Operation name, also used to label logs and test scripts
    pub operation_name: &'static str,
    /// The query text sent to the server
    pub text: &'static str,
}

/// Backend liveness probe for the dashboard
pub const HEALTH_CHECK: QueryDocument = QueryDocument {
    operation_name: "HealthCheck",
    text: r#"
  query HealthCheck {
    health
  }
"#,
};

/// Project summaries for the project list page
pub const PROJECT_LIST: QueryDocument = QueryDocument {
    operation_name: "GetProjects",
    text: r#"
  query GetProjects {
    getProjects {
      id
      name
      description
      deadline
    }
  }
"#,
};

/// One project with its tasks and RACI assignments.
///
/// Takes an `id` variable. Assignments reference users by email, not by
/// id; resolving them against the directory is the renderer's business.
pub const PROJECT_DETAIL: QueryDocument = QueryDocument {
    operation_name: "GetProjectDetails",
    text: r#"
  query GetProjectDetails($id: ID!) {
    getProjectById(id: $id) {
      id
      name
      description
      deadline
      tasks {
        id
        title
        status
        jiraTicketId
        raciAssignments {
          role
          user {
            email
          }
        }
      }
    }
  }
"#,
};

/// The full user directory, fetched without filters
pub const USER_DIRECTORY: QueryDocument = QueryDocument {
    operation_name: "GetUsers",
    text: r#"
  query GetUsers {
    getUsers {
      id
      email
    }
  }
"#,
};

/// Template picker entries for the project detail page (id + name only)
pub const WORKFLOW_TEMPLATE_LIST: QueryDocument = QueryDocument {
    operation_name: "GetWorkflowTemplates",
    text: r#"
  query GetWorkflowTemplates {
    getWorkflowTemplates {
      id
      name
    }
  }
"#,
};

/// Template summaries for the workflow catalog page
pub const WORKFLOW_CATALOG: QueryDocument = QueryDocument {
    operation_name: "GetWorkflowTemplates",
    text: r#"
  query GetWorkflowTemplates {
    getWorkflowTemplates {
      id
      name
      description
    }
  }
"#,
};

/// One template with its ordered steps. Takes an `id` variable.
pub const WORKFLOW_TEMPLATE_DETAIL: QueryDocument = QueryDocument {
    operation_name: "GetTemplateDetails",
    text: r#"
  query GetTemplateDetails($id: ID!) {
    getWorkflowTemplateById(id: $id) {
      id
      name
      description
      steps {
        id
        stepName
        stepOrder
        role
      }
    }
  }
"#,
};
