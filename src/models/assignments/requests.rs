use serde::Deserialize;

// Create assignment request; the target course comes from the URL path
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: Option<String>,
    pub due_date: Option<i64>,
}
