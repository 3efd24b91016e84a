use serde::{Deserialize, Serialize};

use crate::models::courses::entities::Course;

// Assignment with its owning course resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub id: i64,
    pub title: String,
    pub due_date: i64,
    pub course: Course,
}
