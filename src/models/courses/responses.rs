use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::Assignment;
use crate::models::users::entities::User;

// Full course representation with its relations resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub assignments: Vec<Assignment>,
    pub instructors: Vec<User>,
    pub students: Vec<User>,
}

// Course list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseResponse>,
}
