use serde::Deserialize;

use super::entities::CourseRole;

// Create course request
//
// Fields are optional so the service layer can answer a missing field with
// a 400 and a field-specific message instead of a generic decode error.
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub code: Option<String>,
    pub name: Option<String>,
}

// Add a user to a course as student or instructor
#[derive(Debug, Deserialize)]
pub struct AddCourseUserRequest {
    pub user_id: Option<i64>,
    #[serde(rename = "type")]
    pub role: Option<CourseRole>,
}
