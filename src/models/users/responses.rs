use serde::{Deserialize, Serialize};

use crate::models::courses::entities::Course;

// Full user representation including every course the user is enrolled in
// or teaches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub netid: String,
    pub courses: Vec<Course>,
}
