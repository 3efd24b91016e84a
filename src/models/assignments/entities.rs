use serde::{Deserialize, Serialize};

// Assignment summary as embedded in course responses.
// due_date is a unix timestamp in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub due_date: i64,
}
