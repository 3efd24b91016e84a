use serde::{Deserialize, Serialize};

// User summary as embedded in course rosters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub netid: String,
}
