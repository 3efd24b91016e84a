use serde::Deserialize;

// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub netid: Option<String>,
}
