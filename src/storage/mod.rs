use std::sync::Arc;

use crate::models::{
    assignments::{requests::CreateAssignmentRequest, responses::AssignmentResponse},
    courses::{
        entities::CourseRole,
        requests::CreateCourseRequest,
        responses::{CourseListResponse, CourseResponse},
    },
    users::{requests::CreateUserRequest, responses::UserResponse},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Course management
    // Create a course
    async fn create_course(&self, course: CreateCourseRequest) -> Result<CourseResponse>;
    // List all courses with their relations resolved
    async fn list_courses(&self) -> Result<CourseListResponse>;
    // Get a course by ID
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<CourseResponse>>;
    // Delete a course; assignments and memberships cascade
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// User management
    // Create a user
    async fn create_user(&self, user: CreateUserRequest) -> Result<UserResponse>;
    // Get a user by ID, including the courses they belong to
    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<UserResponse>>;

    /// Course membership
    // Add a user to a course as student or instructor
    async fn add_course_user(&self, course_id: i64, user_id: i64, role: CourseRole) -> Result<()>;

    /// Assignment management
    // Create an assignment under a course
    async fn create_assignment(
        &self,
        course_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<AssignmentResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// Build a storage instance against an explicit database URL.
/// Used by tests to get an isolated in-memory database.
pub async fn create_storage_with_url(url: &str) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_with_url(url).await?;
    Ok(Arc::new(storage))
}
