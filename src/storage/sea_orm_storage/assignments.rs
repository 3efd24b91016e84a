//! Assignment storage operations

use super::SeaOrmStorage;
use crate::entity::assignments::ActiveModel;
use crate::entity::courses::Entity as Courses;
use crate::errors::{CourseSystemError, Result};
use crate::models::assignments::{
    requests::CreateAssignmentRequest, responses::AssignmentResponse,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// Create an assignment under a course
    pub async fn create_assignment_impl(
        &self,
        course_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<AssignmentResponse> {
        let title = req.title.ok_or_else(|| {
            CourseSystemError::validation("title must be set before create_assignment")
        })?;
        let due_date = req.due_date.ok_or_else(|| {
            CourseSystemError::validation("due_date must be set before create_assignment")
        })?;

        let course = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!("Failed to query course: {e}"))
            })?
            .ok_or_else(|| CourseSystemError::not_found("Course not found"))?;

        let model = ActiveModel {
            title: Set(title),
            due_date: Set(due_date),
            course_id: Set(course_id),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            CourseSystemError::database_operation(format!("Failed to create assignment: {e}"))
        })?;

        Ok(AssignmentResponse {
            id: result.id,
            title: result.title,
            due_date: result.due_date,
            course: course.into_course(),
        })
    }
}
