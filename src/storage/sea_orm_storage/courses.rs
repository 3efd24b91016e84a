//! Course storage operations

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::courses::{ActiveModel, Entity as Courses, Model as CourseModel};
use crate::errors::{CourseSystemError, Result};
use crate::models::courses::{
    requests::CreateCourseRequest,
    responses::{CourseListResponse, CourseResponse},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// Create a course
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<CourseResponse> {
        let code = req
            .code
            .ok_or_else(|| CourseSystemError::validation("code must be set before create_course"))?;
        let name = req
            .name
            .ok_or_else(|| CourseSystemError::validation("name must be set before create_course"))?;

        let model = ActiveModel {
            code: Set(code),
            name: Set(name),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            CourseSystemError::database_operation(format!("Failed to create course: {e}"))
        })?;

        // a fresh course has no relations yet
        Ok(CourseResponse {
            id: result.id,
            code: result.code,
            name: result.name,
            assignments: vec![],
            instructors: vec![],
            students: vec![],
        })
    }

    /// Get a course by ID with its relations resolved
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<CourseResponse>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!("Failed to query course: {e}"))
            })?;

        match result {
            Some(course) => Ok(Some(self.load_course_detail(course).await?)),
            None => Ok(None),
        }
    }

    /// List all courses with their relations resolved
    pub async fn list_courses_impl(&self) -> Result<CourseListResponse> {
        let courses = Courses::find()
            .order_by_asc(crate::entity::courses::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!("Failed to list courses: {e}"))
            })?;

        let mut items = Vec::with_capacity(courses.len());
        for course in courses {
            items.push(self.load_course_detail(course).await?);
        }

        Ok(CourseListResponse { courses: items })
    }

    /// Delete a course; the schema cascades assignments and memberships
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!("Failed to delete course: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Resolve assignments and rosters for a course row
    pub(crate) async fn load_course_detail(&self, course: CourseModel) -> Result<CourseResponse> {
        let assignments = Assignments::find()
            .filter(AssignmentColumn::CourseId.eq(course.id))
            .order_by_asc(AssignmentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!(
                    "Failed to query course assignments: {e}"
                ))
            })?;

        let students = self.list_course_students_impl(course.id).await?;
        let instructors = self.list_course_instructors_impl(course.id).await?;

        Ok(CourseResponse {
            id: course.id,
            code: course.code,
            name: course.name,
            assignments: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            instructors,
            students,
        })
    }
}
