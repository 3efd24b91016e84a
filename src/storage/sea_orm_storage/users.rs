//! User storage operations

use super::SeaOrmStorage;
use crate::entity::course_instructors;
use crate::entity::course_students;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::users::{ActiveModel, Entity as Users};
use crate::errors::{CourseSystemError, Result};
use crate::models::users::{requests::CreateUserRequest, responses::UserResponse};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// Create a user
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<UserResponse> {
        let name = req
            .name
            .ok_or_else(|| CourseSystemError::validation("name must be set before create_user"))?;
        let netid = req
            .netid
            .ok_or_else(|| CourseSystemError::validation("netid must be set before create_user"))?;

        let model = ActiveModel {
            name: Set(name),
            netid: Set(netid),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            CourseSystemError::database_operation(format!("Failed to create user: {e}"))
        })?;

        Ok(UserResponse {
            id: result.id,
            name: result.name,
            netid: result.netid,
            courses: vec![],
        })
    }

    /// Get a user by ID together with every course the user is enrolled in
    /// or teaches
    pub async fn get_user_by_id_impl(&self, user_id: i64) -> Result<Option<UserResponse>> {
        let user = Users::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!("Failed to query user: {e}"))
            })?;

        let Some(user) = user else {
            return Ok(None);
        };

        let enrolled_ids: Vec<i64> = course_students::Entity::find()
            .filter(course_students::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!(
                    "Failed to query user enrollments: {e}"
                ))
            })?
            .into_iter()
            .map(|m| m.course_id)
            .collect();

        let teaching_ids: Vec<i64> = course_instructors::Entity::find()
            .filter(course_instructors::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!(
                    "Failed to query user teaching assignments: {e}"
                ))
            })?
            .into_iter()
            .map(|m| m.course_id)
            .collect();

        let course_ids: Vec<i64> = enrolled_ids.into_iter().chain(teaching_ids).collect();

        let courses = if course_ids.is_empty() {
            vec![]
        } else {
            // is_in deduplicates ids shared between the two join tables
            Courses::find()
                .filter(CourseColumn::Id.is_in(course_ids))
                .order_by_asc(CourseColumn::Id)
                .all(&self.db)
                .await
                .map_err(|e| {
                    CourseSystemError::database_operation(format!(
                        "Failed to query user courses: {e}"
                    ))
                })?
                .into_iter()
                .map(|m| m.into_course())
                .collect()
        };

        Ok(Some(UserResponse {
            id: user.id,
            name: user.name,
            netid: user.netid,
            courses,
        }))
    }
}
