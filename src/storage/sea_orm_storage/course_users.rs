//! Course membership storage operations
//!
//! Students and instructors live in two separate join tables; the role only
//! selects which table an operation touches.

use super::SeaOrmStorage;
use crate::entity::course_instructors;
use crate::entity::course_students;
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{CourseSystemError, Result};
use crate::models::courses::entities::CourseRole;
use crate::models::users::entities::User;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// Add a user to a course under the given role
    pub async fn add_course_user_impl(
        &self,
        course_id: i64,
        user_id: i64,
        role: CourseRole,
    ) -> Result<()> {
        match role {
            CourseRole::Student => {
                let model = course_students::ActiveModel {
                    course_id: Set(course_id),
                    user_id: Set(user_id),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    CourseSystemError::database_operation(format!(
                        "Failed to enroll student: {e}"
                    ))
                })?;
            }
            CourseRole::Instructor => {
                let model = course_instructors::ActiveModel {
                    course_id: Set(course_id),
                    user_id: Set(user_id),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    CourseSystemError::database_operation(format!(
                        "Failed to add instructor: {e}"
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// List the students of a course
    pub(crate) async fn list_course_students_impl(&self, course_id: i64) -> Result<Vec<User>> {
        let user_ids: Vec<i64> = course_students::Entity::find()
            .filter(course_students::Column::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!(
                    "Failed to query course students: {e}"
                ))
            })?
            .into_iter()
            .map(|m| m.user_id)
            .collect();

        self.load_users_by_ids(user_ids).await
    }

    /// List the instructors of a course
    pub(crate) async fn list_course_instructors_impl(&self, course_id: i64) -> Result<Vec<User>> {
        let user_ids: Vec<i64> = course_instructors::Entity::find()
            .filter(course_instructors::Column::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!(
                    "Failed to query course instructors: {e}"
                ))
            })?
            .into_iter()
            .map(|m| m.user_id)
            .collect();

        self.load_users_by_ids(user_ids).await
    }

    async fn load_users_by_ids(&self, user_ids: Vec<i64>) -> Result<Vec<User>> {
        if user_ids.is_empty() {
            return Ok(vec![]);
        }

        let users = Users::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .order_by_asc(UserColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                CourseSystemError::database_operation(format!("Failed to query users: {e}"))
            })?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }
}
