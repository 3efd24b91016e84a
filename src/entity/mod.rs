//! SeaORM entity definitions
//!
//! These entities are used for database access and are kept separate from the
//! business entities in the `models` module. The storage layer performs CRUD
//! through them and converts the results into business models.

pub mod prelude;

pub mod assignments;
pub mod course_instructors;
pub mod course_students;
pub mod courses;
pub mod users;
