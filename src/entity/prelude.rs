//! Re-exports for convenient entity access

pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::course_instructors::{
    ActiveModel as CourseInstructorActiveModel, Entity as CourseInstructors,
    Model as CourseInstructorModel,
};
pub use super::course_students::{
    ActiveModel as CourseStudentActiveModel, Entity as CourseStudents, Model as CourseStudentModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
