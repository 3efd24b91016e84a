pub mod courses;
pub mod users;

pub use courses::CourseService;
pub use users::UserService;

/// A required string field counts as missing when absent or blank after trim.
pub(crate) fn field_missing(field: Option<&str>) -> bool {
    field.is_none_or(|v| v.trim().is_empty())
}
