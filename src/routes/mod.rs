pub mod courses;

pub mod users;

pub use courses::configure_course_routes;
pub use users::configure_user_routes;
