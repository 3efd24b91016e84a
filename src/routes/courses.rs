use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::courses::requests::{AddCourseUserRequest, CreateCourseRequest};
use crate::services::CourseService;
use crate::utils::SafeCourseIdI64;

// Lazily constructed global CourseService instance
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP handlers
pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

pub async fn add_course_user(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    member_data: web::Json<AddCourseUserRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .add_course_user(&req, course_id.0, member_data.into_inner())
        .await
}

pub async fn add_assignment(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .add_assignment(&req, course_id.0, assignment_data.into_inner())
        .await
}

// Route configuration
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    // the root path serves the course list as well
    cfg.route("/", web::get().to(list_courses));
    cfg.service(
        web::scope("/api/courses")
            .service(
                web::resource("/")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/{course_id}/")
                    .route(web::get().to(get_course))
                    .route(web::delete().to(delete_course)),
            )
            .service(web::resource("/{course_id}/add/").route(web::post().to(add_course_user)))
            .service(
                web::resource("/{course_id}/assignment/").route(web::post().to(add_assignment)),
            ),
    );
}
