use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::ErrorResponse;
use crate::models::courses::requests::CreateCourseRequest;
use crate::services::field_missing;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if field_missing(course_data.code.as_deref()) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Provide course code")));
    }
    if field_missing(course_data.name.as_deref()) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Provide course name")));
    }

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course {} ({}) created", course.code, course.id);
            Ok(HttpResponse::Created().json(course))
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Course creation failed: {e}"))))
        }
    }
}
