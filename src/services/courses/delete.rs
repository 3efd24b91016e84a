use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::ErrorResponse;

pub async fn delete_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // fetch first so the deleted representation can be returned
    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Course not found")));
        }
        Err(e) => {
            error!("Failed to get course {}: {}", course_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to get course: {e}"))));
        }
    };

    match storage.delete_course(course_id).await {
        Ok(true) => {
            info!("Course {} ({}) deleted", course.code, course_id);
            Ok(HttpResponse::Ok().json(course))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Course not found"))),
        Err(e) => {
            error!("Failed to delete course {}: {}", course_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to delete course: {e}"))))
        }
    }
}
