use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::ErrorResponse;
use crate::models::courses::requests::AddCourseUserRequest;

pub async fn add_course_user(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    member_data: AddCourseUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // the course must exist before anything else is validated
    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Course not found")));
        }
        Err(e) => {
            error!("Failed to get course {}: {}", course_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to get course: {e}"))));
        }
    }

    let Some(user_id) = member_data.user_id else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Provide user id")));
    };
    let Some(role) = member_data.role else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Provide type of user")));
    };

    match storage.get_user_by_id(user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("User not found")));
        }
        Err(e) => {
            error!("Failed to get user {}: {}", user_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to get user: {e}"))));
        }
    }

    if let Err(e) = storage.add_course_user(course_id, user_id, role).await {
        error!(
            "Failed to add user {} to course {} as {}: {}",
            user_id, course_id, role, e
        );
        return Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
            "Failed to add user to course: {e}"
        ))));
    }

    info!("User {} added to course {} as {}", user_id, course_id, role);

    // answer with the updated course
    match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(course)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Course not found"))),
        Err(e) => {
            error!("Failed to reload course {}: {}", course_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to get course: {e}"))))
        }
    }
}
