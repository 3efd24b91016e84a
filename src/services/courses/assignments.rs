use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::ErrorResponse;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::services::field_missing;

pub async fn add_assignment(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    assignment_data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    if field_missing(assignment_data.title.as_deref()) {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new("Provide title for assignment"))
        );
    }
    if assignment_data.due_date.is_none() {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new("Provide due date for assignment"))
        );
    }

    match storage.create_assignment(course_id, assignment_data).await {
        Ok(assignment) => {
            info!(
                "Assignment {} ({}) created under course {}",
                assignment.title, assignment.id, course_id
            );
            Ok(HttpResponse::Created().json(assignment))
        }
        Err(e) => {
            error!("Assignment creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Assignment creation failed: {e}"
            ))))
        }
    }
}
