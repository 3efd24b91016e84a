use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::ErrorResponse;

pub async fn get_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(user)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("User not found"))),
        Err(e) => {
            error!("Failed to get user {}: {}", user_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to get user: {e}"))))
        }
    }
}
