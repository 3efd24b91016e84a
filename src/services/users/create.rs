use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::models::ErrorResponse;
use crate::models::users::requests::CreateUserRequest;
use crate::services::field_missing;

pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    user_data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if field_missing(user_data.netid.as_deref()) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Provide user netid")));
    }
    if field_missing(user_data.name.as_deref()) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Provide user name")));
    }

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} ({}) created", user.netid, user.id);
            Ok(HttpResponse::Created().json(user))
        }
        Err(e) => {
            error!("User creation failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("User creation failed: {e}"))))
        }
    }
}
