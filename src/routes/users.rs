use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::users::requests::CreateUserRequest;
use crate::services::UserService;
use crate::utils::SafeUserIdI64;

// Lazily constructed global UserService instance
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP handlers
pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(&req, user_data.into_inner()).await
}

pub async fn get_user(req: HttpRequest, user_id: SafeUserIdI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(&req, user_id.0).await
}

// Route configuration
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(web::resource("/").route(web::post().to(create_user)))
            .service(web::resource("/{user_id}/").route(web::get().to(get_user))),
    );
}
