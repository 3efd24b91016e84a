//! Typed path-parameter extractors
//!
//! Parsing failures answer with the uniform JSON error body instead of the
//! default plain-text 400.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error::InternalError};
use std::future::{Ready, ready};

use crate::models::ErrorResponse;

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal, $message:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let result = match req.match_info().query($param).parse::<i64>() {
                    Ok(id) => Ok($name(id)),
                    Err(_) => Err(InternalError::from_response(
                        $message,
                        HttpResponse::BadRequest().json(ErrorResponse::new($message)),
                    )
                    .into()),
                };
                ready(result)
            }
        }
    };
}

define_safe_id_extractor!(SafeCourseIdI64, "course_id", "Invalid course id");
define_safe_id_extractor!(SafeUserIdI64, "user_id", "Invalid user id");
