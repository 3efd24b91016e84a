//! Payload error handlers registered on the Actix app

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::ErrorResponse;

pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        error::JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        error::JsonPayloadError::Deserialize(e) => format!("Invalid JSON body: {e}"),
        _ => format!("Invalid request payload: {err}"),
    };
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
    error::InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(format!("Invalid query string: {err}")));
    error::InternalError::from_response(err, response).into()
}
