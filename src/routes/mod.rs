//! Actix-Web handlers translating HTTP requests into service calls.

use std::fmt::Display;

use actix_web::error::{InternalError, JsonPayloadError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse, web};
use tera::{Context, Tera};

use crate::dto::citizens::SetArrestedResponse;
use crate::dto::settings::ActionResponse;

pub mod api;
pub mod main;
pub mod settings;

/// Renders a Tera template into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Runs a synchronous service call on the blocking thread pool.
///
/// Service errors and pool failures both come back as their display text.
pub async fn run_blocking<F, T, E>(call: F) -> Result<T, String>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Display + Send + 'static,
{
    match web::block(call).await {
        Ok(result) => result.map_err(|err| err.to_string()),
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            Err(err.to_string())
        }
    }
}

/// Answers a rejected JSON body with the settings failure envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON payload: {err}");
    let response = HttpResponse::BadRequest().json(ActionResponse::failed(err.to_string()));
    InternalError::from_response(err, response).into()
}

/// Answers a rejected form body with the toggle failure envelope.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected form payload: {err}");
    let response = HttpResponse::BadRequest().json(SetArrestedResponse::failed(err.to_string()));
    InternalError::from_response(err, response).into()
}
