use actix_web::{HttpResponse, Responder, get, post, web};

use crate::config_store::FileConfigStore;
use crate::dto::settings::ActionResponse;
use crate::forms::settings::DbConfigForm;
use crate::repository::DieselRepository;
use crate::routes::run_blocking;
use crate::services::settings as settings_service;

#[get("/api/db-config")]
pub async fn get_db_config(store: web::Data<FileConfigStore>) -> impl Responder {
    HttpResponse::Ok().json(settings_service::get_config(store.get_ref()))
}

#[post("/api/db-config")]
pub async fn update_db_config(
    store: web::Data<FileConfigStore>,
    web::Json(form): web::Json<DbConfigForm>,
) -> impl Responder {
    let store = store.into_inner();

    match run_blocking(move || settings_service::update_config(store.as_ref(), form)).await {
        Ok(()) => {
            HttpResponse::Ok().json(ActionResponse::ok("Configuration saved successfully"))
        }
        Err(err) => HttpResponse::InternalServerError().json(ActionResponse::failed(err)),
    }
}

#[post("/api/test-connection")]
pub async fn test_db_connection(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<DbConfigForm>,
) -> impl Responder {
    let repo = repo.into_inner();

    match run_blocking(move || settings_service::test_connection(repo.as_ref(), form)).await {
        Ok(message) => HttpResponse::Ok().json(ActionResponse::ok(message)),
        Err(err) => HttpResponse::InternalServerError().json(ActionResponse::failed(err)),
    }
}
