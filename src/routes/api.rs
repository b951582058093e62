use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::citizen::SearchCriteria;
use crate::dto::citizens::{CitizenListing, CitizensQuery, SetArrestedResponse};
use crate::forms::citizens::UpdateCitizenForm;
use crate::repository::DieselRepository;
use crate::routes::run_blocking;
use crate::services::citizens as citizen_service;

#[get("/api/citizens")]
pub async fn api_citizens(
    params: web::Query<CitizensQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let criteria = SearchCriteria::from(params.into_inner());
    let repo = repo.into_inner();

    let listing =
        match web::block(move || citizen_service::list_citizens(repo.as_ref(), &criteria)).await {
            Ok(listing) => listing,
            Err(err) => {
                log::error!("Citizen search task failed: {err}");
                CitizenListing::failed(err.to_string())
            }
        };

    if listing.is_failure() {
        HttpResponse::InternalServerError().json(listing)
    } else {
        HttpResponse::Ok().json(listing)
    }
}

#[post("/update")]
pub async fn update_citizen(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateCitizenForm>,
) -> impl Responder {
    let repo = repo.into_inner();

    match run_blocking(move || citizen_service::update_citizen(repo.as_ref(), form)).await {
        Ok(toggle) => HttpResponse::Ok().json(SetArrestedResponse::from(toggle)),
        Err(err) => HttpResponse::InternalServerError().json(SetArrestedResponse::failed(err)),
    }
}
