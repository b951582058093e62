use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::repository::query::SEARCH_LIMIT;
use crate::routes::render_template;

#[get("/")]
pub async fn show_citizens(tera: web::Data<Tera>) -> impl Responder {
    let mut context = Context::new();
    context.insert("search_limit", &SEARCH_LIMIT);

    render_template(&tera, "citizens.html", &context)
}
