use crate::models::AppState;
use actix_web::{get, web, HttpResponse, Responder};

/// Curated themes clients can request words for
#[get("/themes")]
pub async fn get_themes(data: web::Data<AppState>) -> impl Responder {
    let themes: Vec<&str> = data.engine.catalog().themes().to_vec();
    HttpResponse::Ok().json(themes)
}
