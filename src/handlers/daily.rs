use crate::models::{AppState, DailyResponse};
use crate::utils::{parse_date_key, today_key};
use actix_web::{get, web, HttpResponse, Responder};

fn daily_response(data: &web::Data<AppState>, date_key: String) -> HttpResponse {
    let daily = data.daily_pool.word_for(&date_key);
    HttpResponse::Ok().json(DailyResponse {
        date_key,
        word: daily.word.clone(),
        definition: daily.definition.clone(),
    })
}

/// Today's shared word, UTC day boundary
#[get("/daily")]
pub async fn daily_today(data: web::Data<AppState>) -> impl Responder {
    daily_response(&data, today_key())
}

#[get("/daily/{date_key}")]
pub async fn daily_for_date(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let date_key = path.into_inner();
    if parse_date_key(&date_key).is_none() {
        return HttpResponse::BadRequest().body(format!("Invalid date key '{}'", date_key));
    }
    daily_response(&data, date_key)
}
