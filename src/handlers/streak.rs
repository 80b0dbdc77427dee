use crate::models::{StreakLoadRequest, StreakResolveRequest};
use crate::services::streak::{apply_load_decay, resolve};
use crate::utils::parse_date_key;
use actix_web::{post, web, HttpResponse, Responder};

/// Apply a round outcome to a client-held streak record
/// The service persists nothing; the updated record goes back to the caller
#[post("/streak/resolve")]
pub async fn streak_resolve(body: web::Json<StreakResolveRequest>) -> impl Responder {
    let body = body.into_inner();
    if parse_date_key(&body.date_key).is_none() {
        return HttpResponse::BadRequest().body(format!("Invalid date key '{}'", body.date_key));
    }
    HttpResponse::Ok().json(resolve(body.record, body.outcome, &body.date_key))
}

/// Missed-day decay, applied when a new day's puzzle is loaded
#[post("/streak/load")]
pub async fn streak_load(body: web::Json<StreakLoadRequest>) -> impl Responder {
    let body = body.into_inner();
    if parse_date_key(&body.date_key).is_none() {
        return HttpResponse::BadRequest().body(format!("Invalid date key '{}'", body.date_key));
    }
    HttpResponse::Ok().json(apply_load_decay(body.record, &body.date_key))
}
