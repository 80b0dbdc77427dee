use crate::models::{AppState, WordQuery, WordResponse};
use actix_web::{delete, get, web, HttpResponse, Responder};
use log::{error, warn};

#[get("/word")]
pub async fn next_word(
    data: web::Data<AppState>,
    query: web::Query<WordQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let level = query.level.unwrap_or(1);

    // The generator client blocks, so the whole round runs off the executor
    let result = web::block(move || {
        data.engine.next_word(
            level,
            query.theme.as_deref(),
            query.player_id.as_deref(),
            query.previous_word.as_deref(),
        )
    })
    .await;

    match result {
        Ok(Ok(picked)) => HttpResponse::Ok().json(WordResponse {
            word: picked.word,
            definition: picked.definition,
            source: picked.source,
        }),
        Ok(Err(e)) => {
            // Only reachable with an empty catalog, which is a build defect
            error!("Word selection failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
        Err(e) => {
            error!("Word selection task failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/history/{player_id}")]
pub async fn clear_history(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let player_id = path.into_inner();
    match data.engine.history().clear(&player_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => {
            warn!("Failed to clear history for {}: {}", player_id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
