use crate::models::{HintQuery, HintResponse};
use crate::services::hint::reveal_letters;
use crate::utils::normalize_word;
use actix_web::{get, web, HttpResponse, Responder};
use std::collections::HashSet;

fn letter_set(raw: Option<&String>) -> HashSet<char> {
    raw.map(|s| {
        s.chars()
            .flat_map(|c| c.to_lowercase())
            .filter(|c| c.is_ascii_lowercase())
            .collect()
    })
    .unwrap_or_default()
}

#[get("/hint")]
pub async fn hint(query: web::Query<HintQuery>) -> impl Responder {
    let word = normalize_word(&query.word);
    if word.is_empty() {
        return HttpResponse::BadRequest().body("A word is required for a hint");
    }

    let incorrect = letter_set(query.incorrect.as_ref());
    let already_revealed = letter_set(query.revealed.as_ref());
    let reveal = query.reveal.unwrap_or(1);

    let result = reveal_letters(&word, &incorrect, &already_revealed, reveal);
    HttpResponse::Ok().json(HintResponse {
        hint: result.masked,
        revealed: result.revealed.into_iter().collect(),
    })
}
