use actix_web::{web, App, HttpServer};
use clap::{Arg, Command};
use log::info;
use std::fs::OpenOptions;
use std::io;
use std::time::Duration;

mod handlers;
mod models;
mod services;
mod utils;

use models::AppState;
use services::catalog::FallbackCatalog;
use services::daily::DailyPool;
use services::generator::{HttpTextGenerator, TextGenerator};
use services::history::FileLedger;
use services::orchestrator::Orchestrator;
use services::theme::KeywordThemeMatcher;
use services::word_loader::load_optional_word_list;

// Function to initialize logging
fn init_logging(log_file: Option<&String>) {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .expect("Failed to open log file");

        env_logger::Builder::new()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let matches = Command::new("wordgend")
        .version("1.0")
        .about("Word selection and progression service for definition-guessing puzzles")
        .arg(
            Arg::new("generator-host")
                .long("generator-host")
                .num_args(1)
                .help("Base URL of the generative word backend (e.g., http://gend:8080); omit to serve from the fallback catalog only"),
        )
        .arg(
            Arg::new("generator-timeout")
                .long("generator-timeout")
                .num_args(1)
                .default_value("10")
                .help("Per-request generator timeout in seconds"),
        )
        .arg(
            Arg::new("word-deadline")
                .long("word-deadline")
                .num_args(1)
                .default_value("60")
                .help("Total deadline in seconds for one word generation round"),
        )
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("0.0.0.0:2346")
                .help("Specify the listen address (e.g., 0.0.0.0:2346)"),
        )
        .arg(
            Arg::new("history-dir")
                .long("history-dir")
                .num_args(1)
                .default_value("./data/history")
                .help("Directory holding the per-player used-word ledgers"),
        )
        .arg(
            Arg::new("words-file")
                .long("words-file")
                .num_args(1)
                .help("Extra tab-separated word/definition list merged into the daily pool"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .get_matches();

    let generator_host = matches.get_one::<String>("generator-host").cloned();
    let generator_timeout: u64 = matches
        .get_one::<String>("generator-timeout")
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);
    let word_deadline: u64 = matches
        .get_one::<String>("word-deadline")
        .and_then(|v| v.parse().ok())
        .unwrap_or(60);
    let listen_host = matches
        .get_one::<String>("listen-host")
        .expect("listen-host argument must always have a default value")
        .clone();
    let history_dir = matches.get_one::<String>("history-dir").unwrap();
    let words_file = matches.get_one::<String>("words-file");
    let log_file = matches.get_one::<String>("log-file");

    init_logging(log_file);

    let catalog = FallbackCatalog::builtin();
    let matcher = KeywordThemeMatcher::from_catalog(&catalog);

    let extra_words = load_optional_word_list(words_file);
    let daily_pool = DailyPool::build(&catalog, &extra_words)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let history = FileLedger::open(history_dir)?;

    let generator: Option<Box<dyn TextGenerator>> = match &generator_host {
        Some(host) => Some(Box::new(HttpTextGenerator::new(
            host,
            Duration::from_secs(generator_timeout),
        )?)),
        None => {
            info!("No generator host configured; serving catalog words only");
            None
        }
    };

    let engine = Orchestrator::new(
        generator,
        Box::new(history),
        catalog,
        Box::new(matcher),
        Duration::from_secs(word_deadline),
    );

    let state = AppState { engine, daily_pool };
    let shared_state = web::Data::new(state);

    info!("Listening on {}", listen_host);
    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .service(handlers::word::next_word)
            .service(handlers::word::clear_history)
            .service(handlers::daily::daily_today)
            .service(handlers::daily::daily_for_date)
            .service(handlers::hint::hint)
            .service(handlers::streak::streak_resolve)
            .service(handlers::streak::streak_load)
            .service(handlers::config::get_themes)
    })
    .bind(&listen_host)?
    .run()
    .await
}
