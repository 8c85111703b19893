#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Binary entry point for the estate insights API server.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use estate_insights_ai::{ChatCompletionSummarizer, Summarizer};
use estate_insights_server::config::ServerConfig;
use estate_insights_server::{api_scope, AppState};

/// Builds the CORS policy from the configured origins; permissive when
/// none are configured.
fn build_cors(origins: &[String]) -> Cors {
    if origins.is_empty() {
        return Cors::permissive();
    }
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600);
    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ServerConfig::from_env();
    if config.ai.api_key.is_none() {
        log::warn!("GROQ_API_KEY not set; AI summaries will use the local fallback text");
    }

    let summarizer: Arc<dyn Summarizer> = Arc::new(ChatCompletionSummarizer::new(
        config.ai.api_key.clone(),
        config.ai.model.clone(),
        config.ai.base_url.clone(),
    ));

    let bind = (config.bind_addr.clone(), config.port);
    log::info!(
        "Starting server on {}:{} (dataset: {})",
        bind.0,
        bind.1,
        config.dataset_path.display()
    );

    let state = web::Data::new(AppState { config, summarizer });

    HttpServer::new(move || {
        let cors = build_cors(&state.config.cors_allowed_origins);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(api_scope())
    })
    .bind(bind)?
    .run()
    .await
}
