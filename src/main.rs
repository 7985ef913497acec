pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::candidate;

use crate::candidate::adapter::outgoing::{CandidateRepositoryInMemory, ResumeStorageLocal};
use crate::candidate::application::CandidateUseCases;
use crate::candidate::domain::policies::ResumeUploadPolicy;
use crate::config::AppConfig;
use crate::shared::api::{custom_path_config, custom_query_config};

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub candidate: CandidateUseCases,
    pub upload_policy: ResumeUploadPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env();

    let storage = ResumeStorageLocal::new(&config.upload_dir);
    storage.ensure_root().await?;
    info!(upload_dir = %storage.root().display(), "Upload directory ready");

    // Records live in memory only and are lost on restart.
    let repository = CandidateRepositoryInMemory::new();

    let state = AppState {
        candidate: CandidateUseCases::new(repository, storage),
        upload_policy: config.upload_policy(),
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(custom_query_config());
    cfg.app_data(custom_path_config());
    // Health
    cfg.service(crate::health::health);
    // Candidates
    cfg.service(crate::candidate::adapter::incoming::web::routes::create_candidate_handler);
    cfg.service(crate::candidate::adapter::incoming::web::routes::get_candidates_handler);
    cfg.service(crate::candidate::adapter::incoming::web::routes::get_candidate_by_id_handler);
    cfg.service(crate::candidate::adapter::incoming::web::routes::delete_candidate_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
