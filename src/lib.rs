// Library modules for the community platform's polls and content export
pub mod config;
pub mod models;
pub mod forms;
pub mod export;
pub mod db;
pub mod routes;
pub mod services;
pub mod auth;
pub mod error;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use config::AppConfig;

use std::sync::Arc;

// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: db::DatabaseClient,
    pub poll_service: Arc<services::PollService>,
    pub vote_service: Arc<services::VoteService>,
    pub export_service: Arc<services::ExportService>,
    pub auth_service: Arc<auth::AuthService>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let db = db::DatabaseClient::new(&config).await?;
        Ok(Self::with_database(config, db))
    }

    /// Wire the services over an already opened set of repositories
    pub fn with_database(config: AppConfig, db: db::DatabaseClient) -> Self {
        let auth_service = Arc::new(auth::AuthService::new(&config.jwt_secret, config.token_ttl_secs));
        let poll_service = Arc::new(services::PollService::new(db.poll_repo.clone()));
        let vote_service = Arc::new(services::VoteService::new(db.poll_repo.clone(), db.vote_repo.clone()));
        let export_service = Arc::new(services::ExportService::new(db.content_repo.clone()));

        Self {
            config,
            db,
            poll_service,
            vote_service,
            export_service,
            auth_service,
        }
    }
}
