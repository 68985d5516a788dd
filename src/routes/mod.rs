// Route exports
pub mod api;
pub mod errors;
pub mod views;

use actix_web::web;

use crate::config::Settings;
use crate::core::{CandidateFilter, ThemeStore};
use crate::services::FileIntake;

pub use errors::{handle_json_payload_error, handle_query_payload_error, JsonError};

/// Application state shared across all handlers
///
/// Each component is internally reference counted, so cloning the state per
/// worker shares a single instance of each.
#[derive(Debug, Clone)]
pub struct AppState {
    pub candidates: CandidateFilter,
    pub theme: ThemeStore,
    pub intake: FileIntake,
}

impl AppState {
    pub fn new(candidates: CandidateFilter, theme: ThemeStore, intake: FileIntake) -> Self {
        Self {
            candidates,
            theme,
            intake,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            CandidateFilter::with_seed_candidates(),
            ThemeStore::new(settings.theme.default),
            FileIntake::new(settings.intake.options()),
        )
    }
}

/// Register the views, the `/api/v1` scope and the payload error handlers
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .service(web::scope("/api/v1").configure(api::configure))
        .configure(views::configure);
}
