pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod scorer;
pub mod services;
pub mod telemetry;

pub use config::Config;

use services::AnalysisService;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: AnalysisService,
}
