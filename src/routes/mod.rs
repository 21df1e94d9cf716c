// Route exports
pub mod api;
pub mod pages;

use actix_web::{web, Resource};
use std::sync::Arc;

use crate::config::Settings;
use crate::core::NameGenerator;
use crate::services::RateLimiter;

/// Platform name reported by the health endpoint
pub const PLATFORM: &str = "FindMyBizName - Complete Business Operating System";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub generator: NameGenerator,
    pub limiter: Arc<RateLimiter>,
    pub environment: String,
    pub default_count: u32,
    pub max_count: u32,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            generator: NameGenerator::new(settings.generator.vocabulary()),
            limiter: Arc::new(RateLimiter::from_settings(&settings.rate_limit)),
            environment: settings.environment.clone(),
            default_count: settings.generator.default_count,
            max_count: settings.generator.max_count,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure)
        .service(resource("/health").route(web::get().to(api::health_check)))
        .service(web::scope("/api").configure(api::configure))
        .default_service(web::to(pages::redirect_home));
}

/// Resource whose unmatched methods fall through to the home redirect
pub(crate) fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(pages::redirect_home))
}
