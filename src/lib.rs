//! FindMyBizName - marketing site service
//!
//! Serves the static marketing and legal pages, plus two mock JSON endpoints:
//! a placeholder business-name generator and a fabricated domain check.
//! Nothing behind them is real; every score and availability flag is random.

pub mod config;
pub mod core;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{NameGenerator, NameRule, GeneratorError};
pub use error::AppError;
pub use models::{NameSuggestion, TldAvailability, DomainCheck, Vocabulary};
pub use routes::AppState;
pub use services::RateLimiter;
