use serde::{Deserialize, Serialize};
use crate::models::domain::NameSuggestion;

/// Response for the generate names endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateNamesResponse {
    pub names: Vec<NameSuggestion>,
    pub generated: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub platform: String,
    pub environment: String,
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
