use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest keyword accepted by the generator; keep in step with the `max` below
pub const MAX_KEYWORD_LEN: u64 = 64;

/// Request to generate business names
///
/// `count` is bounds-checked against the configured maximum by the handler,
/// since that limit is only known at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateNamesRequest {
    #[validate(length(min = 1, max = 64, message = "keyword is required and must be 1-64 characters"))]
    #[serde(default, alias = "keywords", deserialize_with = "trimmed")]
    pub keyword: String,
    #[serde(default)]
    pub count: Option<u32>,
}

/// Request to check a single domain
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckDomainRequest {
    #[validate(length(min = 1, max = 253, message = "domain is required and must be at most 253 characters"))]
    #[serde(default, deserialize_with = "trimmed")]
    pub domain: String,
}

/// Accepts a string or null and trims surrounding whitespace
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()).unwrap_or_default())
}
