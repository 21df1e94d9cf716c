// Service exports
pub mod rate_limiter;

pub use rate_limiter::{Decision, RateLimiter};
