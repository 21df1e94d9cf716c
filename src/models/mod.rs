// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{NameSuggestion, TldAvailability, DomainCheck, Vocabulary};
pub use requests::{GenerateNamesRequest, CheckDomainRequest};
pub use responses::{GenerateNamesResponse, HealthResponse, ErrorResponse};
