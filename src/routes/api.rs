use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::check_domain;
use crate::error::AppError;
use crate::models::{CheckDomainRequest, GenerateNamesRequest, GenerateNamesResponse, HealthResponse};
use crate::routes::{resource, AppState, PLATFORM};

/// Configure the JSON API routes (mounted under `/api`)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(resource("/health").route(web::get().to(health_check)))
        .service(resource("/generate-names").route(web::post().to(generate_names)))
        .service(resource("/check-domain").route(web::post().to(check_domain_handler)));
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        platform: PLATFORM.to_string(),
        environment: state.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Generate business names endpoint
///
/// POST /api/generate-names
///
/// Request body:
/// ```json
/// {
///   "keyword": "string",
///   "count": 10
/// }
/// ```
async fn generate_names(
    state: web::Data<AppState>,
    req: web::Json<GenerateNamesRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| AppError::from_validation(&e))?;

    let count = req.count.unwrap_or(state.default_count);
    if count == 0 || count > state.max_count {
        return Err(AppError::Validation(format!(
            "count: must be between 1 and {}",
            state.max_count
        )));
    }

    let names = {
        let mut rng = rand::thread_rng();
        state.generator.generate(&req.keyword, count as usize, &mut rng)?
    };

    tracing::info!(
        "Generated {} names for keyword {:?} ({} with a free domain)",
        names.len(),
        req.keyword,
        names.iter().filter(|n| n.any_available()).count()
    );

    Ok(HttpResponse::Ok().json(GenerateNamesResponse {
        names,
        generated: chrono::Utc::now(),
    }))
}

/// Mock domain availability endpoint
///
/// POST /api/check-domain
async fn check_domain_handler(req: web::Json<CheckDomainRequest>) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| AppError::from_validation(&e))?;

    let result = check_domain(&req.domain, &mut rand::thread_rng());
    tracing::debug!("Domain check for {}: available={}", result.domain, result.available);

    Ok(HttpResponse::Ok().json(result))
}
