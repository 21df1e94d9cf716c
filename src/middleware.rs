use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header::{self, HeaderName, HeaderValue},
    middleware::{DefaultHeaders, Next},
    web, Error, HttpResponse,
};
use std::time::Duration;

use crate::models::ErrorResponse;
use crate::routes::AppState;
use crate::services::Decision;

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-inline'; \
    style-src 'self' 'unsafe-inline'; \
    img-src 'self' data:; \
    connect-src 'self'; \
    frame-ancestors 'none'; \
    base-uri 'self'; \
    form-action 'self'; \
    object-src 'none'";

/// Headers stamped on every response unless a handler already set them
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Content-Security-Policy", CONTENT_SECURITY_POLICY))
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("Strict-Transport-Security", "max-age=15552000; includeSubDomains"))
        .add(("Cross-Origin-Opener-Policy", "same-origin"))
        .add(("Cross-Origin-Resource-Policy", "same-origin"))
        .add(("X-DNS-Prefetch-Control", "off"))
        .add(("X-Permitted-Cross-Domain-Policies", "none"))
}

/// Per-client request ceiling
///
/// Uses the limiter from `AppState`; apps without state pass through.
pub async fn rate_limit<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let Some(limiter) = req
        .app_data::<web::Data<AppState>>()
        .map(|state| state.limiter.clone())
    else {
        return next.call(req).await.map(ServiceResponse::map_into_left_body);
    };

    let key = client_key(&req, limiter.trust_proxy());

    match limiter.check(&key).await {
        Decision::Allowed { limit, remaining, reset_after } => {
            let mut res = next.call(req).await?;
            let headers = res.headers_mut();
            headers.insert(HeaderName::from_static("ratelimit-limit"), HeaderValue::from(limit));
            headers.insert(
                HeaderName::from_static("ratelimit-remaining"),
                HeaderValue::from(remaining),
            );
            headers.insert(
                HeaderName::from_static("ratelimit-reset"),
                HeaderValue::from(ceil_secs(reset_after)),
            );
            Ok(res.map_into_left_body())
        }
        Decision::Limited { limit, retry_after } => {
            let retry_secs = ceil_secs(retry_after);
            tracing::warn!(
                "Rate limit exceeded for {} on {} (limit {}, retry in {}s)",
                key,
                req.path(),
                limit,
                retry_secs
            );
            let response = HttpResponse::TooManyRequests()
                .insert_header((header::RETRY_AFTER, retry_secs))
                .json(ErrorResponse {
                    error: "Too many requests".to_string(),
                    message: format!(
                        "Request limit of {} reached, try again in {} seconds",
                        limit, retry_secs
                    ),
                    status_code: 429,
                });
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}

/// Socket peer IP; forwarding headers only count behind a trusted proxy
fn client_key(req: &ServiceRequest, trust_proxy: bool) -> String {
    if trust_proxy {
        return req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();
    }
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn ceil_secs(d: Duration) -> u64 {
    d.as_secs() + u64::from(d.subsec_nanos() > 0)
}
