// HTTP-level tests for the FindMyBizName service

use actix_web::{http::header, http::header::HeaderMap, http::StatusCode, middleware, test, web, App};
use findmybizname::config::Settings;
use findmybizname::error::{handle_json_payload_error, INTERNAL_ERROR_MESSAGE};
use findmybizname::middleware::{rate_limit, security_headers, CONTENT_SECURITY_POLICY};
use findmybizname::models::Vocabulary;
use findmybizname::routes::{self, AppState};
use findmybizname::{NameGenerator, RateLimiter};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .wrap(middleware::from_fn(rate_limit))
                .wrap(security_headers())
                .configure(routes::configure_routes),
        )
        .await
    };
}

fn default_state() -> AppState {
    AppState::from_settings(&Settings::default())
}

fn generate(body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/generate-names")
        .set_json(body)
}

#[actix_web::test]
async fn test_health_is_always_healthy() {
    let mut state = default_state();
    state.environment = "production".to_string();
    let app = test_app!(state);

    for path in ["/health", "/api/health"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "production");
        assert_eq!(body["platform"], routes::PLATFORM);
        assert!(body["timestamp"].is_string());
        assert!(body["version"].is_string());
    }
}

#[actix_web::test]
async fn test_generate_default_batch() {
    let app = test_app!(default_state());

    let resp = test::call_service(&app, generate(json!({"keyword": "Smart"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let names = body["names"].as_array().expect("names array");
    assert_eq!(names.len(), 10);
    assert!(body["generated"].is_string());

    for suggestion in names {
        assert!(suggestion["name"].as_str().unwrap().contains("Smart"));
        assert!(suggestion["id"].as_str().map_or(false, |id| !id.is_empty()));

        let brand = suggestion["brandScore"].as_u64().unwrap();
        assert!((60..=100).contains(&brand), "brandScore {} out of range", brand);
        assert!(suggestion["memorabilityScore"].is_u64());
        assert!(suggestion["brandabilityScore"].is_u64());

        let domains = suggestion["domains"].as_array().unwrap();
        assert_eq!(domains.len(), 3);
        for d in domains {
            assert!(d["available"].is_boolean());
            assert!(d["price"].is_number());
        }
    }
}

#[actix_web::test]
async fn test_generate_respects_count() {
    let app = test_app!(default_state());

    let resp = test::call_service(&app, generate(json!({"keyword": "Cafe", "count": 4})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["names"].as_array().unwrap().len(), 4);

    for count in [0, 51] {
        let resp = test::call_service(&app, generate(json!({"keyword": "Cafe", "count": count})).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "count {}", count);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("count"));
    }
}

#[actix_web::test]
async fn test_generate_accepts_keywords_alias() {
    let app = test_app!(default_state());

    let resp = test::call_service(&app, generate(json!({"keywords": "Bloom"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    for suggestion in body["names"].as_array().unwrap() {
        assert!(suggestion["name"].as_str().unwrap().contains("Bloom"));
    }
}

#[actix_web::test]
async fn test_missing_keyword_is_rejected() {
    let app = test_app!(default_state());

    for body in [json!({}), json!({"keyword": ""}), json!({"keyword": "   "})] {
        let resp = test::call_service(&app, generate(body.clone()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {}", body);

        let err: Value = test::read_body_json(resp).await;
        assert_eq!(err["status_code"], 400);
        assert!(err["message"].as_str().unwrap().contains("keyword"));
    }
}

#[actix_web::test]
async fn test_malformed_json_is_rejected() {
    let app = test_app!(default_state());

    let req = test::TestRequest::post()
        .uri("/api/generate-names")
        .insert_header(header::ContentType::json())
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["error"], "invalid_json");
}

#[actix_web::test]
async fn test_internal_failure_is_generic() {
    let mut state = default_state();
    state.generator = NameGenerator::new(Vocabulary {
        prefixes: vec![],
        ..Vocabulary::default()
    });
    let app = test_app!(state);

    let resp = test::call_service(&app, generate(json!({"keyword": "Smart"})).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["message"], INTERNAL_ERROR_MESSAGE);
    assert!(!err.to_string().contains("prefixes"));
}

#[actix_web::test]
async fn test_check_domain() {
    let app = test_app!(default_state());

    let req = test::TestRequest::post()
        .uri("/api/check-domain")
        .set_json(json!({"domain": "smarthub.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["domain"], "smarthub.com");
    assert_eq!(body["registrar"], "FindMyBizName Registry");
    assert!(body["available"].is_boolean());

    let req = test::TestRequest::post()
        .uri("/api/check-domain")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_static_pages() {
    let app = test_app!(default_state());

    for (path, marker) in [
        ("/", "Business Name Generator"),
        ("/terms", "Terms of Service"),
        ("/privacy", "Privacy Policy"),
        ("/refund-policy", "Refund Policy"),
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "path {}", path);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(marker), "{} missing {:?}", path, marker);
    }
}

#[actix_web::test]
async fn test_unknown_paths_redirect_home() {
    let app = test_app!(default_state());

    for path in ["/nonexistent", "/deep/nested/path", "/api/unknown"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND, "path {}", path);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }
}

fn assert_security_headers(headers: &HeaderMap) {
    let expected = [
        ("content-security-policy", CONTENT_SECURITY_POLICY),
        ("x-content-type-options", "nosniff"),
        ("x-frame-options", "DENY"),
        ("referrer-policy", "no-referrer"),
        ("strict-transport-security", "max-age=15552000; includeSubDomains"),
        ("cross-origin-opener-policy", "same-origin"),
        ("cross-origin-resource-policy", "same-origin"),
        ("x-dns-prefetch-control", "off"),
        ("x-permitted-cross-domain-policies", "none"),
    ];
    for (name, value) in expected {
        let actual = headers.get(name).unwrap_or_else(|| panic!("missing header {}", name));
        assert_eq!(actual, value, "header {}", name);
    }
}

#[actix_web::test]
async fn test_security_headers_on_every_response() {
    // Empty prefixes make a valid generate call fail with a 500
    let mut state = default_state();
    state.generator = NameGenerator::new(Vocabulary {
        prefixes: vec![],
        ..Vocabulary::default()
    });
    let app = test_app!(state);

    let requests = vec![
        (test::TestRequest::get().uri("/").to_request(), StatusCode::OK),
        (test::TestRequest::get().uri("/health").to_request(), StatusCode::OK),
        (test::TestRequest::get().uri("/nonexistent").to_request(), StatusCode::FOUND),
        (generate(json!({})).to_request(), StatusCode::BAD_REQUEST),
        (
            test::TestRequest::post()
                .uri("/api/generate-names")
                .insert_header(header::ContentType::json())
                .set_payload("{not json")
                .to_request(),
            StatusCode::BAD_REQUEST,
        ),
        (
            generate(json!({"keyword": "Smart"})).to_request(),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (req, status) in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status);
        assert_security_headers(resp.headers());
    }
}

#[actix_web::test]
async fn test_wrong_method_redirects_home() {
    let app = test_app!(default_state());

    let requests = vec![
        test::TestRequest::get().uri("/api/generate-names").to_request(),
        test::TestRequest::get().uri("/api/check-domain").to_request(),
        test::TestRequest::post().uri("/health").to_request(),
        test::TestRequest::post().uri("/terms").to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }
}

#[actix_web::test]
async fn test_forwarded_for_does_not_reset_limit() {
    let mut state = default_state();
    state.limiter = Arc::new(RateLimiter::new(Duration::from_secs(900), 2));
    let limiter = state.limiter.clone();
    let app = test_app!(state);

    let mut statuses = Vec::new();
    for i in 0..5 {
        let req = test::TestRequest::get()
            .uri("/health")
            .peer_addr("10.0.0.1:4000".parse().unwrap())
            .insert_header(("X-Forwarded-For", format!("1.2.3.{}", i)))
            .to_request();
        statuses.push(test::call_service(&app, req).await.status());
    }

    assert_eq!(&statuses[..2], &[StatusCode::OK, StatusCode::OK]);
    assert!(statuses[2..].iter().all(|s| *s == StatusCode::TOO_MANY_REQUESTS));
    assert_eq!(limiter.tracked_keys().await, 1);
}

#[actix_web::test]
async fn test_trusted_proxy_keys_on_forwarded_for() {
    let mut state = default_state();
    state.limiter = Arc::new(
        RateLimiter::new(Duration::from_secs(900), 1).with_trust_proxy(true),
    );
    let app = test_app!(state);

    let via_proxy = |client: &str| {
        test::TestRequest::get()
            .uri("/health")
            .peer_addr("192.168.0.10:8080".parse().unwrap())
            .insert_header(("X-Forwarded-For", client.to_string()))
            .to_request()
    };

    let first = test::call_service(&app, via_proxy("1.2.3.4")).await;
    assert_eq!(first.status(), StatusCode::OK);
    let repeat = test::call_service(&app, via_proxy("1.2.3.4")).await;
    assert_eq!(repeat.status(), StatusCode::TOO_MANY_REQUESTS);
    let other = test::call_service(&app, via_proxy("5.6.7.8")).await;
    assert_eq!(other.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_rate_limit_per_client() {
    let mut state = default_state();
    state.limiter = Arc::new(RateLimiter::new(Duration::from_secs(900), 2));
    let app = test_app!(state);

    let from = |addr: &str| {
        test::TestRequest::get()
            .uri("/health")
            .peer_addr(addr.parse().unwrap())
            .to_request()
    };

    let first = test::call_service(&app, from("10.0.0.1:4000")).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(first.headers().get("ratelimit-limit").unwrap(), "2");
    assert_eq!(first.headers().get("ratelimit-remaining").unwrap(), "1");

    let second = test::call_service(&app, from("10.0.0.1:4000")).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(second.headers().get("ratelimit-remaining").unwrap(), "0");

    let third = test::call_service(&app, from("10.0.0.1:4000")).await;
    assert_eq!(third.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(third.headers().contains_key(header::RETRY_AFTER));
    assert!(third.headers().contains_key("content-security-policy"));
    let err: Value = test::read_body_json(third).await;
    assert_eq!(err["status_code"], 429);

    let other = test::call_service(&app, from("10.0.0.2:4000")).await;
    assert_eq!(other.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_repeated_calls_may_differ() {
    let app = test_app!(default_state());

    let mut batches = Vec::new();
    for _ in 0..5 {
        let resp = test::call_service(&app, generate(json!({"keyword": "Nova", "count": 20})).to_request()).await;
        let body: Value = test::read_body_json(resp).await;
        let names: Vec<String> = body["names"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect();
        batches.push(names);
    }

    assert!(batches.windows(2).any(|w| w[0] != w[1]));
}
