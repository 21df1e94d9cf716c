use actix_web::{http::header, web, HttpResponse};

use crate::routes::resource;

const HOME: &str = include_str!("../../assets/home.html");
const TERMS: &str = include_str!("../../assets/terms.html");
const PRIVACY: &str = include_str!("../../assets/privacy.html");
const REFUND_POLICY: &str = include_str!("../../assets/refund-policy.html");

/// Configure the static HTML pages
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(resource("/").route(web::get().to(home)))
        .service(resource("/terms").route(web::get().to(terms)))
        .service(resource("/privacy").route(web::get().to(privacy)))
        .service(resource("/refund-policy").route(web::get().to(refund_policy)));
}

fn html(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

async fn home() -> HttpResponse {
    html(HOME)
}

async fn terms() -> HttpResponse {
    html(TERMS)
}

async fn privacy() -> HttpResponse {
    html(PRIVACY)
}

async fn refund_policy() -> HttpResponse {
    html(REFUND_POLICY)
}

/// Catch-all: anything unknown lands on the home page
pub async fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
