use actix_web::{middleware, web, App, HttpServer};
use findmybizname::config::Settings;
use findmybizname::error::handle_json_payload_error;
use findmybizname::middleware::{rate_limit, security_headers};
use findmybizname::routes::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings);

    info!("Starting FindMyBizName site service...");

    let state = web::Data::new(AppState::from_settings(&settings));

    info!(
        "Rate limit: {} requests per {}s per client",
        state.limiter.max_requests(),
        state.limiter.window().as_secs()
    );

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!(
        "Starting HTTP server on {}:{} (environment: {})",
        host, port, settings.environment
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(middleware::from_fn(rate_limit))
            .wrap(security_headers())
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))
    .map_err(|e| {
        error!("Failed to bind {}:{}: {}", settings.server.host, port, e);
        e
    })?;

    server.run().await
}
