use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use padel_engine::config::Settings;
use padel_engine::core::Engine;
use padel_engine::routes::{self, AppState};
use padel_engine::services::{OnboardingStore, RatingCache};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle path parameter errors
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 400,
    }
    .into()
}

/// Initialize tracing; LOG_LEVEL / LOG_FORMAT override the configured values
fn init_logging(level: &str, format: &str) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| level.to_string());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| format.to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the configured level applies
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::other(format!("Configuration error: {}", e)));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting padel engine service...");

    let params = match settings.engine.params() {
        Ok(params) => params,
        Err(e) => {
            error!("Invalid engine configuration: {}", e);
            return Err(std::io::Error::other(format!("Configuration error: {}", e)));
        }
    };

    let engine = Engine::new(params);

    info!("Engine initialized with params: {:?}", params);

    let rating_cache = RatingCache::new(
        engine,
        settings.cache.rating_capacity,
        settings.cache.rating_ttl_secs,
    );
    let onboarding = OnboardingStore::new(
        settings.cache.onboarding_capacity,
        settings.cache.onboarding_ttl_secs,
    );

    info!(
        "Caches initialized (ratings: {} entries / {}s, onboarding: {} drafts / {}s)",
        settings.cache.rating_capacity,
        settings.cache.rating_ttl_secs,
        settings.cache.onboarding_capacity,
        settings.cache.onboarding_ttl_secs
    );

    // Build application state
    let app_state = AppState {
        engine,
        rating_cache,
        onboarding,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
