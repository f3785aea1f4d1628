use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use volunteer_match::config::{LoggingSettings, Settings};
use volunteer_match::core::Matcher;
use volunteer_match::error::{handle_json_payload_error, handle_query_payload_error};
use volunteer_match::routes::{self, matches::AppState};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings.logging);

    info!("Starting Volunteer Match service...");
    info!("Configuration loaded successfully");

    if settings.matching.max_distance_km < 0.0 {
        error!("matching.max_distance_km must not be negative, got {}", settings.matching.max_distance_km);
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "matching.max_distance_km must not be negative",
        ));
    }

    let matcher = Matcher::with_default_weights();

    info!("Matcher initialized with weights: {:?}", matcher.weights());

    // Build application state
    let app_state = AppState::new(matcher, settings.matching.clone());

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
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
