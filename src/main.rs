use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, middleware, web};

use slidegen::config::AppConfig;
use slidegen::gateway::gemini::GeminiBackend;
use slidegen::gateway::{GenerationGateway, SharedGateway, SlideBackend};
use slidegen::session::{self, SessionStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Configuration error: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let backend = GeminiBackend::new(config.gemini.clone()).map_err(|e| {
        log::error!("Failed to initialise Gemini backend: {e}");
        std::io::Error::other(e)
    })?;
    let backend: Arc<dyn SlideBackend> = Arc::new(backend);
    let gateway: web::Data<SharedGateway> =
        web::Data::new(GenerationGateway::new(backend, config.language.clone()));

    let store = web::Data::new(SessionStore::new(Duration::from_secs(config.session_ttl_secs)));
    let secret_key = session::session_key(config.session_key.as_deref());

    log::info!(
        "Starting server at http://{} (model {}, language {})",
        config.bind_addr,
        config.gemini.model,
        config.language
    );

    HttpServer::new(move || {
        App::new()
            .wrap(session::middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(gateway.clone())
            .app_data(store.clone())
            .configure(slidegen::handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
