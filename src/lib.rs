pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod middleware;
pub mod server;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    #[error("Engine error: {0}")]
    Engine(#[from] engine::EngineError),
    #[error("Server error: {0}")]
    Server(String),
}

pub async fn run(config_path: &str) -> Result<(), ServerError> {
    let config = config::Config::from_file(config_path)?;

    info!("Using config file: {}", config_path);

    info!("Loading catalog from {}", config.catalog.path);
    let catalog = catalog::CatalogStore::load(&config.catalog.path)?;
    info!("Catalog loaded: {} records", catalog.len());

    let recommender = engine::Recommender::build(catalog, config.engine.max_terms)?;
    info!(
        "Similarity index ready: {} terms, {}x{} matrix",
        recommender.vocabulary().len(),
        recommender.similarity().len(),
        recommender.similarity().len()
    );
    let recommender = Arc::new(recommender);

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let has_tls = config.listen.tlscert.is_some() && config.listen.tlskey.is_some();

    let state = server::AppState::new(config.clone(), recommender);
    let app = server::build_router(state);

    if has_tls {
        let cert_path = config.listen.tlscert.as_ref().unwrap();
        let key_path = config.listen.tlskey.as_ref().unwrap();

        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .http1_only()
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}
