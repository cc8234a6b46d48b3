mod api;
mod app;
mod config;
mod container;
mod domain;
mod opentelemetry;
mod services;

use config::AppConfig;
use container::Container;

use actix_web::HttpServer;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    OTel(#[from] opentelemetry::OTelError),
    #[error("invalid argon2 parameters: {0}")]
    Argon2(String),
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let provider = opentelemetry::configure(&config.service, &config.logging)?;

    let container = Arc::new(
        Container::new(&config.argon2).map_err(|err| AppError::Argon2(err.to_string()))?,
    );

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "starting signup service"
    );

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    opentelemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
