mod config;
mod error;
mod services;

use crate::config::AppConfig;
use crate::services::data_sources::{DirectorySource, PreloadedSource, TableSource};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::from_env();
    info!("Loaded configuration: {:?}", config);

    let source: Arc<dyn TableSource> = if config.preload {
        match PreloadedSource::load(config.data_dir.clone()).await {
            Ok(source) => Arc::new(source),
            Err(e) => {
                error!("Preload failed: {}", e);
                return Err(std::io::Error::other(e));
            }
        }
    } else {
        Arc::new(DirectorySource::new(config.data_dir.clone()))
    };
    let source = web::Data::from(source);

    let url = format!("http://{}:{}", config.host, config.port);
    info!("Server running at {} ({} tables)", url, source.mode());

    HttpServer::new(move || {
        App::new()
            .app_data(source.clone())
            .wrap(Logger::default())
            .wrap(services::cors_headers())
            .configure(services::configure)
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
