use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::AppConfig;
use activity_signup::database::activity_store::ActivityStore;
use activity_signup::database::seed;
use activity_signup::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    // 2. Activity directory
    let directory = match &config.activities_file {
        Some(path) => match seed::load_directory(path) {
            Ok(dir) => {
                info!(path = %path.display(), activities = dir.len(), "loaded activities file");
                dir
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => seed::default_directory(),
    };
    let store = ActivityStore::new(directory);

    // 3. Application
    let app = web::router(store, &config.static_dir);

    // 4. Server, with fallback port
    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(a) => a,
        Err(e) => {
            error!(host = %config.host, port = config.port, "invalid listen address: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = SocketAddr::new(addr.ip(), addr.port().wrapping_add(1));
            warn!("could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            match tokio::net::TcpListener::bind(fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!("could not bind fallback {}: {}", fallback, e);
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!("Server running on http://{}", bound),
        Err(_) => info!("Server running"),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {}", e);
        std::process::exit(1);
    }
}
