use std::time::Duration;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use error_stack::ResultExt;
use kernel::KernelError;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::config::ServerConfig;
use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::{BookRouter, IndexRouter};

mod config;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| {
                    "driver=debug,server=debug,tower_http=debug,sqlx=debug".into()
                }),
            )),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let config = ServerConfig::from_env();
    let app = AppModule::new().await?;

    let router = Router::new()
        .route_book()
        .route_index(config.static_dir.as_deref())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app.clone());

    let https_task = match &config.tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
                .await
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| "Failed to load TLS certificate or key")?;
            let handle = Handle::new();
            tokio::spawn(watch_shutdown(handle.clone()));
            let serve = axum_server::bind_rustls(config.https_addr, rustls)
                .handle(handle)
                .serve(router.clone().into_make_service());
            tracing::info!("HTTPS server listening on {}", config.https_addr);
            Some(tokio::spawn(serve))
        }
        None => None,
    };

    let tcp = TcpListener::bind(config.http_addr)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("HTTP server listening on {}", config.http_addr);

    axum::serve(tcp, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    if let Some(task) = https_task {
        task.await
            .change_context_lazy(|| KernelError::Internal)?
            .change_context_lazy(|| KernelError::Internal)?;
    }

    app.database().close().await;
    tracing::info!("Database connection closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {error}");
    }
}

async fn watch_shutdown(handle: Handle) {
    shutdown_signal().await;
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
