use std::net::SocketAddr;
use std::path::Path;

use error_stack::ResultExt;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use kernel::KernelError;

use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::BookRouter;

mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;

static PORT: &str = "PORT";
static DEFAULT_LOG_FILTER: &str = "server=debug,driver=debug,tower_http=debug,hyper=debug";

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
            ),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let app = AppModule::new();

    let router = axum::Router::new()
        .route_book()
        .layer(CorsLayer::permissive())
        .with_state(app);

    let port = dotenvy::var(PORT)
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(9000);
    let bind = SocketAddr::from(([0, 0, 0, 0], port));
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Failed to listen on {bind}"))?;

    tracing::info!("listening on {bind}");

    axum::serve(tcp, router.into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}
