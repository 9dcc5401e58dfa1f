use dotenvy::dotenv;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rajaongkir_proxy_axum::{init, proxy_router};

mod server;

use crate::server::{listen_port, serve_http};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,rajaongkir_proxy=debug,tower_http=info",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing API key stops the process here, before any route is reachable
    let service = match init() {
        Ok(service) => Arc::new(service),
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            return Err(e);
        }
    };

    let app = proxy_router(service);

    serve_http(listen_port()?, app).await?;
    Ok(())
}
