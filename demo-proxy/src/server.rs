use axum::Router;
use std::net::SocketAddr;

const DEFAULT_PORT: u16 = 8000;

/// Port from the `PORT` environment variable, 8000 when unset
pub(crate) fn listen_port() -> Result<u16, std::num::ParseIntError> {
    match std::env::var("PORT") {
        Ok(port) => port.trim().parse(),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

pub(crate) async fn serve_http(port: u16, app: Router) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
}
