use std::future::Future;
use std::io;
use std::path::Path;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;

/// Static file service for `doc_root` with permissive CORS headers stamped
/// onto every response, including the 404s `ServeDir` produces itself.
pub fn router(doc_root: &Path) -> Router {
    let serve_dir = ServeDir::new(doc_root).append_index_html_on_directories(true);

    Router::new()
        .fallback_service(serve_dir)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static("*"),
        ))
}

/// Binding failure is fatal for the caller; there is no retry and no
/// alternate-port fallback.
pub async fn bind(config: &Config) -> io::Result<TcpListener> {
    TcpListener::bind((config.bind, config.port)).await
}

/// Serves requests until Ctrl+C, then finishes in-flight responses and
/// returns. The listener is closed when this returns.
pub async fn serve(listener: TcpListener, app: Router) -> io::Result<()> {
    serve_until(listener, app, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

pub async fn serve_until<F>(listener: TcpListener, app: Router, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
