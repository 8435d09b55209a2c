use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Level;

fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Middleware для логирования HTTP запросов: метод, путь, статус, длительность
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    match level_for(status) {
        Level::ERROR => {
            tracing::error!(%method, %path, status = status.as_u16(), elapsed_ms, "request failed")
        }
        Level::WARN => {
            tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "request rejected")
        }
        _ => tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, "request"),
    }

    response
}
