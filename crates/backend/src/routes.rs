use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
///
/// Всё, что не API, отдаётся из сборки виджета; неизвестные пути получают
/// index.html, маршрутизацию страниц делает сам виджет.
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/track-calculation",
            post(handlers::analytics::track_calculation),
        )
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
}
