use super::config::AnalyticsConfig;

/// Состояние, доступное обработчикам
#[derive(Debug, Clone)]
pub struct AppState {
    pub analytics: AnalyticsConfig,
}
