use crate::shared::api_utils::api_url;
use crate::shared::query::WidgetQuery;
use contracts::shared::analytics::{
    AnalyticsSink, EstimateRecord, LogAnalytics, TrackCalculationRequest,
};
use contracts::shared::errors::AnalyticsDeliveryFailure;
use gloo_net::http::Request;

const TRACK_CALCULATION_PATH: &str = "/api/track-calculation";

/// Отправить запись о расчёте
pub async fn post_calculation(
    url: &str,
    payload: &TrackCalculationRequest,
) -> Result<(), AnalyticsDeliveryFailure> {
    let response = Request::post(url)
        .json(payload)
        .map_err(|e| AnalyticsDeliveryFailure(format!("{e}")))?
        .send()
        .await
        .map_err(|e| AnalyticsDeliveryFailure(format!("{e}")))?;

    if !response.ok() {
        return Err(AnalyticsDeliveryFailure(format!(
            "HTTP {}",
            response.status()
        )));
    }
    Ok(())
}

fn user_agent() -> Option<String> {
    web_sys::window()?.navigator().user_agent().ok()
}

/// Analytics sink that logs the record and posts it in the background.
///
/// `track` returns before the request completes; a failed request is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpAnalytics {
    endpoint: Option<String>,
}

impl HttpAnalytics {
    /// `None` keeps records in the console log only
    pub fn new(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }

    pub fn from_query(query: &WidgetQuery) -> Self {
        if !query.analytics {
            return Self::new(None);
        }
        Self::new(Some(
            query
                .endpoint
                .clone()
                .unwrap_or_else(|| api_url(TRACK_CALCULATION_PATH)),
        ))
    }
}

impl AnalyticsSink for HttpAnalytics {
    fn track(&self, record: &EstimateRecord) -> Result<(), AnalyticsDeliveryFailure> {
        LogAnalytics.track(record)?;

        let Some(url) = self.endpoint.clone() else {
            return Ok(());
        };
        let payload = TrackCalculationRequest {
            timestamp: chrono::Utc::now(),
            record: record.clone(),
            user_agent: user_agent(),
        };
        leptos::task::spawn_local(async move {
            if let Err(e) = post_calculation(&url, &payload).await {
                log::warn!("{}", e);
            }
        });
        Ok(())
    }
}
