use axum::{extract::State, http::StatusCode, Json};
use contracts::shared::analytics::TrackCalculationRequest;

use crate::shared::state::AppState;

/// POST /api/track-calculation
///
/// Пишет запись о расчёте в лог (target `analytics`). Ничего не хранит.
pub async fn track_calculation(
    State(state): State<AppState>,
    Json(request): Json<TrackCalculationRequest>,
) -> StatusCode {
    if !state.analytics.enabled {
        tracing::debug!("analytics disabled, record dropped");
        return StatusCode::NO_CONTENT;
    }

    let record = &request.record;
    if let Err(e) = record.check() {
        tracing::warn!("rejected analytics record: {}", e);
        return StatusCode::UNPROCESSABLE_ENTITY;
    }

    let id = uuid::Uuid::new_v4();
    tracing::info!(
        target: "analytics",
        %id,
        client_timestamp = %request.timestamp,
        received_at = %chrono::Utc::now(),
        org_type = %record.org_type,
        service_type = %record.service_type,
        attendees = record.attendees,
        duration = %record.duration,
        company_name = record.company_name.as_deref().unwrap_or("-"),
        estimated_cost = %record.estimated_cost,
        user_agent = request.user_agent.as_deref().unwrap_or("-"),
        "estimate generated"
    );

    StatusCode::ACCEPTED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AnalyticsConfig;
    use contracts::enums::{OrganizationCategory, ServiceTier};
    use contracts::shared::analytics::EstimateRecord;
    use rust_decimal::Decimal;

    fn state(enabled: bool) -> State<AppState> {
        State(AppState {
            analytics: AnalyticsConfig { enabled },
        })
    }

    fn request(attendees: u32) -> Json<TrackCalculationRequest> {
        Json(TrackCalculationRequest {
            timestamp: chrono::Utc::now(),
            record: EstimateRecord {
                org_type: OrganizationCategory::GithubInternal,
                service_type: ServiceTier::BeerWine,
                attendees,
                duration: Decimal::from(2),
                company_name: None,
                estimated_cost: Decimal::from(600),
            },
            user_agent: Some("test".to_string()),
        })
    }

    #[tokio::test]
    async fn test_accepts_valid_record() {
        assert_eq!(
            track_calculation(state(true), request(50)).await,
            StatusCode::ACCEPTED
        );
    }

    #[tokio::test]
    async fn test_rejects_impossible_record() {
        assert_eq!(
            track_calculation(state(true), request(0)).await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn test_disabled_analytics_drops_record() {
        assert_eq!(
            track_calculation(state(false), request(50)).await,
            StatusCode::NO_CONTENT
        );
    }
}
