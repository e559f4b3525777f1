use std::sync::Arc;

use axum::{Json, extract::State};
use mergington::data::{HealthResponse, HealthStatus, ServiceInfo, UptimeInfo};
use mergington::log;

use super::ApiError;
use crate::services::RosterService;

type Timestamp = chrono::DateTime<chrono::Utc>;

fn format_uptime(elapsed: chrono::TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    let (days, hours) = (total / 86_400, total % 86_400 / 3_600);
    let (minutes, secs) = (total % 3_600 / 60, total % 60);

    match (days, hours, minutes) {
        (0, 0, 0) => format!("{secs}s"),
        (0, 0, _) => format!("{minutes}m {secs}s"),
        (0, _, _) => format!("{hours}h {minutes}m {secs}s"),
        _ => format!("{days}d {hours}h {minutes}m {secs}s"),
    }
}

fn uptime_since(started_at: Timestamp) -> UptimeInfo {
    let elapsed = chrono::Utc::now().signed_duration_since(started_at);
    UptimeInfo {
        seconds: elapsed.num_seconds(),
        human: format_uptime(elapsed),
    }
}

/// Handler for `GET /health`
pub async fn get(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let stats = state.roster.stats().await?;

    let health_response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: uptime_since(state.started_at),
        services: ServiceInfo {
            roster: "up".to_string(),
            activities: stats.activities,
            participants: stats.participants,
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Ok(Json(health_response))
}
