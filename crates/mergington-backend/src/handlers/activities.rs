use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::Redirect,
};
use serde::Deserialize;

use mergington::data::{ActivityListing, Message};

use super::ApiError;
use crate::services::RosterService;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Handler for `GET /`, sending browsers to the signup page.
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Handler to list every activity with its participants
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<ActivityListing>, ApiError> {
    Ok(Json(state.roster.list().await?))
}

/// Handler to sign a participant up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(EmailQuery { email }) = query?;
    let message = state.roster.enroll(&activity_name, &email).await?;
    Ok(Json(Message { message }))
}

/// Handler to remove a participant from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(EmailQuery { email }) = query?;
    let message = state.roster.remove(&activity_name, &email).await?;
    Ok(Json(Message { message }))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use mergington::serde_json::{self, Value};
    use tower::ServiceExt;

    use crate::{AppState, app, seed};

    const EMAIL: &str = "test-student@mergington.edu";
    const EMAIL_QUERY: &str = "email=test-student%40mergington.edu";

    fn test_app() -> Router {
        let state = AppState::new(seed::mergington()).unwrap();
        app(state, std::env::temp_dir())
    }

    async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn basketball_participants(app: &Router) -> Vec<Value> {
        let (_, body) = send(app, "GET", "/activities").await;
        body["Basketball Team"]["participants"]
            .as_array()
            .unwrap()
            .clone()
    }

    #[tokio::test]
    async fn get_activities_returns_every_activity() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/activities").await;
        assert_eq!(status, StatusCode::OK);

        let activities = body.as_object().unwrap();
        for name in seed::mergington().names() {
            let activity = activities.get(name).unwrap();
            for field in ["description", "schedule", "max_participants", "participants"] {
                assert!(activity.get(field).is_some(), "Missing {field} in {name}");
            }
        }
    }

    #[tokio::test]
    async fn signup_adds_participant() {
        let app = test_app();
        let before = basketball_participants(&app).await.len();

        let uri = format!("/activities/Basketball%20Team/signup?{EMAIL_QUERY}");
        let (status, body) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            format!("Signed up {EMAIL} for Basketball Team")
        );

        let after = basketball_participants(&app).await;
        assert_eq!(after.len(), before + 1);
        assert!(after.contains(&Value::from(EMAIL)));
    }

    #[tokio::test]
    async fn signup_for_unknown_activity_is_404() {
        let app = test_app();
        let uri = format!("/activities/Nonexistent%20Activity/signup?{EMAIL_QUERY}");
        let (status, body) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn duplicate_signup_is_400() {
        let app = test_app();
        let uri = format!("/activities/Basketball%20Team/signup?{EMAIL_QUERY}");
        let (status, _) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("already signed up"));
        assert_eq!(basketball_participants(&app).await.len(), 2);
    }

    #[tokio::test]
    async fn signup_then_unregister_round_trip() {
        let app = test_app();
        assert_eq!(basketball_participants(&app).await.len(), 1);

        let signup = format!("/activities/Basketball%20Team/signup?{EMAIL_QUERY}");
        let unregister = format!("/activities/Basketball%20Team/unregister?{EMAIL_QUERY}");

        let (status, body) = send(&app, "POST", &signup).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().contains(EMAIL));
        assert_eq!(basketball_participants(&app).await.len(), 2);

        let (status, body) = send(&app, "POST", &unregister).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().contains(EMAIL));
        let participants = basketball_participants(&app).await;
        assert_eq!(participants.len(), 1);
        assert!(!participants.contains(&Value::from(EMAIL)));

        let (status, body) = send(&app, "POST", &unregister).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("not signed up"));
    }

    #[tokio::test]
    async fn unregister_from_unknown_activity_is_404() {
        let app = test_app();
        let uri = format!("/activities/Nonexistent%20Activity/unregister?{EMAIL_QUERY}");
        let (status, body) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn missing_email_is_400_with_detail() {
        let app = test_app();
        let (status, body) = send(&app, "POST", "/activities/Chess%20Club/signup").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn apps_do_not_share_state() {
        let first = test_app();
        let uri = format!("/activities/Basketball%20Team/signup?{EMAIL_QUERY}");
        send(&first, "POST", &uri).await;

        let second = test_app();
        assert_eq!(basketball_participants(&second).await.len(), 1);
    }

    #[tokio::test]
    async fn root_redirects_to_index() {
        let app = test_app();
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/static/index.html"
        );
    }
}
