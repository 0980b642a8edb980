use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use ow_agent::{run_telegram_test, TelegramTestReport};
use ow_core::{CheckSummary, Error};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};
use crate::error::ApiError;
use crate::AppState;

const INDEX_HTML: &str = include_str!("../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn check_news(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CheckSummary>, ApiError> {
    match state.manager.run().await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            error!("Error: {}", e);
            Err(e.into())
        }
    }
}

fn authorize(headers: &HeaderMap, secret: Option<&str>) -> Result<(), Error> {
    let Some(secret) = secret else {
        warn!("Scheduler call rejected: CRON_SECRET is not configured");
        return Err(Error::Unauthorized);
    };
    let provided = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if provided == Some(format!("Bearer {}", secret).as_str()) {
        Ok(())
    } else {
        warn!("Scheduler call rejected: bad bearer token");
        Err(Error::Unauthorized)
    }
}

/// Scheduler entry point: re-invokes `/check-news` over HTTP and relays
/// whatever JSON it answered with.
pub async fn cron(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    authorize(&headers, state.cron_secret.as_deref())?;

    let url = format!("{}/check-news", state.base_url.trim_end_matches('/'));
    info!("⏰ Scheduler trigger, calling {}", url);
    let result: Value = async {
        let response = state.http.post(&url).send().await?;
        response.json::<Value>().await
    }
    .await
    .map_err(|e| {
        error!("Cron error: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(json!({
        "success": true,
        "timestamp": Utc::now().to_rfc3339(),
        "result": result,
    })))
}

pub async fn test_telegram(State(state): State<Arc<AppState>>) -> Response {
    let report = run_telegram_test(state.notifier.as_ref()).await;
    match &report {
        TelegramTestReport::Sent => Json(json!({
            "success": true,
            "message": report.message(),
        }))
        .into_response(),
        TelegramTestReport::NotConfigured => ApiError::bad_request(report.message()).into_response(),
        TelegramTestReport::Failed(reason) => ApiError::internal(reason.as_str()).into_response(),
    }
}
