use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use super::auth::check_auth;
use crate::errors::AppError;
use crate::models::MeetupInfo;
use crate::services::meetup;
use crate::state::AppState;

// GET /api/meetup
pub async fn get_meetup(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Option<MeetupInfo>>, AppError> {
    check_auth(&headers, &state)?;
    Ok(Json(meetup::get(state.store.as_ref()).await?))
}

// PUT /api/meetup
#[derive(Deserialize)]
pub struct MeetupRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
}

impl MeetupRequest {
    /// An empty date means "no meetup".
    fn into_meetup(self) -> Option<MeetupInfo> {
        let date = self.date.trim().to_string();
        if date.is_empty() {
            return None;
        }
        Some(MeetupInfo {
            date,
            time: self.time.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}

pub async fn put_meetup(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<MeetupRequest>,
) -> Result<Json<Option<MeetupInfo>>, AppError> {
    check_auth(&headers, &state)?;

    let info = body.into_meetup();
    meetup::set(state.store.as_ref(), info.clone()).await?;
    Ok(Json(info))
}

// DELETE /api/meetup
pub async fn delete_meetup(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state)?;
    meetup::set(state.store.as_ref(), None).await?;
    Ok(Json(serde_json::json!({"ok": true})))
}
