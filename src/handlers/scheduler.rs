use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};

use super::auth::check_auth;
use crate::errors::AppError;
use crate::models::{parse_iso_date, AvailabilityRecord, Friend};
use crate::services::month_grid::{self, CalendarView};
use crate::services::{availability, summary};
use crate::state::AppState;

static SCHEDULER_HTML: &str = include_str!("../web/scheduler.html");

fn parse_friend(raw: &str) -> Result<Friend, AppError> {
    Friend::parse(raw).ok_or_else(|| AppError::InvalidFriend(raw.to_string()))
}

// GET /scheduler
pub async fn scheduler_page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if check_auth(&headers, &state).is_err() {
        return Redirect::to("/").into_response();
    }
    Html(SCHEDULER_HTML).into_response()
}

// GET /api/friends
#[derive(Serialize)]
pub struct FriendResponse {
    id: Friend,
    name: &'static str,
}

pub async fn get_friends(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<FriendResponse>>, AppError> {
    check_auth(&headers, &state)?;

    let friends: Vec<FriendResponse> = Friend::ALL
        .into_iter()
        .map(|f| FriendResponse {
            id: f,
            name: f.display_name(),
        })
        .collect();
    Ok(Json(friends))
}

// GET /api/availability
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<AvailabilityRecord>, AppError> {
    check_auth(&headers, &state)?;
    let record = availability::get_all(state.store.as_ref()).await?;
    Ok(Json(record))
}

// POST /api/availability/toggle
#[derive(Deserialize)]
pub struct ToggleRequest {
    pub friend: String,
    pub date: String,
}

#[derive(Serialize)]
pub struct ToggleResponse {
    friend: Friend,
    dates: Vec<String>,
}

pub async fn toggle_availability(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    check_auth(&headers, &state)?;

    let friend = parse_friend(&body.friend)?;
    let date = body.date.trim();
    if parse_iso_date(date).is_none() {
        return Err(AppError::InvalidDate(body.date.clone()));
    }

    let dates = availability::toggle(state.store.as_ref(), friend, date).await?;
    Ok(Json(ToggleResponse { friend, dates }))
}

// GET /api/summary
#[derive(Serialize)]
pub struct SummaryEntry {
    date: String,
    label: String,
    count: usize,
    friends: Vec<Friend>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    total: usize,
    dates: Vec<SummaryEntry>,
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SummaryResponse>, AppError> {
    check_auth(&headers, &state)?;

    let record = availability::get_all(state.store.as_ref()).await?;
    let dates = summary::summarize(&record)
        .into_iter()
        .map(|s| SummaryEntry {
            label: s.label(),
            count: s.count(),
            date: s.date,
            friends: s.friends,
        })
        .collect();

    Ok(Json(SummaryResponse {
        total: Friend::COUNT,
        dates,
    }))
}

// GET /api/calendar
#[derive(Deserialize)]
pub struct CalendarQuery {
    pub month: Option<String>,
    pub user: Option<String>,
}

pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarView>, AppError> {
    check_auth(&headers, &state)?;

    let today = Local::now().date_naive();
    let base = match query.month.as_deref().filter(|m| !m.is_empty()) {
        Some(raw) => month_grid::parse_month(raw)
            .ok_or_else(|| AppError::InvalidDate(format!("{raw} (expected YYYY-MM)")))?,
        None => today,
    };
    let user = match query.user.as_deref().filter(|u| !u.is_empty()) {
        Some(raw) => Some(parse_friend(raw)?),
        None => None,
    };

    let record = availability::get_all(state.store.as_ref()).await?;
    Ok(Json(month_grid::build_view(base, today, user, &record)))
}
