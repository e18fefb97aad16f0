use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::session;
use crate::state::AppState;

static LOGIN_HTML: &str = include_str!("../web/login.html");

pub(crate) fn check_auth(headers: &HeaderMap, state: &AppState) -> Result<(), AppError> {
    if session::is_authenticated(headers, &state.config.session_secret) {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

// GET /
pub async fn login_page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if check_auth(&headers, &state).is_ok() {
        return Redirect::to("/scheduler").into_response();
    }
    Html(LOGIN_HTML).into_response()
}

// POST /api/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Response {
    if body.password != state.config.app_password {
        tracing::warn!("rejected login attempt");
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"error": "Invalid password"})),
        )
            .into_response();
    }

    let token = session::issue_token(&state.config.session_secret, Utc::now());
    let cookie = session::session_cookie(&token, state.config.secure_cookies);
    tracing::info!("session issued");

    (
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({"ok": true})),
    )
        .into_response()
}

// POST /api/logout
pub async fn logout(State(state): State<Arc<AppState>>) -> Response {
    let cookie = session::clear_cookie(state.config.secure_cookies);
    (
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({"ok": true})),
    )
        .into_response()
}

// GET /api/session
#[derive(Serialize)]
pub struct SessionResponse {
    authenticated: bool,
}

pub async fn session_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: check_auth(&headers, &state).is_ok(),
    })
}
