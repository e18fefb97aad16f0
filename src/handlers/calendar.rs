use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};

use super::auth::check_auth;
use crate::errors::AppError;
use crate::services::calendar::generate_ics;
use crate::services::meetup;
use crate::state::AppState;

// GET /api/meetup.ics
pub async fn meetup_ics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    check_auth(&headers, &state)?;

    let info = meetup::get(state.store.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound("no meetup scheduled".to_string()))?;

    let ics = generate_ics(&info)
        .ok_or_else(|| AppError::InvalidDate(info.date.clone()))?;
    let filename = format!("meetup-{}.ics", info.date);

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        ics,
    )
        .into_response())
}
