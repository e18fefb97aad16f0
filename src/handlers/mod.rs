pub mod auth;
pub mod calendar;
pub mod health;
pub mod meetup;
pub mod scheduler;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(auth::login_page))
        .route("/scheduler", get(scheduler::scheduler_page))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/session", get(auth::session_status))
        .route("/api/friends", get(scheduler::get_friends))
        .route("/api/availability", get(scheduler::get_availability))
        .route(
            "/api/availability/toggle",
            post(scheduler::toggle_availability),
        )
        .route("/api/summary", get(scheduler::get_summary))
        .route("/api/calendar", get(scheduler::get_calendar))
        .route(
            "/api/meetup",
            get(meetup::get_meetup)
                .put(meetup::put_meetup)
                .delete(meetup::delete_meetup),
        )
        .route("/api/meetup.ics", get(calendar::meetup_ics))
        .with_state(state)
}
