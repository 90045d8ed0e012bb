//! Route guard middleware.
//!
//! Runs before every page request and either lets it through or redirects
//! based on the session cookie and the route table.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::auth::GuardDecision;
use crate::web::handlers::AppState;

/// Redirect protected pages to the login page when no session exists, and
/// the login page to the home page when one does.
pub async fn route_guard(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let authenticated = state
        .cookies
        .read(&jar)
        .is_some_and(|value| state.codec.admits(value));

    let path = request.uri().path();
    match state.routes.decide(path, authenticated) {
        GuardDecision::Continue => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(path = %path, target = %target, authenticated, "Guard redirect");
            Redirect::temporary(target).into_response()
        }
    }
}
