//! Router configuration for the web layer.

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use super::handlers::{
    home_page, login, login_page, logout, not_found, profile_page, profile_section_page,
    settings_page, settings_section_page, AppState,
};
use super::middleware::route_guard;

/// Create the main router.
///
/// Every route, including the fallback, passes through the route guard.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Session responses must never be cached
    let api_routes = Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let page_routes = Router::new()
        .route("/login", get(login_page))
        .route("/home", get(home_page))
        .route("/profile", get(profile_page))
        .route("/profile/*section", get(profile_section_page))
        .route("/settings", get(settings_page))
        .route("/settings/*section", get(settings_section_page));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    app_state.clone(),
                    route_guard,
                )),
        )
        .with_state(app_state)
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
