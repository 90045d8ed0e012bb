//! Page handlers.
//!
//! Pages are rendered shells; all authentication happens in the route guard
//! and the JSON endpoints.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use super::auth::AppState;
use crate::web::error::ApiError;

/// Login page template
#[derive(Template)]
#[template(path = "pages/login.html")]
struct LoginPageTemplate<'a> {
    home_path: &'a str,
}

/// Signed-in landing page template
#[derive(Template)]
#[template(path = "pages/landing.html")]
struct LandingPageTemplate<'a> {
    title: &'a str,
    section: Option<&'a str>,
    login_path: &'a str,
}

fn render_template<T: Template>(t: T) -> Response {
    match t.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render template");
            ApiError::internal().into_response()
        }
    }
}

fn landing(state: &AppState, title: &str, section: Option<&str>) -> Response {
    render_template(LandingPageTemplate {
        title,
        section,
        login_path: state.routes.login_path(),
    })
}

/// GET /login - Login form.
pub async fn login_page(State(state): State<Arc<AppState>>) -> Response {
    render_template(LoginPageTemplate {
        home_path: state.routes.home_path(),
    })
}

/// GET /home
pub async fn home_page(State(state): State<Arc<AppState>>) -> Response {
    landing(&state, "Home", None)
}

/// GET /profile
pub async fn profile_page(State(state): State<Arc<AppState>>) -> Response {
    landing(&state, "Profile", None)
}

/// GET /profile/*section
pub async fn profile_section_page(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
) -> Response {
    landing(&state, "Profile", Some(&section))
}

/// GET /settings
pub async fn settings_page(State(state): State<Arc<AppState>>) -> Response {
    landing(&state, "Settings", None)
}

/// GET /settings/*section
pub async fn settings_section_page(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
) -> Response {
    landing(&state, "Settings", Some(&section))
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::not_found("not found")
}
