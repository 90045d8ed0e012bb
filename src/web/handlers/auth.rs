//! Authentication handlers.

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::auth::{verify_password, PasswordError, RouteTable, SessionCodec};
use crate::config::Config;
use crate::db::UserRepository;
use crate::web::cookie::SessionCookies;
use crate::web::dto::{LoginRequest, SuccessResponse, ValidatedJson};
use crate::web::error::ApiError;
use crate::Database;

/// Message for every rejected credential pair.
pub const INVALID_CREDENTIALS: &str = "incorrect username or password";

/// Application state shared across handlers and the route guard.
#[derive(Clone)]
pub struct AppState {
    /// Credential store.
    pub db: Database,
    /// Session token encoding.
    pub codec: SessionCodec,
    /// Session cookie settings.
    pub cookies: SessionCookies,
    /// Route classification for the guard.
    pub routes: RouteTable,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        db: Database,
        codec: SessionCodec,
        cookies: SessionCookies,
        routes: RouteTable,
    ) -> Self {
        Self {
            db,
            codec,
            cookies,
            routes,
        }
    }

    /// Create application state from configuration.
    pub fn from_config(config: &Config, db: Database) -> Self {
        Self::new(
            db,
            SessionCodec::from_config(&config.session),
            SessionCookies::from_config(&config.session),
            RouteTable::from_config(&config.guard),
        )
    }
}

/// POST /api/login - Verify credentials and issue the session cookie.
pub async fn login(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<SuccessResponse>), ApiError> {
    let username = req.usuario.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let repo = UserRepository::new(state.db.pool());
    let user = match repo.get_by_username(&username).await? {
        Some(user) => user,
        None => {
            tracing::debug!(username = %username, "Login rejected: unknown user");
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    // Argon2 is CPU-bound; keep it off the async workers.
    let digest = user.password.clone();
    let verified = tokio::task::spawn_blocking(move || verify_password(&password, &digest))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            ApiError::internal()
        })?;

    match verified {
        Ok(()) => {}
        Err(PasswordError::VerificationFailed) => {
            tracing::debug!(user_id = user.id, "Login rejected: wrong password");
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
        Err(e) => {
            tracing::error!(user_id = user.id, error = %e, "Stored password digest is unusable");
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
    }

    let token = state.codec.encode(user.id).map_err(|e| {
        tracing::error!(user_id = user.id, error = %e, "Failed to encode session token");
        ApiError::internal()
    })?;

    let secure = state.cookies.is_secure(&uri, &headers);
    let jar = jar.add(state.cookies.issue(token, secure));

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok((jar, Json(SuccessResponse::new("login successful"))))
}

/// POST /api/logout - Clear the session cookie.
///
/// Succeeds whether or not a session was present.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    let had_session = state.cookies.read(&jar).is_some();
    let secure = state.cookies.is_secure(&uri, &headers);
    let jar = jar.add(state.cookies.clear(secure));

    tracing::info!(had_session, "User logged out");

    (jar, Json(SuccessResponse::new("logged out")))
}
