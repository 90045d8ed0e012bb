//! checkpoint - session login and route guard
//!
//! A small web service that verifies credentials against a SQLite user store,
//! issues an HTTP-only session cookie, and redirects page requests according
//! to whether that cookie is present.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, verify_password, GuardDecision, PasswordError, RouteClass, RouteTable,
    SessionCodec, SessionError, SessionToken,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{CheckpointError, Result};
pub use web::{create_router, AppState, WebServer};
