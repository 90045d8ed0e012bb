//! Web layer for checkpoint.
//!
//! This module serves the login API, the route guard and the pages it
//! protects.

pub mod cookie;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use cookie::SessionCookies;
pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
