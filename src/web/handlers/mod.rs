//! Handlers for the login API and pages.

pub mod auth;
pub mod pages;

pub use auth::*;
pub use pages::*;
