//! Middleware for the web layer.

pub mod guard;

pub use guard::route_guard;
