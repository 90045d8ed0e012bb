//! Route classification and guard decisions.
//!
//! The guard is a pure function of the request path and whether the request
//! carries a session. It holds no state between requests.

use crate::config::GuardConfig;

/// Classification of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a session.
    Protected,
    /// The login page; redirects away when a session exists.
    Login,
    /// Not handled by the guard.
    Unclassified,
}

/// What the guard does with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision<'a> {
    /// Pass the request through unchanged.
    Continue,
    /// Redirect to the given path.
    Redirect(&'a str),
}

/// Immutable route classification table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    protected: Vec<String>,
    login_path: String,
    home_path: String,
}

impl RouteTable {
    /// Create a route table.
    ///
    /// Trailing slashes on protected prefixes are ignored.
    pub fn new<I, S>(protected: I, login_path: impl Into<String>, home_path: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let protected = protected
            .into_iter()
            .map(|p| normalize_prefix(p.into()))
            .collect();

        Self {
            protected,
            login_path: login_path.into(),
            home_path: home_path.into(),
        }
    }

    /// Build the table from guard configuration.
    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(
            config.protected_paths.iter().cloned(),
            config.login_path.clone(),
            config.home_path.clone(),
        )
    }

    /// Path of the login page.
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Path users land on once authenticated.
    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Whether the path lies under a protected prefix.
    ///
    /// Matching respects segment boundaries: `/home` covers `/home` and
    /// `/home/feed` but not `/homework`.
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected
            .iter()
            .any(|prefix| matches_prefix(prefix, path))
    }

    /// Classify a request path.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.is_protected(path) {
            RouteClass::Protected
        } else if path == self.login_path {
            RouteClass::Login
        } else {
            RouteClass::Unclassified
        }
    }

    /// Decide what to do with a request.
    pub fn decide(&self, path: &str, authenticated: bool) -> GuardDecision<'_> {
        match (self.classify(path), authenticated) {
            (RouteClass::Protected, false) => GuardDecision::Redirect(&self.login_path),
            (RouteClass::Login, true) => GuardDecision::Redirect(&self.home_path),
            _ => GuardDecision::Continue,
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::from_config(&GuardConfig::default())
    }
}

fn normalize_prefix(prefix: String) -> String {
    if prefix.len() > 1 && prefix.ends_with('/') {
        prefix.trim_end_matches('/').to_string()
    } else {
        prefix
    }
}

fn matches_prefix(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return path.starts_with('/');
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
