//! Session cookie construction.
//!
//! The issuing and clearing cookies must carry identical attributes, or some
//! browsers keep the original cookie alive.

use axum::http::{header::HeaderName, HeaderMap, Uri};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::{SecureCookies, SessionConfig};

static X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// Builds and reads the session cookie.
#[derive(Debug, Clone)]
pub struct SessionCookies {
    name: String,
    max_age_secs: i64,
    secure: SecureCookies,
}

impl SessionCookies {
    /// Create cookie settings.
    ///
    /// `max_age_secs` is expected to be within the validated configuration
    /// bound; larger values saturate.
    pub fn new(name: impl Into<String>, max_age_secs: u64, secure: SecureCookies) -> Self {
        Self {
            name: name.into(),
            max_age_secs: i64::try_from(max_age_secs).unwrap_or(i64::MAX),
            secure,
        }
    }

    /// Create cookie settings from session configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.cookie_name.clone(), config.max_age_secs, config.secure)
    }

    /// Whether cookies for this request get the `Secure` attribute.
    ///
    /// In `auto` mode `X-Forwarded-Proto` is assumed to be set by a trusted
    /// reverse proxy.
    pub fn is_secure(&self, uri: &Uri, headers: &HeaderMap) -> bool {
        match self.secure {
            SecureCookies::Always => true,
            SecureCookies::Never => false,
            SecureCookies::Auto => request_is_https(uri, headers),
        }
    }

    /// Cookie carrying a freshly issued session token.
    pub fn issue(&self, token: String, secure: bool) -> Cookie<'static> {
        self.build(token, self.max_age_secs, secure)
    }

    /// Empty, immediately expiring cookie that overwrites the session.
    pub fn clear(&self, secure: bool) -> Cookie<'static> {
        self.build(String::new(), 0, secure)
    }

    /// Session cookie value from the request, if present and non-empty.
    pub fn read<'a>(&self, jar: &'a CookieJar) -> Option<&'a str> {
        jar.get(&self.name)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
    }

    fn build(&self, value: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(secure)
            .max_age(time::Duration::seconds(max_age_secs))
            .build()
    }
}

fn request_is_https(uri: &Uri, headers: &HeaderMap) -> bool {
    if uri.scheme_str() == Some("https") {
        return true;
    }

    // First hop wins when proxies append to the header.
    headers
        .get(&X_FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn cookies(secure: SecureCookies) -> SessionCookies {
        SessionCookies::new("auth_token", 86400, secure)
    }

    fn forwarded(proto: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_PROTO.clone(), HeaderValue::from_static(proto));
        headers
    }

    #[test]
    fn test_issue_attributes() {
        let cookie = cookies(SecureCookies::Auto).issue("7".to_string(), false);
        let header = cookie.to_string();

        assert_eq!(cookie.name(), "auth_token");
        assert_eq!(cookie.value(), "7");
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("SameSite=Strict"));
        assert!(header.contains("Path=/"));
        assert!(header.contains("Max-Age=86400"));
        assert!(!header.contains("Secure"));
    }

    #[test]
    fn test_clear_matches_issue_attributes() {
        let settings = cookies(SecureCookies::Auto);
        let issued = settings.issue("7".to_string(), true);
        let cleared = settings.clear(true);

        assert_eq!(cleared.value(), "");
        assert_eq!(cleared.max_age(), Some(time::Duration::ZERO));
        assert_eq!(cleared.path(), issued.path());
        assert_eq!(cleared.http_only(), issued.http_only());
        assert_eq!(cleared.same_site(), issued.same_site());
        assert_eq!(cleared.secure(), issued.secure());
        assert!(cleared.to_string().contains("Max-Age=0"));
    }

    #[test]
    fn test_secure_policy() {
        let uri: Uri = "/api/login".parse().unwrap();
        let plain = HeaderMap::new();

        assert!(cookies(SecureCookies::Always).is_secure(&uri, &plain));
        assert!(!cookies(SecureCookies::Never).is_secure(&uri, &forwarded("https")));
        assert!(!cookies(SecureCookies::Auto).is_secure(&uri, &plain));
        assert!(cookies(SecureCookies::Auto).is_secure(&uri, &forwarded("https")));
        assert!(cookies(SecureCookies::Auto).is_secure(&uri, &forwarded("HTTPS, http")));
        assert!(!cookies(SecureCookies::Auto).is_secure(&uri, &forwarded("http")));
    }

    #[test]
    fn test_secure_from_absolute_uri() {
        let uri: Uri = "https://example.com/api/login".parse().unwrap();
        assert!(cookies(SecureCookies::Auto).is_secure(&uri, &HeaderMap::new()));
    }

    #[test]
    fn test_read_ignores_empty_value() {
        let settings = cookies(SecureCookies::Auto);

        let jar = CookieJar::new().add(Cookie::new("auth_token", "42"));
        assert_eq!(settings.read(&jar), Some("42"));

        let jar = CookieJar::new().add(Cookie::new("auth_token", ""));
        assert_eq!(settings.read(&jar), None);

        let jar = CookieJar::new().add(Cookie::new("other", "42"));
        assert_eq!(settings.read(&jar), None);
    }
}
