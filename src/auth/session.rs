//! Session token codec.
//!
//! A session token identifies the user a cookie was issued to. Two encodings
//! exist:
//!
//! - [`SessionCodec::Plain`]: the decimal user ID, unsigned and without
//!   expiry. Anyone able to set cookies can forge it.
//! - [`SessionCodec::Signed`]: an HS256 JWT carrying the user ID and an
//!   expiry, signed with a server secret.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{SessionConfig, SessionMode};

/// Session token errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The token is empty or not in the expected shape.
    #[error("malformed session token")]
    Malformed,

    /// The token failed signature or expiry validation.
    #[error("invalid session token: {0}")]
    Invalid(String),

    /// Signing the token failed.
    #[error("failed to encode session token: {0}")]
    Encoding(String),
}

/// Decoded session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken {
    /// Authenticated user ID.
    pub user_id: i64,
}

/// Claims of a signed session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID).
    pub sub: i64,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// Token ID.
    pub jti: String,
}

/// Keys and settings for signed session tokens.
#[derive(Clone)]
pub struct SignedSessions {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl SignedSessions {
    /// Create signed session settings from a shared secret.
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    fn encode(&self, user_id: i64) -> Result<String, SessionError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let exp = now
            .checked_add(self.ttl_secs)
            .ok_or_else(|| SessionError::Encoding("session lifetime overflows expiry".to_string()))?;
        let claims = SessionClaims {
            sub: user_id,
            iat: now,
            exp,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SessionError::Encoding(e.to_string()))
    }

    fn decode(&self, value: &str) -> Result<SessionToken, SessionError> {
        let data = decode::<SessionClaims>(value, &self.decoding_key, &self.validation)
            .map_err(|e| SessionError::Invalid(e.to_string()))?;

        Ok(SessionToken {
            user_id: data.claims.sub,
        })
    }
}

impl std::fmt::Debug for SignedSessions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedSessions")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

/// Encodes and decodes the value carried in the session cookie.
#[derive(Debug, Clone)]
pub enum SessionCodec {
    /// Raw decimal user ID.
    Plain,
    /// Signed JWT.
    Signed(SignedSessions),
}

impl SessionCodec {
    /// Build the codec described by the session configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        match config.mode {
            SessionMode::Plain => SessionCodec::Plain,
            SessionMode::Signed => {
                SessionCodec::Signed(SignedSessions::new(&config.secret, config.max_age_secs))
            }
        }
    }

    /// Encode a session token for the given user.
    pub fn encode(&self, user_id: i64) -> Result<String, SessionError> {
        match self {
            SessionCodec::Plain => Ok(user_id.to_string()),
            SessionCodec::Signed(signed) => signed.encode(user_id),
        }
    }

    /// Decode a cookie value into a session token.
    pub fn decode(&self, value: &str) -> Result<SessionToken, SessionError> {
        if value.is_empty() {
            return Err(SessionError::Malformed);
        }

        match self {
            SessionCodec::Plain => value
                .parse::<i64>()
                .map(|user_id| SessionToken { user_id })
                .map_err(|_| SessionError::Malformed),
            SessionCodec::Signed(signed) => signed.decode(value),
        }
    }

    /// Whether a cookie value counts as an authenticated session.
    ///
    /// Plain sessions are only checked for presence; the value itself is
    /// never interpreted. Signed sessions must decode.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            SessionCodec::Plain => !value.is_empty(),
            SessionCodec::Signed(_) => self.decode(value).is_ok(),
        }
    }
}
