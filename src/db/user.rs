//! Credential record model.

/// A stored credential record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique, immutable user ID.
    pub id: i64,
    /// Login username (unique).
    pub username: String,
    /// Password digest (Argon2 PHC string).
    pub password: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Data for provisioning a new credential record.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login username.
    pub username: String,
    /// Password digest, already hashed.
    pub password: String,
}

impl NewUser {
    /// Create a new credential record from a username and password digest.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password_hash.into(),
        }
    }
}
