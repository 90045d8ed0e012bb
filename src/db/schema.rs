//! Database schema and migrations.
//!
//! Migrations run in order; the `schema_version` table records which ones
//! have been applied.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: credential store
    r#"
CREATE TABLE users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    username    TEXT NOT NULL UNIQUE,
    password    TEXT NOT NULL,           -- Argon2 PHC digest
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_users_username ON users(username);
"#,
];
