//! Authentication primitives: password verification, session tokens and
//! route classification.

pub mod guard;
pub mod password;
pub mod session;

pub use guard::{GuardDecision, RouteClass, RouteTable};
pub use password::{hash_password, verify_password, PasswordError};
pub use session::{SessionClaims, SessionCodec, SessionError, SessionToken, SignedSessions};
