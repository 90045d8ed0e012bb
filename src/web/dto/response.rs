//! Response DTOs for the Web API.

use serde::Serialize;

/// Body of a successful login or logout.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
}

impl SuccessResponse {
    /// Create a success response with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_serialization() {
        let json = serde_json::to_value(SuccessResponse::new("logged out")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "logged out");
    }
}
