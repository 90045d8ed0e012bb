//! Request DTOs for the Web API.

use serde::Deserialize;
use validator::Validate;

/// Message returned when either credential field is missing or empty.
pub const CREDENTIALS_REQUIRED: &str = "username and password are required";

/// Login request.
///
/// Both fields are optional at the serde level so that absent, `null` and
/// empty values are all reported with the same message.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[serde(default, alias = "username")]
    #[validate(
        required(message = "username and password are required"),
        length(min = 1, message = "username and password are required")
    )]
    pub usuario: Option<String>,
    /// Password.
    #[serde(default)]
    #[validate(
        required(message = "username and password are required"),
        length(min = 1, message = "username and password are required")
    )]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LoginRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let req = parse(r#"{"usuario":"alice","password":"correct"}"#);
        assert!(req.validate().is_ok());
        assert_eq!(req.usuario.as_deref(), Some("alice"));
    }

    #[test]
    fn test_username_alias() {
        let req = parse(r#"{"username":"alice","password":"correct"}"#);
        assert!(req.validate().is_ok());
        assert_eq!(req.usuario.as_deref(), Some("alice"));
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(parse(r#"{"password":"correct"}"#).validate().is_err());
        assert!(parse(r#"{"usuario":"alice"}"#).validate().is_err());
        assert!(parse(r#"{}"#).validate().is_err());
    }

    #[test]
    fn test_null_and_empty_fields_rejected() {
        assert!(parse(r#"{"usuario":null,"password":"x"}"#)
            .validate()
            .is_err());
        assert!(parse(r#"{"usuario":"","password":"x"}"#)
            .validate()
            .is_err());
        assert!(parse(r#"{"usuario":"alice","password":""}"#)
            .validate()
            .is_err());
    }
}
