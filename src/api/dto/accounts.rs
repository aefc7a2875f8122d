//! DTOs for registration and login.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub confirm_password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_validation() {
        let ok: RegisterRequest = serde_json::from_value(json!({
            "email": "user@example.com",
            "password": "secret",
            "confirm_password": "secret"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let bad_email: RegisterRequest = serde_json::from_value(json!({
            "email": "not-an-email",
            "password": "secret",
            "confirm_password": "secret"
        }))
        .unwrap();
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_login_requires_password() {
        let req: LoginRequest = serde_json::from_value(json!({
            "email": "user@example.com",
            "password": ""
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
