//! Form bodies and responses of the `/auth` endpoints.
//!
//! Form fields default to empty strings so a missing field reaches the
//! service and is reported like any other validation failure.

use serde::{Deserialize, Serialize};

use recipe_core::services::RegistrationRequest;

/// `application/x-www-form-urlencoded` body of `/auth/token` and `/auth/login`.
///
/// `username` carries the account email.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

impl LoginResponse {
    pub fn new(token: String) -> Self {
        Self {
            message: "Logged in".to_string(),
            token,
        }
    }
}

/// Form body of `/auth/register`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_2: String,
}

impl From<RegisterForm> for RegistrationRequest {
    fn from(form: RegisterForm) -> Self {
        RegistrationRequest {
            email: form.email,
            username: form.username,
            password: form.password,
            password_confirmation: form.password_2,
        }
    }
}
