//! Login form state and its failure messages

use crate::auth::session::StorageError;
use alshifa_api::types::LoginRequest;
use alshifa_api::{ClientError, Role};
use thiserror::Error;

/// Every variant renders as the exact inline message shown under the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter your email and password.")]
    MissingCredentials,
    #[error("Access denied. This portal is for {} only.", expected.plural())]
    AccessDenied { expected: Role, actual: Role },
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("Unable to reach the server. Please try again later.")]
    Unreachable,
    #[error("Login failed. Please try again.")]
    Failed,
    #[error("Could not save your session. Please enable browser storage.")]
    Storage(#[from] StorageError),
}

impl From<ClientError> for LoginError {
    fn from(error: ClientError) -> Self {
        if error.is_rejection() {
            Self::InvalidCredentials
        } else if error.is_unreachable() {
            Self::Unreachable
        } else {
            Self::Failed
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Presence check before anything goes over the wire
    pub fn to_request(&self) -> Result<LoginRequest, LoginError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        Ok(LoginRequest {
            username: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_password_is_not() {
        let form = LoginForm {
            email: "  amina@alshifa.in ".to_string(),
            password: " pw ".to_string(),
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.username, "amina@alshifa.in");
        assert_eq!(request.password, " pw ");
    }

    #[test]
    fn blank_fields_are_rejected() {
        let form = LoginForm {
            email: "   ".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(form.to_request().unwrap_err(), LoginError::MissingCredentials);
    }

    #[test]
    fn client_errors_collapse_to_messages() {
        let rejected = ClientError::Unauthorized("Invalid credentials".into());
        assert_eq!(LoginError::from(rejected), LoginError::InvalidCredentials);

        let server = ClientError::Backend {
            status: 500,
            detail: "boom".into(),
        };
        assert_eq!(
            LoginError::from(server).to_string(),
            "Login failed. Please try again."
        );
    }

    #[test]
    fn access_denied_names_the_portal_audience() {
        let denied = LoginError::AccessDenied {
            expected: Role::Staff,
            actual: Role::Doctor,
        };
        assert_eq!(denied.to_string(), "Access denied. This portal is for staff only.");

        let denied = LoginError::AccessDenied {
            expected: Role::Doctor,
            actual: Role::Admin,
        };
        assert_eq!(denied.to_string(), "Access denied. This portal is for doctors only.");
    }
}
