//! Thin wrappers over the API client that log failures and hand pages
//! display-ready messages

pub mod admin;
pub mod auth;
pub mod doctor;
pub mod kyc;
pub mod organization;

pub use admin::AdminService;
pub use auth::AuthApiService;
pub use doctor::DoctorService;
pub use kyc::{KycService, KycSubject};
pub use organization::OrganizationService;

use crate::client::{ClientError, create_authenticated_client};
use alshifa_api::AuthenticatedClient;

pub(crate) const UNREACHABLE: &str = "Unable to reach the server. Please try again later.";
pub(crate) const NOT_SIGNED_IN: &str = "Not signed in";

/// The client a service was built with, else the signed-in global one
fn session_client(explicit: &Option<AuthenticatedClient>) -> Result<AuthenticatedClient, String> {
    explicit
        .clone()
        .or_else(create_authenticated_client)
        .ok_or_else(|| NOT_SIGNED_IN.to_string())
}

/// Reduce a client failure to one line; `denied` is shown for 401/403
fn describe(error: &ClientError, denied: &str) -> String {
    if error.is_unreachable() {
        return UNREACHABLE.to_string();
    }
    match error {
        ClientError::Unauthorized(_) | ClientError::Forbidden(_) => denied.to_string(),
        ClientError::NotFound(_) => "This record no longer exists.".to_string(),
        ClientError::BadRequest(detail) | ClientError::Backend { detail, .. } => {
            format!("Action failed: {detail}")
        }
        other => format!("Action failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_detail_is_kept() {
        assert_eq!(
            describe(&ClientError::BadRequest("Doctor is already verified".into()), "-"),
            "Action failed: Doctor is already verified"
        );
        assert_eq!(
            describe(
                &ClientError::Backend {
                    status: 500,
                    detail: "Internal Server Error".into()
                },
                "-"
            ),
            "Action failed: Internal Server Error"
        );
    }

    #[test]
    fn denial_uses_the_callers_wording() {
        assert_eq!(
            describe(&ClientError::Unauthorized("expired".into()), "Sign in again."),
            "Sign in again."
        );
    }

    #[test]
    fn configuration_errors_are_not_unreachable() {
        let message = describe(&ClientError::Configuration("bad url".into()), "-");
        assert_ne!(message, UNREACHABLE);
        assert!(message.starts_with("Action failed"));
    }

    #[test]
    fn explicit_client_wins() {
        let client = AuthenticatedClient::new("http://localhost:1", "jwt").unwrap();
        let picked = session_client(&Some(client)).unwrap();
        assert_eq!(picked.base_url(), "http://localhost:1");
    }
}
