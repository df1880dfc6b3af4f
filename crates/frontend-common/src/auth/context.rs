//! Global authentication context and provider

use super::session::{AuthSession, BrowserSessionStore, SessionStore};
use crate::client::{ClientError, set_auth_token};
use crate::services::AuthApiService;
use alshifa_api::Role;
use alshifa_api::types::UserOut;
use std::rc::Rc;
use yew::prelude::*;

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub session: Option<AuthSession>,
    pub is_loading: bool,
}

/// Authentication context actions
pub enum AuthAction {
    /// A session was accepted and already persisted
    SignedIn(AuthSession),
    /// Result of reading local storage on start-up
    Restored(Option<AuthSession>),
    Logout,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            session: None,
            is_loading: true, // Start with loading to check localStorage
        }
    }
}

impl AuthContextData {
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SignedIn(session) | AuthAction::Restored(Some(session)) => {
                if let Err(e) = set_auth_token(Some(&session.access_token)) {
                    tracing::warn!(error = %e, "failed to build authenticated client");
                }

                Rc::new(Self {
                    session: Some(session),
                    is_loading: false,
                })
            }
            AuthAction::Restored(None) => Rc::new(Self {
                session: None,
                is_loading: false,
            }),
            AuthAction::Logout => {
                let _ = set_auth_token(None);
                BrowserSessionStore.clear();
                tracing::info!("signed out");

                Rc::new(Self {
                    session: None,
                    is_loading: false,
                })
            }
        }
    }
}

/// Decide whether a session read from storage survives the backend's answer
/// to `GET /auth/me`.
///
/// A refused token or a role that no longer matches drops the session. When
/// the backend could not be asked (offline, 5xx) the stored session is kept.
pub fn resolve_restored(
    session: AuthSession,
    check: Result<UserOut, ClientError>,
) -> Option<AuthSession> {
    match check {
        Ok(user) if user.role == session.role => Some(session),
        Ok(user) => {
            tracing::warn!(stored = %session.role, actual = %user.role, "stored role is stale");
            None
        }
        Err(e) if e.is_rejection() => None,
        Err(_) => Some(session),
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Load the session from localStorage on mount, then confirm it with the backend
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| match BrowserSessionStore.load() {
            None => auth_state.dispatch(AuthAction::Restored(None)),
            Some(session) => wasm_bindgen_futures::spawn_local(async move {
                let check = AuthApiService::new().verify(&session).await;
                let restored = resolve_restored(session, check);
                if restored.is_none() {
                    tracing::info!("stored session rejected, clearing it");
                    BrowserSessionStore.clear();
                }
                auth_state.dispatch(AuthAction::Restored(restored));
            }),
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> AuthSession {
        AuthSession {
            access_token: "t".to_string(),
            role,
        }
    }

    #[test]
    fn starts_loading_without_session() {
        let data = AuthContextData::default();
        assert!(data.is_loading);
        assert_eq!(data.role(), None);
    }

    #[test]
    fn restore_without_session_stops_loading() {
        let data = Rc::new(AuthContextData::default()).reduce(AuthAction::Restored(None));
        assert!(!data.is_loading);
        assert!(data.session.is_none());
    }

    #[test]
    fn sign_in_sets_role() {
        let data =
            Rc::new(AuthContextData::default()).reduce(AuthAction::SignedIn(session(Role::Admin)));
        assert!(data.has_role(Role::Admin));
        assert!(!data.has_role(Role::Doctor));
    }

    fn user(role: Role) -> UserOut {
        UserOut {
            id: "u-1".to_string(),
            email: "amina@alshifa.in".to_string(),
            full_name: "Amina Khan".to_string(),
            role,
            is_active: true,
        }
    }

    #[test]
    fn restored_session_kept_when_backend_agrees() {
        let kept = resolve_restored(session(Role::Doctor), Ok(user(Role::Doctor)));
        assert_eq!(kept, Some(session(Role::Doctor)));
    }

    #[test]
    fn restored_session_dropped_on_role_change() {
        assert_eq!(resolve_restored(session(Role::Doctor), Ok(user(Role::Patient))), None);
    }

    #[test]
    fn restored_session_dropped_when_token_refused() {
        let refused = ClientError::Unauthorized("Could not validate credentials".into());
        assert_eq!(resolve_restored(session(Role::Admin), Err(refused)), None);
    }

    #[test]
    fn restored_session_survives_backend_trouble() {
        let outage = ClientError::Backend {
            status: 503,
            detail: "Service Unavailable".into(),
        };
        assert_eq!(
            resolve_restored(session(Role::Admin), Err(outage)),
            Some(session(Role::Admin))
        );
    }
}
