//! Authentication module

pub mod context;
pub mod session;

// Re-export commonly used items
pub use context::{
    AuthAction, AuthContext, AuthContextData, AuthProvider, resolve_restored, use_auth,
};
pub use session::{AuthSession, BrowserSessionStore, SessionStore, StorageError, complete_login};
