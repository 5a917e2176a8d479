pub mod auth;
pub mod backend;
pub mod store;
pub mod traits;

pub use auth::{AuthEvent, AuthProvider, AuthSession, AuthUser, GoTrueAuth, SessionObserver};
pub use backend::{LogoBackend, PostgrestClient};
pub use store::*;
pub use traits::*;
