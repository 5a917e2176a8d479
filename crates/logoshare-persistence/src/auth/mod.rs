//! Authentication against the hosted backend.
//!
//! Sign-in state changes are published on a broadcast channel; the
//! `SessionObserver` keeps the latest identity for the rest of the
//! application.

pub mod gotrue;
pub mod session;

pub use gotrue::GoTrueAuth;
pub use session::SessionObserver;

use async_trait::async_trait;
use logoshare_core::LogoshareResult;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(AuthSession),
    SignedOut,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> LogoshareResult<AuthSession>;

    /// Returns `None` when the account needs email confirmation before a
    /// session is issued.
    async fn sign_up(&self, email: &str, password: &str) -> LogoshareResult<Option<AuthSession>>;

    async fn sign_out(&self) -> LogoshareResult<()>;

    /// Session-change notifications from now on.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;

    fn current_session(&self) -> Option<AuthSession>;
}
