use super::{AuthEvent, AuthProvider, AuthSession, AuthUser};
use crate::backend::postgrest::{check_status, connection_error, read_json};
use async_trait::async_trait;
use logoshare_core::config::BackendSettings;
use logoshare_core::{LogoshareError, LogoshareResult};
use parking_lot::RwLock;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 16;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Token response of the password grant and of signup with auto-confirm.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<AuthUser>,
}

impl TokenResponse {
    fn into_session(self) -> Option<AuthSession> {
        match (self.access_token, self.user) {
            (Some(access_token), Some(user)) => Some(AuthSession {
                access_token,
                refresh_token: self.refresh_token,
                user,
            }),
            _ => None,
        }
    }
}

/// Client for the backend's auth endpoints.
pub struct GoTrueAuth {
    client: Client,
    settings: BackendSettings,
    session: RwLock<Option<AuthSession>>,
    events: broadcast::Sender<AuthEvent>,
}

impl GoTrueAuth {
    pub fn new(settings: BackendSettings) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            client: Client::new(),
            settings,
            session: RwLock::new(None),
            events,
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.settings.url, path)
    }

    fn set_session(&self, session: Option<AuthSession>) {
        *self.session.write() = session.clone();
        let event = match session {
            Some(session) => AuthEvent::SignedIn(session),
            None => AuthEvent::SignedOut,
        };
        // no receivers is fine: nobody is observing yet
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl AuthProvider for GoTrueAuth {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> LogoshareResult<AuthSession> {
        let response = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.settings.anon_key)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(connection_error)?;

        let token: TokenResponse = read_json(response).await.map_err(|e| match e {
            LogoshareError::Backend { message, .. } => LogoshareError::Auth(message),
            other => other,
        })?;
        let session = token.into_session().ok_or_else(|| {
            LogoshareError::Auth("Sign-in response did not include a session".to_string())
        })?;

        tracing::info!("Signed in as {}", session.user.id);
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str) -> LogoshareResult<Option<AuthSession>> {
        let response = self
            .client
            .post(self.auth_url("signup"))
            .header("apikey", &self.settings.anon_key)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(connection_error)?;

        let token: TokenResponse = read_json(response).await.map_err(|e| match e {
            LogoshareError::Backend { message, .. } => LogoshareError::Auth(message),
            other => other,
        })?;
        let session = token.into_session();
        match &session {
            Some(session) => {
                tracing::info!("Signed up and signed in as {}", session.user.id);
                self.set_session(Some(session.clone()));
            }
            None => tracing::info!("Signed up {}; confirmation pending", email),
        }
        Ok(session)
    }

    async fn sign_out(&self) -> LogoshareResult<()> {
        let token = self.session.read().as_ref().map(|s| s.access_token.clone());
        if let Some(token) = token {
            let response = self
                .client
                .post(self.auth_url("logout"))
                .header("apikey", &self.settings.anon_key)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .send()
                .await
                .map_err(connection_error)?;
            check_status(response).await?;
        }
        tracing::info!("Signed out");
        self.set_session(None);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    fn current_session(&self) -> Option<AuthSession> {
        self.session.read().clone()
    }
}
