use logoshare_core::{LogoshareError, LogoshareResult};
use logoshare_persistence::{AuthSession, AuthUser, SessionObserver};

/// Actions that need a signed-in user when the backend is in use.
/// Browsing, searching and previewing are never gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatedAction {
    AddLogo,
    Share,
    Invite,
}

impl GatedAction {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::AddLogo => "add a logo",
            Self::Share => "share a logo",
            Self::Invite => "invite collaborators",
        }
    }
}

pub enum AuthGate {
    /// Local variant: everything is allowed.
    Open,
    Required(SessionObserver),
}

impl AuthGate {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// The signed-in user, `None` when the gate is open, or `LoginRequired`.
    pub fn require_user(&self, action: GatedAction) -> LogoshareResult<Option<AuthUser>> {
        match self {
            Self::Open => Ok(None),
            Self::Required(observer) => match observer.current_user() {
                Some(user) => Ok(Some(user)),
                None => {
                    tracing::warn!("Blocked '{}': not signed in", action.describe());
                    Err(LogoshareError::LoginRequired(action.describe().to_string()))
                }
            },
        }
    }

    pub fn session(&self) -> Option<AuthSession> {
        match self {
            Self::Open => None,
            Self::Required(observer) => observer.current_session(),
        }
    }

    /// Wait until the observer has seen the latest identity change.
    pub async fn settle(&mut self) {
        if let Self::Required(observer) = self {
            observer.changed().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use logoshare_persistence::{AuthEvent, AuthProvider};
    use tokio::sync::broadcast;

    struct StaticAuth {
        events: broadcast::Sender<AuthEvent>,
        session: Option<AuthSession>,
    }

    impl StaticAuth {
        fn new(session: Option<AuthSession>) -> Self {
            let (events, _) = broadcast::channel(4);
            Self { events, session }
        }
    }

    #[async_trait]
    impl AuthProvider for StaticAuth {
        async fn sign_in_with_password(&self, _: &str, _: &str) -> LogoshareResult<AuthSession> {
            unimplemented!()
        }

        async fn sign_up(&self, _: &str, _: &str) -> LogoshareResult<Option<AuthSession>> {
            unimplemented!()
        }

        async fn sign_out(&self) -> LogoshareResult<()> {
            unimplemented!()
        }

        fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
            self.events.subscribe()
        }

        fn current_session(&self) -> Option<AuthSession> {
            self.session.clone()
        }
    }

    #[test]
    fn test_open_gate_allows_everything() {
        let gate = AuthGate::Open;
        assert!(gate.is_open());
        assert_eq!(gate.require_user(GatedAction::AddLogo).unwrap(), None);
        assert!(gate.session().is_none());
    }

    #[tokio::test]
    async fn test_signed_out_is_blocked() {
        let auth = StaticAuth::new(None);
        let gate = AuthGate::Required(SessionObserver::start(&auth));

        for action in [GatedAction::AddLogo, GatedAction::Share, GatedAction::Invite] {
            match gate.require_user(action) {
                Err(LogoshareError::LoginRequired(what)) => assert_eq!(what, action.describe()),
                other => panic!("expected LoginRequired, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_signed_in_passes() {
        let auth = StaticAuth::new(Some(AuthSession {
            access_token: "jwt".to_string(),
            refresh_token: None,
            user: AuthUser {
                id: "user-1".to_string(),
                email: Some("jane@example.com".to_string()),
            },
        }));
        let gate = AuthGate::Required(SessionObserver::start(&auth));

        let user = gate.require_user(GatedAction::Share).unwrap().unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(gate.session().unwrap().access_token, "jwt");
    }
}
