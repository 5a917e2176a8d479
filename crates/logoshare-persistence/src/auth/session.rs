use super::{AuthEvent, AuthProvider, AuthSession, AuthUser};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Holds the current signed-in identity, fed by the provider's session
/// events. One subscription per observer; the listener stops when the
/// observer is dropped.
pub struct SessionObserver {
    current: watch::Receiver<Option<AuthSession>>,
    listener: JoinHandle<()>,
}

impl SessionObserver {
    /// Subscribe to `provider` and seed the slot with its current session.
    pub fn start(provider: &dyn AuthProvider) -> Self {
        let events = provider.subscribe();
        let (slot, current) = watch::channel(provider.current_session());
        let listener = tokio::spawn(listen(events, slot));
        Self { current, listener }
    }

    pub fn current_session(&self) -> Option<AuthSession> {
        self.current.borrow().clone()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.current.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Wait for the next identity change. Returns false once the provider
    /// has gone away.
    pub async fn changed(&mut self) -> bool {
        self.current.changed().await.is_ok()
    }
}

impl Drop for SessionObserver {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

async fn listen(
    mut events: broadcast::Receiver<AuthEvent>,
    slot: watch::Sender<Option<AuthSession>>,
) {
    loop {
        match events.recv().await {
            Ok(AuthEvent::SignedIn(session)) => {
                tracing::debug!("Session changed: signed in as {}", session.user.id);
                slot.send_replace(Some(session));
            }
            Ok(AuthEvent::SignedOut) => {
                tracing::debug!("Session changed: signed out");
                slot.send_replace(None);
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("Missed {} session events", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
