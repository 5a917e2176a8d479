use crate::gate::{AuthGate, GatedAction};
use crate::library::LogoLibrary;
use logoshare_core::config::BackendSettings;
use logoshare_core::{AppConfig, LogoshareError, LogoshareResult};
use logoshare_domain::{
    ensure_shareable, share_link, validate_invite_email, Logo, LogoDraft, LogoStatus,
};
use logoshare_persistence::{
    AuthProvider, AuthUser, BackendLogoStore, GoTrueAuth, LocalLogoStore, LogoStore,
    PostgrestClient, SessionObserver, WriteMode,
};
use std::sync::Arc;
use std::time::Duration;

/// A library wired to its store and, for the hosted variant, to auth.
pub struct LogoApp {
    library: LogoLibrary,
    store: Arc<dyn LogoStore>,
    auth: Option<Arc<dyn AuthProvider>>,
    gate: AuthGate,
    share_origin: String,
}

impl LogoApp {
    /// Must be called inside a Tokio runtime when `auth` is given, since the
    /// session observer runs as a task.
    pub fn new(
        store: Arc<dyn LogoStore>,
        auth: Option<Arc<dyn AuthProvider>>,
        share_origin: impl Into<String>,
    ) -> Self {
        let gate = match &auth {
            Some(provider) if store.requires_auth() => {
                AuthGate::Required(SessionObserver::start(provider.as_ref()))
            }
            _ => AuthGate::Open,
        };
        Self {
            library: LogoLibrary::default(),
            store,
            auth,
            gate,
            share_origin: share_origin.into(),
        }
    }

    /// In-process store seeded with `initial`; no auth.
    pub fn local(config: &AppConfig, initial: Vec<Logo>) -> Self {
        let latency = Duration::from_millis(config.effective_simulated_latency_ms());
        let store = LocalLogoStore::with_initial(latency, initial);
        Self::new(Arc::new(store), None, config.effective_share_origin())
    }

    pub fn backend(config: &AppConfig, settings: BackendSettings) -> Self {
        let mode = if config.transactional_writes {
            WriteMode::Transactional
        } else {
            WriteMode::Sequential
        };
        tracing::debug!("Using hosted backend at {} ({:?} writes)", settings.url, mode);

        let store = BackendLogoStore::new(
            PostgrestClient::new(settings.clone()),
            mode,
            settings.anon_key.clone(),
        );
        let auth: Arc<dyn AuthProvider> = Arc::new(GoTrueAuth::new(settings));
        Self::new(Arc::new(store), Some(auth), config.effective_share_origin())
    }

    pub fn library(&self) -> &LogoLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut LogoLibrary {
        &mut self.library
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub fn share_origin(&self) -> &str {
        &self.share_origin
    }

    /// Fetch the initial collection from the store.
    pub async fn load(&mut self) -> LogoshareResult<usize> {
        let session = self.gate.session();
        let logos = self.store.list_logos(session.as_ref()).await?;
        let count = logos.len();
        self.library.replace(logos);
        tracing::info!("Loaded {} logos", count);
        Ok(count)
    }

    fn auth(&self) -> LogoshareResult<&Arc<dyn AuthProvider>> {
        self.auth.as_ref().ok_or_else(|| {
            LogoshareError::Auth("Sign-in is only available with the hosted backend".to_string())
        })
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> LogoshareResult<AuthUser> {
        let session = self.auth()?.sign_in_with_password(email, password).await?;
        self.gate.settle().await;
        Ok(session.user)
    }

    /// Register an account. Returns the user when the backend signs them in
    /// straight away, `None` when email confirmation is pending.
    pub async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
    ) -> LogoshareResult<Option<AuthUser>> {
        let session = self.auth()?.sign_up(email, password).await?;
        if session.is_some() {
            self.gate.settle().await;
        }
        Ok(session.map(|s| s.user))
    }

    pub async fn sign_out(&mut self) -> LogoshareResult<()> {
        self.auth()?.sign_out().await?;
        self.gate.settle().await;
        Ok(())
    }

    pub async fn add_logo(
        &mut self,
        draft: &LogoDraft,
        status: LogoStatus,
    ) -> LogoshareResult<Logo> {
        self.gate.require_user(GatedAction::AddLogo)?;
        let session = self.gate.session();
        self.library
            .submit(self.store.as_ref(), draft, status, session.as_ref())
            .await
    }

    /// Public link for a published logo.
    pub fn share_link(&self, id: &str) -> LogoshareResult<String> {
        self.gate.require_user(GatedAction::Share)?;
        let logo = self.library.get(id)?;
        ensure_shareable(logo)?;
        Ok(share_link(&self.share_origin, &logo.id))
    }

    /// Record an invitation to view a logo. Nothing is delivered; the
    /// returned message confirms the address that was accepted.
    pub fn invite(&self, id: &str, email: &str) -> LogoshareResult<String> {
        self.gate.require_user(GatedAction::Invite)?;
        let logo = self.library.get(id)?;
        ensure_shareable(logo)?;
        let email = validate_invite_email(email)?;
        tracing::info!("Invited {} to logo {} ({})", email, logo.name, logo.id);
        Ok(format!("Invitation sent to {}", email))
    }
}
