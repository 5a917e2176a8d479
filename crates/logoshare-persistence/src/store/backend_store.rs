use crate::auth::AuthSession;
use crate::backend::{CreateLogoPayload, DependentRows, LogoBackend, LogoInsert};
use crate::traits::LogoStore;
use async_trait::async_trait;
use logoshare_core::{LogoshareError, LogoshareResult};
use logoshare_domain::{Logo, LogoStatus, NewLogo};

/// How a new logo and its dependents reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// One database function call; the server inserts everything or nothing.
    #[default]
    Transactional,
    /// Parent insert followed by one batch insert per non-empty dependent
    /// list (colors, fonts, links). A failure stops the sequence but rows
    /// already written stay in place.
    Sequential,
}

/// Store backed by the hosted relational backend.
pub struct BackendLogoStore<B: LogoBackend> {
    backend: B,
    mode: WriteMode,
    anon_key: String,
}

impl<B: LogoBackend> BackendLogoStore<B> {
    pub fn new(backend: B, mode: WriteMode, anon_key: impl Into<String>) -> Self {
        Self {
            backend,
            mode,
            anon_key: anon_key.into(),
        }
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    async fn create_sequential(
        &self,
        new_logo: NewLogo,
        status: LogoStatus,
        session: &AuthSession,
    ) -> LogoshareResult<Logo> {
        let token = session.access_token.as_str();
        let parent = LogoInsert::from_new(&new_logo, status, &session.user.id);
        let row = self.backend.insert_logo(&parent, token).await?;
        tracing::debug!("Inserted logo row {}", row.id);

        let dependents = DependentRows::from_new(&new_logo, Some(&row.id));
        if !dependents.colors.is_empty() {
            self.backend
                .insert_colors(&dependents.colors, token)
                .await
                .inspect_err(|e| log_partial_write(&row.id, "colors", e))?;
        }
        if !dependents.fonts.is_empty() {
            self.backend
                .insert_fonts(&dependents.fonts, token)
                .await
                .inspect_err(|e| log_partial_write(&row.id, "fonts", e))?;
        }
        if !dependents.links.is_empty() {
            self.backend
                .insert_external_links(&dependents.links, token)
                .await
                .inspect_err(|e| log_partial_write(&row.id, "external links", e))?;
        }

        Ok(row.into_logo_with(new_logo.colors, new_logo.fonts, new_logo.external_links))
    }

    async fn create_transactional(
        &self,
        new_logo: NewLogo,
        status: LogoStatus,
        session: &AuthSession,
    ) -> LogoshareResult<Logo> {
        let payload = CreateLogoPayload::from_new(&new_logo, status, &session.user.id);
        let row = self
            .backend
            .create_logo_atomic(&payload, &session.access_token)
            .await?;
        Ok(row.into_logo_with(new_logo.colors, new_logo.fonts, new_logo.external_links))
    }
}

fn log_partial_write(logo_id: &str, step: &str, error: &LogoshareError) {
    tracing::error!(
        "Inserting {} for logo {} failed, parent row is left without them: {}",
        step,
        logo_id,
        error
    );
}

#[async_trait]
impl<B: LogoBackend> LogoStore for BackendLogoStore<B> {
    async fn create_logo(
        &self,
        new_logo: NewLogo,
        status: LogoStatus,
        session: Option<&AuthSession>,
    ) -> LogoshareResult<Logo> {
        let session =
            session.ok_or_else(|| LogoshareError::LoginRequired("add a logo".to_string()))?;

        let logo = match self.mode {
            WriteMode::Transactional => self.create_transactional(new_logo, status, session).await,
            WriteMode::Sequential => self.create_sequential(new_logo, status, session).await,
        }
        .inspect_err(|e| tracing::error!("Error adding logo: {}", e))?;

        tracing::info!("Stored logo {} ({}) in backend", logo.name, logo.id);
        Ok(logo)
    }

    async fn list_logos(&self, session: Option<&AuthSession>) -> LogoshareResult<Vec<Logo>> {
        let token = session
            .map(|s| s.access_token.as_str())
            .unwrap_or(&self.anon_key);
        let rows = self.backend.fetch_logos(token).await?;
        tracing::info!("Loaded {} logos from backend", rows.len());
        Ok(rows.into_iter().map(|row| row.into_logo()).collect())
    }

    fn requires_auth(&self) -> bool {
        true
    }
}
