use crate::auth::AuthSession;
use crate::traits::LogoStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use logoshare_core::LogoshareResult;
use logoshare_domain::{placeholder_image_url, sample_logos, Logo, LogoStatus, NewLogo};
use std::time::Duration;
use uuid::Uuid;

/// Store for the local-only variant. Nothing leaves the process: creation
/// synthesizes an id and timestamp after a simulated round trip.
#[derive(Debug, Clone)]
pub struct LocalLogoStore {
    latency: Duration,
    initial: Vec<Logo>,
}

impl LocalLogoStore {
    /// Seeded with the sample catalog.
    pub fn new(latency: Duration) -> Self {
        Self::with_initial(latency, sample_logos())
    }

    pub fn with_initial(latency: Duration, initial: Vec<Logo>) -> Self {
        Self { latency, initial }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

/// `local-<millis>-<7 random chars>`
pub fn generate_local_id(now: DateTime<Utc>) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("local-{}-{}", now.timestamp_millis(), &random[..7])
}

#[async_trait]
impl LogoStore for LocalLogoStore {
    async fn create_logo(
        &self,
        new_logo: NewLogo,
        status: LogoStatus,
        _session: Option<&AuthSession>,
    ) -> LogoshareResult<Logo> {
        let now = Utc::now();
        let id = generate_local_id(now);
        let image_url = new_logo
            .image_url
            .clone()
            .unwrap_or_else(|| placeholder_image_url(&now.timestamp_millis().to_string()));
        let logo = Logo::from_new(id, new_logo, status, image_url, now);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        tracing::info!("Added logo {} ({}) to local collection", logo.name, logo.id);
        Ok(logo)
    }

    async fn list_logos(&self, _session: Option<&AuthSession>) -> LogoshareResult<Vec<Logo>> {
        Ok(self.initial.clone())
    }

    fn requires_auth(&self) -> bool {
        false
    }
}
