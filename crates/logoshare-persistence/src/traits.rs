use crate::auth::AuthSession;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use logoshare_core::LogoshareResult;
use logoshare_domain::{Logo, LogoStatus, NewLogo};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Current on-disk snapshot format.
pub const FORMAT_VERSION: u32 = 1;

/// Where logos are created and loaded from.
/// Implementations cover the in-memory local variant and the hosted backend.
#[async_trait]
pub trait LogoStore: Send + Sync {
    /// Persist a new logo and its colors, fonts and links.
    /// Returns the stored logo as the store assigned it (id, timestamp).
    async fn create_logo(
        &self,
        new_logo: NewLogo,
        status: LogoStatus,
        session: Option<&AuthSession>,
    ) -> LogoshareResult<Logo>;

    /// Load the initial collection.
    async fn list_logos(&self, session: Option<&AuthSession>) -> LogoshareResult<Vec<Logo>>;

    /// Whether writes need a signed-in user.
    fn requires_auth(&self) -> bool;
}

/// Metadata for persistence operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// ID of the instance that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// Point-in-time snapshot of the logo collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Raw JSON bytes of the collection
    pub data: Vec<u8>,
    pub metadata: PersistenceMetadata,
}

/// Trait for snapshot storage of the whole collection (file, etc.)
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Save a snapshot to the store
    async fn save(&self, snapshot: StoreSnapshot) -> LogoshareResult<PersistenceMetadata>;

    /// Load the current snapshot from the store
    async fn load(&self) -> LogoshareResult<(StoreSnapshot, PersistenceMetadata)>;

    /// Check if the store file exists
    async fn exists(&self) -> bool;

    /// Get the path to the store file
    fn path(&self) -> &Path;
}
