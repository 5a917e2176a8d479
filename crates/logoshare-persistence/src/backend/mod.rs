//! Hosted relational backend: table rows, the HTTP client, and the
//! `LogoBackend` seam the stores are written against.

pub mod postgrest;
pub mod rows;

pub use postgrest::PostgrestClient;
pub use rows::{
    ColorInsert, CreateLogoPayload, DependentRows, ExternalLinkInsert, FontInsert, LogoInsert,
    LogoRow,
};

use async_trait::async_trait;
use logoshare_core::LogoshareResult;

/// Table-level operations against the backend. Every call carries the
/// bearer token that row-level security evaluates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogoBackend: Send + Sync {
    /// Insert one `logos` row and return it as stored.
    async fn insert_logo(&self, row: &LogoInsert, token: &str) -> LogoshareResult<LogoRow>;

    async fn insert_colors(&self, rows: &[ColorInsert], token: &str) -> LogoshareResult<()>;

    async fn insert_fonts(&self, rows: &[FontInsert], token: &str) -> LogoshareResult<()>;

    async fn insert_external_links(
        &self,
        rows: &[ExternalLinkInsert],
        token: &str,
    ) -> LogoshareResult<()>;

    /// Insert a logo with all dependents in a single server-side transaction.
    async fn create_logo_atomic(
        &self,
        payload: &CreateLogoPayload,
        token: &str,
    ) -> LogoshareResult<LogoRow>;

    /// All visible logos with their dependents embedded.
    async fn fetch_logos(&self, token: &str) -> LogoshareResult<Vec<LogoRow>>;
}
