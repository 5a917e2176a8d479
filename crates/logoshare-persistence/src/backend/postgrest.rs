use super::rows::{
    ColorInsert, CreateLogoPayload, ExternalLinkInsert, FontInsert, LogoInsert, LogoRow,
};
use super::LogoBackend;
use async_trait::async_trait;
use logoshare_core::config::BackendSettings;
use logoshare_core::{LogoshareError, LogoshareResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const LOGOS_TABLE: &str = "logos";
pub const COLORS_TABLE: &str = "logo_colors";
pub const FONTS_TABLE: &str = "logo_fonts";
pub const LINKS_TABLE: &str = "logo_external_links";
pub const CREATE_LOGO_RPC: &str = "create_logo_with_dependents";

const LOGOS_WITH_DEPENDENTS: &str =
    "*,logo_colors(name,hex_code),logo_fonts(name),logo_external_links(name,url)";

/// Error body returned by the REST layer on rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
}

pub(crate) fn connection_error(e: reqwest::Error) -> LogoshareError {
    LogoshareError::Connection(e.to_string())
}

/// Turn a non-success response into `LogoshareError::Backend`, keeping the
/// server's message when it sent one.
pub(crate) async fn check_status(response: Response) -> LogoshareResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message.or(b.msg).or(b.error_description))
        .unwrap_or(body);
    Err(LogoshareError::Backend {
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> LogoshareResult<T> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| LogoshareError::Serialization(e.to_string()))
}

/// REST client for the `logos` tables.
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    client: Client,
    settings: BackendSettings,
}

impl PostgrestClient {
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn anon_key(&self) -> &str {
        &self.settings.anon_key
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.settings.url, table)
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.settings.url, function)
    }

    fn authorized(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder
            .header("apikey", &self.settings.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
    }

    async fn insert_batch<T: Serialize + Sync>(
        &self,
        table: &str,
        rows: &[T],
        token: &str,
    ) -> LogoshareResult<()> {
        let request = self
            .authorized(self.client.post(self.table_url(table)), token)
            .header("Prefer", "return=minimal")
            .json(rows);
        let response = request.send().await.map_err(connection_error)?;
        check_status(response).await?;
        tracing::debug!("Inserted {} rows into {}", rows.len(), table);
        Ok(())
    }
}

#[async_trait]
impl LogoBackend for PostgrestClient {
    async fn insert_logo(&self, row: &LogoInsert, token: &str) -> LogoshareResult<LogoRow> {
        let request = self
            .authorized(self.client.post(self.table_url(LOGOS_TABLE)), token)
            .header("Prefer", "return=representation")
            // single object instead of a one-element array
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .json(row);
        let response = request.send().await.map_err(connection_error)?;
        read_json(response).await
    }

    async fn insert_colors(&self, rows: &[ColorInsert], token: &str) -> LogoshareResult<()> {
        self.insert_batch(COLORS_TABLE, rows, token).await
    }

    async fn insert_fonts(&self, rows: &[FontInsert], token: &str) -> LogoshareResult<()> {
        self.insert_batch(FONTS_TABLE, rows, token).await
    }

    async fn insert_external_links(
        &self,
        rows: &[ExternalLinkInsert],
        token: &str,
    ) -> LogoshareResult<()> {
        self.insert_batch(LINKS_TABLE, rows, token).await
    }

    async fn create_logo_atomic(
        &self,
        payload: &CreateLogoPayload,
        token: &str,
    ) -> LogoshareResult<LogoRow> {
        let request = self
            .authorized(self.client.post(self.rpc_url(CREATE_LOGO_RPC)), token)
            .json(payload);
        let response = request.send().await.map_err(connection_error)?;
        read_json(response).await
    }

    async fn fetch_logos(&self, token: &str) -> LogoshareResult<Vec<LogoRow>> {
        let request = self
            .authorized(self.client.get(self.table_url(LOGOS_TABLE)), token)
            .query(&[
                ("select", LOGOS_WITH_DEPENDENTS),
                ("order", "created_at.desc"),
            ]);
        let response = request.send().await.map_err(connection_error)?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PostgrestClient {
        PostgrestClient::new(BackendSettings {
            url: "https://demo.example.co".to_string(),
            anon_key: "anon".to_string(),
        })
    }

    #[test]
    fn test_urls() {
        let client = client();
        assert_eq!(
            client.table_url(COLORS_TABLE),
            "https://demo.example.co/rest/v1/logo_colors"
        );
        assert_eq!(
            client.rpc_url(CREATE_LOGO_RPC),
            "https://demo.example.co/rest/v1/rpc/create_logo_with_dependents"
        );
    }

    #[test]
    fn test_authorized_headers() {
        let client = client();
        let request = client
            .authorized(client.client.get(client.table_url(LOGOS_TABLE)), "jwt")
            .build()
            .unwrap();

        assert_eq!(request.headers()["apikey"], "anon");
        assert_eq!(request.headers()[header::AUTHORIZATION], "Bearer jwt");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_connection_error() {
        let client = PostgrestClient::new(BackendSettings {
            url: "http://127.0.0.1:1".to_string(),
            anon_key: "anon".to_string(),
        });
        let result = client.fetch_logos("anon").await;
        assert!(matches!(result, Err(LogoshareError::Connection(_))));
    }
}
