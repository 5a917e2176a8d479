use chrono::{DateTime, Utc};
use logoshare_domain::{
    resolve_image_url, ImageContext, Logo, LogoColor, LogoStatus, NavCategory, ViewMode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub category: NavCategory,
    pub view: ViewMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub items: Vec<T>,
    pub count: usize,
}

/// One table row of the list view.
#[derive(Serialize)]
pub struct LogoRowView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub thumbnail_url: &'a str,
    pub client: Option<&'a str>,
    pub category: &'a str,
    pub status: LogoStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl<'a> From<&'a Logo> for LogoRowView<'a> {
    fn from(logo: &'a Logo) -> Self {
        Self {
            id: &logo.id,
            name: &logo.name,
            thumbnail_url: resolve_image_url(&logo.image_url, ImageContext::Thumbnail),
            client: logo.client.as_deref(),
            category: &logo.category_name,
            status: logo.status,
            created_at: logo.created_at,
        }
    }
}

/// One card of the grid view.
#[derive(Serialize)]
pub struct LogoCardView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub image_url: &'a str,
    pub client: Option<&'a str>,
    pub colors: &'a [LogoColor],
    pub tags: &'a [String],
}

impl<'a> From<&'a Logo> for LogoCardView<'a> {
    fn from(logo: &'a Logo) -> Self {
        Self {
            id: &logo.id,
            name: &logo.name,
            image_url: resolve_image_url(&logo.image_url, ImageContext::Card),
            client: logo.client.as_deref(),
            colors: &logo.colors,
            tags: &logo.tags,
        }
    }
}

fn print_json<T: Serialize>(response: &CliResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"error":"Failed to serialize response: {}"}}"#,
            e
        )
    })
}

pub fn output_success<T: Serialize>(data: T) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", print_json(&response));
}

pub fn output_listing(
    logos: &[Logo],
    category: NavCategory,
    view: ViewMode,
    search: Option<String>,
) {
    let count = logos.len();
    match view {
        ViewMode::List => output_success(ListResponse {
            category,
            view,
            search,
            items: logos.iter().map(LogoRowView::from).collect(),
            count,
        }),
        ViewMode::Grid => output_success(ListResponse {
            category,
            view,
            search,
            items: logos.iter().map(LogoCardView::from).collect(),
            count,
        }),
    }
}

/// Print an error envelope to stderr and exit with status 1 so scripts can
/// detect the failure.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    eprintln!("{}", print_json(&response));
    std::process::exit(1);
}
