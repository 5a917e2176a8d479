use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type LogoId = String;

pub const DEFAULT_CATEGORY: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogoStatus {
    #[default]
    Draft,
    Published,
}

impl LogoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
        }
    }

    pub fn is_shareable(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for LogoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoColor {
    pub name: String,
    pub hex: String,
}

impl LogoColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub name: String,
    pub url: String,
}

impl ExternalLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub id: LogoId,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub fonts_used: Vec<String>,
    #[serde(default)]
    pub colors: Vec<LogoColor>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default = "default_category")]
    pub category_name: String,
    #[serde(default)]
    pub status: LogoStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub designer: Option<String>,
    #[serde(default)]
    pub studio: Option<String>,
    #[serde(default)]
    pub licences: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_links: Vec<ExternalLink>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Validated payload for a logo that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLogo {
    pub name: String,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub category_name: Option<String>,
    pub designer: Option<String>,
    pub studio: Option<String>,
    pub licences_details: Option<String>,
    pub image_url: Option<String>,
    pub colors: Vec<LogoColor>,
    pub fonts: Vec<String>,
    pub external_links: Vec<ExternalLink>,
}

impl Logo {
    /// Materialise a stored logo from a validated payload. The id, timestamp
    /// and image reference come from whichever store accepted it.
    pub fn from_new(
        id: LogoId,
        new_logo: NewLogo,
        status: LogoStatus,
        image_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: new_logo.name,
            image_url,
            fonts_used: new_logo.fonts,
            colors: new_logo.colors,
            style: None,
            client: new_logo.client_name,
            category_name: new_logo.category_name.unwrap_or_else(default_category),
            status,
            tags: Vec::new(),
            designer: new_logo.designer,
            studio: new_logo.studio,
            licences: new_logo.licences_details,
            description: new_logo.description,
            external_links: new_logo.external_links,
            created_at: Some(created_at),
        }
    }

    /// Creation time used for ordering. Logos without one sort as the epoch.
    pub fn created_at_or_epoch(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("published".parse::<LogoStatus>(), Ok(LogoStatus::Published));
        assert_eq!(" Draft ".parse::<LogoStatus>(), Ok(LogoStatus::Draft));
        assert!("archived".parse::<LogoStatus>().is_err());
        assert_eq!(LogoStatus::Published.to_string(), "Published");
        assert!(LogoStatus::Published.is_shareable());
        assert!(!LogoStatus::Draft.is_shareable());
    }

    #[test]
    fn test_from_new_defaults_category() {
        let new_logo = NewLogo {
            name: "Test".to_string(),
            fonts: vec!["Inter".to_string()],
            ..NewLogo::default()
        };
        let now = Utc::now();
        let logo = Logo::from_new(
            "local-1".to_string(),
            new_logo,
            LogoStatus::Published,
            "https://picsum.photos/seed/1/400/300".to_string(),
            now,
        );

        assert_eq!(logo.category_name, DEFAULT_CATEGORY);
        assert_eq!(logo.fonts_used, vec!["Inter".to_string()]);
        assert_eq!(logo.created_at, Some(now));
        assert!(logo.tags.is_empty());
        assert!(logo.style.is_none());
    }

    #[test]
    fn test_missing_created_at_is_epoch() {
        let json = r#"{"id":"1","name":"Bare","image_url":"https://example.com/a.png"}"#;
        let logo: Logo = serde_json::from_str(json).unwrap();
        assert_eq!(logo.created_at_or_epoch(), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(logo.category_name, DEFAULT_CATEGORY);
        assert_eq!(logo.status, LogoStatus::Draft);
    }
}
