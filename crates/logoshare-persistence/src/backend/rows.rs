//! Row shapes of the hosted backend tables: `logos`, `logo_colors`,
//! `logo_fonts`, `logo_external_links`.

use chrono::{DateTime, Utc};
use logoshare_domain::{ExternalLink, Logo, LogoColor, LogoStatus, NewLogo};
use serde::{Deserialize, Deserializer, Serialize};

/// Primary keys may be numeric or uuid depending on the schema; both are
/// kept as opaque strings.
fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoInsert {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub category_name: Option<String>,
    pub status: LogoStatus,
    pub designer: Option<String>,
    pub studio: Option<String>,
    pub licences: Option<String>,
    pub image_url: Option<String>,
}

impl LogoInsert {
    pub fn from_new(new_logo: &NewLogo, status: LogoStatus, user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: new_logo.name.clone(),
            description: new_logo.description.clone(),
            client_name: new_logo.client_name.clone(),
            category_name: new_logo.category_name.clone(),
            status,
            designer: new_logo.designer.clone(),
            studio: new_logo.studio.clone(),
            licences: new_logo.licences_details.clone(),
            image_url: new_logo.image_url.clone(),
        }
    }
}

/// Dependent rows carry the parent id, except inside the transactional RPC
/// payload where the server assigns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<String>,
    pub name: String,
    pub hex_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalLinkInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<String>,
    pub name: String,
    pub url: String,
}

/// Colors, fonts and links of a new logo in insert form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependentRows {
    pub colors: Vec<ColorInsert>,
    pub fonts: Vec<FontInsert>,
    pub links: Vec<ExternalLinkInsert>,
}

impl DependentRows {
    pub fn from_new(new_logo: &NewLogo, logo_id: Option<&str>) -> Self {
        let logo_id = logo_id.map(str::to_string);
        Self {
            colors: new_logo
                .colors
                .iter()
                .map(|c| ColorInsert {
                    logo_id: logo_id.clone(),
                    name: c.name.clone(),
                    hex_code: c.hex.clone(),
                })
                .collect(),
            fonts: new_logo
                .fonts
                .iter()
                .map(|f| FontInsert {
                    logo_id: logo_id.clone(),
                    name: f.clone(),
                })
                .collect(),
            links: new_logo
                .external_links
                .iter()
                .map(|l| ExternalLinkInsert {
                    logo_id: logo_id.clone(),
                    name: l.name.clone(),
                    url: l.url.clone(),
                })
                .collect(),
        }
    }
}

/// Arguments of the `create_logo_with_dependents` database function, which
/// inserts everything in one transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateLogoPayload {
    pub p_logo: LogoInsert,
    pub p_colors: Vec<ColorInsert>,
    pub p_fonts: Vec<FontInsert>,
    pub p_links: Vec<ExternalLinkInsert>,
}

impl CreateLogoPayload {
    pub fn from_new(new_logo: &NewLogo, status: LogoStatus, user_id: &str) -> Self {
        let dependents = DependentRows::from_new(new_logo, None);
        Self {
            p_logo: LogoInsert::from_new(new_logo, status, user_id),
            p_colors: dependents.colors,
            p_fonts: dependents.fonts,
            p_links: dependents.links,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorRow {
    pub name: String,
    pub hex_code: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontRow {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalLinkRow {
    pub name: String,
    pub url: String,
}

/// A `logos` row, optionally with embedded dependents when selected with
/// `logo_colors(*),logo_fonts(*),logo_external_links(*)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogoRow {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub status: LogoStatus,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub designer: Option<String>,
    #[serde(default)]
    pub studio: Option<String>,
    #[serde(default)]
    pub licences: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub logo_colors: Vec<ColorRow>,
    #[serde(default)]
    pub logo_fonts: Vec<FontRow>,
    #[serde(default)]
    pub logo_external_links: Vec<ExternalLinkRow>,
}

impl LogoRow {
    /// Convert using the embedded dependents.
    pub fn into_logo(self) -> Logo {
        let colors = self
            .logo_colors
            .iter()
            .map(|c| LogoColor::new(c.name.clone(), c.hex_code.clone()))
            .collect();
        let fonts = self.logo_fonts.iter().map(|f| f.name.clone()).collect();
        let links = self
            .logo_external_links
            .iter()
            .map(|l| ExternalLink::new(l.name.clone(), l.url.clone()))
            .collect();
        self.into_logo_with(colors, fonts, links)
    }

    /// Convert a freshly inserted parent row, whose response carries no
    /// dependents, using the values that were written alongside it.
    pub fn into_logo_with(
        self,
        colors: Vec<LogoColor>,
        fonts_used: Vec<String>,
        external_links: Vec<ExternalLink>,
    ) -> Logo {
        Logo {
            id: self.id,
            name: self.name,
            image_url: self.image_url.unwrap_or_default(),
            fonts_used,
            colors,
            style: self.style,
            client: self.client_name,
            category_name: self
                .category_name
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| logoshare_domain::DEFAULT_CATEGORY.to_string()),
            status: self.status,
            tags: self.tags.unwrap_or_default(),
            designer: self.designer,
            studio: self.studio,
            licences: self.licences,
            description: self.description,
            external_links,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_logo() -> NewLogo {
        NewLogo {
            name: "Test".to_string(),
            client_name: Some("Acme".to_string()),
            licences_details: Some("Internal".to_string()),
            colors: vec![
                LogoColor::new("Primary", "#4A55A2"),
                LogoColor::new("Accent", "#808080"),
            ],
            fonts: vec!["Inter".to_string()],
            external_links: vec![ExternalLink::new("Brief", "https://example.com/brief")],
            ..NewLogo::default()
        }
    }

    #[test]
    fn test_logo_insert_column_names() {
        let insert = LogoInsert::from_new(&new_logo(), LogoStatus::Published, "user-1");
        let value = serde_json::to_value(&insert).unwrap();

        assert_eq!(value["user_id"], "user-1");
        assert_eq!(value["client_name"], "Acme");
        assert_eq!(value["licences"], "Internal");
        assert_eq!(value["status"], "Published");
        assert!(value["category_name"].is_null());
    }

    #[test]
    fn test_dependents_carry_parent_id() {
        let rows = DependentRows::from_new(&new_logo(), Some("42"));
        assert_eq!(rows.colors.len(), 2);
        assert_eq!(rows.fonts.len(), 1);
        assert_eq!(rows.links.len(), 1);

        let value = serde_json::to_value(&rows.colors[0]).unwrap();
        assert_eq!(value, json!({"logo_id": "42", "name": "Primary", "hex_code": "#4A55A2"}));
    }

    #[test]
    fn test_rpc_payload_omits_parent_id() {
        let payload = CreateLogoPayload::from_new(&new_logo(), LogoStatus::Draft, "user-1");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["p_logo"]["name"], "Test");
        assert_eq!(value["p_fonts"], json!([{"name": "Inter"}]));
        assert!(value["p_colors"][0].get("logo_id").is_none());
    }

    #[test]
    fn test_row_with_embedded_dependents() {
        let row: LogoRow = serde_json::from_value(json!({
            "id": 17,
            "user_id": "user-1",
            "name": "Apex Fitness",
            "client_name": "GymNation",
            "category_name": null,
            "status": "Published",
            "image_url": "https://picsum.photos/seed/apexfit/400/300",
            "created_at": "2024-05-01T12:00:00.123456+00:00",
            "logo_colors": [{"id": 1, "logo_id": 17, "name": "Dynamic Red", "hex_code": "#FF0000"}],
            "logo_fonts": [{"id": 1, "logo_id": 17, "name": "Bebas Neue"}],
            "logo_external_links": []
        }))
        .unwrap();

        let logo = row.into_logo();
        assert_eq!(logo.id, "17");
        assert_eq!(logo.client.as_deref(), Some("GymNation"));
        assert_eq!(logo.category_name, "Uncategorized");
        assert_eq!(logo.colors, vec![LogoColor::new("Dynamic Red", "#FF0000")]);
        assert_eq!(logo.fonts_used, vec!["Bebas Neue".to_string()]);
        assert!(logo.created_at.is_some());
    }

    #[test]
    fn test_row_rejects_object_id() {
        let result: Result<LogoRow, _> =
            serde_json::from_value(json!({"id": {"nested": true}, "name": "Bad"}));
        assert!(result.is_err());
    }
}
