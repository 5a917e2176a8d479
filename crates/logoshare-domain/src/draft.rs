//! In-progress add-logo form state.
//!
//! Sub-item validation (colors, fonts, links) rejects only the item being
//! added; the rest of the draft is left as it was. The name is checked once,
//! when the draft is finalized for submission.

use crate::logo::{ExternalLink, LogoColor, NewLogo};
use crate::validation::{
    normalize_optional, validate_color, validate_external_link, validate_font,
    validate_logo_name,
};
use logoshare_core::{LogoshareError, LogoshareResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogoDraft {
    pub name: String,
    pub description: String,
    pub client_name: String,
    pub category_name: String,
    pub designer: String,
    pub studio: String,
    pub licences_details: String,
    colors: Vec<LogoColor>,
    fonts: Vec<String>,
    external_links: Vec<ExternalLink>,
}

impl LogoDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn colors(&self) -> &[LogoColor] {
        &self.colors
    }

    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    pub fn external_links(&self) -> &[ExternalLink] {
        &self.external_links
    }

    pub fn add_color(&mut self, name: &str, hex: &str) -> LogoshareResult<()> {
        let (name, hex) = validate_color(name, hex)?;
        self.colors.push(LogoColor { name, hex });
        Ok(())
    }

    pub fn add_font(&mut self, name: &str) -> LogoshareResult<()> {
        let name = validate_font(name)?;
        self.fonts.push(name);
        Ok(())
    }

    pub fn add_external_link(&mut self, name: &str, url: &str) -> LogoshareResult<()> {
        let (name, url) = validate_external_link(name, url)?;
        self.external_links.push(ExternalLink { name, url });
        Ok(())
    }

    pub fn remove_color(&mut self, index: usize) -> LogoshareResult<LogoColor> {
        remove_at(&mut self.colors, index, "color")
    }

    pub fn remove_font(&mut self, index: usize) -> LogoshareResult<String> {
        remove_at(&mut self.fonts, index, "font")
    }

    pub fn remove_external_link(&mut self, index: usize) -> LogoshareResult<ExternalLink> {
        remove_at(&mut self.external_links, index, "external link")
    }

    /// Submission is allowed only with a non-blank name.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn finalize(&self) -> LogoshareResult<NewLogo> {
        let name = validate_logo_name(&self.name)?;
        Ok(NewLogo {
            name,
            description: normalize_optional(Some(&self.description)),
            client_name: normalize_optional(Some(&self.client_name)),
            category_name: normalize_optional(Some(&self.category_name)),
            designer: normalize_optional(Some(&self.designer)),
            studio: normalize_optional(Some(&self.studio)),
            licences_details: normalize_optional(Some(&self.licences_details)),
            image_url: None,
            colors: self.colors.clone(),
            fonts: self.fonts.clone(),
            external_links: self.external_links.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize, what: &str) -> LogoshareResult<T> {
    if index >= items.len() {
        return Err(LogoshareError::NotFound(format!(
            "No {} at position {}",
            what, index
        )));
    }
    Ok(items.remove(index))
}
