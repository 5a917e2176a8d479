//! Input validation shared by the add-logo form and the CLI.

use logoshare_core::{LogoshareError, LogoshareResult};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid")
});

/// `#RRGGBB` only. Shorthand and missing `#` are rejected.
pub fn is_valid_hex(hex: &str) -> bool {
    HEX_COLOR.is_match(hex)
}

/// Absolute URL check. Relative references do not parse.
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

pub fn validate_logo_name(name: &str) -> LogoshareResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LogoshareError::Validation(
            "Logo name is required.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn validate_color(name: &str, hex: &str) -> LogoshareResult<(String, String)> {
    let (name, hex) = (name.trim(), hex.trim());
    if name.is_empty() || !is_valid_hex(hex) {
        return Err(LogoshareError::Validation(
            "Please enter a valid color name and hex code (e.g., #RRGGBB).".to_string(),
        ));
    }
    Ok((name.to_string(), hex.to_string()))
}

pub fn validate_font(name: &str) -> LogoshareResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LogoshareError::Validation(
            "Please enter a font name.".to_string(),
        ));
    }
    Ok(name.to_string())
}

pub fn validate_external_link(name: &str, url: &str) -> LogoshareResult<(String, String)> {
    let (name, url) = (name.trim(), url.trim());
    if name.is_empty() || url.is_empty() || !is_valid_url(url) {
        return Err(LogoshareError::Validation(
            "Please enter a valid link name and a full URL (e.g., https://example.com)."
                .to_string(),
        ));
    }
    Ok((name.to_string(), url.to_string()))
}

/// Trim optional free text, mapping blank input to `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
