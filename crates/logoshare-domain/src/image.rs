use crate::validation::is_valid_url;

/// Where an image is shown; each surface has its own placeholder size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageContext {
    Card,
    Preview,
    Thumbnail,
}

impl ImageContext {
    pub fn fallback_url(&self) -> &'static str {
        match self {
            Self::Card => "https://picsum.photos/400/300?grayscale",
            Self::Preview => "https://picsum.photos/400/300?grayscale&blur=2",
            Self::Thumbnail => "https://picsum.photos/40/40?grayscale",
        }
    }
}

/// Image reference to display. Empty or malformed references are replaced
/// by the context's placeholder.
pub fn resolve_image_url(url: &str, context: ImageContext) -> &str {
    let trimmed = url.trim();
    if trimmed.is_empty() || !is_valid_url(trimmed) {
        tracing::debug!("Using fallback image for {:?}: {:?}", context, url);
        return context.fallback_url();
    }
    trimmed
}

/// Placeholder preview for a newly created logo.
pub fn placeholder_image_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{}/400/300", seed)
}
