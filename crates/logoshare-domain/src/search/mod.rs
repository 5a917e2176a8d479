//! Logo search functionality.
//!
//! Free-text search is a case-insensitive substring match over a fixed set
//! of fields. A logo is kept when any field matches; absent optional fields
//! never match.

use crate::Logo;

/// Trait for searching logos by various criteria.
pub trait LogoSearcher {
    /// Returns true if the logo matches the search criteria.
    fn matches(&self, logo: &Logo) -> bool;
}

/// Field a single searcher looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Client,
    Category,
    Tags,
    Style,
}

impl SearchField {
    pub const ALL: [SearchField; 5] = [
        Self::Name,
        Self::Client,
        Self::Category,
        Self::Tags,
        Self::Style,
    ];
}

/// Case-insensitive substring search on one field.
pub struct FieldSearcher {
    field: SearchField,
    query: String,
}

impl FieldSearcher {
    pub fn new(field: SearchField, query: impl Into<String>) -> Self {
        Self {
            field,
            query: query.into().to_lowercase(),
        }
    }

    fn contains(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.query)
    }

    fn contains_opt(&self, haystack: Option<&str>) -> bool {
        haystack.is_some_and(|h| self.contains(h))
    }
}

impl LogoSearcher for FieldSearcher {
    fn matches(&self, logo: &Logo) -> bool {
        if self.query.is_empty() {
            return true;
        }
        match self.field {
            SearchField::Name => self.contains(&logo.name),
            SearchField::Client => self.contains_opt(logo.client.as_deref()),
            SearchField::Category => self.contains(&logo.category_name),
            SearchField::Tags => logo.tags.iter().any(|tag| self.contains(tag)),
            SearchField::Style => self.contains_opt(logo.style.as_deref()),
        }
    }
}

/// Composite searcher that matches if any sub-searcher matches.
pub struct CompositeSearcher {
    searchers: Vec<FieldSearcher>,
}

impl CompositeSearcher {
    /// Create an empty composite searcher (matches all logos).
    pub fn new() -> Self {
        Self {
            searchers: Vec::new(),
        }
    }

    /// Search every supported field: name, client, category, tags, style.
    pub fn all(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            searchers: SearchField::ALL
                .into_iter()
                .map(|field| FieldSearcher::new(field, query.clone()))
                .collect(),
        }
    }
}

impl Default for CompositeSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoSearcher for CompositeSearcher {
    fn matches(&self, logo: &Logo) -> bool {
        if self.searchers.is_empty() {
            return true;
        }
        self.searchers.iter().any(|s| s.matches(logo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogoStatus, DEFAULT_CATEGORY};

    fn create_test_logo(name: &str) -> Logo {
        Logo {
            id: "t".to_string(),
            name: name.to_string(),
            image_url: "https://picsum.photos/400/300".to_string(),
            fonts_used: vec![],
            colors: vec![],
            style: None,
            client: None,
            category_name: DEFAULT_CATEGORY.to_string(),
            status: LogoStatus::Draft,
            tags: vec![],
            designer: None,
            studio: None,
            licences: None,
            description: None,
            external_links: vec![],
            created_at: None,
        }
    }

    #[test]
    fn test_name_searcher_case_insensitive() {
        let logo = create_test_logo("NovaTech Solutions");
        assert!(FieldSearcher::new(SearchField::Name, "novatech").matches(&logo));
        assert!(FieldSearcher::new(SearchField::Name, "SOLUTIONS").matches(&logo));
        assert!(!FieldSearcher::new(SearchField::Name, "apex").matches(&logo));
    }

    #[test]
    fn test_absent_fields_do_not_match() {
        let logo = create_test_logo("Bare");
        assert!(!FieldSearcher::new(SearchField::Client, "acme").matches(&logo));
        assert!(!FieldSearcher::new(SearchField::Style, "tech").matches(&logo));
        assert!(!FieldSearcher::new(SearchField::Tags, "tech").matches(&logo));
    }

    #[test]
    fn test_tag_partial_match() {
        let mut logo = create_test_logo("Apex Fitness");
        logo.tags = vec!["fitness".to_string(), "energy".to_string()];
        assert!(FieldSearcher::new(SearchField::Tags, "ENER").matches(&logo));
    }

    #[test]
    fn test_composite_searcher_any_match() {
        let mut logo = create_test_logo("NovaTech Solutions");
        logo.client = Some("Innovate Corp".to_string());
        logo.category_name = "Technology".to_string();
        logo.style = Some("Tech".to_string());

        assert!(CompositeSearcher::all("innovate").matches(&logo));
        assert!(CompositeSearcher::all("technology").matches(&logo));
        assert!(!CompositeSearcher::all("bakery").matches(&logo));
    }

    #[test]
    fn test_composite_searcher_empty() {
        let logo = create_test_logo("Any logo");
        assert!(CompositeSearcher::new().matches(&logo));
        assert!(CompositeSearcher::all("").matches(&logo));
    }
}
