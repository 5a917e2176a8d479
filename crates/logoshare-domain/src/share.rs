use crate::Logo;
use logoshare_core::{LogoshareError, LogoshareResult};

/// Build the public link for a logo: `<origin>/share/logo/<id>`.
pub fn share_link(origin: &str, id: &str) -> String {
    format!("{}/share/logo/{}", origin.trim_end_matches('/'), id)
}

/// Only published logos may leave the workspace.
pub fn ensure_shareable(logo: &Logo) -> LogoshareResult<()> {
    if !logo.status.is_shareable() {
        return Err(LogoshareError::Validation(format!(
            "'{}' is a draft and cannot be shared",
            logo.name
        )));
    }
    Ok(())
}

pub fn validate_invite_email(email: &str) -> LogoshareResult<String> {
    let email = email.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !valid {
        return Err(LogoshareError::Validation(format!(
            "Invalid email address: {}",
            email
        )));
    }
    Ok(email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_logos;

    #[test]
    fn test_share_link_shape() {
        assert_eq!(
            share_link("https://logos.example.com", "42"),
            "https://logos.example.com/share/logo/42"
        );
        assert_eq!(
            share_link("https://logos.example.com/", "local-1-abc"),
            "https://logos.example.com/share/logo/local-1-abc"
        );
    }

    #[test]
    fn test_only_published_is_shareable() {
        let logos = sample_logos();
        assert!(ensure_shareable(&logos[0]).is_ok());
        assert!(matches!(
            ensure_shareable(&logos[1]),
            Err(LogoshareError::Validation(_))
        ));
    }

    #[test]
    fn test_invite_email() {
        assert_eq!(
            validate_invite_email(" jane@example.com ").unwrap(),
            "jane@example.com"
        );
        assert!(validate_invite_email("jane").is_err());
        assert!(validate_invite_email("@example.com").is_err());
        assert!(validate_invite_email("").is_err());
    }
}
