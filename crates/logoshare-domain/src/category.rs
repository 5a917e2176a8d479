use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sidebar navigation items. Selecting one changes which logos are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NavCategory {
    #[default]
    Projects,
    Recent,
    Starred,
    Trash,
    Admin,
}

impl NavCategory {
    pub const ALL: [NavCategory; 5] = [
        Self::Projects,
        Self::Recent,
        Self::Starred,
        Self::Trash,
        Self::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Recent => "Recent",
            Self::Starred => "Starred",
            Self::Trash => "Trash",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for NavCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown category: {}", wanted))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    Grid,
    #[default]
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(format!("Unknown view mode: {}", other)),
        }
    }
}
