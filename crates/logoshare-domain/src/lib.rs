pub mod category;
pub mod draft;
pub mod image;
pub mod logo;
pub mod query;
pub mod search;
pub mod seed;
pub mod share;
pub mod sort;
pub mod validation;

pub use category::{NavCategory, ViewMode};
pub use draft::LogoDraft;
pub use image::{placeholder_image_url, resolve_image_url, ImageContext};
pub use logo::{ExternalLink, Logo, LogoColor, LogoId, LogoStatus, NewLogo, DEFAULT_CATEGORY};
pub use query::{derive_logos, LogoQueryBuilder};
pub use search::{CompositeSearcher, FieldSearcher, LogoSearcher, SearchField};
pub use seed::sample_logos;
pub use share::{ensure_shareable, share_link, validate_invite_email};
pub use sort::{OrderedSorter, SortBy, SortOrder};
