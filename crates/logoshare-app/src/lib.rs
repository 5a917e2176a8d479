//! Application layer: the logo library state, the add-logo submission
//! flow, and gating of write/share actions behind sign-in.

pub mod app;
pub mod gate;
pub mod library;

pub use app::LogoApp;
pub use gate::{AuthGate, GatedAction};
pub use library::LogoLibrary;
