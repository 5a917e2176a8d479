pub mod auth;
pub mod logo;
pub mod share;
