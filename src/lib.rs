pub mod components;
pub mod data;
pub mod i18n;
pub mod logging;
pub mod repo_browser;
pub mod utility;

/// Sent with every request to the github api.
pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
