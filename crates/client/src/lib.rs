#[macro_use]
extern crate rust_i18n;

// Load all translations from the locales directory
i18n!("locales", fallback = "en");

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod services;
pub mod session;
pub mod storage;
pub mod view;

#[cfg(test)]
mod test_support;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use session::{has_role, Redirect, SessionStore};
