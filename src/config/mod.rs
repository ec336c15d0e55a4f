//! Configuration for named API wrappers.
//!
//! `ApiConfig` is read from `<config_dir>/reducer-kit/config.toml`; the
//! process-wide [`AppIdentity`] is installed once at startup and read-only
//! afterwards.

mod identity;
mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, AppIdentity};
