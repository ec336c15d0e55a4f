use serde::{Deserialize, Serialize};

use crate::http::{DEFAULT_ACCEPT_VERSION, DEFAULT_SUFFIX};

/// Settings shared by every named API wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Appended to the API name in URL prefixes (default: ".api").
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Version in the vendor Accept media type (default: 1).
    #[serde(default = "default_accept_version")]
    pub accept_version: u32,
    /// Identity sent as `cx-app` / `cx-app-version` headers.
    #[serde(default)]
    pub app: Option<AppIdentity>,
}

/// Name and version of the embedding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIdentity {
    pub name: String,
    pub version: String,
}

impl AppIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

fn default_accept_version() -> u32 {
    DEFAULT_ACCEPT_VERSION
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            accept_version: default_accept_version(),
            app: None,
        }
    }
}
