//! Per-API wrappers producing "perform fetch" actions.

use serde_json::{json, Value};

use crate::action::{create_action, empty_object, Action};
use crate::config::{ApiConfig, AppIdentity};
use crate::lens::get_lens;

/// Type of every action built by [`NamedApiFetch`].
pub const FETCH_ACTION_TYPE: &str = "EFFECT_FETCH";

/// Appended to the API name in the URL prefix.
pub const DEFAULT_SUFFIX: &str = ".api";

/// Version in the vendor `Accept` media type.
pub const DEFAULT_ACCEPT_VERSION: u32 = 1;

const DEFAULT_METHOD: &str = "GET";

/// Builds fetch actions scoped to one named API.
///
/// URLs are prefixed with `/api/<name><suffix>` and requests carry an
/// API-scoped `Accept` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedApiFetch {
    api_name: String,
    suffix: String,
    accept_version: u32,
    identity: Option<AppIdentity>,
}

impl NamedApiFetch {
    pub fn new(api_name: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
            accept_version: DEFAULT_ACCEPT_VERSION,
            identity: None,
        }
    }

    /// Apply suffix, accept version and app identity from `config`.
    pub fn from_config(api_name: impl Into<String>, config: &ApiConfig) -> Self {
        Self {
            api_name: api_name.into(),
            suffix: config.suffix.clone(),
            accept_version: config.accept_version,
            identity: config.app.clone(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_accept_version(mut self, version: u32) -> Self {
        self.accept_version = version;
        self
    }

    /// Send `cx-app` / `cx-app-version` headers for `identity`.
    pub fn with_identity(mut self, identity: AppIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Use the process-wide identity, if one was installed.
    pub fn with_global_identity(mut self) -> Self {
        if let Some(identity) = AppIdentity::global() {
            self.identity = Some(identity.clone());
        }
        self
    }

    pub fn api_name(&self) -> &str {
        &self.api_name
    }

    pub fn url(&self, path: &str) -> String {
        format!("/api/{}{}{}", self.api_name, self.suffix, path)
    }

    /// `application/x.<name>-api.<version>+json`
    pub fn accept(&self) -> String {
        format!(
            "application/x.{}-api.{}+json",
            self.api_name, self.accept_version
        )
    }

    pub fn headers(&self) -> Value {
        let mut headers = json!({
            "Accept": self.accept(),
            "Content-Type": "application/json",
        });
        if let Some(identity) = &self.identity {
            headers["cx-app"] = Value::String(identity.name.clone());
            headers["cx-app-version"] = Value::String(identity.version.clone());
        }
        headers
    }

    /// Default `method` to GET, then install the generated headers.
    ///
    /// Caller-supplied `headers` are replaced wholesale.
    pub fn process_params(&self, params: Option<Value>) -> Value {
        let params = match params {
            None | Some(Value::Null) => empty_object(),
            Some(params) => params,
        };

        let method = get_lens("method");
        let has_method = matches!(method.view(Some(&params)), Ok(Some(_)));
        let params = if has_method {
            params
        } else {
            method.set(Value::String(DEFAULT_METHOD.to_string()), &params)
        };

        get_lens("headers").set(self.headers(), &params)
    }

    /// Build the fetch action for `path` on this API.
    pub fn call(&self, path: &str, params: Option<Value>) -> Action {
        let payload = json!({
            "url": self.url(path),
            "params": self.process_params(params),
        });
        tracing::trace!(api = %self.api_name, path, "Built fetch action");
        create_action(FETCH_ACTION_TYPE).create(Some(payload), None)
    }
}

pub fn named_api_fetch_wrapper(api_name: impl Into<String>) -> NamedApiFetch {
    NamedApiFetch::new(api_name)
}
