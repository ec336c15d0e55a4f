use std::sync::OnceLock;

use super::loader::ConfigError;
use super::types::AppIdentity;

static GLOBAL_IDENTITY: OnceLock<AppIdentity> = OnceLock::new();

impl AppIdentity {
    /// Install this identity for the whole process.
    ///
    /// Succeeds once; later calls fail and leave the first identity in place.
    pub fn install(self) -> Result<&'static AppIdentity, ConfigError> {
        self.validate()?;

        let name = self.name.clone();
        let mut installed_now = false;
        let installed = GLOBAL_IDENTITY.get_or_init(|| {
            installed_now = true;
            self
        });
        if !installed_now {
            return Err(ConfigError::AlreadyInitialized { name });
        }

        tracing::info!(
            app = %installed.name,
            version = %installed.version,
            "Installed application identity"
        );
        Ok(installed)
    }

    /// The process-wide identity, if [`install`](Self::install) has run.
    pub fn global() -> Option<&'static AppIdentity> {
        GLOBAL_IDENTITY.get()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() || self.version.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Application name and version must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
