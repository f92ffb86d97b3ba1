//! Process-wide configuration injected into the handler.

use std::fmt;

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

/// Configuration for [`AnalysisHandler`](crate::AnalysisHandler).
///
/// A missing key is not a construction error: the handler reports it to the
/// caller as a server-side configuration problem on every request.
#[derive(Clone, Default)]
pub struct HandlerConfig {
    api_key: Option<String>,
}

impl HandlerConfig {
    /// Build a config with the given key. An empty key counts as unset.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Read the key from `ALPHA_VANTAGE_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    /// The configured key, if any.
    pub(crate) fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for HandlerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
