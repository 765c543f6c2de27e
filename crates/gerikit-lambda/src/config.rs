use std::env;
use std::path::PathBuf;

pub const DEFAULT_SERVICE_NAME: &str = "gerikit";

/// Runtime settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Directory of JSON reference tables. Bundled tables when `None`.
    pub reference_dir: Option<PathBuf>,
    pub analytics_enabled: bool,
    pub service_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            reference_dir: None,
            analytics_enabled: true,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let analytics_enabled = get("GERIKIT_ANALYTICS").is_none_or(|v| {
            !matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "off" | "false" | "0" | "disabled"
            )
        });

        Self {
            reference_dir: get("GERIKIT_REFERENCE_DIR").map(PathBuf::from),
            analytics_enabled,
            service_name: get("GERIKIT_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        }
    }
}
