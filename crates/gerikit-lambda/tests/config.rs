use std::collections::HashMap;
use std::path::PathBuf;

use gerikit_lambda::config::{DEFAULT_SERVICE_NAME, ServiceConfig};

fn config_from(pairs: &[(&str, &str)]) -> ServiceConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServiceConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]);
    assert_eq!(config, ServiceConfig::default());
    assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
    assert!(config.analytics_enabled);
    assert!(config.reference_dir.is_none());
}

#[test]
fn reads_every_variable() {
    let config = config_from(&[
        ("GERIKIT_REFERENCE_DIR", "/opt/gerikit/tables"),
        ("GERIKIT_ANALYTICS", "off"),
        ("GERIKIT_SERVICE_NAME", "gerikit-staging"),
    ]);
    assert_eq!(config.reference_dir, Some(PathBuf::from("/opt/gerikit/tables")));
    assert!(!config.analytics_enabled);
    assert_eq!(config.service_name, "gerikit-staging");
}

#[test]
fn analytics_switch_values() {
    for off in ["off", "OFF", "false", "0", " disabled "] {
        assert!(!config_from(&[("GERIKIT_ANALYTICS", off)]).analytics_enabled, "{off}");
    }
    for on in ["on", "true", "1"] {
        assert!(config_from(&[("GERIKIT_ANALYTICS", on)]).analytics_enabled, "{on}");
    }
}

#[test]
fn blank_values_count_as_unset() {
    let config = config_from(&[("GERIKIT_REFERENCE_DIR", "  "), ("GERIKIT_SERVICE_NAME", "")]);
    assert!(config.reference_dir.is_none());
    assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
}
