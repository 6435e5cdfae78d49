//! Environment variable handling for payflow configuration.
//!
//! Config values written as `"secret_from_env"` are placeholders. They are
//! resolved from the environment using one naming scheme for secrets and one
//! for plain settings, with a fallback to the legacy `SERVICE_KEY` form.

use std::env;
use tracing::warn;

/// Marker string replaced by an environment variable at load time
pub const SECRET_MARKER: &str = "secret_from_env";

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "PAYFLOW";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "PAYFLOW_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// `"onboarding.processor"` becomes `"PAYFLOW__ONBOARDING__PROCESSOR"`.
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to an environment variable name
///
/// `"finix.password"` becomes `"PAYFLOW_SECRET_FINIX_PASSWORD"`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to its legacy environment variable name
///
/// `"finix.password"` becomes `"FINIX_PASSWORD"`.
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() < 2 {
        return path.to_uppercase();
    }

    let service = parts[0];
    let key = parts[1..].join(SECRET_SEPARATOR);
    format!("{}_{}", service, key).to_uppercase()
}

/// Get an environment variable for a configuration path
pub fn get_config_env_var(path: &str) -> Option<String> {
    let env_var = config_path_to_env_var(path);
    env::var(&env_var).ok()
}

/// Get an environment variable for a secret path, falling back to the legacy name
pub fn get_secret_env_var(path: &str) -> Option<String> {
    let env_var = secret_path_to_env_var(path);
    if let Ok(value) = env::var(&env_var) {
        return Some(value);
    }

    let legacy_env_var = legacy_secret_path_to_env_var(path);
    env::var(&legacy_env_var).ok()
}

/// Check if a path holds a credential.
///
/// Paths containing "secret", "key", "password", "token" or "username" are secret.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    path_lower.contains("secret")
        || path_lower.contains("key")
        || path_lower.contains("password")
        || path_lower.contains("token")
        || path_lower.contains("username")
}

/// Get an environment variable for a path using the scheme matching its kind
pub fn get_env_var(path: &str) -> Option<String> {
    if is_secret_path(path) {
        get_secret_env_var(path)
    } else {
        get_config_env_var(path)
    }
}

/// Replace every `"secret_from_env"` string inside `value` with its environment variable.
///
/// Returns `true` if any value was replaced. Markers without a matching
/// variable are left untouched and logged.
pub fn inject_env_vars(value: &mut serde_json::Value) -> bool {
    use serde_json::Value;

    fn walk(path: Vec<String>, obj: &mut Value) -> bool {
        let mut replaced = false;

        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::Array(arr) => {
                for (i, v) in arr.iter_mut().enumerate() {
                    let mut new_path = path.clone();
                    new_path.push(i.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                if let Some(env_val) = get_env_var(&path_str) {
                    *s = env_val;
                    replaced = true;
                } else {
                    warn!("env var for {} not found", path_str);
                }
            }
            _ => {}
        }

        replaced
    }

    walk(vec![], value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_path_to_env_var() {
        assert_eq!(
            config_path_to_env_var("onboarding.processor"),
            "PAYFLOW__ONBOARDING__PROCESSOR"
        );
        assert_eq!(
            config_path_to_env_var("finix.base_url"),
            "PAYFLOW__FINIX__BASE_URL"
        );
    }

    #[test]
    fn test_secret_path_to_env_var() {
        assert_eq!(
            secret_path_to_env_var("finix.password"),
            "PAYFLOW_SECRET_FINIX_PASSWORD"
        );
        assert_eq!(
            secret_path_to_env_var("finix.username"),
            "PAYFLOW_SECRET_FINIX_USERNAME"
        );
    }

    #[test]
    fn test_legacy_secret_path_to_env_var() {
        assert_eq!(legacy_secret_path_to_env_var("finix.password"), "FINIX_PASSWORD");
        assert_eq!(legacy_secret_path_to_env_var("token"), "TOKEN");
    }

    #[test]
    fn test_is_secret_path() {
        assert!(is_secret_path("finix.username"));
        assert!(is_secret_path("finix.password"));
        assert!(!is_secret_path("finix.environment"));
        assert!(!is_secret_path("onboarding.processor"));
    }

    #[test]
    fn test_inject_env_vars_replaces_marker() {
        // Unique names so parallel tests never race on the same variable
        env::set_var("PAYFLOW_SECRET_INJECTTEST_PASSWORD", "hunter2");

        let mut value = json!({
            "injecttest": { "password": "secret_from_env", "environment": "sandbox" }
        });
        assert!(inject_env_vars(&mut value));
        assert_eq!(value["injecttest"]["password"], "hunter2");
        assert_eq!(value["injecttest"]["environment"], "sandbox");
    }

    #[test]
    fn test_inject_env_vars_keeps_marker_when_unset() {
        let mut value = json!({ "missingtest": { "token": "secret_from_env" } });
        assert!(!inject_env_vars(&mut value));
        assert_eq!(value["missingtest"]["token"], SECRET_MARKER);
    }
}
