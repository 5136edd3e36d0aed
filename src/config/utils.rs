use std::env;
use std::str::FromStr;

/// Read an environment variable, treating unset and whitespace-only values as absent.
pub(super) fn env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read a string variable with a default.
pub(super) fn env_or(key: &str, default: &str) -> String {
    env_var(key).unwrap_or_else(|| default.to_string())
}

/// Read and parse a numeric variable with a default.
pub(super) fn parse_env<T>(key: &str, default: T) -> Result<T, Box<dyn std::error::Error>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_var(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| format!("Invalid {key} value '{raw}': {e}").into()),
        None => Ok(default),
    }
}

/// Parse a boolean flag. Accepts true/false, 1/0, yes/no, on/off (case-insensitive).
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean variable with a default.
pub(super) fn parse_bool_env(key: &str, default: bool) -> Result<bool, Box<dyn std::error::Error>> {
    match env_var(key) {
        Some(raw) => parse_bool(&raw).ok_or_else(|| {
            format!("Invalid {key} value '{raw}': expected true/false").into()
        }),
        None => Ok(default),
    }
}
