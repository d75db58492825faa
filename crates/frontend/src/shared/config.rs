//! Build-time application configuration.
//!
//! The wasm bundle has no process environment at runtime, so deployment flags
//! are baked in when the frontend is compiled (`CLOUD_MODE=1 trunk build`).

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Hosted deployment: access codes are managed by the platform and the
    /// access-code section of team settings is hidden.
    pub cloud_mode: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            cloud_mode: parse_flag(option_env!("CLOUD_MODE")),
        }
    }
}

/// Interpret an optional env value as a boolean flag
///
/// Unset, empty, `0`, `false` and `no` are all off.
pub fn parse_flag(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) => matches!(v.as_str(), "1" | "true" | "yes" | "on"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(!parse_flag(None));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(Some("false")));
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some(" yes ")));
    }
}
