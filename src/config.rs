//! Configuration for the contact book.
//!
//! All settings are optional with defaults, loaded from the process
//! environment (a `.env` file is honored when present). Logging goes
//! to stderr, so the level setting never touches REPL output.

use std::env;

/// Default tracing filter when neither `LOG_LEVEL` nor `RUST_LOG` is
/// set.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directive (e.g. `error`, `contact_book=debug`).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: tracing filter (default: "error"); `RUST_LOG`
    ///   takes precedence when set, handled at subscriber setup.
    pub fn from_env() -> Self {
        // Load .env if present; ignore a missing file.
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Config { log_level }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        env::remove_var("LOG_LEVEL");
        let config = Config::from_env();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "contact_book=debug");

        let config = Config::from_env();
        assert_eq!(config.log_level, "contact_book=debug");
    }
}
