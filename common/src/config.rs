use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Reads the configuration from the current process environment.
    ///
    /// Every variable is optional; missing or malformed values fall back to
    /// their defaults.
    pub fn from_env() -> Self {
        let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "linked-list".into());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/linked_list.log".into());
        let log_to_stdout = env::var("LOG_TO_STDOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        Config {
            project_name,
            log_level,
            log_file,
            log_to_stdout,
        }
    }

    /// Loads `env_path` (if it exists) into the environment and initializes the
    /// global configuration. Later calls return the first value.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(Self::from_env)
    }

    pub fn get() -> Option<&'static Self> {
        CONFIG.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VARS: &[&str] = &["PROJECT_NAME", "LOG_LEVEL", "LOG_FILE", "LOG_TO_STDOUT"];

    fn clear_vars() {
        for k in VARS {
            unsafe { env::remove_var(k) };
        }
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        clear_vars();

        let cfg = Config::from_env();
        assert_eq!(cfg.project_name, "linked-list");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.log_file, "logs/linked_list.log");
        assert!(cfg.log_to_stdout);
    }

    #[test]
    #[serial]
    fn reads_overrides_from_environment() {
        clear_vars();
        unsafe {
            env::set_var("PROJECT_NAME", "chains");
            env::set_var("LOG_LEVEL", "trace");
            env::set_var("LOG_TO_STDOUT", "false");
        }

        let cfg = Config::from_env();
        assert_eq!(cfg.project_name, "chains");
        assert_eq!(cfg.log_level, "trace");
        assert!(!cfg.log_to_stdout);

        clear_vars();
    }

    #[test]
    #[serial]
    fn malformed_bool_falls_back_to_default() {
        clear_vars();
        unsafe { env::set_var("LOG_TO_STDOUT", "sometimes") };

        assert!(Config::from_env().log_to_stdout);

        clear_vars();
    }

    #[test]
    #[serial]
    fn init_loads_dotenv_file_once() {
        clear_vars();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "PROJECT_NAME=from-dotenv").unwrap();
        writeln!(file, "LOG_LEVEL=debug").unwrap();

        let cfg = Config::init(file.path().to_str().unwrap());
        assert_eq!(cfg.project_name, "from-dotenv");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(Config::get(), Some(cfg));

        // Already initialized: a second file is loaded but the singleton keeps its value.
        let again = Config::init("does-not-exist.env");
        assert_eq!(again.project_name, "from-dotenv");

        clear_vars();
    }
}
