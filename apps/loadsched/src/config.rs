//! Configuration file handling for loadsched.
//!
//! Optional TOML file plus a resolution chain per setting:
//! CLI flag > env var > config file > default.
//!
//! ```toml
//! [schedule]
//! file = "schedule.txt"
//!
//! [status]
//! url = "http://loadshedding.eskom.co.za/LoadShedding/getstatus"
//! timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::status::DEFAULT_STATUS_URL;

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "loadsched.toml";

/// Schedule file used when nothing else names one.
pub const DEFAULT_SCHEDULE_FILE: &str = "schedule.txt";

/// Status request timeout used when the config file does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Env var naming the config file.
pub const ENV_CONFIG: &str = "LOADSCHED_CONFIG";
/// Env var naming the schedule file.
pub const ENV_FILE: &str = "LOADSCHED_FILE";
/// Env var overriding the status endpoint.
pub const ENV_STATUS_URL: &str = "LOADSCHED_STATUS_URL";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub schedule: ScheduleSection,
    pub status: StatusSection,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleSection {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusSection {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Parse config file contents.
pub fn parse_config(contents: &str) -> Result<ConfigFile, AppError> {
    toml::from_str(contents).map_err(|e| AppError::ConfigError(e.to_string()))
}

/// Read and parse the config file at `path`.
pub fn load_config(path: &Path) -> Result<ConfigFile, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::ConfigError(format!("failed to read {}: {e}", path.display()))
    })?;
    parse_config(&contents)
}

// -----------------------------------------------------------------------
// Resolved settings
// -----------------------------------------------------------------------

/// Values given on the command line, if any.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub schedule_file: Option<PathBuf>,
    pub status_url: Option<String>,
}

/// Fully resolved settings, ready for use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub schedule_file: PathBuf,
    pub status_url: String,
    pub timeout: Duration,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env(overrides: &Overrides) -> Result<Self, AppError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve settings using the chain: CLI flag > env var > config file > default.
    ///
    /// - Config file: `overrides.config` > `LOADSCHED_CONFIG` (both must exist)
    ///   > `./loadsched.toml` when present > none
    /// - Schedule file: `overrides.schedule_file` > `LOADSCHED_FILE` >
    ///   `schedule.file` > `schedule.txt`
    /// - Status URL: `overrides.status_url` > `LOADSCHED_STATUS_URL` >
    ///   `status.url` > the public endpoint
    pub fn resolve<F>(overrides: &Overrides, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = overrides
            .config
            .clone()
            .or_else(|| env(ENV_CONFIG).map(PathBuf::from));

        let file_config = match explicit {
            Some(path) => load_config(&path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    load_config(implicit)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        let schedule_file = overrides
            .schedule_file
            .clone()
            .or_else(|| env(ENV_FILE).map(PathBuf::from))
            .or(file_config.schedule.file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEDULE_FILE));

        let status_url = overrides
            .status_url
            .clone()
            .or_else(|| env(ENV_STATUS_URL))
            .or(file_config.status.url)
            .unwrap_or_else(|| DEFAULT_STATUS_URL.to_string());

        let timeout_secs = file_config
            .status
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(AppError::ConfigError(
                "status.timeout_secs must be at least 1".to_string(),
            ));
        }
        let timeout = Duration::from_secs(timeout_secs);

        let settings = Self {
            schedule_file,
            status_url,
            timeout,
        };
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn parse_full_config() {
        let cfg = parse_config(
            r#"
[schedule]
file = "/etc/loadsched/june.txt"

[status]
url = "http://localhost:9000/status"
timeout_secs = 3
"#,
        )
        .expect("parse");

        assert_eq!(cfg.schedule.file, Some(PathBuf::from("/etc/loadsched/june.txt")));
        assert_eq!(cfg.status.url.as_deref(), Some("http://localhost:9000/status"));
        assert_eq!(cfg.status.timeout_secs, Some(3));
    }

    #[test]
    fn parse_empty_config() {
        assert_eq!(parse_config("").expect("parse"), ConfigFile::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = parse_config("[schedule]\npath = \"x\"\n").expect_err("should fail");
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("loadsched.toml");
        std::fs::write(
            &path,
            "[schedule]\nfile = \"from-file.txt\"\n[status]\nurl = \"http://file\"\n",
        )
        .expect("write");

        let env = |key: &str| match key {
            ENV_FILE => Some("from-env.txt".to_string()),
            _ => None,
        };

        let overrides = Overrides {
            config: Some(path.clone()),
            schedule_file: None,
            status_url: Some("http://cli".to_string()),
        };
        let settings = Settings::resolve(&overrides, env).expect("resolve");

        assert_eq!(settings.schedule_file, PathBuf::from("from-env.txt"));
        assert_eq!(settings.status_url, "http://cli");

        let overrides = Overrides {
            config: Some(path),
            ..Overrides::default()
        };
        let settings = Settings::resolve(&overrides, no_env).expect("resolve");
        assert_eq!(settings.schedule_file, PathBuf::from("from-file.txt"));
        assert_eq!(settings.status_url, "http://file");
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn config_path_from_env() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[status]\ntimeout_secs = 2\n").expect("write");

        let path_str = path.to_string_lossy().into_owned();
        let env = move |key: &str| (key == ENV_CONFIG).then(|| path_str.clone());

        let settings = Settings::resolve(&Overrides::default(), env).expect("resolve");
        assert_eq!(settings.timeout, Duration::from_secs(2));
    }

    #[test]
    fn zero_timeout_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("loadsched.toml");
        std::fs::write(&path, "[status]\ntimeout_secs = 0\n").expect("write");

        let overrides = Overrides {
            config: Some(path),
            ..Overrides::default()
        };
        let err = Settings::resolve(&overrides, no_env).expect_err("should fail");
        assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("timeout_secs")));
    }

    #[test]
    fn missing_explicit_config_is_error() {
        let overrides = Overrides {
            config: Some(PathBuf::from("/nonexistent/loadsched.toml")),
            ..Overrides::default()
        };
        let err = Settings::resolve(&overrides, no_env).expect_err("should fail");
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
