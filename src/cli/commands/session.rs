use crate::client::config::{DEFAULT_API_BASE_PATH, DEFAULT_API_URL};
use anyhow::{Context, Result};
use clap::{Arg, Command};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_API_BASE_PATH: &str = "api-base-path";
pub const ARG_TIMEOUT_MS: &str = "timeout-ms";
pub const ARG_SESSION_FILE: &str = "session-file";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Dashboard API origin")
                .env("PANDORA_API_URL")
                .default_value(DEFAULT_API_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_API_BASE_PATH)
                .long("api-base-path")
                .help("Path prefix of every API endpoint")
                .env("PANDORA_API_BASE_PATH")
                .default_value(DEFAULT_API_BASE_PATH)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_MS)
                .long("timeout-ms")
                .help("Request timeout in milliseconds, also bounds the session check on navigation")
                .env("PANDORA_TIMEOUT_MS")
                .default_value("10000")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long("session-file")
                .help("Where the cached user and session cookies are kept (default: session.json in the per-user data directory)")
                .env("PANDORA_SESSION_FILE")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

pub const SESSION_FILE_NAME: &str = "session.json";

/// Per-user data directory of the platform, e.g.
/// `~/.local/share/pandora/session.json` on Linux.
///
/// # Errors
/// Returns an error if no home directory can be determined.
pub fn default_session_file() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "pandora", "pandora")
        .context("unable to determine a data directory, pass --session-file")?;
    Ok(dirs.data_dir().join(SESSION_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::default_session_file;
    use std::path::PathBuf;

    #[cfg(target_os = "linux")]
    #[test]
    fn session_file_defaults_to_user_data_dir() {
        temp_env::with_vars(
            [
                ("HOME", Some("/home/analyst")),
                ("XDG_DATA_HOME", None::<&str>),
            ],
            || {
                assert_eq!(
                    default_session_file().unwrap(),
                    PathBuf::from("/home/analyst/.local/share/pandora/session.json")
                );
            },
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn session_file_follows_xdg_data_home() {
        temp_env::with_vars(
            [
                ("HOME", Some("/home/analyst")),
                ("XDG_DATA_HOME", Some("/data/analyst")),
            ],
            || {
                assert_eq!(
                    default_session_file().unwrap(),
                    PathBuf::from("/data/analyst/pandora/session.json")
                );
            },
        );
    }

    #[test]
    fn session_file_is_never_relative() {
        if let Ok(path) = default_session_file() {
            assert!(path.is_absolute());
        }
    }
}
