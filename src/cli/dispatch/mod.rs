//! Command-line argument dispatch.
//!
//! Parsed matches are mapped to an [`Action`] carrying fully resolved settings,
//! so actions never look at clap types.

use crate::cli::{
    actions::{auth, history, navigate, proxy, scan, user, Action},
    commands,
    globals::GlobalArgs,
};
use crate::{
    client::ClientConfig,
    features::{history::types::HistoryQuery, user::types::UpdateProfileRequest},
    proxy::{rules::ProxyRule, ProxyConfig, DEFAULT_PROXY_PORT},
};
use anyhow::{anyhow, bail, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use std::{path::PathBuf, time::Duration};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let (name, sub) = matches.subcommand().context("missing subcommand")?;

    match name {
        "register" | "login" | "logout" | "me" | "refresh" => Ok(Action::Auth(auth::Args {
            globals: globals(sub)?,
            command: auth_command(name, sub)?,
        })),
        "navigate" => Ok(Action::Navigate(navigate::Args {
            globals: globals(sub)?,
            path: required::<String>(sub, commands::navigate::ARG_PATH)?,
            history_base: required::<String>(sub, commands::navigate::ARG_HISTORY_BASE)?,
            revalidate_guest: sub.get_flag(commands::navigate::ARG_REVALIDATE_GUEST),
        })),
        "scan" => {
            let (op, leaf) = sub.subcommand().context("missing scan subcommand")?;
            Ok(Action::Scan(scan::Args {
                globals: globals(leaf)?,
                command: scan_command(op, leaf)?,
            }))
        }
        "history" => {
            let (op, leaf) = sub.subcommand().context("missing history subcommand")?;
            Ok(Action::History(history::Args {
                globals: globals(leaf)?,
                command: history_command(op, leaf)?,
            }))
        }
        "user" => {
            let (op, leaf) = sub.subcommand().context("missing user subcommand")?;
            Ok(Action::User(user::Args {
                globals: globals(leaf)?,
                command: user_command(op, leaf)?,
            }))
        }
        "proxy" => Ok(Action::Proxy(proxy_config(sub)?)),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}

fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T> {
    matches
        .get_one::<T>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn secret(matches: &ArgMatches, id: &str) -> Result<SecretString> {
    required::<String>(matches, id).map(SecretString::from)
}

fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    use commands::session::{
        default_session_file, ARG_API_BASE_PATH, ARG_API_URL, ARG_SESSION_FILE, ARG_TIMEOUT_MS,
    };

    let api_url = required::<String>(matches, ARG_API_URL)?;
    let base_path = required::<String>(matches, ARG_API_BASE_PATH)?;
    let timeout_ms = required::<u64>(matches, ARG_TIMEOUT_MS)?;

    let client = ClientConfig::new(&api_url)
        .context("invalid PANDORA_API_URL")?
        .with_base_path(&base_path)
        .with_timeout(Duration::from_millis(timeout_ms));

    let session_file = match matches.get_one::<PathBuf>(ARG_SESSION_FILE) {
        Some(path) => path.clone(),
        None => default_session_file()?,
    };

    Ok(GlobalArgs::new(client, session_file))
}

fn auth_command(name: &str, matches: &ArgMatches) -> Result<auth::Command> {
    use commands::auth::{ARG_EMAIL, ARG_PASSWORD, ARG_USERNAME};

    Ok(match name {
        "register" => auth::Command::Register {
            email: required(matches, ARG_EMAIL)?,
            username: required(matches, ARG_USERNAME)?,
            password: secret(matches, ARG_PASSWORD)?,
        },
        "login" => auth::Command::Login {
            email: required(matches, ARG_EMAIL)?,
            password: secret(matches, ARG_PASSWORD)?,
        },
        "logout" => auth::Command::Logout,
        "me" => auth::Command::Me,
        "refresh" => auth::Command::Refresh,
        other => bail!("unknown auth subcommand: {other}"),
    })
}

fn scan_command(op: &str, matches: &ArgMatches) -> Result<scan::Command> {
    use commands::scan::{ARG_FILE_HASH, ARG_IP_ADDRESS, ARG_SCAN_ID};

    Ok(match op {
        "ip" => scan::Command::Ip(required(matches, ARG_IP_ADDRESS)?),
        "hash" => scan::Command::Hash(required(matches, ARG_FILE_HASH)?),
        "get" => scan::Command::Get(required(matches, ARG_SCAN_ID)?),
        other => bail!("unknown scan subcommand: {other}"),
    })
}

fn history_command(op: &str, matches: &ArgMatches) -> Result<history::Command> {
    use commands::history::{ARG_LIMIT, ARG_SCAN_ID, ARG_SCAN_TYPE, ARG_SKIP, ARG_STATUS, ARG_YES};

    Ok(match op {
        "list" => history::Command::List(HistoryQuery {
            skip: matches.get_one::<u32>(ARG_SKIP).copied(),
            limit: matches.get_one::<u32>(ARG_LIMIT).copied(),
            scan_type: matches.get_one::<String>(ARG_SCAN_TYPE).cloned(),
            status: matches.get_one::<String>(ARG_STATUS).cloned(),
        }),
        "stats" => history::Command::Stats,
        "dashboard" => history::Command::Dashboard,
        "delete" => history::Command::Delete(required(matches, ARG_SCAN_ID)?),
        "clear" => {
            if !matches.get_flag(ARG_YES) {
                bail!("refusing to clear the whole history without --yes");
            }
            history::Command::Clear
        }
        other => bail!("unknown history subcommand: {other}"),
    })
}

fn user_command(op: &str, matches: &ArgMatches) -> Result<user::Command> {
    use commands::user::{ARG_CURRENT_PASSWORD, ARG_EMAIL, ARG_NEW_PASSWORD, ARG_USERNAME, ARG_YES};

    Ok(match op {
        "profile" => user::Command::Profile,
        "update" => {
            let request = UpdateProfileRequest {
                username: matches.get_one::<String>(ARG_USERNAME).cloned(),
                email: matches.get_one::<String>(ARG_EMAIL).cloned(),
            };
            if request.username.is_none() && request.email.is_none() {
                bail!("nothing to update: pass --username and/or --email");
            }
            user::Command::Update(request)
        }
        "change-password" => user::Command::ChangePassword {
            current: secret(matches, ARG_CURRENT_PASSWORD)?,
            new: secret(matches, ARG_NEW_PASSWORD)?,
        },
        "quota" => user::Command::Quota,
        "api-key" => user::Command::ApiKey,
        "regenerate-key" => user::Command::RegenerateKey,
        "delete-account" => {
            if !matches.get_flag(ARG_YES) {
                bail!("refusing to delete the account without --yes");
            }
            user::Command::DeleteAccount
        }
        other => bail!("unknown user subcommand: {other}"),
    })
}

fn proxy_config(matches: &ArgMatches) -> Result<ProxyConfig> {
    use commands::proxy::{ARG_HOST, ARG_INSECURE, ARG_PORT, ARG_RULE};

    let rules = matches
        .get_many::<String>(ARG_RULE)
        .into_iter()
        .flatten()
        .map(|raw| raw.parse::<ProxyRule>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid PANDORA_PROXY_RULES")?;

    if rules.is_empty() {
        bail!("at least one --rule is required");
    }

    Ok(ProxyConfig {
        host: required(matches, ARG_HOST)?,
        port: matches
            .get_one::<u16>(ARG_PORT)
            .copied()
            .unwrap_or(DEFAULT_PROXY_PORT),
        rules,
        insecure: matches.get_flag(ARG_INSECURE),
    })
}
