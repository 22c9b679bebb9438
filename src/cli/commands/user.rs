use clap::{Arg, ArgAction, Command};

pub const ARG_USERNAME: &str = "username";
pub const ARG_EMAIL: &str = "email";
pub const ARG_CURRENT_PASSWORD: &str = "current-password";
pub const ARG_NEW_PASSWORD: &str = "new-password";
pub const ARG_YES: &str = "yes";

#[must_use]
pub fn subcommand() -> Command {
    Command::new("user")
        .about("Profile, quota and API key management")
        .subcommand_required(true)
        .subcommand(Command::new("profile").about("Show the profile"))
        .subcommand(
            Command::new("update")
                .about("Change username and/or email")
                .arg(Arg::new(ARG_USERNAME).long("username"))
                .arg(Arg::new(ARG_EMAIL).long("email")),
        )
        .subcommand(
            Command::new("change-password")
                .about("Change the account password")
                .arg(
                    Arg::new(ARG_CURRENT_PASSWORD)
                        .long("current-password")
                        .env("PANDORA_CURRENT_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_NEW_PASSWORD)
                        .long("new-password")
                        .env("PANDORA_NEW_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(Command::new("quota").about("Show today's scan quota"))
        .subcommand(Command::new("api-key").about("Show the API key"))
        .subcommand(Command::new("regenerate-key").about("Rotate the API key"))
        .subcommand(
            Command::new("delete-account")
                .about("Permanently delete the account")
                .arg(
                    Arg::new(ARG_YES)
                        .long("yes")
                        .help("Confirm the deletion")
                        .action(ArgAction::SetTrue),
                ),
        )
}
