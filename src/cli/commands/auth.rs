use clap::{Arg, Command};

pub const ARG_EMAIL: &str = "email";
pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("Account password")
        .env("PANDORA_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .long("email")
        .help("Account email")
        .env("PANDORA_EMAIL")
        .required(true)
}

#[must_use]
pub fn subcommands() -> Vec<Command> {
    vec![
        Command::new("register")
            .about("Create an account and start a session")
            .arg(email_arg())
            .arg(
                Arg::new(ARG_USERNAME)
                    .long("username")
                    .help("Display name")
                    .env("PANDORA_USERNAME")
                    .required(true),
            )
            .arg(password_arg()),
        Command::new("login")
            .about("Log in and cache the returned user")
            .arg(email_arg())
            .arg(password_arg()),
        Command::new("logout").about("End the session; local state is cleared even if the server call fails"),
        Command::new("me").about("Show the user behind the current session cookies"),
        Command::new("refresh").about("Renew the access token cookie"),
    ]
}
