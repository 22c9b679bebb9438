pub mod auth;
pub mod history;
pub mod logging;
pub mod navigate;
pub mod proxy;
pub mod scan;
pub mod session;
pub mod user;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("pandora")
        .about("Threat intelligence dashboard client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands(auth::subcommands())
        .subcommand(navigate::subcommand())
        .subcommand(scan::subcommand())
        .subcommand(history::subcommand())
        .subcommand(user::subcommand())
        .subcommand(proxy::subcommand());

    let command = session::with_args(command);
    logging::with_args(command)
}
