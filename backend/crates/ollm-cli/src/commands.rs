use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive session console (login, logout, whoami, status)
    Console,

    /// Print the effective configuration as JSON
    Config,
}
