use crate::commands::Commands;

use clap::Parser;
use ollm_config::Profile;

#[derive(Parser)]
#[command(name = "ollm")]
#[command(about = "Session console and dev configuration for the ollm frontend")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Environment profile (dev, prod); selects config.<env>.toml
    #[arg(long, global = true, default_value = "dev")]
    pub(crate) env: Profile,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
