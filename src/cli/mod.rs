pub mod commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "darui")]
#[command(about = "Match RSS feed entries against configured rules and mail a report", long_about = None)]
pub struct Cli {
    /// Print the report to stdout
    #[arg(short, long)]
    pub print: bool,

    /// Use this configuration file instead of the standard search path
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Skip email delivery
    #[arg(long)]
    pub no_email: bool,
}
