use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chisel")]
#[command(about = "Chisel - build CSS selectors from ordered, validated fragments", long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Build every selector in a sheet and print it
    Render {
        /// Sheet file (defaults to the config value)
        #[arg(short, long)]
        sheet: Option<String>,
        /// Output format (defaults to the config value)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the order in which selector parts must appear
    Order,
}
