use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-client")]
#[command(about = "Preview the portfolio page behavior against a running backend")]
pub struct CliConfig {
    /// TOML configuration file; defaults are used when omitted
    #[arg(long)]
    pub config: Option<String>,

    /// Overrides `api.base_url` from the configuration
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Fetch skills and projects and print the rendered fragments
    Render,
    /// Submit the contact form and print the inline message
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
    },
}
