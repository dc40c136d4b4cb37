use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "servicenow-adapter")]
#[command(about = "Poll and create ServiceNow change requests through the table API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .servicenow/config.yaml and .servicenow/local.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one healthcheck and report ONLINE or OFFLINE
    Healthcheck,

    /// Fetch change tickets from the configured table
    Get(GetArgs),

    /// Issue a POST against the configured table
    Post,

    /// Print the table API path that requests are sent to
    Uri(UriArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Encoded query appended to the table path (e.g. "sysparm_query=active=true")
    #[arg(short, long)]
    pub query: Option<String>,
}

#[derive(Args, Debug)]
pub struct UriArgs {
    /// Encoded query appended to the table path
    #[arg(short, long)]
    pub query: Option<String>,
}
