//! ServiceNow adapter CLI entry point.

use clap::Parser;

use servicenow_adapter::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = servicenow_adapter::cli::commands::execute(cli).await {
        servicenow_adapter::cli::handle_error(err, json);
    }
}
