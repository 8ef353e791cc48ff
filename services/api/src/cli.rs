use crate::commands::{
    run_lead_preview, run_savings, run_sitemap, LeadPreviewArgs, SavingsArgs, SitemapArgs,
};
use crate::server;
use chesterfield::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Chesterfield Leads",
    about = "Serve the Chesterfield lead intake API and inspect site content from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate leasing-fee savings for an owner
    Savings(SavingsArgs),
    /// Print the sitemap XML
    Sitemap(SitemapArgs),
    /// Lead notification tooling
    Lead {
        #[command(subcommand)]
        command: LeadCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LeadCommand {
    /// Render the notification a submission would produce, without sending it
    Preview(LeadPreviewArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Savings(args) => run_savings(args),
        Command::Sitemap(args) => run_sitemap(args),
        Command::Lead {
            command: LeadCommand::Preview(args),
        } => run_lead_preview(args),
    }
}
