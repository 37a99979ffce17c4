use clap::Parser;
use paper_digest::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Summary(args) => cli::summary::run(args).await,
        Command::Extract(args) => cli::extract::run(args).await,
        Command::Version => {
            cli::print_version();
            Ok(())
        }
    }
}
