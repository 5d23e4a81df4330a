use anyhow::Result;
use clap::Parser;
use terminal_thunder::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    terminal_thunder::run(cli).await
}
