use clap::Parser;
use sodar_audit::cli::{run, Cli};
use sodar_audit::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
