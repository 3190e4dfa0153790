use anyhow::Result;

use dupe_check::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.run().await
}
