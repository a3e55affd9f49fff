use anyhow::Result;
use clap::Parser;
use snake_tui::game::GameConfig;
use snake_tui::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake-tui")]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut mode = HumanMode::new(GameConfig::default(), cli.seed);
    mode.run().await?;

    Ok(())
}
