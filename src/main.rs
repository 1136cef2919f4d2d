use anyhow::Result;
use clap::Parser;
use term_snake::game::GameConfig;
use term_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Board width in cells, walls included
    #[arg(long, default_value_t = 32)]
    width: i32,

    /// Board height in cells, walls included
    #[arg(long, default_value_t = 16)]
    height: i32,

    /// Starting snake length
    #[arg(long, default_value_t = 5)]
    length: usize,

    /// Milliseconds between game ticks
    #[arg(long, default_value_t = 500)]
    tick: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stdout; the game draws on stderr
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = GameConfig {
        board_width: cli.width,
        board_height: cli.height,
        initial_snake_length: cli.length,
        tick_interval_ms: cli.tick,
    };

    let mut play = PlayMode::new(config)?;
    play.run().await?;

    Ok(())
}
