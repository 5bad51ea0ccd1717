use anyhow::Result;
use clap::{Parser, ValueEnum};
use grid_hopper::game::GridConfig;
use grid_hopper::modes::PlayMode;

#[derive(Parser)]
#[command(name = "grid_hopper")]
#[command(version, about = "A terminal road-crossing arcade game")]
struct Cli {
    /// Game mode (currently only 'play' is implemented)
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// Grid columns
    #[arg(long, default_value_t = 5)]
    cols: usize,

    /// Grid rows (one water row, stone lanes, two grass rows)
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Session length in seconds
    #[arg(long, default_value_t = 60)]
    duration: u64,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with keyboard controls
    Play,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create grid configuration from CLI arguments
    let mut config = GridConfig::new(cli.cols, cli.rows);
    config.session_secs = cli.duration;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Play => {
            let mut play_mode = PlayMode::new(config);
            play_mode.run().await?;
        }
    }

    Ok(())
}
