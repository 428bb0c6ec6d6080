mod command;
mod runner;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::config::{
    CONFIG_FILE_NAME, ConfigManager, FileContentConfigProvider, GameConfig, Validate,
    YamlConfigSerializer,
};
use common::games::snake::SnakeSession;
use common::{log, logger};
use runner::GameRunner;

#[derive(Parser)]
#[command(name = "snake_game")]
struct Args {
    /// Config file; defaults to snake_game_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    difficulty: Option<u8>,

    #[arg(long)]
    seed: Option<u64>,

    /// Let the built-in autopilot steer
    #[arg(long)]
    autopilot: bool,

    /// Rounds the autopilot plays before exiting
    #[arg(long, default_value_t = 1)]
    games: u32,

    #[arg(long)]
    use_log_prefix: bool,
}

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

type GameConfigManager = ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: GameConfigManager =
        ConfigManager::from_yaml_file(args.config.clone().unwrap_or_else(default_config_path));
    let stored = config_manager.get_config()?;

    let mut config = stored.clone();
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let session = SnakeSession::from_config(&config)?;
    log!(
        "Board {}x{}, difficulty {}, seed {}",
        config.board_width,
        config.board_height,
        session.difficulty(),
        session.seed()
    );
    if !args.autopilot {
        log!("Commands: start, w/a/s/d, difficulty <1-5>, retry, quit");
    }

    let runner = GameRunner::new(session, args.autopilot, args.games);
    let summary = runner
        .run(Duration::from_millis(config.frame_interval_ms))
        .await;

    if !summary.scores.is_empty() {
        let best = summary.scores.iter().max().copied().unwrap_or_default();
        log!(
            "Played {} game(s), best score {}",
            summary.scores.len(),
            best
        );
    }

    if summary.difficulty.level() != stored.difficulty {
        let updated = GameConfig {
            difficulty: summary.difficulty.level(),
            ..stored
        };
        match config_manager.set_config(&updated) {
            Ok(_) => log!(
                "Saved difficulty {} to {}",
                updated.difficulty,
                config_manager.provider().path().display()
            ),
            Err(e) => log!("{}", e),
        }
    }

    Ok(())
}
