use std::io;

use anyhow::{Context, Result};
use log::info;

use lost_puppy::config::GameConfig;
use lost_puppy::{game, lost_puppy_scenario, GameScreen, Scenario};

fn main() -> Result<()> {
    // Initialize logging. Control verbosity with RUST_LOG env var:
    //   RUST_LOG=info   cargo run                    # rounds + outcomes
    //   RUST_LOG=debug  cargo run -- kitten.json 42  # + every dispatched event
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = GameConfig::from_args(&args);

    let scenario = match &config.scenario_path {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => lost_puppy_scenario(),
    };
    info!(
        "Scenario \"{}\" with {} decisions (seed: {:?})",
        scenario.title,
        scenario.decisions.len(),
        config.seed
    );

    let mut screen = GameScreen::new(scenario, config.seed).context("failed to start game")?;

    let stdin = io::stdin();
    game::run(&mut screen, &mut stdin.lock(), &mut io::stdout())
}
