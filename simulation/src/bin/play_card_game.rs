use std::{io, path::PathBuf};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use uuid::Uuid;

use simulation::{
    console::{announce_outcome, announce_start, prompt_player_count, prompt_player_names},
    run_game, GameConfig, SimulationError,
};
use strategies::InputStrategy;
use types::{GameState, PlayerInput, Strategy};

#[derive(Parser, Debug)]
struct Params {
    #[arg(short, long)]
    player: Vec<String>,

    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> Result<(), SimulationError> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let yaml = args
        .config
        .as_deref()
        .map(GameConfig::from_yaml_file)
        .transpose()?;
    let cli = GameConfig {
        players: args.player,
        seed: args.seed,
        delay_ms: args.delay_ms,
    };
    let config = GameConfig::from_cli_or_env_or_yaml(cli, GameConfig::from_env()?, yaml);
    log::info!("config: {config:?}");

    let player_names = if config.players.is_empty() {
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        let count = prompt_player_count(&mut input, &mut output)?;
        prompt_player_names(&mut input, &mut output, count)?
    } else {
        config.players.clone()
    };
    log::info!("players: {player_names:?}");

    let player_inputs: Vec<PlayerInput> = player_names
        .into_iter()
        .map(|name| {
            (
                Uuid::new_v4(),
                name,
                Box::new(InputStrategy::default()) as Box<dyn Strategy>,
            )
        })
        .collect();
    let mut game_state = match config.seed {
        Some(seed) => GameState::with_rng(player_inputs, &mut StdRng::seed_from_u64(seed))?,
        None => GameState::new(player_inputs)?,
    };

    announce_start(&mut io::stdout(), game_state.top_card())?;
    let status = run_game(&mut game_state, config.delay_ms)?;
    announce_outcome(&mut io::stdout(), &status)?;
    Ok(())
}
