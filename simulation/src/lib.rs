pub mod config;
pub mod console;
pub mod error;

use std::{thread::sleep, time::Duration};

use types::{GameError, GameState, GameStatus};

pub use config::GameConfig;
pub use error::SimulationError;

/// Plays turns until someone empties their hand or the draw pile runs dry.
pub fn run_game(game_state: &mut GameState, delay_ms: Option<u64>) -> Result<GameStatus, GameError> {
    while game_state.still_playing() {
        log::debug!("{game_state}");
        if let Some(ms) = delay_ms {
            sleep(Duration::from_millis(ms));
        }
        let available_actions = game_state.permitted_actions();
        let public_info = game_state.public_info();
        let current_player = game_state.current_player_mut();
        let selected_action = current_player.strategy.select_action(
            &current_player.state,
            &public_info,
            &available_actions,
        )?;
        game_state.perform_action(&selected_action)?;
    }
    log::info!("Game over: {:?}", game_state.status());
    Ok(game_state.status().clone())
}
