use std::fmt::Debug;

use crate::{error::StrategyError, game_state::PublicInfo, Action, PlayerState};

/// Chooses a move for one seat.
///
/// `available_actions` always ends with [`Action::Draw`] and otherwise holds a
/// [`Action::Play`] for every card in hand that matches the top card.
/// Implementations return one of them; anything else is rejected by the engine.
pub trait Strategy: Debug {
    fn select_action(
        &mut self,
        private_info: &PlayerState,
        public_info: &PublicInfo,
        available_actions: &[Action],
    ) -> Result<Action, StrategyError>;
}

#[derive(Debug)]
pub struct Player {
    pub state: PlayerState,
    pub strategy: Box<dyn Strategy>,
}
