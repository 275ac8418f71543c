pub mod input_strategy;

use std::collections::VecDeque;

use types::{game_state::PublicInfo, Action, PlayerState, Strategy, StrategyError};

pub use crate::input_strategy::InputStrategy;

/// Replays a fixed list of moves, one per turn, then reports the input as closed.
#[derive(Debug, Default)]
pub struct ScriptedStrategy {
    moves: VecDeque<Action>,
}

impl ScriptedStrategy {
    pub fn new(moves: impl IntoIterator<Item = Action>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Strategy for ScriptedStrategy {
    fn select_action(
        &mut self,
        private_info: &PlayerState,
        _public_info: &PublicInfo,
        _available_actions: &[Action],
    ) -> Result<Action, StrategyError> {
        let action = self.moves.pop_front().ok_or(StrategyError::InputClosed)?;
        log::debug!("{} replays: {action}", private_info.name);
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use types::{Card, Direction, Rank, Suit};

    use super::*;

    #[test]
    fn replays_in_order_then_closes() {
        let nine = Card::new(Rank::Nine, Suit::Hearts);
        let mut strategy = ScriptedStrategy::new([Action::Play(nine), Action::Draw]);
        let state = PlayerState::new("Alice".to_string());
        let info = PublicInfo {
            top_card: nine,
            draw_pile_size: 0,
            direction: Direction::Clockwise,
            history: vec![],
            public_table: vec![],
        };

        assert_eq!(
            strategy.select_action(&state, &info, &[]).expect("Scripted"),
            Action::Play(nine)
        );
        assert_eq!(strategy.remaining(), 1);
        assert_eq!(
            strategy.select_action(&state, &info, &[]).expect("Scripted"),
            Action::Draw
        );
        assert!(matches!(
            strategy.select_action(&state, &info, &[]),
            Err(StrategyError::InputClosed)
        ));
    }
}
