pub mod action;
pub mod card;
pub mod error;
pub mod game_state;
pub mod hand;
pub mod piles;
pub mod player;
pub mod player_state;
pub mod turn_order;

pub use action::Action;
pub use deckofcards::{Rank, Suit};
pub use card::{Card, CardAction};
pub use error::{GameError, StrategyError};
pub use game_state::{Event, GameState, GameStatus, PlayerInput, PublicInfo};
pub use piles::Piles;
pub use player::{Player, Strategy};
pub use player_state::{PlayerState, PublicPlayerState};
pub use turn_order::{Direction, TurnOrder};
