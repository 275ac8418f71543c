use std::fmt::Display;

use itertools::Itertools;
use log;
use rand::prelude::*;
use uuid::Uuid;

use crate::{
    card::{Card, CardAction},
    error::GameError,
    hand::Hand,
    piles::{shuffled_deck, Piles},
    player::Player,
    turn_order::{Direction, TurnOrder},
    Action, PlayerState, PublicPlayerState, Strategy,
};

pub const HAND_SIZE: usize = 5;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

pub type PlayerInput = (Uuid, String, Box<dyn Strategy>);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Played { player_id: Uuid, card: Card },
    Drew {
        player_id: Uuid,
        card: Card,
        forced: bool,
    },
    Skipped { player_id: Uuid },
    Reversed,
    ForcedDraw { player_id: Uuid, count: usize },
    DrawPileEmpty { player_id: Uuid },
    Won { player_id: Uuid },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { player_id: Uuid, name: String },
    Drawn,
}

/// What happens to the turn pointer once a play has been resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TurnPlacement {
    Advance,
    AlreadyPlaced,
}

#[derive(Debug)]
pub struct GameState {
    players: Vec<Player>,
    turn_order: TurnOrder,
    piles: Piles,
    status: GameStatus,
    pub history: Vec<Event>,
}

#[derive(Debug)]
pub struct PublicInfo {
    pub top_card: Card,
    pub draw_pile_size: usize,
    pub direction: Direction,
    pub history: Vec<Event>,
    pub public_table: Vec<PublicPlayerState>,
}

impl PublicInfo {
    pub fn player_name(&self, id: Uuid) -> Option<&str> {
        self.public_table
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }

    fn last_move_index(&self, id: Uuid) -> Option<usize> {
        self.history.iter().rposition(|ev| {
            matches!(ev, Event::Played { player_id, .. } if *player_id == id)
                || matches!(ev, Event::Drew { player_id, forced: false, .. } if *player_id == id)
        })
    }

    /// The last card `id` played or drew by choice.
    pub fn last_move(&self, id: Uuid) -> Option<&Event> {
        self.last_move_index(id).map(|idx| &self.history[idx])
    }

    /// Everything that happened since `id` last played or drew by choice.
    pub fn events_since_last_turn(&self, id: Uuid) -> &[Event] {
        let start = self.last_move_index(id).map_or(0, |idx| idx + 1);
        &self.history[start..]
    }
}

impl GameState {
    pub fn new(player_inputs: Vec<PlayerInput>) -> Result<Self, GameError> {
        Self::with_rng(player_inputs, &mut thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        player_inputs: Vec<PlayerInput>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let deck = shuffled_deck(rng);
        Self::with_deck(player_inputs, deck)
    }

    /// Sets up a game from a deck already in deal order: the first `HAND_SIZE`
    /// cards go to the first player, and so on, then one card is turned up and
    /// the rest become the draw pile (next card drawn first).
    pub fn with_deck(player_inputs: Vec<PlayerInput>, deck: Vec<Card>) -> Result<Self, GameError> {
        let num_players = player_inputs.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidPlayerCount(num_players));
        }
        let needed = num_players * HAND_SIZE + 1;
        if deck.len() < needed {
            return Err(GameError::DeckTooSmall {
                needed,
                available: deck.len(),
            });
        }

        let mut deck = deck;
        deck.reverse();
        let players: Vec<_> = player_inputs
            .into_iter()
            .map(|(id, name, strategy)| {
                let mut state = PlayerState::new_with_id(id, name);
                for card in deck.drain(deck.len() - HAND_SIZE..).rev() {
                    state.add_card_to_hand(card);
                }
                Player { state, strategy }
            })
            .collect();
        let first_discard = deck
            .pop()
            .expect("Deck size was checked before dealing");
        let piles = Piles::new(first_discard, deck);

        log::info!(
            "Num players: {num_players}, hand size: {HAND_SIZE}, draw pile: {}, top card: {first_discard}",
            piles.draw_pile().len()
        );

        Ok(Self {
            turn_order: TurnOrder::new(num_players),
            players,
            piles,
            status: GameStatus::InProgress,
            history: Vec::new(),
        })
    }

    pub fn public_info(&self) -> PublicInfo {
        PublicInfo {
            top_card: self.top_card(),
            draw_pile_size: self.piles.draw_pile().len(),
            direction: self.turn_order.direction(),
            history: self.history.clone(),
            public_table: self.players.iter().map(|p| (&p.state).into()).collect(),
        }
    }

    /// Every card in the current player's hand that can go on the top card,
    /// followed by the draw signal.
    pub fn permitted_actions(&self) -> Vec<Action> {
        let current_player = self.current_player();
        let mut actions: Vec<Action> = current_player
            .state
            .current_hand
            .matching_cards(&self.top_card())
            .into_iter()
            .map_into()
            .collect();
        actions.push(Action::Draw);

        log::debug!(
            "Available actions for {}: {actions:?}",
            current_player.state.name
        );
        actions
    }

    pub fn perform_action(&mut self, action: &Action) -> Result<(), GameError> {
        if !self.still_playing() {
            return Err(GameError::GameOver);
        }
        let seat = self.turn_order.current();
        log::info!("{} chose: {action}", self.players[seat].state.name);

        match *action {
            Action::Draw => {
                self.draw_for(seat, false);
                if self.still_playing() {
                    self.turn_order.advance();
                }
            }
            Action::Play(card) => {
                let top_card = self.top_card();
                if !card.matches(&top_card) {
                    return Err(GameError::IllegalAction {
                        action: *action,
                        reason: format!("{card} does not match the top card {top_card}"),
                    });
                }
                let player = &mut self.players[seat];
                if !player.state.remove_card_from_hand(&card) {
                    return Err(GameError::IllegalAction {
                        action: *action,
                        reason: format!("{} does not hold {card}", player.state.name),
                    });
                }
                let player_id = player.state.id;
                self.piles.discard(card);
                self.history.push(Event::Played { player_id, card });

                let placement = match card.action() {
                    Some(card_action) => self.resolve_action(card_action),
                    None => TurnPlacement::Advance,
                };

                // a forced draw may already have ended the game
                if !self.still_playing() {
                    return Ok(());
                }
                if !self.players[seat].state.has_cards() {
                    self.declare_winner(seat);
                    return Ok(());
                }
                if placement == TurnPlacement::Advance {
                    self.turn_order.advance();
                }
            }
        }
        Ok(())
    }

    fn resolve_action(&mut self, card_action: CardAction) -> TurnPlacement {
        let next_seat = self.turn_order.next_seat();
        let next_player = &self.players[next_seat].state;
        let next_id = next_player.id;

        match card_action {
            CardAction::Skip => {
                log::info!("Next player ({}) is skipped!", next_player.name);
                if self.turn_order.seat_after(next_seat) == self.turn_order.current() {
                    log::warn!("Skip with two players hands the turn straight back to the actor");
                }
                self.history.push(Event::Skipped { player_id: next_id });
                self.turn_order.advance();
                TurnPlacement::Advance
            }
            CardAction::Reverse => {
                log::info!("The sequence of turns is reversed!");
                self.history.push(Event::Reversed);
                self.turn_order.reverse();
                TurnPlacement::AlreadyPlaced
            }
            CardAction::DrawTwo | CardAction::DrawFour => {
                let count = card_action.forced_draws();
                log::info!("{} must draw {count} cards", next_player.name);
                self.history.push(Event::ForcedDraw {
                    player_id: next_id,
                    count,
                });
                for _ in 0..count {
                    if self.draw_for(next_seat, true).is_none() {
                        break;
                    }
                }
                TurnPlacement::Advance
            }
        }
    }

    /// A single draw. An empty draw pile ends the game in a draw.
    fn draw_for(&mut self, seat: usize, forced: bool) -> Option<Card> {
        let player = &mut self.players[seat].state;
        let player_id = player.id;
        match self.piles.draw() {
            Some(card) => {
                log::debug!("{} drew {card}", player.name);
                player.add_card_to_hand(card);
                self.history.push(Event::Drew {
                    player_id,
                    card,
                    forced,
                });
                Some(card)
            }
            None => {
                log::info!("The draw pile is empty! The game ends in a draw.");
                self.history.push(Event::DrawPileEmpty { player_id });
                self.status = GameStatus::Drawn;
                None
            }
        }
    }

    fn declare_winner(&mut self, seat: usize) {
        let state = &self.players[seat].state;
        log::info!("Player {} wins!", state.name);
        self.history.push(Event::Won {
            player_id: state.id,
        });
        self.status = GameStatus::Won {
            player_id: state.id,
            name: state.name.clone(),
        };
    }

    pub fn still_playing(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn top_card(&self) -> Card {
        self.piles.top_card()
    }

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn turn_order(&self) -> &TurnOrder {
        &self.turn_order
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn_order.current()]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.turn_order.current()]
    }

    /// Every card in the session: all hands, then the draw pile, then the discard pile.
    pub fn all_cards(&self) -> Vec<Card> {
        self.players
            .iter()
            .flat_map(|p| p.state.current_hand.iter())
            .chain(self.piles.draw_pile())
            .chain(self.piles.discard_pile())
            .copied()
            .collect()
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let players_str = self
            .turn_order
            .play_order()
            .into_iter()
            .map(|seat| {
                let player = &self.players[seat];
                format!(
                    "{}: {} cards left: {}",
                    player.state.name,
                    player.state.current_hand.len(),
                    player.state.current_hand.iter().join(",")
                )
            })
            .join("\n");
        write!(
            f,
            "\nTop Card: {}\nDraw pile: {}\nTable:\n{}",
            self.top_card(),
            self.piles.draw_pile().len(),
            players_str
        )
    }
}
