use std::fmt::{Debug, Display};

use itertools::Itertools;
use uuid::Uuid;

use crate::{card::Card, hand::Hand};

#[derive(Clone, Debug)]
pub struct PlayerState {
    pub id: Uuid,
    pub name: String,
    pub current_hand: Vec<Card>,
}

#[derive(Clone, Debug)]
pub struct PublicPlayerState {
    pub id: Uuid,
    pub name: String,
    pub hand_size: usize,
}

impl From<&PlayerState> for PublicPlayerState {
    fn from(value: &PlayerState) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            hand_size: value.current_hand.len(),
        }
    }
}

impl PartialEq for PlayerState {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Hand: {}",
            self.name,
            self.current_hand.iter().join(", ")
        )
    }
}

impl PlayerState {
    pub fn new(name: String) -> Self {
        Self::new_with_id(Uuid::new_v4(), name)
    }

    pub fn new_with_id(id: Uuid, name: String) -> Self {
        Self {
            id,
            name,
            current_hand: Vec::new(),
        }
    }

    pub fn add_card_to_hand(&mut self, card: Card) {
        self.current_hand.push(card);
    }

    /// Returns false, leaving the hand untouched, when no equal card is held.
    pub fn remove_card_from_hand(&mut self, card: &Card) -> bool {
        self.current_hand.remove_card(card)
    }

    pub fn has_cards(&self) -> bool {
        !self.current_hand.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use deckofcards::{Rank, Suit};

    use super::*;

    #[test]
    fn hand_grows_and_shrinks() {
        let mut state = PlayerState::new("Alice".to_string());
        assert!(!state.has_cards());

        let card = Card::new(Rank::Seven, Suit::Diamonds);
        state.add_card_to_hand(card);
        state.add_card_to_hand(Card::new(Rank::Ace, Suit::Hearts));
        assert!(state.has_cards());
        assert_eq!(state.current_hand.len(), 2);

        assert!(state.remove_card_from_hand(&card));
        assert!(!state.remove_card_from_hand(&card));
        assert_eq!(
            state.current_hand,
            vec![Card::new(Rank::Ace, Suit::Hearts)]
        );
    }

    #[test]
    fn public_state_hides_the_hand() {
        let mut state = PlayerState::new("Bob".to_string());
        state.add_card_to_hand(Card::new(Rank::Two, Suit::Spades));
        let public: PublicPlayerState = (&state).into();
        assert_eq!(public.id, state.id);
        assert_eq!(public.name, "Bob");
        assert_eq!(public.hand_size, 1);
    }
}
