use rand::{seq::SliceRandom, Rng};

use crate::card::Card;

/// Builds the 52-card deck and shuffles it in place (Fisher-Yates).
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = Card::all_cards();
    deck.shuffle(rng);
    deck
}

/// The shared reservoir: cards waiting to be drawn and cards already played.
/// Both piles keep their top card at the end of the vector.
#[derive(Clone, Debug)]
pub struct Piles {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
}

impl Piles {
    /// `draw_pile` is given top-last; `first_discard` becomes the opening top card.
    pub fn new(first_discard: Card, draw_pile: Vec<Card>) -> Self {
        Self {
            draw_pile,
            discard_pile: vec![first_discard],
        }
    }

    pub fn top_card(&self) -> Card {
        *self
            .discard_pile
            .last()
            .expect("Discard pile always holds at least the opening card")
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.draw_pile.pop()
    }

    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }
}
