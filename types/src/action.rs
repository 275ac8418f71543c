use std::fmt::Display;

use crate::card::Card;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Play(Card),
    Draw,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(card) => write!(f, "Play {card}"),
            Action::Draw => write!(f, "Draw"),
        }
    }
}

impl From<Card> for Action {
    fn from(card: Card) -> Self {
        Action::Play(card)
    }
}
