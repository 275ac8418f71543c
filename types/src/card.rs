use std::fmt::Display;

use deckofcards::{Card as DOCCard, Rank, Suit};

/// What an action card does when it hits the discard pile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CardAction {
    /// Ace: the next player loses their turn.
    Skip,
    /// King: turn order flips direction.
    Reverse,
    /// Queen: the next player draws two.
    DrawTwo,
    /// Jack: the next player draws four.
    DrawFour,
}

impl CardAction {
    pub fn forced_draws(&self) -> usize {
        match self {
            CardAction::DrawTwo => 2,
            CardAction::DrawFour => 4,
            CardAction::Skip | CardAction::Reverse => 0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    card: DOCCard,
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", rank_name(self.rank()), suit_name(self.suit()))
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card {
            card: DOCCard { rank, suit },
        }
    }

    pub fn all_cards() -> Vec<Card> {
        DOCCard::all_cards()
            .iter()
            .map(|&card| Card { card })
            .collect()
    }

    pub fn rank(&self) -> Rank {
        self.card.rank
    }

    pub fn suit(&self) -> Suit {
        self.card.suit
    }

    /// A card can go on `top_card` when it shares its suit or its rank.
    pub fn matches(&self, top_card: &Card) -> bool {
        self.suit() == top_card.suit() || self.rank() == top_card.rank()
    }

    pub fn is_action_card(&self) -> bool {
        self.action().is_some()
    }

    pub fn action(&self) -> Option<CardAction> {
        match self.rank() {
            Rank::Ace => Some(CardAction::Skip),
            Rank::King => Some(CardAction::Reverse),
            Rank::Queen => Some(CardAction::DrawTwo),
            Rank::Jack => Some(CardAction::DrawFour),
            _ => None,
        }
    }
}

impl From<DOCCard> for Card {
    fn from(card: DOCCard) -> Self {
        Self { card }
    }
}

fn rank_name(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "TWO",
        Rank::Three => "THREE",
        Rank::Four => "FOUR",
        Rank::Five => "FIVE",
        Rank::Six => "SIX",
        Rank::Seven => "SEVEN",
        Rank::Eight => "EIGHT",
        Rank::Nine => "NINE",
        Rank::Ten => "TEN",
        Rank::Jack => "JACK",
        Rank::Queen => "QUEEN",
        Rank::King => "KING",
        Rank::Ace => "ACE",
    }
}

fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "CLUBS",
        Suit::Diamonds => "DIAMONDS",
        Suit::Hearts => "HEARTS",
        Suit::Spades => "SPADES",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn full_deck_has_52_distinct_cards() {
        let cards = Card::all_cards();
        assert_eq!(cards.len(), 52);
        let unique: HashSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn matches_by_suit_or_rank() {
        let five_hearts = Card::new(Rank::Five, Suit::Hearts);
        assert!(five_hearts.matches(&Card::new(Rank::Nine, Suit::Hearts)));
        assert!(five_hearts.matches(&Card::new(Rank::Five, Suit::Clubs)));
        assert!(!five_hearts.matches(&Card::new(Rank::Nine, Suit::Clubs)));
    }

    #[test]
    fn matches_is_reflexive_and_symmetric() {
        let cards = Card::all_cards();
        for a in &cards {
            assert!(a.matches(a));
            for b in &cards {
                assert_eq!(a.matches(b), b.matches(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn action_cards_are_the_face_cards_and_ace() {
        let actions: Vec<_> = Card::all_cards()
            .into_iter()
            .filter(|c| c.is_action_card())
            .collect();
        assert_eq!(actions.len(), 16);
        assert_eq!(
            Card::new(Rank::Ace, Suit::Spades).action(),
            Some(CardAction::Skip)
        );
        assert_eq!(
            Card::new(Rank::King, Suit::Spades).action(),
            Some(CardAction::Reverse)
        );
        assert_eq!(
            Card::new(Rank::Queen, Suit::Spades).action(),
            Some(CardAction::DrawTwo)
        );
        assert_eq!(
            Card::new(Rank::Jack, Suit::Spades).action(),
            Some(CardAction::DrawFour)
        );
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).action(), None);
    }

    #[test]
    fn displays_rank_of_suit() {
        assert_eq!(
            Card::new(Rank::Queen, Suit::Hearts).to_string(),
            "QUEEN of HEARTS"
        );
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).to_string(), "TWO of CLUBS");
    }
}
