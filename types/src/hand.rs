use crate::card::Card;

pub trait Hand {
    fn remove_card(&mut self, card: &Card) -> bool;
    fn matching_cards(&self, top_card: &Card) -> Vec<Card>;
}

impl Hand for Vec<Card> {
    /// Removes the first card equal to `card`, keeping the rest in order.
    fn remove_card(&mut self, card: &Card) -> bool {
        if let Some(idx) = self.iter().position(|c| c == card) {
            self.remove(idx);
            true
        } else {
            false
        }
    }

    fn matching_cards(&self, top_card: &Card) -> Vec<Card> {
        self.iter()
            .filter(|card| card.matches(top_card))
            .copied()
            .collect()
    }
}
