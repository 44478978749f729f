use crate::card::Card;

#[derive(Debug)]
pub struct Player {
    name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub(crate) fn new(name: String, hand: Vec<Card>) -> Self {
        Self { name, hand }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}
