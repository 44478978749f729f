use crate::card::{Card, PlayedCard};

// The buried cards exist only to be recycled into the deck.
#[derive(Debug)]
pub struct DiscardPile {
    buried: Vec<Card>,
    top: PlayedCard,
}

impl DiscardPile {
    pub(crate) fn new(top: PlayedCard) -> Self {
        Self {
            buried: Vec::new(),
            top,
        }
    }

    pub fn top(&self) -> &PlayedCard {
        &self.top
    }

    pub(crate) fn place(&mut self, card: PlayedCard) {
        let buried = std::mem::replace(&mut self.top, card);
        self.buried.push(buried.into_card());
    }

    // The top card stays.
    pub(crate) fn reclaim_buried(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.buried)
    }

    pub(crate) fn cards_count(&self) -> usize {
        self.buried.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, Face};

    #[test]
    fn place_buries_the_previous_top() {
        let mut pile = DiscardPile::new(PlayedCard::Colored(CardColor::Red, Face::Number(4)));
        pile.place(PlayedCard::Colored(CardColor::Blue, Face::Number(4)));

        assert_eq!(
            pile.top(),
            &PlayedCard::Colored(CardColor::Blue, Face::Number(4))
        );
        assert_eq!(pile.cards_count(), 2);
    }

    #[test]
    fn buried_wild_goes_down_colorless() {
        let mut pile = DiscardPile::new(PlayedCard::Wild(CardColor::Green));
        pile.place(PlayedCard::Colored(CardColor::Green, Face::Number(1)));

        assert_eq!(pile.reclaim_buried(), vec![Card::Wild]);
    }

    #[test]
    fn reclaim_buried_keeps_only_the_top() {
        let mut pile = DiscardPile::new(PlayedCard::Colored(CardColor::Red, Face::Number(0)));
        for number in 1..=3 {
            pile.place(PlayedCard::Colored(CardColor::Red, Face::Number(number)));
        }

        let buried = pile.reclaim_buried();
        assert_eq!(buried.len(), 3);
        assert_eq!(pile.cards_count(), 1);
        assert_eq!(
            pile.top(),
            &PlayedCard::Colored(CardColor::Red, Face::Number(3))
        );
    }
}
