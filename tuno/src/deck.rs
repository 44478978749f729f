use rand::{seq::SliceRandom, thread_rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, Face},
    constants::*,
    error::{GameError, Result},
};

#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_FACES_PER_COLOR {
                cards.push(Card::Colored(color, Face::Number(*number)));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::Reverse));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::DrawTwo));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::WildDrawFour);
        }

        Self(cards)
    }

    pub(crate) fn shuffle(&mut self) {
        let mut rng = thread_rng();
        self.0.shuffle(&mut rng);
    }

    // The caller decides whether an empty deck means a recycle or a forced pass.
    pub(crate) fn draw_top(&mut self) -> Result<Card> {
        if self.0.is_empty() {
            return Err(GameError::DeckEmpty);
        }
        Ok(self.0.remove(0))
    }

    pub(crate) fn refill(&mut self, cards: Vec<Card>) {
        self.0.extend(cards);
        self.shuffle();
    }

    // Action and wild cards stay where they are.
    pub(crate) fn remove_first_number(&mut self) -> Option<Card> {
        self.0
            .iter()
            .position(|x| x.is_number())
            .map(|pos| self.0.remove(pos))
    }

    pub(crate) fn cards_count(&self) -> usize {
        self.0.len()
    }
}
