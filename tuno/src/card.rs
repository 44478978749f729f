use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

// Wilds carry no color in the deck or in a hand; they gain one once played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Card {
    Colored(CardColor, Face),
    Wild,
    WildDrawFour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayedCard {
    Colored(CardColor, Face),
    Wild(CardColor),
    WildDrawFour(CardColor),
}

impl Card {
    pub fn is_number(&self) -> bool {
        matches!(self, Card::Colored(_, Face::Number(_)))
    }
}

impl PlayedCard {
    pub fn color(&self) -> CardColor {
        match self {
            PlayedCard::Colored(color, _) => *color,
            PlayedCard::Wild(color) => *color,
            PlayedCard::WildDrawFour(color) => *color,
        }
    }

    pub fn accepts(&self, candidate: &Card) -> bool {
        match candidate {
            Card::Wild | Card::WildDrawFour => true,
            Card::Colored(color, face) => {
                *color == self.color()
                    || matches!(self, PlayedCard::Colored(_, top_face) if top_face == face)
            }
        }
    }

    // A recycled wild re-enters the deck colorless.
    pub(crate) fn into_card(self) -> Card {
        match self {
            PlayedCard::Colored(color, face) => Card::Colored(color, face),
            PlayedCard::Wild(_) => Card::Wild,
            PlayedCard::WildDrawFour(_) => Card::WildDrawFour,
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Number(number) => write!(f, "{number}"),
            Face::Skip => write!(f, "Skip"),
            Face::Reverse => write!(f, "Reverse"),
            Face::DrawTwo => write!(f, "Draw Two"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, face) => write!(f, "[{color}, {face}]"),
            Card::Wild => write!(f, "[Special, Wild]"),
            Card::WildDrawFour => write!(f, "[Special, Wild Draw Four]"),
        }
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayedCard::Colored(color, face) => write!(f, "[{color}, {face}]"),
            PlayedCard::Wild(color) => write!(f, "[{color}, Wild]"),
            PlayedCard::WildDrawFour(color) => write!(f, "[{color}, Wild Draw Four]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::Colored(CardColor::Red, Face::Number(3));
        assert_eq!(red_3.to_string(), "[Red, 3]");

        let yellow_0 = Card::Colored(CardColor::Yellow, Face::Number(0));
        assert_eq!(yellow_0.to_string(), "[Yellow, 0]");

        let blue_9 = Card::Colored(CardColor::Blue, Face::Number(9));
        assert_eq!(blue_9.to_string(), "[Blue, 9]");
    }

    #[test]
    fn return_correct_string_for_action_cards() {
        let green_skip = Card::Colored(CardColor::Green, Face::Skip);
        assert_eq!(green_skip.to_string(), "[Green, Skip]");

        let red_reverse = Card::Colored(CardColor::Red, Face::Reverse);
        assert_eq!(red_reverse.to_string(), "[Red, Reverse]");

        let blue_draw_two = Card::Colored(CardColor::Blue, Face::DrawTwo);
        assert_eq!(blue_draw_two.to_string(), "[Blue, Draw Two]");
    }

    #[test]
    fn return_correct_string_for_wild_cards_in_hand() {
        assert_eq!(Card::Wild.to_string(), "[Special, Wild]");
        assert_eq!(Card::WildDrawFour.to_string(), "[Special, Wild Draw Four]");
    }

    #[test]
    fn return_chosen_color_for_played_wild_cards() {
        let wild = PlayedCard::Wild(CardColor::Green);
        assert_eq!(wild.to_string(), "[Green, Wild]");

        let wild_draw_four = PlayedCard::WildDrawFour(CardColor::Blue);
        assert_eq!(wild_draw_four.to_string(), "[Blue, Wild Draw Four]");
    }

    #[test]
    fn parse_color_case_insensitively() {
        assert_eq!(CardColor::from_str("red").unwrap(), CardColor::Red);
        assert_eq!(CardColor::from_str("YELLOW").unwrap(), CardColor::Yellow);
        assert_eq!(CardColor::from_str("Blue").unwrap(), CardColor::Blue);
        assert!(CardColor::from_str("purple").is_err());
    }

    #[test]
    fn accept_card_of_matching_color() {
        let top = PlayedCard::Colored(CardColor::Red, Face::Number(4));
        assert!(top.accepts(&Card::Colored(CardColor::Red, Face::Number(9))));
        assert!(top.accepts(&Card::Colored(CardColor::Red, Face::Skip)));
    }

    #[test]
    fn accept_card_of_matching_face() {
        let top = PlayedCard::Colored(CardColor::Red, Face::Number(4));
        assert!(top.accepts(&Card::Colored(CardColor::Blue, Face::Number(4))));

        let top = PlayedCard::Colored(CardColor::Green, Face::DrawTwo);
        assert!(top.accepts(&Card::Colored(CardColor::Yellow, Face::DrawTwo)));
    }

    #[test]
    fn reject_card_matching_neither_color_nor_face() {
        let top = PlayedCard::Colored(CardColor::Red, Face::Number(4));
        assert!(!top.accepts(&Card::Colored(CardColor::Blue, Face::Number(7))));
        assert!(!top.accepts(&Card::Colored(CardColor::Green, Face::Skip)));
    }

    #[test]
    fn accept_wild_cards_on_any_top() {
        let tops = [
            PlayedCard::Colored(CardColor::Red, Face::Number(0)),
            PlayedCard::Colored(CardColor::Blue, Face::Skip),
            PlayedCard::Wild(CardColor::Green),
            PlayedCard::WildDrawFour(CardColor::Yellow),
        ];
        for top in tops {
            assert!(top.accepts(&Card::Wild));
            assert!(top.accepts(&Card::WildDrawFour));
        }
    }

    #[test]
    fn match_against_chosen_color_of_played_wild() {
        let top = PlayedCard::Wild(CardColor::Green);
        assert!(top.accepts(&Card::Colored(CardColor::Green, Face::Number(2))));
        assert!(!top.accepts(&Card::Colored(CardColor::Red, Face::Number(2))));
    }

    #[test]
    fn buried_wild_loses_its_chosen_color() {
        assert_eq!(PlayedCard::Wild(CardColor::Red).into_card(), Card::Wild);
        assert_eq!(
            PlayedCard::WildDrawFour(CardColor::Blue).into_card(),
            Card::WildDrawFour
        );
        assert_eq!(
            PlayedCard::Colored(CardColor::Green, Face::Number(6)).into_card(),
            Card::Colored(CardColor::Green, Face::Number(6))
        );
    }
}
