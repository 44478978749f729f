use crate::card::{Card, CardColor, Face, PlayedCard};
use crate::ring::Seat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayAction {
    Colored(CardColor, Face),
    Wild(CardColor),
    WildDrawFour(CardColor),
}

impl PlayAction {
    pub(crate) fn hand_card(&self) -> Card {
        match self {
            PlayAction::Colored(color, face) => Card::Colored(*color, *face),
            PlayAction::Wild(_) => Card::Wild,
            PlayAction::WildDrawFour(_) => Card::WildDrawFour,
        }
    }

    pub(crate) fn played_card(&self) -> PlayedCard {
        match self {
            PlayAction::Colored(color, face) => PlayedCard::Colored(*color, *face),
            PlayAction::Wild(color) => PlayedCard::Wild(*color),
            PlayAction::WildDrawFour(color) => PlayedCard::WildDrawFour(*color),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Play(PlayAction),
    Draw,
    // Only valid while a draw decision is pending.
    Pass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingAction,
    // Only the drawn card may be played now, or the turn passed.
    DrawPending { drawn: Card },
    GameOver { winner: Seat },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played { card: PlayedCard },
    Skipped { card: PlayedCard, skipped: Seat },
    Reversed { card: PlayedCard },
    // drawn falls short when the deck and the burials are both spent.
    Penalized {
        card: PlayedCard,
        target: Seat,
        drawn: Vec<Card>,
    },
    Drew { card: Card, playable: bool },
    NothingToDraw,
    Passed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    // The seat that acted, captured before the ring moved on.
    pub actor: Seat,
    pub outcome: TurnOutcome,
    pub winner: Option<Seat>,
}
