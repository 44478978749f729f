use tracing::{debug, warn};

use crate::card::{Card, Face, PlayedCard};
use crate::constants::{HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::discard::DiscardPile;
use crate::error::{GameError, Result};
use crate::player::Player;
use crate::ring::{PlayerRing, Seat};
use crate::turn::{PlayAction, TurnAction, TurnOutcome, TurnPhase, TurnReport};

#[derive(Debug)]
pub struct Game {
    deck: Deck,
    discard: DiscardPile,
    ring: PlayerRing,
    phase: TurnPhase,
}

impl Game {
    pub fn new(player_names: Vec<String>) -> Result<Self> {
        if player_names.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }
        if player_names.iter().any(|name| name.trim().is_empty()) {
            return Err(GameError::EmptyPlayerName);
        }

        let mut deck = Deck::new();
        deck.shuffle();

        let mut seats = Vec::with_capacity(player_names.len());
        for name in player_names {
            let mut hand = Vec::with_capacity(HAND_SIZE);
            for _ in 0..HAND_SIZE {
                hand.push(
                    deck.draw_top()
                        .expect("The deck always covers the opening deal."),
                );
            }
            seats.push(Player::new(name, hand));
        }

        let Card::Colored(color, face) = deck
            .remove_first_number()
            .expect("A full deck always keeps a number card through the opening deal.")
        else {
            panic!("Expected the starting flip to be a number card.");
        };

        let game = Game {
            deck,
            discard: DiscardPile::new(PlayedCard::Colored(color, face)),
            ring: PlayerRing::new(seats),
            phase: TurnPhase::AwaitingAction,
        };

        debug!(
            players = game.ring.len(),
            deck = game.deck.cards_count(),
            top = %game.discard.top(),
            "match dealt"
        );

        Ok(game)
    }

    // A validation error leaves the match untouched and the same player on
    // turn. An Ok report means the action was committed in full.
    pub fn play_turn(&mut self, action: TurnAction) -> Result<TurnReport> {
        match self.phase {
            TurnPhase::GameOver { .. } => Err(GameError::GameFinished),
            TurnPhase::AwaitingAction => match action {
                TurnAction::Play(play) => self.resolve_play(play),
                TurnAction::Draw => self.resolve_draw(),
                TurnAction::Pass => Err(GameError::ActionNotAllowed),
            },
            TurnPhase::DrawPending { drawn } => match action {
                TurnAction::Play(play) => {
                    if play.hand_card() != drawn {
                        return Err(GameError::NotDrawnCard);
                    }
                    self.resolve_play(play)
                }
                TurnAction::Pass => {
                    let actor = self.ring.current_seat();
                    debug!(player = self.ring.current().name(), "kept the drawn card");
                    self.phase = TurnPhase::AwaitingAction;
                    self.ring.advance();
                    Ok(TurnReport {
                        actor,
                        outcome: TurnOutcome::Passed,
                        winner: None,
                    })
                }
                TurnAction::Draw => Err(GameError::ActionNotAllowed),
            },
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn top_card(&self) -> &PlayedCard {
        self.discard.top()
    }

    pub fn current_seat(&self) -> Seat {
        self.ring.current_seat()
    }

    pub fn next_seat(&self) -> Seat {
        self.ring.next_seat()
    }

    pub fn current_player(&self) -> &Player {
        self.ring.current()
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.ring.player(seat)
    }

    pub fn player_mut(&mut self, seat: Seat) -> Option<&mut Player> {
        self.ring.player_mut(seat)
    }

    pub fn players(&self) -> &[Player] {
        self.ring.players()
    }

    pub fn deck_count(&self) -> usize {
        self.deck.cards_count()
    }

    pub fn discard_count(&self) -> usize {
        self.discard.cards_count()
    }

    fn resolve_play(&mut self, play: PlayAction) -> Result<TurnReport> {
        let actor = self.ring.current_seat();
        let hand_card = play.hand_card();

        let hand_card_index = self
            .ring
            .current()
            .card_index(&hand_card)
            .ok_or(GameError::CardNotInHand)?;
        if !self.discard.top().accepts(&hand_card) {
            return Err(GameError::IllegalMove);
        }

        // Nothing can fail past this point.
        self.ring.current_mut().remove_card(hand_card_index);
        let played = play.played_card();
        self.discard.place(played);
        debug!(player = self.ring.current().name(), card = %played, "card played");

        let outcome = match played {
            PlayedCard::Colored(_, Face::Skip) => {
                let skipped = self.ring.next_seat();
                self.ring.skip_next();
                TurnOutcome::Skipped {
                    card: played,
                    skipped,
                }
            }
            PlayedCard::Colored(_, Face::Reverse) => {
                self.ring.reverse();
                self.ring.advance();
                TurnOutcome::Reversed { card: played }
            }
            PlayedCard::Colored(_, Face::DrawTwo) => self.apply_draw_penalty(played, 2),
            PlayedCard::WildDrawFour(_) => self.apply_draw_penalty(played, 4),
            PlayedCard::Colored(_, Face::Number(_)) | PlayedCard::Wild(_) => {
                self.ring.advance();
                TurnOutcome::Played { card: played }
            }
        };

        let winner = (self
            .ring
            .player(actor)
            .expect("The acting player keeps their seat.")
            .cards_count()
            == 0)
            .then_some(actor);
        if let Some(winner) = winner {
            debug!(
                player = self
                    .ring
                    .player(winner)
                    .expect("The winner keeps their seat.")
                    .name(),
                "hand is empty; match over"
            );
        }
        self.phase = match winner {
            Some(winner) => TurnPhase::GameOver { winner },
            None => TurnPhase::AwaitingAction,
        };

        Ok(TurnReport {
            actor,
            outcome,
            winner,
        })
    }

    fn resolve_draw(&mut self) -> Result<TurnReport> {
        let actor = self.ring.current_seat();
        let drawn = self.draw_from_stock(1);
        let Some(card) = drawn.into_iter().next() else {
            // Deck and buried discard are both empty: the turn passes.
            self.ring.advance();
            return Ok(TurnReport {
                actor,
                outcome: TurnOutcome::NothingToDraw,
                winner: None,
            });
        };

        self.ring.current_mut().add_card(card);
        let playable = self.discard.top().accepts(&card);
        debug!(player = self.ring.current().name(), card = %card, playable, "card drawn");

        if playable {
            self.phase = TurnPhase::DrawPending { drawn: card };
        } else {
            self.ring.advance();
        }

        Ok(TurnReport {
            actor,
            outcome: TurnOutcome::Drew { card, playable },
            winner: None,
        })
    }

    fn apply_draw_penalty(&mut self, card: PlayedCard, count: usize) -> TurnOutcome {
        let target = self.ring.next_seat();
        let drawn = self.draw_from_stock(count);

        let receiver = self
            .ring
            .player_mut(target)
            .expect("The penalized seat always exists.");
        for card in &drawn {
            receiver.add_card(*card);
        }
        debug!(
            player = receiver.name(),
            cards = drawn.len(),
            "penalty cards drawn"
        );

        self.ring.skip_next();
        TurnOutcome::Penalized {
            card,
            target,
            drawn,
        }
    }

    // Returns fewer cards than asked when the deck and the buried discard
    // are both exhausted.
    fn draw_from_stock(&mut self, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            if let Ok(card) = self.deck.draw_top() {
                drawn.push(card);
                continue;
            }
            if !self.recycle_discard() {
                warn!(
                    missing = count - drawn.len(),
                    "deck and buried discard are both exhausted; drawing stops short"
                );
                break;
            }
            drawn.push(
                self.deck
                    .draw_top()
                    .expect("A recycled deck holds at least one card."),
            );
        }
        drawn
    }

    fn recycle_discard(&mut self) -> bool {
        let buried = self.discard.reclaim_buried();
        if buried.is_empty() {
            return false;
        }
        debug!(cards = buried.len(), "deck empty; recycling the discard pile");
        self.deck.refill(buried);
        true
    }
}
