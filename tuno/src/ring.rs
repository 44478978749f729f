use crate::player::Player;

// Seats are handed out in join order and never move, so they double as
// player identifiers.
pub type Seat = usize;

#[derive(Debug)]
pub struct PlayerRing {
    seats: Vec<Player>,
    current: Seat,
    reversed: bool,
}

impl PlayerRing {
    pub(crate) fn new(seats: Vec<Player>) -> Self {
        Self {
            seats,
            current: 0,
            reversed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn next_seat(&self) -> Seat {
        let len = self.seats.len();
        if self.reversed {
            (self.current + len - 1) % len
        } else {
            (self.current + 1) % len
        }
    }

    pub fn current(&self) -> &Player {
        &self.seats[self.current]
    }

    pub(crate) fn current_mut(&mut self) -> &mut Player {
        &mut self.seats[self.current]
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.seats.get(seat)
    }

    pub(crate) fn player_mut(&mut self, seat: Seat) -> Option<&mut Player> {
        self.seats.get_mut(seat)
    }

    pub fn players(&self) -> &[Player] {
        &self.seats
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub(crate) fn advance(&mut self) {
        self.current = self.next_seat();
    }

    // With two players the next neighbor is the same one either way.
    pub(crate) fn reverse(&mut self) {
        self.reversed = !self.reversed;
    }

    pub(crate) fn skip_next(&mut self) {
        self.advance();
        self.advance();
    }
}
