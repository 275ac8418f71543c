#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Whose turn it is, over a fixed ring of seats.
///
/// Seats never move; reversing play only flips `direction`, so a King costs O(1)
/// and never has to look a player up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnOrder {
    seats: usize,
    current: usize,
    direction: Direction,
}

impl TurnOrder {
    pub fn new(seats: usize) -> Self {
        assert!(seats > 0, "Turn order needs at least one seat");
        Self {
            seats,
            current: 0,
            direction: Direction::Clockwise,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn seat_after(&self, seat: usize) -> usize {
        match self.direction {
            Direction::Clockwise => (seat + 1) % self.seats,
            Direction::CounterClockwise => (seat + self.seats - 1) % self.seats,
        }
    }

    pub fn next_seat(&self) -> usize {
        self.seat_after(self.current)
    }

    pub fn advance(&mut self) {
        self.current = self.next_seat();
    }

    /// Flips direction and hands the turn to whoever was next before the flip.
    pub fn reverse(&mut self) {
        let next_up = self.next_seat();
        self.direction = self.direction.flipped();
        self.current = next_up;
    }

    /// Seats in playing order, starting with the current one.
    pub fn play_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.seats);
        let mut seat = self.current;
        for _ in 0..self.seats {
            order.push(seat);
            seat = self.seat_after(seat);
        }
        order
    }
}
