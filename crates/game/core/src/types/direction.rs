/// Eight compass directions in the fixed order the data tables and turn
/// arithmetic rely on. `turn_right`/`turn_left` rotate by one index modulo 8.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    North = 0,
    Northeast = 1,
    East = 2,
    Southeast = 3,
    South = 4,
    Southwest = 5,
    West = 6,
    Northwest = 7,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::Northeast,
        Self::East,
        Self::Southeast,
        Self::South,
        Self::Southwest,
        Self::West,
        Self::Northwest,
    ];

    /// `(dx, dy)` tile offset of one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::Northeast => (1, -1),
            Self::East => (1, 0),
            Self::Southeast => (1, 1),
            Self::South => (0, 1),
            Self::Southwest => (-1, 1),
            Self::West => (-1, 0),
            Self::Northwest => (-1, -1),
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn turn_right(self) -> Self {
        Self::from_repr((self.index() + 1) % 8).unwrap()
    }

    pub fn turn_left(self) -> Self {
        Self::from_repr((self.index() + 7) % 8).unwrap()
    }

    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_right_turns_return_to_start() {
        for start in Direction::ALL {
            let mut direction = start;
            for _ in 0..8 {
                direction = direction.turn_right();
            }
            assert_eq!(direction, start);
        }
    }

    #[test]
    fn eight_left_turns_return_to_start() {
        for start in Direction::ALL {
            let mut direction = start;
            for _ in 0..8 {
                direction = direction.turn_left();
            }
            assert_eq!(direction, start);
        }
    }

    #[test]
    fn left_turn_inverts_right_turn() {
        for direction in Direction::ALL {
            assert_eq!(direction.turn_right().turn_left(), direction);
        }
    }

    #[test]
    fn diagonals_have_both_offsets() {
        assert!(Direction::Southeast.is_diagonal());
        assert!(Direction::Northwest.is_diagonal());
        assert!(!Direction::North.is_diagonal());
        assert!(!Direction::West.is_diagonal());
    }
}
