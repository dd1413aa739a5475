use std::fmt;

use super::Direction;

/// Stable roster identifier for one of the 32 named lords.
///
/// Ids are roster order (0..31); every deterministic iteration over the
/// roster runs in id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u8);

impl CharacterId {
    /// Luxor the Moonprince, bearer of the Moon Ring.
    pub const LUXOR: Self = Self(0);
    /// Morkin, the only lord who may carry the Moon Ring or Ice Crown.
    pub const MORKIN: Self = Self(1);
    pub const CORLETH: Self = Self(2);
    pub const ROTHRON: Self = Self(3);
    /// Fawkrin the Skulkrin, one of the Ice Crown's destroyers.
    pub const FAWKRIN: Self = Self(29);
    /// Lorgrim the Wise, one of the Ice Crown's destroyers.
    pub const LORGRIM: Self = Self(30);
    /// Farflame the Dragonlord: flies over any terrain at movement cost 1.
    pub const FARFLAME: Self = Self(31);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic identifier for a Doomguard army, allocated in spawn order and
/// never reused. Per-tile army sets order themselves by this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoomguardId(pub u32);

impl fmt::Display for DoomguardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a static guarding army in the world's garrison roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GarrisonId(pub u16);

impl GarrisonId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Discrete tile coordinates. Y increases southward. Coordinates outside the
/// map resolve to the frozen-waste sentinel when looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The tile one step away in the given compass direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
