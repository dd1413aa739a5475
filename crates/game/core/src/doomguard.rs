use std::fmt;

use crate::army::Army;
use crate::types::{CharacterId, Coord, DoomguardId, Orders, Race, TroopKind};

/// What a Doomguard army's orders point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    None,
    /// Hunted lord (FOLLOW orders).
    Character(CharacterId),
    /// Destination tile (GOTO and ROUTE orders).
    Location(Coord),
}

/// A roaming foul army, moved by the night phase under one of four orders.
///
/// `move_count` is the night's spent movement; the night loop drives
/// `execute_move` until it reaches the budget, then resets it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Doomguard {
    pub id: DoomguardId,
    army: Army,
    orders: Orders,
    target: Target,
    at: Coord,
    move_count: u32,
}

impl Doomguard {
    pub fn new(
        id: DoomguardId,
        how_many: u32,
        troop: TroopKind,
        orders: Orders,
        target: Target,
        at: Coord,
    ) -> Self {
        Self {
            id,
            army: Army::new(Race::Foul, how_many, troop),
            orders,
            target,
            at,
            move_count: 0,
        }
    }

    pub fn army(&self) -> &Army {
        &self.army
    }

    pub fn army_mut(&mut self) -> &mut Army {
        &mut self.army
    }

    pub fn orders(&self) -> Orders {
        self.orders
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub(crate) fn set_target(&mut self, target: Target) {
        self.target = target;
    }

    pub fn coord(&self) -> Coord {
        self.at
    }

    pub(crate) fn set_coord(&mut self, at: Coord) {
        self.at = at;
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub(crate) fn spend_move(&mut self, cost: u32) {
        self.move_count += cost;
    }

    pub(crate) fn set_move_count(&mut self, move_count: u32) {
        self.move_count = move_count;
    }
}

impl fmt::Display for Doomguard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doomguard {} ({} at {}): {}",
            self.id, self.army, self.at, self.orders
        )?;
        match self.target {
            Target::None => Ok(()),
            Target::Character(id) => write!(f, " lord {id}"),
            Target::Location(at) => write!(f, " {at}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_itself_with_orders_and_target() {
        let doomguard = Doomguard::new(
            DoomguardId(3),
            1200,
            TroopKind::Riders,
            Orders::Route,
            Target::Location(Coord::new(29, 7)),
            Coord::new(29, 7),
        );
        assert_eq!(
            doomguard.to_string(),
            "Doomguard #3 (1200 riders at [29, 7]): Route [29, 7]"
        );
    }
}
