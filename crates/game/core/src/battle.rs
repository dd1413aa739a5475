use crate::types::{CharacterId, Coord, DoomguardId, GarrisonId, Race};

/// Handle to one army standing in a battle.
///
/// Sides hold handles rather than the armies themselves: the same army may
/// be a stronghold guard, a lord's own soldiers, or a Doomguard, and the
/// world resolves a handle to the single live copy when blows land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForceRef {
    Guard(GarrisonId),
    Riders(CharacterId),
    Warriors(CharacterId),
    Doomguard(DoomguardId),
}

/// A night's skirmish at one contested tile.
///
/// Mustered by the night phase for every tile where free lords or armies
/// share ground with the foul; run once, leaving per-army casualty and kill
/// tallies behind for the dawn reports.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battle {
    pub(crate) at: Coord,
    pub(crate) characters: Vec<CharacterId>,
    pub(crate) free: Vec<ForceRef>,
    pub(crate) foul: Vec<ForceRef>,
    pub(crate) winner: Option<Race>,
}

impl Battle {
    pub(crate) fn new(at: Coord) -> Self {
        Self {
            at,
            characters: Vec::new(),
            free: Vec::new(),
            foul: Vec::new(),
            winner: None,
        }
    }

    pub fn location(&self) -> Coord {
        self.at
    }

    /// The lords who stood on the free side.
    pub fn characters(&self) -> &[CharacterId] {
        &self.characters
    }

    pub fn free_forces(&self) -> &[ForceRef] {
        &self.free
    }

    pub fn foul_forces(&self) -> &[ForceRef] {
        &self.foul
    }

    /// `None` while both sides still stand: the battle continues.
    pub fn winner(&self) -> Option<Race> {
        self.winner
    }
}
