/// The peoples of Midnight. Discriminants are the serialized table order the
/// initial rosters use.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Race {
    Foul = 0,
    Free = 1,
    Fey = 2,
    Targ = 3,
    Wise = 4,
    Morkin = 5,
    Skulkrin = 6,
    Dragon = 7,
}

impl Race {
    /// Races that ride into battle rather than march; they start dismounted.
    pub fn rides_by_nature(self) -> bool {
        !matches!(self, Self::Dragon | Self::Skulkrin)
    }

    /// Races that can break wild horses to the saddle.
    pub fn can_ride_wild_horses(self) -> bool {
        matches!(self, Self::Free | Self::Fey | Self::Targ | Self::Wise)
    }
}

/// Whether an army fights mounted or on foot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum TroopKind {
    Warriors,
    Riders,
}
