//! Ordered description ladders.
//!
//! Condition, courage, and fear are eight-rung ladders indexed by small
//! integers derived from unit state. Each exposes a clamped lookup and a
//! total order on the ordinal, so "less tired than" and "braver than"
//! comparisons read directly.

/// How tired a unit is; derived from energy as `energy >> 4`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Condition {
    #[strum(serialize = "utterly tired and cannot continue")]
    UtterlyTired = 0,
    #[strum(serialize = "very tired")]
    VeryTired = 1,
    #[strum(serialize = "tired")]
    Tired = 2,
    #[strum(serialize = "quite tired")]
    QuiteTired = 3,
    #[strum(serialize = "slightly tired")]
    SlightlyTired = 4,
    #[strum(serialize = "invigorated")]
    Invigorated = 5,
    #[strum(serialize = "very invigorated")]
    VeryInvigorated = 6,
    #[strum(serialize = "utterly invigorated")]
    UtterlyInvigorated = 7,
}

impl Condition {
    /// Ladder rung for a unit with the given energy (0..=127).
    pub fn from_energy(energy: u8) -> Self {
        Self::from_repr(energy >> 4).unwrap_or(Self::UtterlyInvigorated)
    }
}

/// How brave a lord feels once the ice fear has gnawed at his base courage.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Courage {
    #[strum(serialize = "utterly afraid")]
    UtterlyAfraid = 0,
    #[strum(serialize = "very afraid")]
    VeryAfraid = 1,
    #[strum(serialize = "afraid")]
    Afraid = 2,
    #[strum(serialize = "quite afraid")]
    QuiteAfraid = 3,
    #[strum(serialize = "slightly afraid")]
    SlightlyAfraid = 4,
    #[strum(serialize = "bold")]
    Bold = 5,
    #[strum(serialize = "very bold")]
    VeryBold = 6,
    #[strum(serialize = "utterly bold")]
    UtterlyBold = 7,
}

impl Courage {
    /// Clamped ladder lookup; indices below the ladder read as utterly
    /// afraid, above as utterly bold.
    pub fn from_index(index: i32) -> Self {
        Self::from_repr(index.clamp(0, 7) as u8).unwrap()
    }
}

/// How strongly the ice fear grips a tile, coldest first.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Fear {
    #[strum(serialize = "utterly cold")]
    UtterlyCold = 0,
    #[strum(serialize = "very cold")]
    VeryCold = 1,
    #[strum(serialize = "cold")]
    Cold = 2,
    #[strum(serialize = "quite cold")]
    QuiteCold = 3,
    #[strum(serialize = "slightly cold")]
    SlightlyCold = 4,
    #[strum(serialize = "mild")]
    Mild = 5,
    #[strum(serialize = "very mild")]
    VeryMild = 6,
    #[strum(serialize = "utterly mild")]
    UtterlyMild = 7,
}

impl Fear {
    /// Clamped ladder lookup.
    pub fn from_index(index: i32) -> Self {
        Self::from_repr(index.clamp(0, 7) as u8).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_tracks_energy_sixteens() {
        assert_eq!(Condition::from_energy(0), Condition::UtterlyTired);
        assert_eq!(Condition::from_energy(15), Condition::UtterlyTired);
        assert_eq!(Condition::from_energy(16), Condition::VeryTired);
        assert_eq!(Condition::from_energy(127), Condition::UtterlyInvigorated);
    }

    #[test]
    fn courage_lookup_clamps_to_the_ladder() {
        assert_eq!(Courage::from_index(-3), Courage::UtterlyAfraid);
        assert_eq!(Courage::from_index(0), Courage::UtterlyAfraid);
        assert_eq!(Courage::from_index(5), Courage::Bold);
        assert_eq!(Courage::from_index(40), Courage::UtterlyBold);
    }

    #[test]
    fn ladders_order_by_ordinal() {
        assert!(Condition::VeryTired < Condition::Invigorated);
        assert!(Courage::UtterlyAfraid < Courage::Bold);
        assert!(Fear::UtterlyCold < Fear::UtterlyMild);
    }
}
