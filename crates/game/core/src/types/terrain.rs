/// Tile terrain. Discriminants are the low-nibble values of the main map
/// byte table and must not be renumbered.
///
/// `Army` is a transient state of a plains tile while armies (or a lord with
/// soldiers) camp on it; both render as "plains".
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Feature {
    #[strum(serialize = "mountains")]
    Mountain = 0,
    #[strum(serialize = "citadel")]
    Citadel = 1,
    #[strum(serialize = "forest")]
    Forest = 2,
    #[strum(serialize = "henge")]
    Henge = 3,
    #[strum(serialize = "tower")]
    Tower = 4,
    #[strum(serialize = "village")]
    Village = 5,
    #[strum(serialize = "downs")]
    Downs = 6,
    #[strum(serialize = "keep")]
    Keep = 7,
    #[strum(serialize = "snowhall")]
    Snowhall = 8,
    #[strum(serialize = "lake")]
    Lake = 9,
    #[strum(serialize = "frozen wastes")]
    FrozenWaste = 10,
    #[strum(serialize = "ruin")]
    Ruin = 11,
    #[strum(serialize = "lith")]
    Lith = 12,
    #[strum(serialize = "cavern")]
    Cavern = 13,
    #[strum(serialize = "plains")]
    Army = 14,
    #[strum(serialize = "plains")]
    Plains = 15,
}

impl Feature {
    /// Keeps and citadels are the only tiles that can hold a guard army.
    pub fn is_stronghold(self) -> bool {
        matches!(self, Self::Keep | Self::Citadel)
    }
}

/// The item, hazard, or personage found on a tile (or carried by a lord).
/// Discriminants 0..=15 are the high-nibble values of the main map byte
/// table; 16..=19 name the Ice Crown's destroyers and only appear in
/// guidance messages.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Object {
    #[strum(serialize = "nothing")]
    Nothing = 0,
    #[strum(serialize = "wolves")]
    Wolves = 1,
    #[strum(serialize = "dragons")]
    Dragons = 2,
    #[strum(serialize = "ice trolls")]
    IceTrolls = 3,
    #[strum(serialize = "Skulkrin")]
    Skulkrin = 4,
    #[strum(serialize = "wild horses")]
    WildHorses = 5,
    #[strum(serialize = "shelter and is refreshed")]
    Shelter = 6,
    #[strum(serialize = "guidance. A voice calls, ")]
    Guidance = 7,
    #[strum(serialize = "the Shadows of Death which drain him of vigour")]
    ShadowsOfDeath = 8,
    #[strum(serialize = "the Waters of Life which fill him with vigour")]
    WatersOfLife = 9,
    #[strum(serialize = "the Hand of Dark which brings death to the day")]
    HandOfDark = 10,
    #[strum(serialize = "the Cup of Dreams which brings welcome")]
    CupOfDreams = 11,
    #[strum(serialize = "the sword Wolfslayer")]
    Wolfslayer = 12,
    #[strum(serialize = "the sword Dragonslayer")]
    Dragonslayer = 13,
    #[strum(serialize = "the Ice Crown")]
    IceCrown = 14,
    #[strum(serialize = "the Moon Ring")]
    MoonRing = 15,
    #[strum(serialize = "Fawkrin the Skulkrin")]
    Fawkrin = 16,
    #[strum(serialize = "Farflame the Dragonlord")]
    Farflame = 17,
    #[strum(serialize = "Lake Mirrow")]
    LakeMirrow = 18,
    #[strum(serialize = "Lorgrim the Wise")]
    Lorgrim = 19,
}

impl Object {
    /// Beasts can be fought and block a lord from leaving the tile.
    pub fn is_beast(self) -> bool {
        matches!(
            self,
            Self::Wolves | Self::Dragons | Self::Skulkrin | Self::IceTrolls
        )
    }

    /// The regalia only Morkin may pick up or carry alongside nothing else.
    pub fn is_regalia(self) -> bool {
        matches!(self, Self::IceCrown | Self::MoonRing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_indices_cover_the_map_nibble() {
        for raw in 0..16u8 {
            let feature = Feature::from_repr(raw).unwrap();
            assert_eq!(feature as u8, raw);
        }
        assert_eq!(Feature::FrozenWaste as u8, 10);
        assert_eq!(Feature::Plains as u8, 15);
    }

    #[test]
    fn object_indices_cover_the_map_nibble() {
        for raw in 0..16u8 {
            let object = Object::from_repr(raw).unwrap();
            assert_eq!(object as u8, raw);
        }
        assert_eq!(Object::IceCrown as u8, 14);
        assert_eq!(Object::MoonRing as u8, 15);
    }

    #[test]
    fn only_the_four_beasts_are_beasts() {
        let beasts = [
            Object::Wolves,
            Object::Dragons,
            Object::IceTrolls,
            Object::Skulkrin,
        ];
        for raw in 0..20u8 {
            let object = Object::from_repr(raw).unwrap();
            assert_eq!(object.is_beast(), beasts.contains(&object));
        }
    }

    #[test]
    fn army_tiles_render_as_plains() {
        assert_eq!(Feature::Army.to_string(), "plains");
        assert_eq!(Feature::Plains.to_string(), "plains");
    }
}
