use super::Race;

/// Terminal outcome of a campaign, set by the nightly victory checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[strum(serialize = "Luxor is dead and Morkin is dead.")]
    LuxorMorkinDead,
    #[strum(serialize = "Xajorkith has fallen and Morkin is dead.")]
    MorkinXajorkith,
    #[strum(serialize = "Ushgarak has fallen.")]
    Ushgarak,
    #[strum(serialize = "The Ice Crown has been destroyed.")]
    IceCrown,
}

impl Status {
    pub fn winner(self) -> Race {
        match self {
            Self::LuxorMorkinDead | Self::MorkinXajorkith => Race::Foul,
            Self::Ushgarak | Self::IceCrown => Race::Free,
        }
    }
}
