/// The named regions of the land. Discriminants are the low six bits of the
/// reference map byte and must not be renumbered; several tiles share one
/// area, and the reference map's domain bit selects the "Domain of X"
/// phrasing.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Area {
    Nothing = 0,
    Lothoril = 1,
    Gloom = 2,
    Moon = 3,
    Mirrow = 4,
    Glorim = 5,
    Korkith = 6,
    #[strum(serialize = "the Lost")]
    Lost = 7,
    Dead = 8,
    Weird = 9,
    Ugrak = 10,
    Death = 11,
    Doom = 12,
    Despair = 13,
    Vorgath = 14,
    Ushgarak = 15,
    Ugrorn = 16,
    Kor = 17,
    Toomog = 18,
    Ogrim = 19,
    Dodrak = 20,
    Gorgrath = 21,
    Valethor = 22,
    Coroth = 23,
    Ashimar = 24,
    Ithril = 25,
    Shadows = 26,
    Blood = 27,
    Thrall = 28,
    Torkren = 29,
    Gard = 30,
    Mitharg = 31,
    #[strum(serialize = "the Moon")]
    TheMoon = 32,
    Iserath = 33,
    Shimeril = 34,
    Odrark = 35,
    Ishmalay = 36,
    Brith = 37,
    Silence = 38,
    Elenil = 39,
    Rorath = 40,
    Morning = 41,
    Thimrath = 42,
    Corelay = 43,
    Rathorn = 44,
    Lorgrim = 45,
    Lor = 46,
    Fadrath = 47,
    Droon = 48,
    Grarg = 49,
    Dreams = 50,
    Ithrorn = 51,
    Whispers = 52,
    Xajorkith = 53,
    Herath = 54,
    Kumar = 55,
    Marakith = 56,
    #[strum(serialize = "the Targ")]
    Targ = 57,
    Utarg = 58,
    Athoril = 59,
    Dregrim = 60,
    Dawn = 61,
    Trorn = 62,
    Coom = 63,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_six_bit_value_names_an_area() {
        for raw in 0..64u8 {
            let area = Area::from_repr(raw).unwrap();
            assert_eq!(area as u8, raw);
        }
    }

    #[test]
    fn article_bearing_areas_keep_their_phrasing() {
        assert_eq!(Area::Lost.to_string(), "the Lost");
        assert_eq!(Area::TheMoon.to_string(), "the Moon");
        assert_eq!(Area::Targ.to_string(), "the Targ");
        assert_eq!(Area::Ushgarak.to_string(), "Ushgarak");
    }
}
