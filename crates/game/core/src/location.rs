use std::collections::BTreeSet;
use std::fmt;

use crate::types::{Area, CharacterId, Coord, DoomguardId, Feature, GarrisonId, Object};

/// Mutable per-tile state.
///
/// Occupants are held as id sets ordered by id, so every iteration over a
/// tile's lords or armies is deterministic. The world owns the entities and
/// keeps these sets consistent with each unit's own coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    at: Coord,
    feature: Feature,
    object: Object,
    area: Area,
    domain: bool,
    special: bool,
    guard: Option<GarrisonId>,
    characters: BTreeSet<CharacterId>,
    armies: BTreeSet<DoomguardId>,
}

impl Location {
    pub fn new(
        at: Coord,
        feature: Feature,
        object: Object,
        area: Area,
        domain: bool,
        special: bool,
    ) -> Self {
        Self {
            at,
            feature,
            object,
            area,
            domain,
            special,
            guard: None,
            characters: BTreeSet::new(),
            armies: BTreeSet::new(),
        }
    }

    /// The impassable border sentinel returned for out-of-map queries.
    /// It carries no state and accepts no occupants.
    pub fn frozen_waste() -> Self {
        Self::new(
            Coord::new(-1, -1),
            Feature::FrozenWaste,
            Object::Nothing,
            Area::Nothing,
            false,
            false,
        )
    }

    pub fn coord(&self) -> Coord {
        self.at
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub(crate) fn set_feature(&mut self, feature: Feature) {
        self.feature = feature;
    }

    pub fn object(&self) -> Object {
        self.object
    }

    pub fn set_object(&mut self, object: Object) {
        self.object = object;
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn domain_flag(&self) -> bool {
        self.domain
    }

    /// Scratch bit set during night processing to pull Doomguard movement
    /// toward interesting tiles; permanently set on route nodes.
    pub fn is_special(&self) -> bool {
        self.special
    }

    pub fn set_special(&mut self, special: bool) {
        self.special = special;
    }

    pub fn guard(&self) -> Option<GarrisonId> {
        self.guard
    }

    /// Only keeps and citadels hold a guard; elsewhere this is silently
    /// ignored.
    pub fn set_guard(&mut self, guard: GarrisonId) {
        if self.feature.is_stronghold() {
            self.guard = Some(guard);
        }
    }

    pub fn characters(&self) -> &BTreeSet<CharacterId> {
        &self.characters
    }

    pub fn armies(&self) -> &BTreeSet<DoomguardId> {
        &self.armies
    }

    pub(crate) fn insert_character(&mut self, id: CharacterId) {
        self.characters.insert(id);
    }

    pub(crate) fn remove_character(&mut self, id: CharacterId) {
        self.characters.remove(&id);
    }

    pub(crate) fn insert_army(&mut self, id: DoomguardId) {
        self.armies.insert(id);
    }

    pub(crate) fn remove_army(&mut self, id: DoomguardId) {
        self.armies.remove(&id);
    }
}

fn capitalized(feature: Feature) -> String {
    let name = feature.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => name,
    }
}

fn article(feature: Feature) -> &'static str {
    match feature {
        Feature::Mountain
        | Feature::Downs
        | Feature::FrozenWaste
        | Feature::Army
        | Feature::Plains => "",
        _ => "a ",
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.domain {
            return write!(
                f,
                "{}{} in the Domain of {}",
                article(self.feature),
                self.feature,
                self.area
            );
        }
        match self.feature {
            Feature::Henge => write!(f, "{}Henge", self.area),
            Feature::Lake => write!(f, "Lake {}", self.area),
            Feature::FrozenWaste => write!(f, "the Frozen Wastes"),
            _ => write!(f, "the {} of {}", capitalized(self.feature), self.area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_only_settles_in_strongholds() {
        let mut keep = Location::new(
            Coord::new(3, 4),
            Feature::Keep,
            Object::Nothing,
            Area::Gard,
            false,
            false,
        );
        keep.set_guard(GarrisonId(7));
        assert_eq!(keep.guard(), Some(GarrisonId(7)));

        let mut plains = Location::new(
            Coord::new(3, 5),
            Feature::Plains,
            Object::Nothing,
            Area::Gard,
            true,
            false,
        );
        plains.set_guard(GarrisonId(7));
        assert_eq!(plains.guard(), None);
    }

    #[test]
    fn names_follow_feature_and_domain() {
        let citadel = Location::new(
            Coord::new(29, 7),
            Feature::Citadel,
            Object::Nothing,
            Area::Ushgarak,
            false,
            false,
        );
        assert_eq!(citadel.to_string(), "the Citadel of Ushgarak");

        let lake = Location::new(
            Coord::new(9, 17),
            Feature::Lake,
            Object::Nothing,
            Area::Mirrow,
            false,
            false,
        );
        assert_eq!(lake.to_string(), "Lake Mirrow");

        let henge = Location::new(
            Coord::new(20, 20),
            Feature::Henge,
            Object::Nothing,
            Area::TheMoon,
            false,
            false,
        );
        assert_eq!(henge.to_string(), "the MoonHenge");

        let wilds = Location::new(
            Coord::new(5, 5),
            Feature::Mountain,
            Object::Nothing,
            Area::Despair,
            true,
            false,
        );
        assert_eq!(wilds.to_string(), "mountains in the Domain of Despair");

        assert_eq!(Location::frozen_waste().to_string(), "the Frozen Wastes");
    }
}
