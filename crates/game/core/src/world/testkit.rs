//! Miniature worlds for the engine tests.
//!
//! A [`WorldBuilder`] starts from an empty all-plains map holding only Luxor
//! and Morkin, and lets a test pin exactly the tiles, lords, and armies the
//! scenario under test needs.

use crate::map::{Map, RouteNode};
use crate::rng::RandomSource;
use crate::scenario::{GarrisonSpec, LordSpec, Scenario, WarbandSpec};
use crate::types::{CharacterId, Coord, Direction, Feature, Object, Race};

use super::Midnight;

/// Replays a scripted list of draws, clamping each to the requested bound;
/// runs of zeros follow once the script is spent.
pub struct ScriptedRandom {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn random(&mut self, bound: u32) -> u32 {
        let value = self.values.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        if bound == 0 { 0 } else { value.min(bound - 1) }
    }
}

/// A lord sheet with unremarkable defaults.
pub fn lord(name: &'static str, race: Race, x: i32, y: i32) -> LordSpec {
    LordSpec {
        name,
        title: name,
        race,
        x,
        y,
        life: 180,
        energy: 127,
        strength: 25,
        courage_base: 80,
        recruiting_key: 0x17,
        recruited_by_key: 0x01,
        riders: 0,
        warriors: 0,
        direction: Direction::Southeast,
        mounted: true,
        recruited: true,
        object: Object::Nothing,
    }
}

pub struct WorldBuilder {
    terrain: Vec<u8>,
    reference: Vec<u8>,
    routes: Vec<RouteNode>,
    lords: Vec<LordSpec>,
    garrisons: Vec<GarrisonSpec>,
    doomguard: Vec<WarbandSpec>,
}

impl WorldBuilder {
    /// An open-plains world holding Luxor (id 0) and Morkin (id 1) at their
    /// canonical start.
    pub fn new() -> Self {
        let size = (Map::WIDTH * Map::HEIGHT) as usize;
        let luxor = lord("Luxor", Race::Free, 12, 40);
        let mut morkin = lord("Morkin", Race::Morkin, 12, 40);
        morkin.strength = 5;
        morkin.courage_base = 127;
        Self {
            terrain: vec![Feature::Plains as u8; size],
            reference: vec![0; size],
            routes: Vec::new(),
            lords: vec![luxor, morkin],
            garrisons: Vec::new(),
            doomguard: Vec::new(),
        }
    }

    fn index(at: Coord) -> usize {
        (at.y * Map::WIDTH + at.x) as usize
    }

    pub fn feature(mut self, at: Coord, feature: Feature) -> Self {
        let i = Self::index(at);
        self.terrain[i] = (self.terrain[i] & 0xf0) | feature as u8;
        self
    }

    pub fn object(mut self, at: Coord, object: Object) -> Self {
        let i = Self::index(at);
        self.terrain[i] = (self.terrain[i] & 0x0f) | ((object as u8) << 4);
        self
    }

    pub fn special(mut self, at: Coord) -> Self {
        self.reference[Self::index(at)] |= 0x80;
        self
    }

    pub fn route(mut self, node: RouteNode) -> Self {
        // Route nodes carry the special bit, as in the shipped tables.
        self.reference[Self::index(node.coord())] |= 0x80;
        self.routes.push(node);
        self
    }

    pub fn lord(mut self, spec: LordSpec) -> Self {
        self.lords.push(spec);
        self
    }

    pub fn edit_lord(mut self, id: CharacterId, edit: impl FnOnce(&mut LordSpec)) -> Self {
        edit(&mut self.lords[id.index()]);
        self
    }

    pub fn garrison(mut self, spec: GarrisonSpec) -> Self {
        self.garrisons.push(spec);
        self
    }

    pub fn doomguard(mut self, spec: WarbandSpec) -> Self {
        self.doomguard.push(spec);
        self
    }

    pub fn build(self, rng: Box<dyn RandomSource>) -> Midnight {
        let scenario = Scenario {
            terrain: &self.terrain,
            reference: &self.reference,
            routes: &self.routes,
            lords: &self.lords,
            garrisons: &self.garrisons,
            doomguard: &self.doomguard,
        };
        Midnight::new(&scenario, rng).expect("test scenario is well-formed")
    }
}
