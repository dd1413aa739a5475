//! The world aggregate.
//!
//! [`Midnight`] owns every mutable piece of the simulation: the map, the 32
//! lords, the stronghold garrisons, the roaming Doomguard, the night's
//! battles, and the injected random source. All state mutation flows through
//! its command surface (day) and its night/dawn orchestration; everything
//! else is read queries.

mod action;
mod battle;
mod night;

#[cfg(test)]
pub(crate) mod testkit;

pub use action::{ActionError, Command, CommandOutcome};

use std::collections::BTreeSet;

use crate::army::{Army, Garrison};
use crate::battle::Battle;
use crate::character::{Character, RecruitKey};
use crate::doomguard::{Doomguard, Target};
use crate::location::Location;
use crate::map::Map;
use crate::rng::RandomSource;
use crate::scenario::{Scenario, ScenarioError, WarbandOrders};
use crate::types::{
    Area, CharacterId, Coord, Courage, DoomguardId, Fear, Feature, GarrisonId, Object, Status,
};

/// The world state of one campaign.
pub struct Midnight {
    map: Map,
    rng: Box<dyn RandomSource>,
    characters: Vec<Character>,
    garrisons: Vec<Garrison>,
    doomguard: Vec<Doomguard>,
    battles: Vec<Battle>,
    day: u32,
    doom_darks_citadels: i32,
    ice_crown_destroyed: bool,
    moon_ring_controlled: bool,
    game_over: bool,
    status: Option<Status>,
    selected: CharacterId,
}

impl Midnight {
    /// Builds a fresh world from a scenario and a random source.
    pub fn new(
        scenario: &Scenario<'_>,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, ScenarioError> {
        let mut map = Map::from_tables(scenario.terrain, scenario.reference, scenario.routes)?;

        if scenario.lords.len() <= CharacterId::MORKIN.index() {
            return Err(ScenarioError::MissingPrinces);
        }

        let mut characters = Vec::with_capacity(scenario.lords.len());
        for (index, spec) in scenario.lords.iter().enumerate() {
            let at = Coord::new(spec.x, spec.y);
            if !Map::contains(at) {
                return Err(ScenarioError::LordOutOfBounds { index });
            }
            let id = CharacterId(index as u8);
            let mut lord = Character::new(
                id,
                spec.name,
                spec.title,
                spec.race,
                at,
                spec.life,
                spec.energy,
                spec.strength,
                spec.courage_base,
                RecruitKey::from_bits_retain(spec.recruiting_key),
                RecruitKey::from_bits_retain(spec.recruited_by_key),
                spec.riders,
                spec.warriors,
            );
            lord.set_direction(spec.direction);
            lord.set_on_horse(spec.mounted);
            lord.set_recruited(spec.recruited);
            lord.set_object(spec.object);
            map.location_mut(at).insert_character(id);
            characters.push(lord);
        }

        let mut garrisons = Vec::with_capacity(scenario.garrisons.len());
        for (index, spec) in scenario.garrisons.iter().enumerate() {
            let at = Coord::new(spec.x, spec.y);
            map.location_mut(at).set_guard(GarrisonId(index as u16));
            garrisons.push(Garrison {
                at,
                army: Army::new(spec.race, spec.how_many, spec.troop),
            });
        }

        let mut doomguard = Vec::with_capacity(scenario.doomguard.len());
        for (index, spec) in scenario.doomguard.iter().enumerate() {
            let target = match spec.orders {
                WarbandOrders::Follow(lord) => {
                    if lord as usize >= characters.len() {
                        return Err(ScenarioError::UnknownFollowTarget { index, lord });
                    }
                    Target::Character(CharacterId(lord))
                }
                WarbandOrders::Goto(node) | WarbandOrders::Route(node) => Target::Location(
                    map.route_node(node as usize)
                        .ok_or(ScenarioError::UnknownRouteTarget { index, node })?,
                ),
                WarbandOrders::Wander => Target::None,
            };
            let orders = match spec.orders {
                WarbandOrders::Follow(_) => crate::types::Orders::Follow,
                WarbandOrders::Goto(_) => crate::types::Orders::Goto,
                WarbandOrders::Route(_) => crate::types::Orders::Route,
                WarbandOrders::Wander => crate::types::Orders::Wander,
            };
            let id = DoomguardId(index as u32);
            let at = Coord::new(spec.x, spec.y);
            map.location_mut(at).insert_army(id);
            doomguard.push(Doomguard::new(id, spec.how_many, spec.troop, orders, target, at));
        }

        let mut world = Self {
            map,
            rng,
            characters,
            garrisons,
            doomguard,
            battles: Vec::new(),
            day: 0,
            doom_darks_citadels: 0,
            ice_crown_destroyed: false,
            moon_ring_controlled: true,
            game_over: false,
            status: None,
            selected: CharacterId::LUXOR,
        };
        for index in 0..world.characters.len() {
            world.refresh_tile(world.characters[index].coord());
        }
        for index in 0..world.doomguard.len() {
            world.refresh_tile(world.doomguard[index].coord());
        }
        Ok(world)
    }

    // ========================================================================
    // Read queries
    // ========================================================================

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn location(&self, at: Coord) -> &Location {
        self.map.location(at)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn character(&self, id: CharacterId) -> &Character {
        &self.characters[id.index()]
    }

    pub(crate) fn character_mut(&mut self, id: CharacterId) -> &mut Character {
        &mut self.characters[id.index()]
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn garrison(&self, id: GarrisonId) -> &Garrison {
        &self.garrisons[id.index()]
    }

    pub fn garrisons(&self) -> &[Garrison] {
        &self.garrisons
    }

    pub fn doomguard(&self) -> &[Doomguard] {
        &self.doomguard
    }

    /// The guard army on a tile, if any.
    pub fn guard_at(&self, at: Coord) -> Option<&Army> {
        let id = self.map.location(at).guard()?;
        Some(&self.garrisons[id.index()].army)
    }

    /// Last night's battles, in the order they were mustered.
    pub fn battles(&self) -> &[Battle] {
        &self.battles
    }

    /// The distinct regions that saw battle last night.
    pub fn battle_domains(&self) -> BTreeSet<Area> {
        self.battles
            .iter()
            .map(|battle| self.map.location(battle.location()).area())
            .collect()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn doom_darks_citadels(&self) -> i32 {
        self.doom_darks_citadels
    }

    pub fn is_moon_ring_controlled(&self) -> bool {
        self.moon_ring_controlled
    }

    pub fn is_ice_crown_destroyed(&self) -> bool {
        self.ice_crown_destroyed
    }

    /// The lord commands currently apply to.
    pub fn selected(&self) -> CharacterId {
        self.selected
    }

    /// Luxor and Morkin answer always; any other lord only once recruited and
    /// while the Moon Ring is controlled.
    pub fn is_controllable(&self, id: CharacterId) -> bool {
        if id == CharacterId::LUXOR || id == CharacterId::MORKIN {
            return true;
        }
        self.character(id).is_recruited() && self.moon_ring_controlled
    }

    // ========================================================================
    // The ice fear
    // ========================================================================

    /// The ice fear gripping a tile. Strongest on Morkin's own tile (scaled
    /// by his distance from the Tower of Despair), otherwise fed by the
    /// princes' peril and the Doomdark citadel score.
    pub fn ice_fear(&self, at: Coord) -> i32 {
        let morkin = self.character(CharacterId::MORKIN);
        let mut fear;
        if morkin.is_alive() {
            if Map::distance(at, morkin.coord()) == 0 {
                return 0x1ff - Map::distance(at, Map::TOWER_OF_DESPAIR) * 4;
            }
            fear = Map::distance(morkin.coord(), Map::TOWER_OF_DESPAIR);
        } else {
            fear = 0x7f;
        }

        let luxor = self.character(CharacterId::LUXOR);
        fear += if luxor.is_alive() {
            Map::distance(at, luxor.coord())
        } else {
            0x7f
        };

        fear += 0x30;
        fear += self.doom_darks_citadels;
        fear
    }

    pub fn describe_fear(&self, at: Coord) -> Fear {
        Fear::from_index(7 - self.ice_fear(at) / 0x40)
    }

    /// A lord's courage after the ice fear has eaten into his base.
    pub fn courage(&self, id: CharacterId) -> Courage {
        let lord = self.character(id);
        let nerve = lord.courage_base() - self.ice_fear(lord.coord()) / 7;
        Courage::from_index(nerve / 8)
    }

    // ========================================================================
    // Flavor queries
    // ========================================================================

    /// The guidance voice: where a random lord is to be sought, or who can
    /// destroy the Ice Crown.
    pub fn guidance(&mut self) -> String {
        let roll = self.rng.random(32) as usize;
        if roll >= 4 {
            let lord = &self.characters[roll % self.characters.len()];
            format!(
                "guidance. A voice says: 'Looking for {} you must seek {}'",
                lord.title,
                self.map.location(lord.coord())
            )
        } else {
            let who = Object::from_repr(16 + roll as u8).unwrap();
            format!("guidance. A voice says: '{who} can destroy the Ice Crown'")
        }
    }

    /// A lord's account of last night's battle, if he stood in one.
    pub fn describe_battle(&self, id: CharacterId) -> Option<String> {
        let lord = self.character(id);
        let at = lord.battle()?;
        let battle = self.battles.iter().find(|battle| battle.location() == at)?;

        let mut account = format!("In the battle of {} ", self.map.location(at).area());
        let riders_lost = lord.riders().casualties();
        let warriors_lost = lord.warriors().casualties();
        if riders_lost != 0 || warriors_lost != 0 {
            account.push_str(&format!("{} lost ", lord.name));
            if riders_lost != 0 {
                account.push_str(&format!("{riders_lost} riders"));
            }
            if riders_lost != 0 && warriors_lost != 0 {
                account.push_str(" and ");
            }
            if warriors_lost != 0 {
                account.push_str(&format!("{warriors_lost} warriors"));
            }
            account.push_str(". ");
        }

        account.push_str(&format!(
            "{} alone slew {} of the Enemy. ",
            lord.name,
            lord.enemy_killed()
        ));
        if lord.riders().enemy_killed() != 0 {
            account.push_str(&format!(
                "His riders killed {} of the enemy. ",
                lord.riders().enemy_killed()
            ));
        }
        if lord.warriors().enemy_killed() != 0 {
            account.push_str(&format!(
                "His warriors killed {} of the enemy. ",
                lord.warriors().enemy_killed()
            ));
        }

        match battle.winner() {
            Some(winner) => account.push_str(&format!("Victory went to the {winner}!")),
            None => account.push_str("The battle continues!"),
        }
        Some(account)
    }

    // ========================================================================
    // Occupancy plumbing
    // ========================================================================

    /// Re-derives the PLAINS/ARMY face of a tile from its occupants: plains
    /// become an army tile while any army, or any lord with soldiers, camps
    /// there.
    pub(crate) fn refresh_tile(&mut self, at: Coord) {
        if !Map::contains(at) {
            return;
        }
        let occupied = {
            let tile = self.map.location(at);
            !tile.armies().is_empty()
                || tile
                    .characters()
                    .iter()
                    .any(|&id| self.characters[id.index()].has_soldiers())
        };
        let tile = self.map.location_mut(at);
        match tile.feature() {
            Feature::Plains if occupied => tile.set_feature(Feature::Army),
            Feature::Army if !occupied => tile.set_feature(Feature::Plains),
            _ => {}
        }
    }

    pub(crate) fn move_character(&mut self, id: CharacterId, to: Coord) {
        let from = self.characters[id.index()].coord();
        self.map.location_mut(from).remove_character(id);
        self.characters[id.index()].set_coord(to);
        self.map.location_mut(to).insert_character(id);
        self.refresh_tile(from);
        self.refresh_tile(to);
    }

    pub(crate) fn move_doomguard(&mut self, index: usize, to: Coord) {
        let id = self.doomguard[index].id;
        let from = self.doomguard[index].coord();
        self.map.location_mut(from).remove_army(id);
        self.doomguard[index].set_coord(to);
        self.map.location_mut(to).insert_army(id);
        self.refresh_tile(from);
        self.refresh_tile(to);
    }

    pub(crate) fn doomguard_index(&self, id: DoomguardId) -> Option<usize> {
        self.doomguard.iter().position(|army| army.id == id)
    }

    /// A drained Doomguard army leaves its tile and the world.
    pub(crate) fn remove_doomguard(&mut self, id: DoomguardId) {
        if let Some(index) = self.doomguard_index(id) {
            let at = self.doomguard[index].coord();
            self.map.location_mut(at).remove_army(id);
            self.doomguard.remove(index);
            self.refresh_tile(at);
        }
    }

    pub(crate) fn random(&mut self, bound: u32) -> u32 {
        self.rng.random(bound)
    }

    pub(crate) fn set_game_over(&mut self, status: Status) {
        self.game_over = true;
        self.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::RouteNode;
    use crate::rng::FixedRandom;
    use crate::scenario::{WarbandOrders, WarbandSpec};
    use crate::types::{Direction, Race, TroopKind};
    use crate::world::testkit::WorldBuilder;

    const LUXOR: CharacterId = CharacterId::LUXOR;
    const MORKIN: CharacterId = CharacterId::MORKIN;

    #[test]
    fn ice_fear_peaks_on_morkins_own_tile() {
        let world = WorldBuilder::new()
            .edit_lord(MORKIN, |spec| {
                spec.x = Map::TOWER_OF_DESPAIR.x;
                spec.y = Map::TOWER_OF_DESPAIR.y;
            })
            .build(Box::new(FixedRandom(0)));
        assert_eq!(world.ice_fear(Map::TOWER_OF_DESPAIR), 0x1ff);

        let world = WorldBuilder::new()
            .edit_lord(MORKIN, |spec| {
                spec.x = Map::TOWER_OF_DESPAIR.x;
                spec.y = Map::TOWER_OF_DESPAIR.y + 1;
            })
            .build(Box::new(FixedRandom(0)));
        assert_eq!(
            world.ice_fear(Coord::new(Map::TOWER_OF_DESPAIR.x, Map::TOWER_OF_DESPAIR.y + 1)),
            0x1ff - 4
        );
    }

    #[test]
    fn dead_princes_feed_the_fear() {
        let mut world = WorldBuilder::new().build(Box::new(FixedRandom(0)));
        let at = Coord::new(30, 30);
        let with_both = world.ice_fear(at);
        world.character_mut(LUXOR).die();
        world.character_mut(MORKIN).die();
        // Each dead prince contributes the flat 0x7f term.
        assert_eq!(world.ice_fear(at), 0x7f + 0x7f + 0x30);
        assert!(world.ice_fear(at) > with_both);
    }

    #[test]
    fn courage_wilts_as_the_fear_mounts() {
        // Both princes stand on the same tile, so both feel Morkin's own
        // 311-point fear; only Morkin's iron nerve shrugs it off.
        let world = WorldBuilder::new().build(Box::new(FixedRandom(0)));
        assert_eq!(world.courage(MORKIN), Courage::UtterlyBold);
        assert_eq!(world.courage(LUXOR), Courage::SlightlyAfraid);
        assert!(world.courage(LUXOR) < world.courage(MORKIN));
    }

    #[test]
    fn the_fear_reads_on_the_cold_ladder() {
        let world = WorldBuilder::new()
            .edit_lord(MORKIN, |spec| {
                spec.x = 26;
                spec.y = 4;
            })
            .build(Box::new(FixedRandom(0)));
        assert_eq!(world.describe_fear(Coord::new(26, 4)), Fear::UtterlyCold);
    }

    #[test]
    fn battle_domains_deduplicate_by_region() {
        let world = WorldBuilder::new().build(Box::new(FixedRandom(0)));
        assert!(world.battle_domains().is_empty());
    }

    #[test]
    fn the_guidance_voice_names_a_destroyer_or_a_lord() {
        let mut world = WorldBuilder::new().build(Box::new(FixedRandom(1)));
        assert_eq!(
            world.guidance(),
            "guidance. A voice says: 'Farflame the Dragonlord can destroy the Ice Crown'"
        );

        let mut world = WorldBuilder::new().build(Box::new(FixedRandom(31)));
        // Index 31 folds onto the two-lord roster: 31 % 2 names Morkin.
        assert_eq!(
            world.guidance(),
            "guidance. A voice says: 'Looking for Morkin you must seek the Plains of Nothing'"
        );
    }

    #[test]
    fn a_scenario_without_the_princes_is_rejected() {
        let size = (Map::WIDTH * Map::HEIGHT) as usize;
        let terrain = vec![Feature::Plains as u8; size];
        let reference = vec![0u8; size];
        let scenario = Scenario {
            terrain: &terrain,
            reference: &reference,
            routes: &[],
            lords: &[],
            garrisons: &[],
            doomguard: &[],
        };
        let result = Midnight::new(&scenario, Box::new(FixedRandom(0)));
        assert!(matches!(result, Err(ScenarioError::MissingPrinces)));
    }

    #[test]
    fn a_doomguard_following_a_ghost_is_rejected() {
        let size = (Map::WIDTH * Map::HEIGHT) as usize;
        let terrain = vec![Feature::Plains as u8; size];
        let reference = vec![0u8; size];
        let lords = [
            crate::world::testkit::lord("Luxor", Race::Free, 12, 40),
            crate::world::testkit::lord("Morkin", Race::Morkin, 12, 40),
        ];
        let doomguard = [WarbandSpec {
            x: 20,
            y: 20,
            how_many: 100,
            troop: TroopKind::Riders,
            orders: WarbandOrders::Follow(9),
        }];
        let scenario = Scenario {
            terrain: &terrain,
            reference: &reference,
            routes: &[],
            lords: &lords,
            garrisons: &[],
            doomguard: &doomguard,
        };
        let result = Midnight::new(&scenario, Box::new(FixedRandom(0)));
        assert!(matches!(
            result,
            Err(ScenarioError::UnknownFollowTarget { lord: 9, .. })
        ));
    }

    #[test]
    fn lords_with_soldiers_raise_the_army_banner_over_plains() {
        let world = WorldBuilder::new()
            .edit_lord(LUXOR, |spec| spec.riders = 500)
            .build(Box::new(FixedRandom(0)));
        assert_eq!(
            world.location(Coord::new(12, 40)).feature(),
            Feature::Army
        );

        let world = WorldBuilder::new().build(Box::new(FixedRandom(0)));
        assert_eq!(
            world.location(Coord::new(12, 40)).feature(),
            Feature::Plains
        );
    }

    #[test]
    fn route_nodes_are_born_special() {
        let world = WorldBuilder::new()
            .route(RouteNode::new(10, 10, 0, 0))
            .build(Box::new(FixedRandom(0)));
        assert!(world.location(Coord::new(10, 10)).is_special());
        assert_eq!(world.map().node_index(Coord::new(10, 10)), Some(0));
    }

    #[test]
    fn selection_starts_with_luxor_facing_his_road() {
        let world = WorldBuilder::new().build(Box::new(FixedRandom(0)));
        assert_eq!(world.selected(), LUXOR);
        assert_eq!(world.character(LUXOR).direction(), Direction::Southeast);
        assert_eq!(world.character(LUXOR).race(), Race::Free);
    }
}
