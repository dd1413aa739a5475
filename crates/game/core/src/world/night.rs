//! Night and dawn orchestration.
//!
//! At nightfall the world checks the special victory conditions, advances
//! the day, re-scores the Doomdark citadels, marks every tile the free side
//! holds as interesting, marches the Doomguard, musters a battle at every
//! contested tile, and runs them all. Dawn then resets the lords for a new
//! day of commands.

use tracing::{debug, trace};

use crate::config::Rules;
use crate::doomguard::Target;
use crate::map::Map;
use crate::types::{CharacterId, Coord, Direction, Feature, Object, Orders, Race, Status, TroopKind};

use super::Midnight;

impl Midnight {
    /// Ends the day: victory checks, then the world's own move.
    pub fn night(&mut self) {
        self.check_special_conditions();
        if !self.game_over {
            self.day += 1;
            debug!(day = self.day, "night falls");
            self.calc_doom_darks_citadels();
            self.night_activity();
        }
    }

    /// A new day breaks for every lord.
    pub fn dawn(&mut self) {
        for lord in &mut self.characters {
            lord.dawn();
        }
    }

    fn check_special_conditions(&mut self) {
        let luxor = self.character(CharacterId::LUXOR);
        if !luxor.is_alive() && luxor.object() == Object::MoonRing {
            self.drop_carried(CharacterId::LUXOR);
            self.moon_ring_controlled = false;
        }

        let morkin = self.character(CharacterId::MORKIN);
        if morkin.is_alive() {
            if morkin.object() == Object::MoonRing {
                self.moon_ring_controlled = true;
            } else if morkin.object() == Object::IceCrown {
                let at = morkin.coord();
                let with_destroyer = [
                    CharacterId::FAWKRIN,
                    CharacterId::LORGRIM,
                    CharacterId::FARFLAME,
                ]
                .iter()
                .any(|&id| {
                    self.characters
                        .get(id.index())
                        .is_some_and(|lord| lord.coord() == at)
                });
                if at == Map::LAKE_MIRROW || with_destroyer {
                    self.ice_crown_destroyed = true;
                }
            }
        }

        self.check_game_over();
    }

    fn check_game_over(&mut self) {
        let luxor_alive = self.character(CharacterId::LUXOR).is_alive();
        let morkin_alive = self.character(CharacterId::MORKIN).is_alive();

        if !morkin_alive {
            if !luxor_alive {
                self.set_game_over(Status::LuxorMorkinDead);
            } else if self
                .guard_at(Map::XAJORKITH)
                .is_some_and(|guard| guard.race() == Race::Foul)
            {
                self.set_game_over(Status::MorkinXajorkith);
            }
        }
        if self
            .guard_at(Map::USHGARAK)
            .is_some_and(|guard| guard.race() == Race::Free)
        {
            self.set_game_over(Status::Ushgarak);
        } else if self.ice_crown_destroyed {
            self.set_game_over(Status::IceCrown);
        }

        if self.game_over {
            debug!(status = ?self.status, "game over");
        }
    }

    /// Doomdark's strength waxes with every citadel and keep his armies hold.
    fn calc_doom_darks_citadels(&mut self) {
        let mut score = 0;
        for garrison in &self.garrisons {
            if garrison.army.race() == Race::Foul {
                score += if self.map.location(garrison.at).feature() == Feature::Citadel {
                    5
                } else {
                    2
                };
            }
        }
        self.doom_darks_citadels = score;
    }

    fn night_activity(&mut self) {
        self.battles.clear();

        // Overnight recovery, battle-record reset, and marking every tile a
        // standing lord holds.
        for index in 0..self.characters.len() {
            let (visible, at, hours) = {
                let lord = &self.characters[index];
                (
                    lord.is_alive() && !lord.is_hidden(),
                    lord.coord(),
                    lord.time().hours(),
                )
            };
            self.characters[index].increment_energy(hours as i32 / 2);
            if visible {
                self.map.location_mut(at).set_special(true);
                let lord = &mut self.characters[index];
                lord.set_battle(None);
                lord.set_enemy_killed(0);
                lord.riders_mut().set_casualties(0);
                lord.riders_mut().set_enemy_killed(0);
                lord.warriors_mut().set_casualties(0);
                lord.warriors_mut().set_enemy_killed(0);
            }
        }

        for index in 0..self.garrisons.len() {
            if self.garrisons[index].army.race() != Race::Foul {
                let at = self.garrisons[index].at;
                self.map.location_mut(at).set_special(true);
            }
        }

        // The Doomguard spend their night's movement.
        for index in 0..self.doomguard.len() {
            while self.doomguard[index].move_count() < Rules::DOOMGUARD_MOVE_BUDGET {
                self.execute_move(index);
            }
            self.doomguard[index].set_move_count(0);
            trace!(doomguard = %self.doomguard[index], "night march done");
        }

        // Unmark and muster a battle at every contested tile.
        for index in 0..self.characters.len() {
            let at = self.characters[index].coord();
            self.map.location_mut(at).set_special(false);
            self.muster_battle_if_contested(at);
        }

        for index in 0..self.garrisons.len() {
            if self.garrisons[index].army.race() != Race::Foul {
                let at = self.garrisons[index].at;
                self.map.location_mut(at).set_special(false);
                if !self.map.location(at).armies().is_empty() {
                    self.muster_battle_if_contested(at);
                }
            }
        }

        debug!(battles = self.battles.len(), "battles mustered");

        let mut battles = std::mem::take(&mut self.battles);
        for battle in &mut battles {
            self.run_battle(battle);
        }
        self.battles = battles;
    }

    fn muster_battle_if_contested(&mut self, at: Coord) {
        let contested = !self.map.location(at).armies().is_empty()
            || self
                .guard_at(at)
                .is_some_and(|guard| guard.race() == Race::Foul);
        if contested && !self.battles.iter().any(|battle| battle.location() == at) {
            let battle = self.muster_battle(at);
            self.battles.push(battle);
        }
    }

    // ========================================================================
    // Doomguard movement
    // ========================================================================

    /// One movement step for the Doomguard at `index`. Standing on a marked
    /// tile exhausts the night's budget (no camping on the player), but the
    /// army still gets this step: first toward any marked neighbor, else as
    /// its orders dictate.
    fn execute_move(&mut self, index: usize) {
        let at = self.doomguard[index].coord();
        if self.map.location(at).is_special() {
            self.stop_moving(index);
        }

        let mut direction = Direction::North;
        for _ in 0..8 {
            let ahead = at.step(direction);
            if self.map.location(ahead).is_special() {
                self.move_to(index, ahead);
                return;
            }
            direction = direction.turn_right();
        }

        match self.doomguard[index].orders() {
            Orders::Follow => self.follow_character(index),
            Orders::Goto => self.follow_goto(index),
            Orders::Route => self.follow_route(index),
            Orders::Wander => self.wander(index),
        }
    }

    fn follow_character(&mut self, index: usize) {
        let Target::Character(mut quarry) = self.doomguard[index].target() else {
            unreachable!("FOLLOW orders target a lord");
        };
        if !self.character(quarry).is_alive() {
            quarry = if self.character(CharacterId::LUXOR).is_alive() {
                CharacterId::LUXOR
            } else {
                CharacterId::MORKIN
            };
            self.doomguard[index].set_target(Target::Character(quarry));
        }
        let destination = self.character(quarry).coord();
        self.move_towards(index, destination);
    }

    fn follow_goto(&mut self, index: usize) {
        let Target::Location(destination) = self.doomguard[index].target() else {
            unreachable!("GOTO orders target a tile");
        };
        if self.map.location(destination).is_special() {
            self.move_towards(index, destination);
        } else {
            self.stop_moving(index);
        }
    }

    fn follow_route(&mut self, index: usize) {
        let Target::Location(mut destination) = self.doomguard[index].target() else {
            unreachable!("ROUTE orders target a route node");
        };
        if self.doomguard[index].coord() == destination {
            destination = if self.random(2) == 0 {
                self.map.next_node_a(destination)
            } else {
                self.map.next_node_b(destination)
            }
            .expect("ROUTE target is a route node");
            self.doomguard[index].set_target(Target::Location(destination));
        }
        self.move_towards(index, destination);
    }

    fn wander(&mut self, index: usize) {
        let at = self.doomguard[index].coord();
        let destination = loop {
            let direction = Direction::from_repr(self.random(8) as u8).unwrap();
            let candidate = at.step(direction);
            if self.map.location(candidate).feature() != Feature::FrozenWaste {
                break candidate;
            }
        };
        self.move_to(index, destination);
    }

    /// Advances roughly toward a tile: half the time straight along the
    /// compass heading, otherwise veering a turn left or right, retrying up
    /// to eight times to stay off forest, mountain and frozen waste. The
    /// final candidate is taken even if rough, unless it is frozen waste.
    fn move_towards(&mut self, index: usize, target: Coord) {
        let at = self.doomguard[index].coord();
        if at == target {
            self.stop_moving(index);
            return;
        }
        let heading = Map::direction_towards(at, target);
        let mut destination;
        let mut attempt = 0;
        loop {
            destination = match self.random(4) {
                0 | 1 => at.step(heading),
                2 => at.step(heading.turn_left()),
                _ => at.step(heading.turn_right()),
            };
            attempt += 1;
            let feature = self.map.location(destination).feature();
            if attempt >= 8
                || !matches!(
                    feature,
                    Feature::Forest | Feature::Mountain | Feature::FrozenWaste
                )
            {
                break;
            }
        }
        if self.map.location(destination).feature() != Feature::FrozenWaste {
            self.move_to(index, destination);
        } else {
            self.stop_moving(index);
        }
    }

    /// Steps onto a tile unless too many armies already stack there. Rough
    /// ground costs 8 of the 6-point budget, open ground 2; riders pay half.
    fn move_to(&mut self, index: usize, destination: Coord) {
        if self.map.location(destination).armies().len() > Rules::MAX_ARMIES_PER_TILE {
            self.stop_moving(index);
            return;
        }
        let mut cost = match self.map.location(destination).feature() {
            Feature::Forest | Feature::Mountain => 8,
            _ => 2,
        };
        if self.doomguard[index].army().troop() == TroopKind::Riders {
            cost /= 2;
        }
        self.doomguard[index].spend_move(cost);
        self.move_doomguard(index, destination);
    }

    fn stop_moving(&mut self, index: usize) {
        self.doomguard[index].set_move_count(Rules::DOOMGUARD_MOVE_BUDGET);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::RouteNode;
    use crate::rng::FixedRandom;
    use crate::scenario::{GarrisonSpec, WarbandOrders, WarbandSpec};
    use crate::types::{Race, TroopKind};
    use crate::world::testkit::{lord, WorldBuilder};
    use crate::world::Command;

    const LUXOR: CharacterId = CharacterId::LUXOR;
    const MORKIN: CharacterId = CharacterId::MORKIN;

    #[test]
    fn a_route_patrol_advances_toward_its_chosen_successor() {
        // Node 0's first successor is itself, the second is node 1; a source
        // that always yields 1 picks the second and the patrol steps east.
        let mut world = WorldBuilder::new()
            .route(RouteNode::new(10, 10, 0, 1))
            .route(RouteNode::new(14, 10, 1, 0))
            .doomguard(WarbandSpec {
                x: 10,
                y: 10,
                how_many: 1000,
                troop: TroopKind::Riders,
                orders: WarbandOrders::Route(0),
            })
            .build(Box::new(FixedRandom(1)));

        world.night();

        let patrol = &world.doomguard()[0];
        assert_eq!(patrol.target(), Target::Location(Coord::new(14, 10)));
        assert_eq!(patrol.coord(), Coord::new(11, 10));
    }

    #[test]
    fn a_hunter_marks_a_dead_quarry_and_turns_on_luxor() {
        let mut corleth = lord("Corleth", Race::Fey, 30, 30);
        corleth.life = 0;
        let mut world = WorldBuilder::new()
            .lord(corleth)
            .doomguard(WarbandSpec {
                x: 30,
                y: 30,
                how_many: 1000,
                troop: TroopKind::Warriors,
                orders: WarbandOrders::Follow(2),
            })
            .build(Box::new(FixedRandom(0)));

        world.night();

        let hunter = &world.doomguard()[0];
        assert_eq!(hunter.target(), Target::Character(LUXOR));
        // Three plains steps at 2 points each, always straight southwest.
        assert_eq!(hunter.coord(), Coord::new(27, 33));
    }

    #[test]
    fn a_follower_camps_on_its_quarry_and_battle_is_joined() {
        let mut world = WorldBuilder::new()
            .edit_lord(LUXOR, |spec| {
                spec.x = 20;
                spec.y = 20;
            })
            .edit_lord(MORKIN, |spec| {
                spec.x = 50;
                spec.y = 50;
            })
            .doomguard(WarbandSpec {
                x: 21,
                y: 20,
                how_many: 5,
                troop: TroopKind::Riders,
                orders: WarbandOrders::Follow(0),
            })
            .build(Box::new(crate::world::testkit::ScriptedRandom::new([
                0, 0, 255,
            ])));

        world.night();

        assert_eq!(world.battles().len(), 1);
        let battle = &world.battles()[0];
        assert_eq!(battle.location(), Coord::new(20, 20));
        assert_eq!(battle.winner(), Some(Race::Free));
        assert_eq!(world.character(LUXOR).enemy_killed(), 5);
        assert!(world.doomguard().is_empty());
    }

    #[test]
    fn a_hidden_lord_is_passed_over_by_the_night() {
        let mut world = WorldBuilder::new()
            .route(RouteNode::new(12, 40, 0, 0))
            .edit_lord(LUXOR, |spec| spec.energy = 50)
            .edit_lord(MORKIN, |spec| {
                spec.x = 50;
                spec.y = 50;
            })
            .doomguard(WarbandSpec {
                x: 12,
                y: 40,
                how_many: 1000,
                troop: TroopKind::Warriors,
                orders: WarbandOrders::Goto(0),
            })
            .build(Box::new(FixedRandom(0)));

        world.execute(Command::Hide).unwrap();
        world.night();

        // The battle is foul-only: the hidden lord neither fights nor pays.
        assert_eq!(world.battles().len(), 1);
        assert!(world.battles()[0].characters().is_empty());
        assert_eq!(world.battles()[0].winner(), Some(Race::Foul));
        let luxor = world.character(LUXOR);
        assert!(luxor.is_alive());
        assert_eq!(luxor.battle(), None);
        assert_eq!(luxor.energy(), 50 + 9 + 8);
    }

    #[test]
    fn the_doom_of_the_princes_ends_the_game() {
        let mut world = WorldBuilder::new()
            .edit_lord(LUXOR, |spec| {
                spec.life = 0;
                spec.object = Object::MoonRing;
            })
            .edit_lord(MORKIN, |spec| spec.life = 0)
            .build(Box::new(FixedRandom(0)));

        world.night();

        assert!(world.is_game_over());
        assert_eq!(world.status(), Some(Status::LuxorMorkinDead));
        assert_eq!(world.status().unwrap().winner(), Race::Foul);
        // The fallen Moonprince's ring lies where he fell.
        assert_eq!(world.location(Coord::new(12, 40)).object(), Object::MoonRing);
        assert!(!world.is_moon_ring_controlled());
        assert_eq!(
            world.execute(Command::EndDay),
            Err(crate::world::ActionError::GameOver)
        );
    }

    #[test]
    fn losing_the_moon_ring_strands_the_recruited_lords() {
        let gard = lord("Gard", Race::Free, 20, 20);
        let mut world = WorldBuilder::new()
            .lord(gard)
            .edit_lord(LUXOR, |spec| {
                spec.life = 0;
                spec.object = Object::MoonRing;
            })
            .build(Box::new(FixedRandom(0)));

        assert!(world.is_controllable(CharacterId(2)));
        world.night();
        assert!(!world.is_game_over());
        assert!(!world.is_controllable(CharacterId(2)));
        assert!(world.is_controllable(MORKIN));
    }

    #[test]
    fn the_ice_crown_melts_in_lake_mirrow() {
        let mut world = WorldBuilder::new()
            .edit_lord(MORKIN, |spec| {
                spec.x = Map::LAKE_MIRROW.x;
                spec.y = Map::LAKE_MIRROW.y;
                spec.object = Object::IceCrown;
            })
            .build(Box::new(FixedRandom(0)));

        world.night();

        assert!(world.is_ice_crown_destroyed());
        assert!(world.is_game_over());
        assert_eq!(world.status(), Some(Status::IceCrown));
        assert_eq!(world.status().unwrap().winner(), Race::Free);
    }

    #[test]
    fn doomdark_draws_strength_from_his_strongholds() {
        let mut world = WorldBuilder::new()
            .feature(Coord::new(30, 30), Feature::Citadel)
            .feature(Coord::new(40, 40), Feature::Keep)
            .garrison(GarrisonSpec {
                x: 30,
                y: 30,
                race: Race::Foul,
                how_many: 100,
                troop: TroopKind::Warriors,
            })
            .garrison(GarrisonSpec {
                x: 40,
                y: 40,
                race: Race::Foul,
                how_many: 100,
                troop: TroopKind::Warriors,
            })
            .build(Box::new(FixedRandom(0)));

        assert_eq!(world.doom_darks_citadels(), 0);
        world.night();
        assert_eq!(world.doom_darks_citadels(), 5 + 2);
    }
}
