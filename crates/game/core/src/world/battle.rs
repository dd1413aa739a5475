//! Battle mustering and resolution.
//!
//! A battle composes every combatant standing at one tile into a free and a
//! foul side, lets each deal stochastic blows, then settles the tile: energy
//! drains, guards switching banner, and beaten lords scattered.

use tracing::debug;

use crate::army::Army;
use crate::battle::{Battle, ForceRef};
use crate::config::Rules;
use crate::types::{Coord, Direction, Feature, Race, TroopKind};

use super::Midnight;

impl Midnight {
    pub(crate) fn force(&self, force: ForceRef) -> &Army {
        match force {
            ForceRef::Guard(id) => &self.garrisons[id.index()].army,
            ForceRef::Riders(id) => self.character(id).riders(),
            ForceRef::Warriors(id) => self.character(id).warriors(),
            ForceRef::Doomguard(id) => {
                let index = self
                    .doomguard_index(id)
                    .expect("battle force refers to a live doomguard");
                self.doomguard[index].army()
            }
        }
    }

    pub(crate) fn force_mut(&mut self, force: ForceRef) -> &mut Army {
        match force {
            ForceRef::Guard(id) => &mut self.garrisons[id.index()].army,
            ForceRef::Riders(id) => self.character_mut(id).riders_mut(),
            ForceRef::Warriors(id) => self.character_mut(id).warriors_mut(),
            ForceRef::Doomguard(id) => {
                let index = self
                    .doomguard_index(id)
                    .expect("battle force refers to a live doomguard");
                self.doomguard[index].army_mut()
            }
        }
    }

    /// Composes the two sides for a contested tile: the guard under its own
    /// banner, then every standing lord's armies, then the Doomguard camped
    /// there.
    pub(crate) fn muster_battle(&mut self, at: Coord) -> Battle {
        let mut battle = Battle::new(at);

        if let Some(id) = self.map.location(at).guard() {
            let guard = &self.garrisons[id.index()].army;
            if !guard.is_empty() {
                if guard.race() == Race::Foul {
                    self.enlist_foul(&mut battle, ForceRef::Guard(id));
                } else {
                    let chance = if guard.troop() == TroopKind::Riders {
                        0x60
                    } else {
                        0x40
                    };
                    self.garrisons[id.index()].army.set_success_chance(chance);
                    battle.free.push(ForceRef::Guard(id));
                }
            }
        }

        let lords: Vec<_> = self.map.location(at).characters().iter().copied().collect();
        for id in lords {
            let lord = self.character(id);
            if !lord.is_alive() || lord.is_hidden() {
                continue;
            }
            battle.characters.push(id);
            self.character_mut(id).set_battle(Some(at));
            if !self.character(id).riders().is_empty() {
                self.enlist_free(&mut battle, ForceRef::Riders(id));
            }
            if !self.character(id).warriors().is_empty() {
                self.enlist_free(&mut battle, ForceRef::Warriors(id));
            }
        }

        let armies: Vec<_> = self.map.location(at).armies().iter().copied().collect();
        for id in armies {
            self.enlist_foul(&mut battle, ForceRef::Doomguard(id));
        }

        battle
    }

    /// Foul chance: the ice fear scaled by troop kind, plus the stronghold
    /// bonus when the tile's guard flies the foul banner.
    fn enlist_foul(&mut self, battle: &mut Battle, force: ForceRef) {
        let at = battle.at;
        let divisor = match self.force(force).troop() {
            TroopKind::Riders => 4,
            TroopKind::Warriors => 5,
        };
        let mut chance = (self.ice_fear(at) / divisor) as u32;

        if self.guard_at(at).is_some_and(|guard| guard.race() == Race::Foul) {
            chance += self.stronghold_bonus(at);
        }

        self.force_mut(force).set_success_chance(chance);
        battle.foul.push(force);
    }

    /// Free chance: the army's energy, the stronghold bonus when defending,
    /// the riders' terrain bonus, and the fey affinity for mounted forest
    /// fighting; halved and floored at 0x18.
    fn enlist_free(&mut self, battle: &mut Battle, force: ForceRef) {
        let at = battle.at;
        let feature = self.map.location(at).feature();
        let army = self.force(force);
        let troop = army.troop();
        let mut chance = army.energy() as u32;

        if self.guard_at(at).is_some_and(|guard| guard.race() != Race::Foul) {
            chance += self.stronghold_bonus(at);
        }

        if troop == TroopKind::Riders {
            chance += if feature == Feature::Mountain { 0x20 } else { 0x40 };
        }

        if let ForceRef::Riders(id) | ForceRef::Warriors(id) = force {
            let lord = self.character(id);
            if feature == Feature::Forest && lord.race() == Race::Fey && lord.is_on_horse() {
                chance += 0x40;
            }
        }

        self.force_mut(force)
            .set_success_chance(chance / 2 + 0x18);
        battle.free.push(force);
    }

    fn stronghold_bonus(&self, at: Coord) -> u32 {
        if self.map.location(at).feature() == Feature::Citadel {
            0x20
        } else {
            0x10
        }
    }

    /// Lets every combatant strike, then settles the outcome.
    pub(crate) fn run_battle(&mut self, battle: &mut Battle) {
        for i in 0..battle.characters.len() {
            let id = battle.characters[i];
            let (hits, chance) = {
                let lord = self.character(id);
                (lord.strength(), lord.energy() as u32 + 0x80)
            };
            let killed = self.skirmish(hits, chance, &mut battle.foul);
            self.character_mut(id).set_enemy_killed(killed);
        }

        let mut i = 0;
        while i < battle.free.len() {
            let force = battle.free[i];
            let (hits, chance) = {
                let army = self.force(force);
                (army.how_many() / 5, army.success_chance())
            };
            let killed = self.skirmish(hits, chance, &mut battle.foul);
            self.force_mut(force).set_enemy_killed(killed);
            i += 1;
        }

        let mut i = 0;
        while i < battle.foul.len() {
            let force = battle.foul[i];
            let (hits, chance) = {
                let army = self.force(force);
                (army.how_many() / 5, army.success_chance())
            };
            let killed = self.skirmish(hits, chance, &mut battle.free);
            self.force_mut(force).set_enemy_killed(killed);
            i += 1;
        }

        self.determine_result(battle);
        self.refresh_tile(battle.at);
        debug!(at = %battle.at, winner = ?battle.winner, "battle resolved");
    }

    /// One side's round of blows. Each swing needs a to-hit roll against the
    /// attacker's chance, a random target, and a roll over the target's own
    /// chance; five casualties per telling blow. A drained army drops out of
    /// the line (a drained Doomguard leaves the world entirely).
    fn skirmish(&mut self, hits: u32, chance: u32, enemies: &mut Vec<ForceRef>) -> u32 {
        let mut enemy_killed = 0;
        for i in 0..enemies.len() as u32 {
            if enemies.is_empty() {
                break;
            }
            if self.random(256) < chance {
                let picked = self.random(enemies.len() as u32) as usize;
                let enemy = enemies[picked];
                if self.random(256) > self.force(enemy).success_chance() {
                    enemy_killed += Rules::SKIRMISH_BLOW;
                    let army = self.force_mut(enemy);
                    army.append_casualties(Rules::SKIRMISH_BLOW);
                    if army.is_empty() {
                        enemies.remove(picked);
                        if let ForceRef::Doomguard(id) = enemy {
                            self.remove_doomguard(id);
                        }
                    }
                }
            }
            if i >= hits {
                break;
            }
        }
        enemy_killed
    }

    fn determine_result(&mut self, battle: &mut Battle) {
        battle.winner = if battle.foul.is_empty() {
            Some(Race::Free)
        } else if battle.free.is_empty() {
            Some(Race::Foul)
        } else {
            None
        };

        for i in 0..battle.free.len() {
            let force = battle.free[i];
            self.force_mut(force)
                .decrement_energy(Rules::BATTLE_ARMY_FATIGUE as i32);
        }

        if let Some(id) = self.map.location(battle.at).guard() {
            match battle.winner {
                Some(winner) => {
                    let guard_is_foul = self.garrisons[id.index()].army.race() == Race::Foul;
                    if (winner == Race::Foul) != guard_is_foul {
                        self.garrisons[id.index()].army.switch_sides();
                    }
                }
                None => {
                    // A fought-out guard rallies a remnant while the battle
                    // still rages.
                    if self.garrisons[id.index()].army.is_empty() {
                        self.garrisons[id.index()].army.increase_numbers(20);
                    }
                }
            }
        }

        for i in 0..battle.characters.len() {
            let id = battle.characters[i];
            self.character_mut(id)
                .decrement_energy(Rules::BATTLE_LORD_FATIGUE as i32);
        }

        if battle.winner == Some(Race::Foul) {
            self.scatter_free_lords(battle);
        }
    }

    /// The foul have taken the field: each free lord risks horse and life,
    /// and survivors are driven onto a random neighboring tile.
    fn scatter_free_lords(&mut self, battle: &Battle) {
        for i in 0..battle.characters.len() {
            let id = battle.characters[i];
            self.maybe_lose(id);
            if !self.character(id).is_alive() {
                continue;
            }
            let destination = loop {
                let direction = Direction::from_repr(self.random(8) as u8).unwrap();
                let destination = self.character(id).coord().step(direction);
                if self.map.location(destination).feature() != Feature::FrozenWaste {
                    break destination;
                }
            };
            self.move_character(id, destination);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{GarrisonSpec, WarbandOrders, WarbandSpec};
    use crate::types::{CharacterId, DoomguardId, TroopKind};
    use crate::world::testkit::{ScriptedRandom, WorldBuilder};

    const LUXOR: CharacterId = CharacterId::LUXOR;
    const MORKIN: CharacterId = CharacterId::MORKIN;

    #[test]
    fn a_lone_lord_can_cut_down_a_spent_warband() {
        // Draws: lord hits (0 < 255), picks the only enemy, beats its
        // chance (255), and the five-man warband is wiped out.
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
                x: 20,
                y: 20,
                how_many: 5,
                troop: TroopKind::Riders,
                orders: WarbandOrders::Wander,
            })
            .build(Box::new(ScriptedRandom::new([0, 0, 255])));

        let mut battle = world.muster_battle(Coord::new(20, 20));
        assert_eq!(battle.characters(), [LUXOR]);
        assert_eq!(battle.foul_forces().len(), 1);

        world.run_battle(&mut battle);
        assert_eq!(battle.winner(), Some(Race::Free));
        assert_eq!(world.character(LUXOR).enemy_killed(), 5);
        assert!(world.doomguard().is_empty());
        assert!(world.location(Coord::new(20, 20)).armies().is_empty());
        // Embattled lords pay 0x14 energy even in victory.
        assert_eq!(world.character(LUXOR).energy(), 127 - 0x14);
        assert_eq!(world.character(LUXOR).battle(), Some(Coord::new(20, 20)));
    }

    #[test]
    fn a_conquered_guard_switches_banner() {
        // The free guard misses (200 >= 0x40 fails the to-hit), then the
        // warband hits (0), picks it, and beats its chance (255).
        let mut world = WorldBuilder::new()
            .feature(Coord::new(30, 30), Feature::Keep)
            .garrison(GarrisonSpec {
                x: 30,
                y: 30,
                race: Race::Free,
                how_many: 5,
                troop: TroopKind::Warriors,
            })
            .doomguard(WarbandSpec {
                x: 30,
                y: 30,
                how_many: 1000,
                troop: TroopKind::Warriors,
                orders: WarbandOrders::Wander,
            })
            .build(Box::new(ScriptedRandom::new([200, 0, 0, 255])));

        let mut battle = world.muster_battle(Coord::new(30, 30));
        world.run_battle(&mut battle);

        assert_eq!(battle.winner(), Some(Race::Foul));
        let guard = world.guard_at(Coord::new(30, 30)).unwrap();
        assert_eq!(guard.race(), Race::Foul);
        assert_eq!(guard.how_many(), 250);
    }

    #[test]
    fn the_beaten_free_side_is_scattered() {
        // Luxor misses his one swing (255), the warband never gets a
        // telling blow in either (free side is already bare of armies), yet
        // holds the field; Luxor loses his horse (1), survives the peril
        // roll (100 < his tenacity of 169), and is driven east (2).
        let mut world = WorldBuilder::new()
            .edit_lord(MORKIN, |spec| {
                spec.x = 50;
                spec.y = 50;
            })
            .doomguard(WarbandSpec {
                x: 12,
                y: 40,
                how_many: 1000,
                troop: TroopKind::Riders,
                orders: WarbandOrders::Wander,
            })
            .build(Box::new(ScriptedRandom::new([255, 1, 100, 2])));

        let mut battle = world.muster_battle(Coord::new(12, 40));
        world.run_battle(&mut battle);

        assert_eq!(battle.winner(), Some(Race::Foul));
        let luxor = world.character(LUXOR);
        assert!(luxor.is_alive());
        assert!(!luxor.is_on_horse());
        assert_eq!(luxor.coord(), Coord::new(13, 40));
        assert_eq!(luxor.energy(), 127 - 0x14);
    }

    #[test]
    fn a_fought_out_guard_rallies_a_remnant_while_the_battle_rages() {
        // Both sides whiff every draw; the guard is already empty, so the
        // stalemate raises it 20 men.
        let mut world = WorldBuilder::new()
            .feature(Coord::new(30, 30), Feature::Keep)
            .edit_lord(LUXOR, |spec| {
                spec.x = 30;
                spec.y = 30;
                spec.riders = 100;
            })
            .edit_lord(MORKIN, |spec| {
                spec.x = 50;
                spec.y = 50;
            })
            .garrison(GarrisonSpec {
                x: 30,
                y: 30,
                race: Race::Free,
                how_many: 0,
                troop: TroopKind::Warriors,
            })
            .doomguard(WarbandSpec {
                x: 30,
                y: 30,
                how_many: 1000,
                troop: TroopKind::Riders,
                orders: WarbandOrders::Wander,
            })
            .build(Box::new(ScriptedRandom::new([255; 64])));

        let mut battle = world.muster_battle(Coord::new(30, 30));
        // An empty guard never stands in the line.
        assert_eq!(battle.free_forces().len(), 1);
        assert!(battle.foul_forces().contains(&ForceRef::Doomguard(DoomguardId(0))));

        world.run_battle(&mut battle);
        assert_eq!(battle.winner(), None);
        assert_eq!(world.guard_at(Coord::new(30, 30)).unwrap().how_many(), 20);
        // Free armies pay their battle fatigue even in a stalemate.
        assert_eq!(world.character(LUXOR).riders().energy(), 88 - 0x18);
    }
}
