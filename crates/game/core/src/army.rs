use std::fmt;

use crate::config::Rules;
use crate::types::{Condition, Coord, Race, TroopKind};

/// A body of soldiers: a lord's riders or warriors, a stronghold garrison,
/// or one Doomguard army.
///
/// `casualties` and `enemy_killed` are last-battle tallies; `success_chance`
/// is per-battle scratch written when the battle is mustered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Army {
    race: Race,
    troop: TroopKind,
    how_many: u32,
    energy: u8,
    casualties: u32,
    enemy_killed: u32,
    success_chance: u32,
}

impl Army {
    /// Starting energy of every army in the initial rosters.
    pub const STARTING_ENERGY: u8 = 88;

    pub fn new(race: Race, how_many: u32, troop: TroopKind) -> Self {
        Self {
            race,
            troop,
            how_many,
            energy: Self::STARTING_ENERGY,
            casualties: 0,
            enemy_killed: 0,
            success_chance: 0,
        }
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn set_race(&mut self, race: Race) {
        self.race = race;
    }

    pub fn troop(&self) -> TroopKind {
        self.troop
    }

    pub fn how_many(&self) -> u32 {
        self.how_many
    }

    pub fn is_empty(&self) -> bool {
        self.how_many == 0
    }

    pub fn energy(&self) -> u8 {
        self.energy
    }

    pub fn condition(&self) -> Condition {
        Condition::from_energy(self.energy)
    }

    pub fn set_energy(&mut self, energy: i32) {
        self.energy = energy.clamp(0, Rules::MAX_ENERGY as i32) as u8;
    }

    /// Recovery with the troop-kind bonus: riders regain 6 per tick,
    /// warriors 4, plus the passed-in increment.
    pub fn increment_energy(&mut self, increment: i32) {
        let bonus = match self.troop {
            TroopKind::Riders => 6,
            TroopKind::Warriors => 4,
        };
        self.set_energy(self.energy as i32 + bonus + increment);
    }

    pub fn decrement_energy(&mut self, decrement: i32) {
        self.set_energy(self.energy as i32 - decrement);
    }

    pub fn increase_numbers(&mut self, increase: u32) {
        self.how_many += increase;
    }

    pub fn decrease_numbers(&mut self, decrease: u32) {
        self.how_many = self.how_many.saturating_sub(decrease);
    }

    /// Records battle losses: headcount drops and the casualty tally grows.
    pub fn append_casualties(&mut self, number: u32) {
        self.decrease_numbers(number);
        self.casualties += number;
    }

    pub fn casualties(&self) -> u32 {
        self.casualties
    }

    pub fn set_casualties(&mut self, casualties: u32) {
        self.casualties = casualties;
    }

    pub fn enemy_killed(&self) -> u32 {
        self.enemy_killed
    }

    pub fn set_enemy_killed(&mut self, enemy_killed: u32) {
        self.enemy_killed = enemy_killed;
    }

    pub fn success_chance(&self) -> u32 {
        self.success_chance
    }

    pub fn set_success_chance(&mut self, success_chance: u32) {
        self.success_chance = success_chance;
    }

    /// A conquered guard joins the winner: the free side raises 200 soldiers
    /// under its banner, the foul side 250.
    pub fn switch_sides(&mut self) {
        if self.race == Race::Foul {
            self.race = Race::Free;
            self.how_many = Rules::RAISED_FREE_GUARD;
        } else {
            self.race = Race::Foul;
            self.how_many = Rules::RAISED_FOUL_GUARD;
        }
    }
}

impl fmt::Display for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.how_many != 0 {
            write!(f, "{} {}", self.how_many, self.troop)
        } else {
            write!(f, "no {}", self.troop)
        }
    }
}

/// A static guarding army bound to a keep or citadel tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Garrison {
    pub at: Coord,
    pub army: Army,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_clamps_to_unit_bounds() {
        let mut army = Army::new(Race::Free, 100, TroopKind::Warriors);
        army.set_energy(500);
        assert_eq!(army.energy(), 127);
        army.set_energy(-3);
        assert_eq!(army.energy(), 0);
        assert_eq!(army.condition(), Condition::UtterlyTired);
    }

    #[test]
    fn riders_recover_faster_than_warriors() {
        let mut riders = Army::new(Race::Free, 100, TroopKind::Riders);
        let mut warriors = Army::new(Race::Free, 100, TroopKind::Warriors);
        riders.set_energy(0);
        warriors.set_energy(0);
        riders.increment_energy(2);
        warriors.increment_energy(2);
        assert_eq!(riders.energy(), 8);
        assert_eq!(warriors.energy(), 6);
    }

    #[test]
    fn casualties_never_drive_headcount_negative() {
        let mut army = Army::new(Race::Foul, 8, TroopKind::Warriors);
        army.append_casualties(5);
        army.append_casualties(5);
        assert_eq!(army.how_many(), 0);
        assert_eq!(army.casualties(), 10);
    }

    #[test]
    fn conquered_guards_change_banner_and_muster() {
        let mut guard = Army::new(Race::Foul, 40, TroopKind::Warriors);
        guard.switch_sides();
        assert_eq!(guard.race(), Race::Free);
        assert_eq!(guard.how_many(), 200);
        guard.switch_sides();
        assert_eq!(guard.race(), Race::Foul);
        assert_eq!(guard.how_many(), 250);
    }

    #[test]
    fn displays_headcount_or_absence() {
        let army = Army::new(Race::Free, 500, TroopKind::Riders);
        assert_eq!(army.to_string(), "500 riders");
        let none = Army::new(Race::Free, 0, TroopKind::Warriors);
        assert_eq!(none.to_string(), "no warriors");
    }
}
