use bitflags::bitflags;

use crate::army::Army;
use crate::config::Rules;
use crate::types::{CharacterId, Condition, Coord, Direction, Object, Race, Time, TroopKind};

bitflags! {
    /// One side of the bipartite recruitment graph.
    ///
    /// A lord may recruit another when his `recruiting_key` intersects the
    /// other's `recruited_by_key`. Bits name the circles of allegiance a key
    /// can open.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RecruitKey: u8 {
        /// The free lords of the southern keeps and citadels.
        const FREE_LORDS = 0x01;
        /// The lesser fey lords.
        const FEY_LORDS = 0x02;
        /// The Utarg of Utarg.
        const UTARG = 0x04;
        /// The fey princes, Dreams and Dregrim.
        const FEY_PRINCES = 0x08;
        /// Lorgrim the Wise.
        const WISE = 0x10;
        /// Fawkrin the Skulkrin.
        const SKULKRIN = 0x20;
        /// Farflame the Dragonlord.
        const DRAGON = 0x40;
    }
}

/// One of the 32 named lords.
///
/// A lord owns his two armies outright; the tile he stands on lists him by
/// id. `battle`, `found` and `killed` are last-event records a renderer
/// reads, cleared as the day and night phases dictate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    pub name: &'static str,
    pub title: &'static str,
    race: Race,
    life: i32,
    energy: u8,
    strength: u32,
    courage_base: i32,
    recruiting_key: RecruitKey,
    recruited_by_key: RecruitKey,
    at: Coord,
    direction: Direction,
    time: Time,
    object: Object,
    riders: Army,
    warriors: Army,
    on_horse: bool,
    recruited: bool,
    hidden: bool,
    battle: Option<Coord>,
    found: Option<Object>,
    killed: Option<Object>,
    enemy_killed: u32,
}

impl Character {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CharacterId,
        name: &'static str,
        title: &'static str,
        race: Race,
        at: Coord,
        life: i32,
        energy: u8,
        strength: u32,
        courage_base: i32,
        recruiting_key: RecruitKey,
        recruited_by_key: RecruitKey,
        riders: u32,
        warriors: u32,
    ) -> Self {
        Self {
            id,
            name,
            title,
            race,
            life,
            energy: energy.min(Rules::MAX_ENERGY),
            strength,
            courage_base,
            recruiting_key,
            recruited_by_key,
            at,
            direction: Direction::North,
            time: Time::new(),
            object: Object::Nothing,
            riders: Army::new(race, riders, TroopKind::Riders),
            warriors: Army::new(race, warriors, TroopKind::Warriors),
            on_horse: race.rides_by_nature(),
            recruited: false,
            hidden: false,
            battle: None,
            found: None,
            killed: None,
            enemy_killed: 0,
        }
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn coord(&self) -> Coord {
        self.at
    }

    pub(crate) fn set_coord(&mut self, at: Coord) {
        self.at = at;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn life(&self) -> i32 {
        self.life
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn die(&mut self) {
        self.life = 0;
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn courage_base(&self) -> i32 {
        self.courage_base
    }

    pub fn recruiting_key(&self) -> RecruitKey {
        self.recruiting_key
    }

    pub fn recruited_by_key(&self) -> RecruitKey {
        self.recruited_by_key
    }

    pub fn is_recruited(&self) -> bool {
        self.recruited
    }

    pub fn set_recruited(&mut self, recruited: bool) {
        self.recruited = recruited;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_on_horse(&self) -> bool {
        self.on_horse
    }

    pub fn set_on_horse(&mut self, on_horse: bool) {
        self.on_horse = on_horse;
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn time_mut(&mut self) -> &mut Time {
        &mut self.time
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

    /// Overnight recovery: the lord regains 9 plus the increment, his armies
    /// their own troop bonus plus the increment.
    pub fn increment_energy(&mut self, increment: i32) {
        self.set_energy(self.energy as i32 + 9 + increment);
        self.warriors.increment_energy(increment);
        self.riders.increment_energy(increment);
    }

    pub fn decrement_energy(&mut self, decrement: i32) {
        self.set_energy(self.energy as i32 - decrement);
    }

    pub fn object(&self) -> Object {
        self.object
    }

    pub fn set_object(&mut self, object: Object) {
        self.object = object;
    }

    pub fn riders(&self) -> &Army {
        &self.riders
    }

    pub fn riders_mut(&mut self) -> &mut Army {
        &mut self.riders
    }

    pub fn warriors(&self) -> &Army {
        &self.warriors
    }

    pub fn warriors_mut(&mut self) -> &mut Army {
        &mut self.warriors
    }

    /// True when the lord marches with any soldiers at all; such a lord
    /// turns a plains tile into an army tile.
    pub fn has_soldiers(&self) -> bool {
        !self.riders.is_empty() || !self.warriors.is_empty()
    }

    /// The battle this lord stood in last night, by location.
    pub fn battle(&self) -> Option<Coord> {
        self.battle
    }

    pub fn set_battle(&mut self, battle: Option<Coord>) {
        self.battle = battle;
    }

    /// What `seek` last turned up.
    pub fn found(&self) -> Option<Object> {
        self.found
    }

    pub fn set_found(&mut self, found: Option<Object>) {
        self.found = found;
    }

    /// The beast this lord last slew. A dead lord keeps the record of what
    /// killed him.
    pub fn killed(&self) -> Option<Object> {
        self.killed
    }

    pub fn set_killed(&mut self, killed: Option<Object>) {
        self.killed = killed;
    }

    pub fn clear_killed(&mut self) {
        if self.is_alive() {
            self.killed = None;
        }
    }

    pub fn enemy_killed(&self) -> u32 {
        self.enemy_killed
    }

    pub fn set_enemy_killed(&mut self, enemy_killed: u32) {
        self.enemy_killed = enemy_killed;
    }

    /// Dawn reset: a fresh day's hours and yesterday's discoveries gone.
    pub fn dawn(&mut self) {
        self.time.dawn();
        self.found = None;
        self.clear_killed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lord() -> Character {
        Character::new(
            CharacterId(4),
            "Gard",
            "the Lord of Gard",
            Race::Free,
            Coord::new(10, 55),
            150,
            64,
            10,
            64,
            RecruitKey::FREE_LORDS,
            RecruitKey::FREE_LORDS,
            500,
            1000,
        )
    }

    #[test]
    fn recruit_keys_match_on_any_shared_bit() {
        let luxor_key = RecruitKey::from_bits_retain(0x17);
        assert!(luxor_key.intersects(RecruitKey::FREE_LORDS));
        assert!(luxor_key.intersects(RecruitKey::WISE));
        assert!(!luxor_key.intersects(RecruitKey::SKULKRIN));
    }

    #[test]
    fn recovery_feeds_the_lord_and_his_armies() {
        let mut lord = lord();
        lord.set_energy(10);
        lord.riders_mut().set_energy(10);
        lord.warriors_mut().set_energy(10);
        lord.increment_energy(4);
        assert_eq!(lord.energy(), 23);
        assert_eq!(lord.riders().energy(), 20);
        assert_eq!(lord.warriors().energy(), 18);
    }

    #[test]
    fn a_dead_lord_keeps_his_killer_on_record() {
        let mut lord = lord();
        lord.set_killed(Some(Object::Wolves));
        lord.die();
        lord.clear_killed();
        assert_eq!(lord.killed(), Some(Object::Wolves));
    }

    #[test]
    fn dawn_resets_the_day() {
        let mut lord = lord();
        lord.time_mut().night();
        lord.set_found(Some(Object::Shelter));
        lord.set_killed(Some(Object::Wolves));
        lord.dawn();
        assert!(lord.time().is_dawn());
        assert_eq!(lord.found(), None);
        assert_eq!(lord.killed(), None);
    }

    #[test]
    fn footbound_races_start_dismounted() {
        let fawkrin = Character::new(
            CharacterId::FAWKRIN,
            "Fawkrin",
            "Fawkrin the Skulkrin",
            Race::Skulkrin,
            Coord::new(1, 10),
            200,
            64,
            1,
            30,
            RecruitKey::empty(),
            RecruitKey::SKULKRIN,
            0,
            0,
        );
        assert!(!fawkrin.is_on_horse());
        assert!(lord().is_on_horse());
    }
}
