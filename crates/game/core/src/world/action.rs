//! Day-phase commands.
//!
//! Every order a player can give the selected lord. Each mutating command is
//! guarded by a `can_*` predicate with identical conditions; an unavailable
//! action fails with [`ActionError::Unavailable`] and leaves the world
//! untouched.

use crate::config::Rules;
use crate::types::{CharacterId, Condition, Courage, Direction, Feature, Object, Race, TroopKind};

use super::Midnight;

/// One player order for the selected lord.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    TurnLeft,
    TurnRight,
    WalkForward,
    Attack,
    Seek,
    DropObject,
    Fight,
    Recruit(CharacterId),
    RecruitMen,
    StandOnGuard,
    Hide,
    SwitchCharacter(CharacterId),
    EndDay,
}

/// What a successful command reports back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandOutcome {
    Turned(Direction),
    Moved,
    /// What `seek` turned up (NOTHING when the find was refused).
    Found(Object),
    Dropped,
    /// The beast fought.
    Killed(Object),
    Recruited(CharacterId),
    MenRecruited,
    GuardPosted,
    Hidden,
    Switched(CharacterId),
    DayEnded,
}

/// Why a command was refused. The world is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The command's `can_*` predicate is false.
    #[error("action is not available")]
    Unavailable,

    /// The lord is not Luxor, Morkin, or a recruited lord under the Moon
    /// Ring's control.
    #[error("lord cannot be controlled")]
    NotControllable,

    /// No lord with that roster id.
    #[error("no such lord")]
    UnknownCharacter,

    /// The campaign has already been decided.
    #[error("the game is over")]
    GameOver,
}

impl Midnight {
    /// Executes one command against the selected lord.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome, ActionError> {
        if self.game_over {
            return Err(ActionError::GameOver);
        }
        let id = self.selected;
        match command {
            Command::TurnLeft => {
                let direction = self.character(id).direction().turn_left();
                self.character_mut(id).set_direction(direction);
                Ok(CommandOutcome::Turned(direction))
            }
            Command::TurnRight => {
                let direction = self.character(id).direction().turn_right();
                self.character_mut(id).set_direction(direction);
                Ok(CommandOutcome::Turned(direction))
            }
            Command::WalkForward => {
                self.walk_forward(id)?;
                Ok(CommandOutcome::Moved)
            }
            Command::Attack => {
                self.attack(id)?;
                Ok(CommandOutcome::Moved)
            }
            Command::Seek => Ok(CommandOutcome::Found(self.seek(id))),
            Command::DropObject => {
                self.drop_carried(id);
                Ok(CommandOutcome::Dropped)
            }
            Command::Fight => {
                if !self.can_fight(id) {
                    return Err(ActionError::Unavailable);
                }
                Ok(CommandOutcome::Killed(self.fight(id)))
            }
            Command::Recruit(target) => {
                if target.index() >= self.characters.len() {
                    return Err(ActionError::UnknownCharacter);
                }
                if !self.can_recruit(id, target) {
                    return Err(ActionError::Unavailable);
                }
                self.character_mut(target).set_recruited(true);
                Ok(CommandOutcome::Recruited(target))
            }
            Command::RecruitMen => {
                self.recruit_men(id)?;
                Ok(CommandOutcome::MenRecruited)
            }
            Command::StandOnGuard => {
                self.stand_on_guard(id)?;
                Ok(CommandOutcome::GuardPosted)
            }
            Command::Hide => {
                if !self.can_hide(id) {
                    return Err(ActionError::Unavailable);
                }
                self.character_mut(id).set_hidden(true);
                Ok(CommandOutcome::Hidden)
            }
            Command::SwitchCharacter(target) => {
                self.select_character(target)?;
                Ok(CommandOutcome::Switched(target))
            }
            Command::EndDay => {
                self.night();
                self.dawn();
                Ok(CommandOutcome::DayEnded)
            }
        }
    }

    /// Hands control to another lord.
    pub fn select_character(&mut self, id: CharacterId) -> Result<(), ActionError> {
        if id.index() >= self.characters.len() {
            return Err(ActionError::UnknownCharacter);
        }
        if !self.is_controllable(id) {
            return Err(ActionError::NotControllable);
        }
        self.selected = id;
        Ok(())
    }

    // ========================================================================
    // Movement
    // ========================================================================

    /// A lord may leave his tile while alive, in the open and unhindered: at
    /// dawn he can slip away regardless, otherwise neither enemy armies nor
    /// a foul guard may hold the tile, and no beast may be prowling it.
    pub fn can_leave(&self, id: CharacterId) -> bool {
        let lord = self.character(id);
        let at = lord.coord();
        let tile = self.map.location(at);
        lord.is_alive()
            && !lord.is_hidden()
            && (lord.time().is_dawn()
                || (tile.armies().is_empty()
                    && self
                        .guard_at(at)
                        .is_none_or(|guard| guard.race() != Race::Foul)))
            && !tile.object().is_beast()
    }

    pub fn can_walk_forward(&self, id: CharacterId) -> bool {
        let lord = self.character(id);
        let ahead = lord.coord().step(lord.direction());
        let destination = self.map.location(ahead);
        self.can_leave(id)
            && !lord.time().is_night()
            && lord.condition() != Condition::UtterlyTired
            && destination.feature() != Feature::FrozenWaste
            && destination.characters().len() < Rules::MAX_CHARACTERS_PER_TILE
            && destination.armies().is_empty()
            && self
                .guard_at(ahead)
                .is_none_or(|guard| guard.race() != Race::Foul)
    }

    pub fn walk_forward(&mut self, id: CharacterId) -> Result<(), ActionError> {
        if !self.can_walk_forward(id) {
            return Err(ActionError::Unavailable);
        }
        self.advance(id);
        Ok(())
    }

    /// Attacking is walking into a held tile: armies or a foul guard ahead,
    /// and nerve enough to face them.
    pub fn can_attack(&self, id: CharacterId) -> bool {
        let lord = self.character(id);
        let ahead = lord.coord().step(lord.direction());
        let destination = self.map.location(ahead);
        self.can_leave(id)
            && (!destination.armies().is_empty()
                || self
                    .guard_at(ahead)
                    .is_some_and(|guard| guard.race() == Race::Foul))
            && self.courage(id) != Courage::UtterlyAfraid
    }

    pub fn attack(&mut self, id: CharacterId) -> Result<(), ActionError> {
        if !self.can_attack(id) {
            return Err(ActionError::Unavailable);
        }
        // The lord closes in; the night pipeline musters the battle if the
        // tile is still contested.
        self.advance(id);
        Ok(())
    }

    /// The shared movement effect: step forward, then drain hours and energy
    /// by terrain and mount. Farflame flies over everything for a single
    /// point.
    fn advance(&mut self, id: CharacterId) {
        let direction = self.character(id).direction();
        let to = self.character(id).coord().step(direction);
        self.move_character(id, to);

        let feature = self.map.location(to).feature();
        let lord = self.character(id);
        let mut drain: i32 = 2;
        if direction.is_diagonal() {
            drain += 1;
        }
        drain += match feature {
            Feature::Downs => 1,
            Feature::Mountain => 4,
            Feature::Forest if lord.race() == Race::Fey => 3,
            _ => 0,
        };
        if !lord.is_on_horse() {
            drain *= 2;
        }
        if id == CharacterId::FARFLAME {
            drain = 1;
        }

        let lord = self.character_mut(id);
        lord.time_mut().decrease(drain as u8);
        lord.set_energy(lord.energy() as i32 - drain);
        let riders_energy = lord.riders().energy() as i32;
        lord.riders_mut().set_energy(riders_energy - drain);
        let warriors_energy = lord.warriors().energy() as i32;
        lord.warriors_mut().set_energy(warriors_energy - drain);
        lord.set_battle(None);
        lord.clear_killed();
        lord.set_found(None);
    }

    // ========================================================================
    // The tile underfoot
    // ========================================================================

    /// Picks over the tile. Most finds act on the spot; the swords swap with
    /// whatever is carried, and only Morkin may touch the regalia.
    pub fn seek(&mut self, id: CharacterId) -> Object {
        let at = self.character(id).coord();
        let object = self.map.location(at).object();
        self.character_mut(id).set_found(Some(object));

        match object {
            Object::Dragonslayer | Object::Wolfslayer => {
                let carried = self.character(id).object();
                if !carried.is_regalia() {
                    self.map.location_mut(at).set_object(carried);
                    self.character_mut(id).set_object(object);
                }
            }
            Object::WildHorses => {
                if self.character(id).race().can_ride_wild_horses() {
                    self.character_mut(id).set_on_horse(true);
                }
            }
            Object::Shelter => {
                let lord = self.character_mut(id);
                lord.set_energy(lord.energy() as i32 + 0x10);
                self.map.location_mut(at).set_object(Object::Nothing);
            }
            Object::HandOfDark => {
                self.character_mut(id).time_mut().night();
                self.map.location_mut(at).set_object(Object::Nothing);
            }
            Object::CupOfDreams => {
                self.character_mut(id).time_mut().dawn();
                self.map.location_mut(at).set_object(Object::Nothing);
            }
            Object::WatersOfLife => {
                let lord = self.character_mut(id);
                lord.set_energy(0x78);
                lord.riders_mut().set_energy(0x78);
                lord.warriors_mut().set_energy(0x78);
                self.map.location_mut(at).set_object(Object::Nothing);
            }
            Object::ShadowsOfDeath => {
                let lord = self.character_mut(id);
                lord.set_energy(0);
                lord.riders_mut().set_energy(0);
                lord.warriors_mut().set_energy(0);
                self.map.location_mut(at).set_object(Object::Nothing);
            }
            Object::IceCrown | Object::MoonRing => {
                if id == CharacterId::MORKIN {
                    let carried = self.character(id).object();
                    self.map.location_mut(at).set_object(carried);
                    self.character_mut(id).set_object(object);
                } else {
                    return Object::Nothing;
                }
            }
            _ => {}
        }
        object
    }

    /// Lays the carried object on the tile.
    pub fn drop_carried(&mut self, id: CharacterId) {
        let carried = self.character(id).object();
        let at = self.character(id).coord();
        self.map.location_mut(at).set_object(carried);
        self.character_mut(id).set_object(Object::Nothing);
    }

    pub fn can_fight(&self, id: CharacterId) -> bool {
        let lord = self.character(id);
        let tile = self.map.location(lord.coord());
        !lord.is_hidden()
            && tile.object().is_beast()
            && (tile.armies().is_empty() || id == CharacterId::MORKIN)
    }

    /// Fights the beast on the tile. Any lord's soldiers dispatch it
    /// outright, as does the matching sword; a lone lord without one risks
    /// his horse and his life. The beast is gone either way.
    pub fn fight(&mut self, id: CharacterId) -> Object {
        let at = self.character(id).coord();
        let object = self.map.location(at).object();
        self.character_mut(id).set_killed(Some(object));

        let soldiers_present = self
            .map
            .location(at)
            .characters()
            .iter()
            .any(|&lord| self.character(lord).has_soldiers());
        if soldiers_present {
            self.map.location_mut(at).set_object(Object::Nothing);
            return object;
        }

        let carried = self.character(id).object();
        if (object == Object::Wolves && carried == Object::Wolfslayer)
            || (object == Object::Dragons && carried == Object::Dragonslayer)
        {
            self.map.location_mut(at).set_object(Object::Nothing);
            return object;
        }

        self.maybe_lose(id);
        self.map.location_mut(at).set_object(Object::Nothing);
        object
    }

    /// Peril check after a lost fight or battle: a mounted lord may lose his
    /// horse, and a spent lord his life.
    pub(crate) fn maybe_lose(&mut self, id: CharacterId) {
        if self.character(id).is_on_horse() {
            let keeps_horse = self.random(2) == 0;
            self.character_mut(id).set_on_horse(keeps_horse);
        }
        let lord = self.character(id);
        let tenacity = lord.energy() as i32 / 2 - 0x40 + lord.life();
        if tenacity < self.random(256) as i32 {
            self.character_mut(id).die();
        }
    }

    // ========================================================================
    // Recruitment
    // ========================================================================

    /// A lord wins another to the cause when they share ground, his key fits
    /// the other's allegiance, and no enemy presses them (Morkin recruits
    /// under any circumstances).
    pub fn can_recruit(&self, id: CharacterId, target: CharacterId) -> bool {
        let lord = self.character(id);
        let other = self.character(target);
        !other.is_recruited()
            && other.coord() == lord.coord()
            && lord.recruiting_key().intersects(other.recruited_by_key())
            && (self.map.location(lord.coord()).armies().is_empty()
                || id == CharacterId::MORKIN)
    }

    pub fn recruit(&mut self, id: CharacterId, target: CharacterId) -> Result<(), ActionError> {
        if !self.can_recruit(id, target) {
            return Err(ActionError::Unavailable);
        }
        self.character_mut(target).set_recruited(true);
        Ok(())
    }

    /// A friendly guard with men to spare can fill out the lord's matching
    /// army.
    pub fn can_recruit_men(&self, id: CharacterId) -> bool {
        let lord = self.character(id);
        let at = lord.coord();
        let Some(guard) = self.guard_at(at) else {
            return false;
        };
        guard.race() == lord.race()
            && guard.how_many() > Rules::GARRISON_RESERVE
            && (match guard.troop() {
                TroopKind::Riders => lord.riders().how_many() < Rules::ARMY_CAP,
                TroopKind::Warriors => lord.warriors().how_many() < Rules::ARMY_CAP,
            })
            && (self.map.location(at).armies().is_empty() || id == CharacterId::MORKIN)
    }

    pub fn recruit_men(&mut self, id: CharacterId) -> Result<(), ActionError> {
        if !self.can_recruit_men(id) {
            return Err(ActionError::Unavailable);
        }
        let guard_id = self
            .map
            .location(self.character(id).coord())
            .guard()
            .expect("recruit_men requires a guard");
        let guard = &mut self.garrisons[guard_id.index()].army;
        guard.decrease_numbers(Rules::LEVY);
        let troop = guard.troop();
        match troop {
            TroopKind::Riders => self
                .character_mut(id)
                .riders_mut()
                .increase_numbers(Rules::LEVY),
            TroopKind::Warriors => self
                .character_mut(id)
                .warriors_mut()
                .increase_numbers(Rules::LEVY),
        }
        Ok(())
    }

    /// The mirror of recruiting: the lord leaves soldiers to stiffen an
    /// understrength friendly guard.
    pub fn can_stand_on_guard(&self, id: CharacterId) -> bool {
        let lord = self.character(id);
        let at = lord.coord();
        let Some(guard) = self.guard_at(at) else {
            return false;
        };
        guard.race() == lord.race()
            && guard.how_many() < Rules::ARMY_CAP
            && (match guard.troop() {
                TroopKind::Riders => lord.riders().how_many() >= Rules::LEVY,
                TroopKind::Warriors => lord.warriors().how_many() >= Rules::LEVY,
            })
            && (self.map.location(at).armies().is_empty() || id == CharacterId::MORKIN)
    }

    pub fn stand_on_guard(&mut self, id: CharacterId) -> Result<(), ActionError> {
        if !self.can_stand_on_guard(id) {
            return Err(ActionError::Unavailable);
        }
        let guard_id = self
            .map
            .location(self.character(id).coord())
            .guard()
            .expect("stand_on_guard requires a guard");
        let guard = &mut self.garrisons[guard_id.index()].army;
        guard.increase_numbers(Rules::LEVY);
        let troop = guard.troop();
        match troop {
            TroopKind::Riders => self
                .character_mut(id)
                .riders_mut()
                .decrease_numbers(Rules::LEVY),
            TroopKind::Warriors => self
                .character_mut(id)
                .warriors_mut()
                .decrease_numbers(Rules::LEVY),
        }
        Ok(())
    }

    /// Any soldierless lord but Morkin can go to ground.
    pub fn can_hide(&self, id: CharacterId) -> bool {
        let lord = self.character(id);
        id != CharacterId::MORKIN
            && lord.warriors().is_empty()
            && lord.riders().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedRandom;
    use crate::scenario::{GarrisonSpec, WarbandOrders, WarbandSpec};
    use crate::types::{Coord, Race, Time};
    use crate::world::testkit::{lord, ScriptedRandom, WorldBuilder};
    use crate::world::Midnight;

    const LUXOR: CharacterId = CharacterId::LUXOR;
    const MORKIN: CharacterId = CharacterId::MORKIN;

    fn plain_world() -> Midnight {
        WorldBuilder::new().build(Box::new(FixedRandom(0)))
    }

    #[test]
    fn a_diagonal_ride_over_plains_costs_three() {
        let mut world = plain_world();
        assert!(world.can_walk_forward(LUXOR));
        world.walk_forward(LUXOR).unwrap();

        let luxor = world.character(LUXOR);
        assert_eq!(luxor.coord(), Coord::new(13, 41));
        assert_eq!(luxor.energy(), 124);
        assert_eq!(luxor.time().hours(), Time::DAWN - 3);
        assert!(world
            .location(Coord::new(13, 41))
            .characters()
            .contains(&LUXOR));
        assert!(!world
            .location(Coord::new(12, 40))
            .characters()
            .contains(&LUXOR));
    }

    #[test]
    fn a_lord_on_foot_pays_double_into_the_mountains() {
        let mut world = WorldBuilder::new()
            .feature(Coord::new(13, 41), Feature::Mountain)
            .edit_lord(LUXOR, |spec| spec.mounted = false)
            .build(Box::new(FixedRandom(0)));
        world.walk_forward(LUXOR).unwrap();

        // (2 base + 1 diagonal + 4 mountain) doubled on foot.
        let luxor = world.character(LUXOR);
        assert_eq!(luxor.energy(), 127 - 14);
        assert_eq!(luxor.time().hours(), Time::DAWN - 14);
    }

    #[test]
    fn farflame_flies_for_a_single_point() {
        let mut builder = WorldBuilder::new();
        for _ in 2..31 {
            builder = builder.lord(lord("Filler", Race::Free, 2, 2));
        }
        let mut farflame = lord("Farflame", Race::Dragon, 12, 23);
        farflame.mounted = false;
        let mut world = builder.lord(farflame).build(Box::new(FixedRandom(0)));

        world.walk_forward(CharacterId::FARFLAME).unwrap();
        let farflame = world.character(CharacterId::FARFLAME);
        assert_eq!(farflame.coord(), Coord::new(13, 24));
        assert_eq!(farflame.energy(), 126);
    }

    #[test]
    fn beasts_night_and_exhaustion_pin_a_lord_down() {
        let mut world = WorldBuilder::new()
            .object(Coord::new(12, 40), Object::Wolves)
            .build(Box::new(FixedRandom(0)));
        assert!(!world.can_leave(LUXOR));
        assert_eq!(world.walk_forward(LUXOR), Err(ActionError::Unavailable));

        let mut world = plain_world();
        world.character_mut(LUXOR).time_mut().night();
        assert!(!world.can_walk_forward(LUXOR));

        let mut world = plain_world();
        world.character_mut(LUXOR).set_energy(10);
        assert_eq!(world.character(LUXOR).condition(), Condition::UtterlyTired);
        assert!(!world.can_walk_forward(LUXOR));
    }

    #[test]
    fn enemies_ahead_block_a_walk_but_invite_attack() {
        let mut world = WorldBuilder::new()
            .edit_lord(MORKIN, |spec| {
                spec.x = 50;
                spec.y = 50;
            })
            .doomguard(WarbandSpec {
                x: 13,
                y: 41,
                how_many: 1000,
                troop: TroopKind::Riders,
                orders: WarbandOrders::Wander,
            })
            .build(Box::new(FixedRandom(0)));

        assert!(!world.can_walk_forward(LUXOR));
        assert!(world.can_attack(LUXOR));
        world.attack(LUXOR).unwrap();
        assert_eq!(world.character(LUXOR).coord(), Coord::new(13, 41));
    }

    #[test]
    fn a_crowded_tile_refuses_another_lord() {
        let mut builder = WorldBuilder::new();
        for _ in 0..Rules::MAX_CHARACTERS_PER_TILE {
            builder = builder.lord(lord("Filler", Race::Free, 13, 41));
        }
        let world = builder.build(Box::new(FixedRandom(0)));
        assert!(!world.can_walk_forward(LUXOR));
    }

    #[test]
    fn seek_swaps_the_sword_and_drop_restores_it() {
        let mut world = WorldBuilder::new()
            .object(Coord::new(12, 40), Object::Wolfslayer)
            .build(Box::new(FixedRandom(0)));

        assert_eq!(world.seek(LUXOR), Object::Wolfslayer);
        assert_eq!(world.character(LUXOR).object(), Object::Wolfslayer);
        assert_eq!(world.location(Coord::new(12, 40)).object(), Object::Nothing);

        world.drop_carried(LUXOR);
        assert_eq!(world.character(LUXOR).object(), Object::Nothing);
        assert_eq!(
            world.location(Coord::new(12, 40)).object(),
            Object::Wolfslayer
        );

        assert_eq!(world.seek(LUXOR), Object::Wolfslayer);
        assert_eq!(world.character(LUXOR).object(), Object::Wolfslayer);
    }

    #[test]
    fn shelter_restores_sixteen_energy_and_is_spent() {
        let mut world = WorldBuilder::new()
            .object(Coord::new(12, 40), Object::Shelter)
            .edit_lord(LUXOR, |spec| spec.energy = 64)
            .build(Box::new(FixedRandom(0)));

        assert_eq!(world.seek(LUXOR), Object::Shelter);
        assert_eq!(world.character(LUXOR).energy(), 80);
        assert_eq!(world.character(LUXOR).found(), Some(Object::Shelter));
        assert_eq!(world.location(Coord::new(12, 40)).object(), Object::Nothing);
    }

    #[test]
    fn the_waters_and_the_shadows_remake_a_lord() {
        let mut world = WorldBuilder::new()
            .object(Coord::new(12, 40), Object::WatersOfLife)
            .edit_lord(LUXOR, |spec| {
                spec.energy = 10;
                spec.riders = 100;
            })
            .build(Box::new(FixedRandom(0)));
        world.seek(LUXOR);
        assert_eq!(world.character(LUXOR).energy(), 120);
        assert_eq!(world.character(LUXOR).riders().energy(), 120);

        let mut world = WorldBuilder::new()
            .object(Coord::new(12, 40), Object::ShadowsOfDeath)
            .edit_lord(LUXOR, |spec| spec.riders = 100)
            .build(Box::new(FixedRandom(0)));
        world.seek(LUXOR);
        assert_eq!(world.character(LUXOR).energy(), 0);
        assert_eq!(world.character(LUXOR).riders().energy(), 0);
    }

    #[test]
    fn only_morkin_may_take_the_regalia() {
        let mut world = WorldBuilder::new()
            .object(Coord::new(12, 40), Object::IceCrown)
            .build(Box::new(FixedRandom(0)));

        assert_eq!(world.seek(LUXOR), Object::Nothing);
        assert_eq!(world.character(LUXOR).found(), Some(Object::IceCrown));
        assert_eq!(world.character(LUXOR).object(), Object::Nothing);
        assert_eq!(world.location(Coord::new(12, 40)).object(), Object::IceCrown);

        assert_eq!(world.seek(MORKIN), Object::IceCrown);
        assert_eq!(world.character(MORKIN).object(), Object::IceCrown);
        assert_eq!(world.location(Coord::new(12, 40)).object(), Object::Nothing);
    }

    #[test]
    fn a_sword_kills_its_beast_outright() {
        let mut world = WorldBuilder::new()
            .object(Coord::new(12, 40), Object::Wolves)
            .edit_lord(LUXOR, |spec| spec.object = Object::Wolfslayer)
            .build(Box::new(FixedRandom(255)));

        assert!(world.can_fight(LUXOR));
        assert_eq!(world.fight(LUXOR), Object::Wolves);
        let luxor = world.character(LUXOR);
        assert!(luxor.is_alive());
        assert!(luxor.is_on_horse());
        assert_eq!(luxor.killed(), Some(Object::Wolves));
        assert_eq!(world.location(Coord::new(12, 40)).object(), Object::Nothing);
    }

    #[test]
    fn soldiers_make_short_work_of_beasts() {
        let mut world = WorldBuilder::new()
            .object(Coord::new(12, 40), Object::Dragons)
            .edit_lord(MORKIN, |spec| spec.warriors = 200)
            .build(Box::new(FixedRandom(255)));
        world.fight(LUXOR);
        assert!(world.character(LUXOR).is_alive());
        assert_eq!(world.location(Coord::new(12, 40)).object(), Object::Nothing);
    }

    #[test]
    fn a_lone_lord_may_die_fighting() {
        let mut world = WorldBuilder::new()
            .object(Coord::new(12, 40), Object::Wolves)
            .edit_lord(MORKIN, |spec| {
                spec.x = 50;
                spec.y = 50;
            })
            .build(Box::new(ScriptedRandom::new([1, 255])));

        world.fight(LUXOR);
        let luxor = world.character(LUXOR);
        assert!(!luxor.is_alive());
        assert!(!luxor.is_on_horse());
        assert_eq!(luxor.killed(), Some(Object::Wolves));
        assert_eq!(world.location(Coord::new(12, 40)).object(), Object::Nothing);
    }

    #[test]
    fn recruiting_needs_a_key_and_shared_ground() {
        let mut gard = lord("Gard", Race::Free, 12, 40);
        gard.recruited = false;
        gard.recruited_by_key = 0x01;
        let mut fawkrin = lord("Fawkrin", Race::Skulkrin, 12, 40);
        fawkrin.recruited = false;
        fawkrin.recruited_by_key = 0x20;
        let mut world = WorldBuilder::new()
            .lord(gard)
            .lord(fawkrin)
            .build(Box::new(FixedRandom(0)));

        let gard = CharacterId(2);
        let fawkrin = CharacterId(3);
        assert!(world.can_recruit(LUXOR, gard));
        world.recruit(LUXOR, gard).unwrap();
        assert!(world.character(gard).is_recruited());

        // Luxor's key (0x17) does not open the Skulkrin's allegiance.
        assert!(!world.can_recruit(LUXOR, fawkrin));
        assert_eq!(world.recruit(LUXOR, fawkrin), Err(ActionError::Unavailable));
    }

    #[test]
    fn recruit_men_and_stand_on_guard_move_a_levy() {
        let mut world = WorldBuilder::new()
            .feature(Coord::new(12, 40), Feature::Keep)
            .garrison(GarrisonSpec {
                x: 12,
                y: 40,
                race: Race::Free,
                how_many: 300,
                troop: TroopKind::Warriors,
            })
            .build(Box::new(FixedRandom(0)));

        assert!(world.can_recruit_men(LUXOR));
        world.recruit_men(LUXOR).unwrap();
        assert_eq!(world.guard_at(Coord::new(12, 40)).unwrap().how_many(), 200);
        assert_eq!(world.character(LUXOR).warriors().how_many(), 100);

        // A drained guard has no men to spare.
        assert!(!world.can_recruit_men(LUXOR));

        assert!(world.can_stand_on_guard(LUXOR));
        world.stand_on_guard(LUXOR).unwrap();
        assert_eq!(world.guard_at(Coord::new(12, 40)).unwrap().how_many(), 300);
        assert_eq!(world.character(LUXOR).warriors().how_many(), 0);
    }

    #[test]
    fn hiding_is_for_soldierless_lords_and_never_morkin() {
        let mut world = WorldBuilder::new()
            .edit_lord(LUXOR, |spec| spec.riders = 100)
            .build(Box::new(FixedRandom(0)));
        assert!(!world.can_hide(LUXOR));
        assert!(!world.can_hide(MORKIN));

        let mut world = plain_world();
        assert!(world.can_hide(LUXOR));
        world.execute(Command::Hide).unwrap();
        assert!(world.character(LUXOR).is_hidden());
        assert!(!world.can_leave(LUXOR));
    }

    #[test]
    fn commands_drive_the_selected_lord() {
        let mut world = plain_world();
        assert_eq!(
            world.execute(Command::TurnRight),
            Ok(CommandOutcome::Turned(Direction::South))
        );
        assert_eq!(
            world.execute(Command::TurnLeft),
            Ok(CommandOutcome::Turned(Direction::Southeast))
        );
        assert_eq!(
            world.execute(Command::SwitchCharacter(MORKIN)),
            Ok(CommandOutcome::Switched(MORKIN))
        );
        assert_eq!(world.selected(), MORKIN);
        assert_eq!(
            world.execute(Command::SwitchCharacter(CharacterId(40))),
            Err(ActionError::UnknownCharacter)
        );
        assert_eq!(
            world.execute(Command::Recruit(CharacterId(40))),
            Err(ActionError::UnknownCharacter)
        );
    }

    #[test]
    fn an_unrecruited_lord_refuses_command() {
        let mut stranger = lord("Stranger", Race::Free, 20, 20);
        stranger.recruited = false;
        let mut world = WorldBuilder::new()
            .lord(stranger)
            .build(Box::new(FixedRandom(0)));
        assert_eq!(
            world.execute(Command::SwitchCharacter(CharacterId(2))),
            Err(ActionError::NotControllable)
        );
    }

    #[test]
    fn the_day_ends_and_dawn_breaks() {
        let mut world = WorldBuilder::new()
            .edit_lord(LUXOR, |spec| spec.energy = 50)
            .build(Box::new(FixedRandom(0)));
        world.walk_forward(LUXOR).unwrap();
        assert_eq!(world.character(LUXOR).energy(), 47);

        world.execute(Command::EndDay).unwrap();
        assert_eq!(world.day(), 1);
        assert!(world.character(LUXOR).time().is_dawn());
        // Overnight recovery: 9 plus half the remaining hours (13 / 2).
        assert_eq!(world.character(LUXOR).energy(), 47 + 9 + 6);
    }
}
