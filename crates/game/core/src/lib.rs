//! Deterministic simulation of The Lords of Midnight campaign.
//!
//! `midnight-core` defines the canonical rules (map, lords, armies, battles,
//! the night update) and exposes pure APIs for clients: a renderer reads the
//! query surface, an input layer issues [`Command`]s, and all state mutation
//! flows through [`world::Midnight`]. Given equal scenarios and random
//! sources, two worlds fed the same commands stay byte-identical.

pub mod army;
pub mod battle;
pub mod character;
pub mod config;
pub mod doomguard;
pub mod location;
pub mod map;
pub mod rng;
pub mod scenario;
pub mod types;
pub mod world;

pub use army::{Army, Garrison};
pub use battle::{Battle, ForceRef};
pub use character::{Character, RecruitKey};
pub use config::Rules;
pub use doomguard::{Doomguard, Target};
pub use location::Location;
pub use map::{Map, MapError, RouteNode};
pub use rng::{FixedRandom, PcgRandom, RandomSource};
pub use scenario::{
    GarrisonSpec, LordSpec, Scenario, ScenarioError, WarbandOrders, WarbandSpec,
};
pub use types::{
    Area, CharacterId, Condition, Coord, Courage, Direction, DoomguardId, Fear, Feature,
    GarrisonId, Object, Orders, Race, Status, Time, TroopKind,
};
pub use world::{ActionError, Command, CommandOutcome, Midnight};
