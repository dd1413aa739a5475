//! Initial-world description.
//!
//! The engine consumes any [`Scenario`]: the shipped campaign lives in the
//! content crate, and tests build miniature ones. A scenario borrows its
//! tables, so content can keep them in static arrays.

use crate::map::{MapError, RouteNode};
use crate::types::{Direction, Object, Race, TroopKind};

/// Errors raised while a world is built from a scenario.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("lord {index} starts outside the map")]
    LordOutOfBounds { index: usize },

    #[error("scenario must include Luxor and Morkin")]
    MissingPrinces,

    #[error("doomguard {index} follows lord {lord}, which does not exist")]
    UnknownFollowTarget { index: usize, lord: u8 },

    #[error("doomguard {index} targets route node {node}, which does not exist")]
    UnknownRouteTarget { index: usize, node: u8 },
}

/// Description of an entire starting world.
#[derive(Clone, Copy, Debug)]
pub struct Scenario<'a> {
    /// Main map table: low nibble feature, high nibble object, row-major.
    pub terrain: &'a [u8],
    /// Reference table: low 6 bits area, bit 6 domain, bit 7 special.
    pub reference: &'a [u8],
    /// Route graph for ROUTE and GOTO orders.
    pub routes: &'a [RouteNode],
    /// The named lords, in roster (id) order.
    pub lords: &'a [LordSpec],
    /// Static guards for keeps and citadels.
    pub garrisons: &'a [GarrisonSpec],
    /// The roaming Doomguard, in spawn (id) order.
    pub doomguard: &'a [WarbandSpec],
}

/// One lord's starting sheet.
#[derive(Clone, Copy, Debug)]
pub struct LordSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub race: Race,
    pub x: i32,
    pub y: i32,
    pub life: i32,
    pub energy: u8,
    pub strength: u32,
    pub courage_base: i32,
    pub recruiting_key: u8,
    pub recruited_by_key: u8,
    pub riders: u32,
    pub warriors: u32,
    pub direction: Direction,
    pub mounted: bool,
    pub recruited: bool,
    pub object: Object,
}

/// One stronghold guard.
#[derive(Clone, Copy, Debug)]
pub struct GarrisonSpec {
    pub x: i32,
    pub y: i32,
    pub race: Race,
    pub how_many: u32,
    pub troop: TroopKind,
}

/// One Doomguard army and its standing orders.
#[derive(Clone, Copy, Debug)]
pub struct WarbandSpec {
    pub x: i32,
    pub y: i32,
    pub how_many: u32,
    pub troop: TroopKind,
    pub orders: WarbandOrders,
}

/// Scenario-level orders; resolved to live targets at world construction.
#[derive(Clone, Copy, Debug)]
pub enum WarbandOrders {
    /// Hunt the lord with this roster id.
    Follow(u8),
    /// March on the tile of this route node.
    Goto(u8),
    /// Patrol the graph starting from this route node.
    Route(u8),
    /// Drift at random.
    Wander,
}
