//! Static campaign content for The Lords of Midnight.
//!
//! This crate houses the byte tables and initial rosters the engine consumes
//! at world construction: the packed map tables, the Doomguard route graph,
//! and the lords, garrisons, and Doomguard of the first night. Content never
//! appears in engine state; the engine owns live copies built from these
//! specs.

mod doomguard;
mod garrisons;
mod lords;
mod reference;
mod routes;
mod terrain;

pub use doomguard::DOOMGUARD;
pub use garrisons::GARRISONS;
pub use lords::LORDS;
pub use reference::REFERENCE_MAP;
pub use routes::ROUTES;
pub use terrain::MAIN_MAP;

use midnight_core::Scenario;

/// The shipped campaign: the land of Midnight on the eve of the war.
pub fn scenario() -> Scenario<'static> {
    Scenario {
        terrain: &MAIN_MAP,
        reference: &REFERENCE_MAP,
        routes: &ROUTES,
        lords: &LORDS,
        garrisons: &GARRISONS,
        doomguard: &DOOMGUARD,
    }
}
