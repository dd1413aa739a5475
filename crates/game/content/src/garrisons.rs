//! The stronghold garrisons: every keep and citadel's standing guard.

use midnight_core::{GarrisonSpec, Race, TroopKind};

pub static GARRISONS: [GarrisonSpec; 102] = [
    GarrisonSpec { x: 8, y: 0, race: Race::Free, how_many: 600, troop: TroopKind::Warriors },
    GarrisonSpec { x: 46, y: 3, race: Race::Free, how_many: 200, troop: TroopKind::Riders },
    GarrisonSpec { x: 28, y: 4, race: Race::Foul, how_many: 400, troop: TroopKind::Warriors },
    GarrisonSpec { x: 22, y: 5, race: Race::Foul, how_many: 1000, troop: TroopKind::Warriors },
    GarrisonSpec { x: 32, y: 6, race: Race::Foul, how_many: 300, troop: TroopKind::Riders },
    GarrisonSpec { x: 23, y: 7, race: Race::Foul, how_many: 500, troop: TroopKind::Warriors },
    GarrisonSpec { x: 29, y: 7, race: Race::Foul, how_many: 1200, troop: TroopKind::Riders },
    GarrisonSpec { x: 37, y: 7, race: Race::Foul, how_many: 1100, troop: TroopKind::Warriors },
    GarrisonSpec { x: 40, y: 8, race: Race::Foul, how_many: 400, troop: TroopKind::Riders },
    GarrisonSpec { x: 57, y: 8, race: Race::Free, how_many: 300, troop: TroopKind::Warriors },
    GarrisonSpec { x: 39, y: 9, race: Race::Foul, how_many: 500, troop: TroopKind::Warriors },
    GarrisonSpec { x: 11, y: 10, race: Race::Fey, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 21, y: 11, race: Race::Foul, how_many: 300, troop: TroopKind::Warriors },
    GarrisonSpec { x: 25, y: 11, race: Race::Foul, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 29, y: 12, race: Race::Foul, how_many: 1000, troop: TroopKind::Riders },
    GarrisonSpec { x: 36, y: 12, race: Race::Foul, how_many: 300, troop: TroopKind::Riders },
    GarrisonSpec { x: 51, y: 12, race: Race::Free, how_many: 200, troop: TroopKind::Riders },
    GarrisonSpec { x: 62, y: 12, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 16, y: 13, race: Race::Foul, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 55, y: 13, race: Race::Free, how_many: 300, troop: TroopKind::Warriors },
    GarrisonSpec { x: 57, y: 15, race: Race::Free, how_many: 700, troop: TroopKind::Warriors },
    GarrisonSpec { x: 14, y: 16, race: Race::Foul, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 27, y: 16, race: Race::Foul, how_many: 500, troop: TroopKind::Warriors },
    GarrisonSpec { x: 34, y: 16, race: Race::Foul, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 42, y: 16, race: Race::Fey, how_many: 550, troop: TroopKind::Warriors },
    GarrisonSpec { x: 52, y: 16, race: Race::Free, how_many: 150, troop: TroopKind::Riders },
    GarrisonSpec { x: 19, y: 17, race: Race::Foul, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 22, y: 18, race: Race::Foul, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 54, y: 18, race: Race::Free, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 14, y: 20, race: Race::Foul, how_many: 100, troop: TroopKind::Warriors },
    GarrisonSpec { x: 49, y: 20, race: Race::Free, how_many: 300, troop: TroopKind::Warriors },
    GarrisonSpec { x: 57, y: 20, race: Race::Fey, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 18, y: 21, race: Race::Foul, how_many: 900, troop: TroopKind::Warriors },
    GarrisonSpec { x: 42, y: 21, race: Race::Foul, how_many: 100, troop: TroopKind::Warriors },
    GarrisonSpec { x: 31, y: 22, race: Race::Foul, how_many: 350, troop: TroopKind::Warriors },
    GarrisonSpec { x: 46, y: 22, race: Race::Free, how_many: 400, troop: TroopKind::Riders },
    GarrisonSpec { x: 39, y: 23, race: Race::Foul, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 56, y: 24, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 32, y: 25, race: Race::Foul, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 45, y: 26, race: Race::Free, how_many: 300, troop: TroopKind::Warriors },
    GarrisonSpec { x: 54, y: 26, race: Race::Free, how_many: 150, troop: TroopKind::Riders },
    GarrisonSpec { x: 34, y: 27, race: Race::Foul, how_many: 200, troop: TroopKind::Riders },
    GarrisonSpec { x: 17, y: 28, race: Race::Foul, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 42, y: 28, race: Race::Free, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 24, y: 29, race: Race::Foul, how_many: 1000, troop: TroopKind::Warriors },
    GarrisonSpec { x: 30, y: 29, race: Race::Foul, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 51, y: 29, race: Race::Free, how_many: 150, troop: TroopKind::Riders },
    GarrisonSpec { x: 57, y: 29, race: Race::Free, how_many: 600, troop: TroopKind::Riders },
    GarrisonSpec { x: 55, y: 31, race: Race::Targ, how_many: 200, troop: TroopKind::Riders },
    GarrisonSpec { x: 21, y: 32, race: Race::Foul, how_many: 300, troop: TroopKind::Warriors },
    GarrisonSpec { x: 23, y: 32, race: Race::Foul, how_many: 300, troop: TroopKind::Warriors },
    GarrisonSpec { x: 43, y: 32, race: Race::Free, how_many: 700, troop: TroopKind::Warriors },
    GarrisonSpec { x: 13, y: 33, race: Race::Free, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 34, y: 33, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 30, y: 34, race: Race::Free, how_many: 100, troop: TroopKind::Riders },
    GarrisonSpec { x: 59, y: 34, race: Race::Targ, how_many: 350, troop: TroopKind::Riders },
    GarrisonSpec { x: 21, y: 36, race: Race::Free, how_many: 400, troop: TroopKind::Warriors },
    GarrisonSpec { x: 54, y: 38, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 27, y: 39, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 22, y: 40, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 25, y: 40, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 48, y: 40, race: Race::Free, how_many: 100, troop: TroopKind::Warriors },
    GarrisonSpec { x: 42, y: 41, race: Race::Free, how_many: 150, troop: TroopKind::Riders },
    GarrisonSpec { x: 55, y: 41, race: Race::Fey, how_many: 100, troop: TroopKind::Riders },
    GarrisonSpec { x: 17, y: 42, race: Race::Free, how_many: 250, troop: TroopKind::Riders },
    GarrisonSpec { x: 28, y: 42, race: Race::Free, how_many: 750, troop: TroopKind::Warriors },
    GarrisonSpec { x: 37, y: 43, race: Race::Free, how_many: 100, troop: TroopKind::Riders },
    GarrisonSpec { x: 59, y: 43, race: Race::Fey, how_many: 500, troop: TroopKind::Warriors },
    GarrisonSpec { x: 44, y: 45, race: Race::Free, how_many: 550, troop: TroopKind::Warriors },
    GarrisonSpec { x: 29, y: 46, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 42, y: 46, race: Race::Free, how_many: 100, troop: TroopKind::Riders },
    GarrisonSpec { x: 7, y: 47, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 10, y: 47, race: Race::Free, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 48, y: 48, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 21, y: 49, race: Race::Free, how_many: 150, troop: TroopKind::Riders },
    GarrisonSpec { x: 45, y: 49, race: Race::Free, how_many: 250, troop: TroopKind::Riders },
    GarrisonSpec { x: 54, y: 50, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 39, y: 51, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 42, y: 51, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 50, y: 51, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 46, y: 52, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 12, y: 54, race: Race::Free, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 25, y: 54, race: Race::Free, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 44, y: 54, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 55, y: 54, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 7, y: 55, race: Race::Free, how_many: 100, troop: TroopKind::Riders },
    GarrisonSpec { x: 10, y: 55, race: Race::Free, how_many: 600, troop: TroopKind::Riders },
    GarrisonSpec { x: 17, y: 56, race: Race::Free, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 21, y: 56, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 37, y: 56, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 8, y: 57, race: Race::Free, how_many: 150, troop: TroopKind::Warriors },
    GarrisonSpec { x: 12, y: 57, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 39, y: 58, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
    GarrisonSpec { x: 56, y: 58, race: Race::Free, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 63, y: 58, race: Race::Free, how_many: 150, troop: TroopKind::Riders },
    GarrisonSpec { x: 42, y: 59, race: Race::Free, how_many: 300, troop: TroopKind::Warriors },
    GarrisonSpec { x: 45, y: 59, race: Race::Free, how_many: 750, troop: TroopKind::Riders },
    GarrisonSpec { x: 4, y: 60, race: Race::Free, how_many: 50, troop: TroopKind::Riders },
    GarrisonSpec { x: 33, y: 60, race: Race::Fey, how_many: 300, troop: TroopKind::Riders },
    GarrisonSpec { x: 23, y: 60, race: Race::Free, how_many: 250, troop: TroopKind::Riders },
    GarrisonSpec { x: 59, y: 60, race: Race::Free, how_many: 250, troop: TroopKind::Warriors },
    GarrisonSpec { x: 14, y: 60, race: Race::Free, how_many: 200, troop: TroopKind::Warriors },
];
