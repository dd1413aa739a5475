//! Doomdark's armies on the first night, in spawn order.

use midnight_core::{TroopKind, WarbandOrders, WarbandSpec};

pub static DOOMGUARD: [WarbandSpec; 128] = [
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(0) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(0) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(0) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(0) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(0) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(0) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(0) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(0) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(0) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(0) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(1) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(2) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(3) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(4) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(5) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(8) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(9) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(10) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(11) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(13) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(14) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(16) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(19) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(20) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(21) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(22) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(23) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(24) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(25) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(26) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(27) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(6) },
    WarbandSpec { x: 22, y: 5, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(3) },
    WarbandSpec { x: 22, y: 5, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(3) },
    WarbandSpec { x: 22, y: 5, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(3) },
    WarbandSpec { x: 22, y: 5, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(3) },
    WarbandSpec { x: 37, y: 7, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(7) },
    WarbandSpec { x: 37, y: 7, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(7) },
    WarbandSpec { x: 37, y: 7, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(7) },
    WarbandSpec { x: 37, y: 7, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(7) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(1) },
    WarbandSpec { x: 29, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Follow(1) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(14) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 18, y: 21, how_many: 1200, troop: TroopKind::Riders, orders: WarbandOrders::Route(32) },
    WarbandSpec { x: 24, y: 29, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(44) },
    WarbandSpec { x: 24, y: 29, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(44) },
    WarbandSpec { x: 24, y: 29, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(44) },
    WarbandSpec { x: 24, y: 29, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Route(44) },
    WarbandSpec { x: 7, y: 21, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Wander },
    WarbandSpec { x: 27, y: 16, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Wander },
    WarbandSpec { x: 40, y: 8, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Wander },
    WarbandSpec { x: 39, y: 23, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Wander },
    WarbandSpec { x: 21, y: 32, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Wander },
    WarbandSpec { x: 23, y: 32, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Wander },
    WarbandSpec { x: 17, y: 28, how_many: 1000, troop: TroopKind::Warriors, orders: WarbandOrders::Wander },
    WarbandSpec { x: 18, y: 3, how_many: 1000, troop: TroopKind::Warriors, orders: WarbandOrders::Wander },
    WarbandSpec { x: 30, y: 29, how_many: 1000, troop: TroopKind::Warriors, orders: WarbandOrders::Wander },
    WarbandSpec { x: 16, y: 13, how_many: 1000, troop: TroopKind::Warriors, orders: WarbandOrders::Wander },
    WarbandSpec { x: 31, y: 22, how_many: 1000, troop: TroopKind::Warriors, orders: WarbandOrders::Wander },
    WarbandSpec { x: 6, y: 37, how_many: 1000, troop: TroopKind::Warriors, orders: WarbandOrders::Wander },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 29, y: 7, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 29, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 22, y: 5, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 37, y: 7, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 23, y: 7, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 28, y: 4, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 25, y: 11, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(14) },
    WarbandSpec { x: 36, y: 12, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(7) },
    WarbandSpec { x: 40, y: 8, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(7) },
    WarbandSpec { x: 39, y: 9, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(7) },
    WarbandSpec { x: 32, y: 6, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 21, y: 11, how_many: 1200, troop: TroopKind::Warriors, orders: WarbandOrders::Goto(3) },
    WarbandSpec { x: 29, y: 9, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 33, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 30, y: 6, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 27, y: 6, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Goto(6) },
    WarbandSpec { x: 26, y: 7, how_many: 1000, troop: TroopKind::Riders, orders: WarbandOrders::Goto(6) },
];
