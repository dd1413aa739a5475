//! The Doomguard route graph: patrol waypoints across the foul
//! heartland, each naming its two successor nodes.

use midnight_core::RouteNode;

pub static ROUTES: [RouteNode; 48] = [
    RouteNode::new(20, 3, 3, 1),
    RouteNode::new(24, 2, 2, 0),
    RouteNode::new(27, 3, 1, 4),
    RouteNode::new(22, 5, 0, 4),
    RouteNode::new(25, 6, 3, 1),
    RouteNode::new(31, 4, 2, 6),
    RouteNode::new(29, 7, 4, 5),
    RouteNode::new(37, 7, 8, 11),
    RouteNode::new(40, 6, 7, 9),
    RouteNode::new(43, 9, 40, 8),
    RouteNode::new(39, 11, 41, 7),
    RouteNode::new(34, 9, 12, 7),
    RouteNode::new(31, 10, 11, 14),
    RouteNode::new(26, 10, 4, 12),
    RouteNode::new(29, 12, 12, 24),
    RouteNode::new(23, 12, 13, 16),
    RouteNode::new(19, 11, 15, 17),
    RouteNode::new(16, 9, 16, 18),
    RouteNode::new(13, 12, 19, 17),
    RouteNode::new(15, 15, 18, 20),
    RouteNode::new(18, 17, 29, 32),
    RouteNode::new(21, 15, 22, 15),
    RouteNode::new(25, 15, 21, 23),
    RouteNode::new(28, 16, 22, 14),
    RouteNode::new(31, 14, 12, 14),
    RouteNode::new(33, 17, 24, 26),
    RouteNode::new(30, 19, 27, 23),
    RouteNode::new(26, 19, 26, 28),
    RouteNode::new(23, 18, 27, 29),
    RouteNode::new(20, 19, 20, 28),
    RouteNode::new(16, 20, 32, 20),
    RouteNode::new(14, 23, 30, 46),
    RouteNode::new(18, 21, 30, 20),
    RouteNode::new(21, 23, 47, 29),
    RouteNode::new(25, 22, 35, 27),
    RouteNode::new(28, 22, 34, 26),
    RouteNode::new(31, 24, 42, 43),
    RouteNode::new(34, 22, 42, 36),
    RouteNode::new(37, 19, 41, 25),
    RouteNode::new(40, 16, 41, 10),
    RouteNode::new(43, 13, 9, 10),
    RouteNode::new(37, 14, 10, 38),
    RouteNode::new(34, 25, 37, 36),
    RouteNode::new(29, 26, 36, 35),
    RouteNode::new(24, 29, 45, 47),
    RouteNode::new(20, 27, 47, 33),
    RouteNode::new(17, 25, 31, 32),
    RouteNode::new(21, 26, 45, 33),
];
