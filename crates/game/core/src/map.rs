//! The 64×61 tile grid and the route graph overlaid on it.
//!
//! The map is decoded once from two parallel byte tables: the main table
//! packs feature (low nibble) and object (high nibble); the reference table
//! packs area index (low 6 bits), the domain flag (bit 6) and the initial
//! special flag (bit 7). Route nodes are a sparse list of coordinates, each
//! with two successor indices into the same list.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::location::Location;
use crate::types::{Area, Coord, Direction, Feature, Object};

/// Errors decoding the static tables; these surface at world construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map table holds {got} bytes, expected {expected}")]
    TableSize { expected: usize, got: usize },

    #[error("route node {index} lies outside the map")]
    RouteNodeOutOfBounds { index: usize },

    #[error("route node {index} names successor {successor}, which does not exist")]
    RouteSuccessor { index: usize, successor: usize },
}

/// One vertex of the route graph: a map coordinate and the indices of its
/// two successor nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteNode {
    pub x: u8,
    pub y: u8,
    pub next_a: u8,
    pub next_b: u8,
}

impl RouteNode {
    pub const fn new(x: u8, y: u8, next_a: u8, next_b: u8) -> Self {
        Self {
            x,
            y,
            next_a,
            next_b,
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.x as i32, self.y as i32)
    }
}

/// The fixed tile grid, the frozen-waste sentinel, and the route graph.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    tiles: Vec<Location>,
    frozen_waste: Location,
    routes: Vec<RouteNode>,
    route_index: BTreeMap<Coord, usize>,
}

impl Map {
    pub const WIDTH: i32 = 64;
    pub const HEIGHT: i32 = 61;

    pub const TOWER_OF_DESPAIR: Coord = Coord::new(26, 4);
    pub const XAJORKITH: Coord = Coord::new(45, 59);
    pub const USHGARAK: Coord = Coord::new(29, 7);
    pub const LAKE_MIRROW: Coord = Coord::new(9, 17);

    /// Decodes the grid and route graph from the packed byte tables.
    pub fn from_tables(
        terrain: &[u8],
        reference: &[u8],
        routes: &[RouteNode],
    ) -> Result<Self, MapError> {
        let expected = (Self::WIDTH * Self::HEIGHT) as usize;
        for table in [terrain, reference] {
            if table.len() != expected {
                return Err(MapError::TableSize {
                    expected,
                    got: table.len(),
                });
            }
        }

        let mut tiles = Vec::with_capacity(expected);
        let mut i = 0;
        for y in 0..Self::HEIGHT {
            for x in 0..Self::WIDTH {
                // Four-bit and six-bit fields always name a valid variant.
                let feature = Feature::from_repr(terrain[i] & 0x0f).unwrap();
                let object = Object::from_repr(terrain[i] >> 4).unwrap();
                let area = Area::from_repr(reference[i] & 0x3f).unwrap();
                let domain = reference[i] & 0x40 != 0;
                let special = reference[i] & 0x80 != 0;
                tiles.push(Location::new(
                    Coord::new(x, y),
                    feature,
                    object,
                    area,
                    domain,
                    special,
                ));
                i += 1;
            }
        }

        let mut route_index = BTreeMap::new();
        for (index, node) in routes.iter().enumerate() {
            let at = node.coord();
            if at.x >= Self::WIDTH || at.y >= Self::HEIGHT {
                return Err(MapError::RouteNodeOutOfBounds { index });
            }
            for successor in [node.next_a as usize, node.next_b as usize] {
                if successor >= routes.len() {
                    return Err(MapError::RouteSuccessor { index, successor });
                }
            }
            route_index.insert(at, index);
        }

        Ok(Self {
            tiles,
            frozen_waste: Location::frozen_waste(),
            routes: routes.to_vec(),
            route_index,
        })
    }

    pub fn contains(at: Coord) -> bool {
        at.x >= 0 && at.y >= 0 && at.x < Self::WIDTH && at.y < Self::HEIGHT
    }

    fn index(at: Coord) -> usize {
        (at.y * Self::WIDTH + at.x) as usize
    }

    /// The tile at `at`; out-of-range coordinates yield the frozen-waste
    /// sentinel.
    pub fn location(&self, at: Coord) -> &Location {
        if Self::contains(at) {
            &self.tiles[Self::index(at)]
        } else {
            &self.frozen_waste
        }
    }

    pub(crate) fn location_mut(&mut self, at: Coord) -> &mut Location {
        if Self::contains(at) {
            &mut self.tiles[Self::index(at)]
        } else {
            // Unreachable for any valid command sequence: every mover filters
            // the frozen waste before stepping. The sentinel soaks up stray
            // writes the way the original's singleton did.
            &mut self.frozen_waste
        }
    }

    /// The tile one step ahead of `at`, frozen waste beyond the border.
    pub fn in_front(&self, at: Coord, direction: Direction) -> &Location {
        self.location(at.step(direction))
    }

    /// Advances up to three tiles, stopping early at the first tile that is
    /// not open plains or that is marked special.
    pub fn looking_towards(&self, at: Coord, direction: Direction) -> &Location {
        let mut here = at;
        for _ in 0..3 {
            here = here.step(direction);
            let location = self.location(here);
            if location.feature() != Feature::Plains || location.is_special() {
                break;
            }
        }
        self.location(here)
    }

    /// Manhattan distance between two tiles.
    pub fn distance(a: Coord, b: Coord) -> i32 {
        (a.x - b.x).abs() + (a.y - b.y).abs()
    }

    /// The diagonal-preferred compass direction from `origin` to `target`;
    /// an equal axis collapses to the cardinal direction.
    pub fn direction_towards(origin: Coord, target: Coord) -> Direction {
        match (origin.x.cmp(&target.x), origin.y.cmp(&target.y)) {
            (Ordering::Greater, Ordering::Greater) => Direction::Northwest,
            (Ordering::Greater, Ordering::Less) => Direction::Southwest,
            (Ordering::Greater, Ordering::Equal) => Direction::West,
            (Ordering::Less, Ordering::Greater) => Direction::Northeast,
            (Ordering::Less, Ordering::Less) => Direction::Southeast,
            (Ordering::Less, Ordering::Equal) => Direction::East,
            (Ordering::Equal, Ordering::Greater) => Direction::North,
            (Ordering::Equal, Ordering::Less) => Direction::South,
            (Ordering::Equal, Ordering::Equal) => {
                unreachable!("no direction between identical tiles")
            }
        }
    }

    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    /// Coordinate of the i-th route node.
    pub fn route_node(&self, index: usize) -> Option<Coord> {
        self.routes.get(index).map(RouteNode::coord)
    }

    /// Index of the route node at `at`, if the tile is a node.
    pub fn node_index(&self, at: Coord) -> Option<usize> {
        self.route_index.get(&at).copied()
    }

    /// First successor of the route node at `at`.
    pub fn next_node_a(&self, at: Coord) -> Option<Coord> {
        let node = &self.routes[self.node_index(at)?];
        self.route_node(node.next_a as usize)
    }

    /// Second successor of the route node at `at`.
    pub fn next_node_b(&self, at: Coord) -> Option<Coord> {
        let node = &self.routes[self.node_index(at)?];
        self.route_node(node.next_b as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_plains() -> (Vec<u8>, Vec<u8>) {
        let size = (Map::WIDTH * Map::HEIGHT) as usize;
        (vec![Feature::Plains as u8; size], vec![Area::Gard as u8; size])
    }

    fn set_feature(terrain: &mut [u8], at: Coord, feature: Feature) {
        let index = (at.y * Map::WIDTH + at.x) as usize;
        terrain[index] = (terrain[index] & 0xf0) | feature as u8;
    }

    #[test]
    fn out_of_range_queries_hit_the_frozen_waste() {
        let (terrain, reference) = open_plains();
        let map = Map::from_tables(&terrain, &reference, &[]).unwrap();
        assert_eq!(
            map.location(Coord::new(-1, 5)).feature(),
            Feature::FrozenWaste
        );
        assert_eq!(
            map.location(Coord::new(64, 0)).feature(),
            Feature::FrozenWaste
        );
        assert_eq!(
            map.in_front(Coord::new(0, 0), Direction::North).feature(),
            Feature::FrozenWaste
        );
        assert_eq!(map.location(Coord::new(12, 40)).feature(), Feature::Plains);
    }

    #[test]
    fn truncated_tables_are_rejected() {
        let (terrain, reference) = open_plains();
        let result = Map::from_tables(&terrain[..100], &reference, &[]);
        assert!(matches!(result, Err(MapError::TableSize { .. })));
    }

    #[test]
    fn looking_towards_stops_at_the_first_landmark() {
        let (mut terrain, reference) = open_plains();
        set_feature(&mut terrain, Coord::new(10, 8), Feature::Forest);
        let map = Map::from_tables(&terrain, &reference, &[]).unwrap();

        // Two plains tiles, then forest: the gaze lands on the forest.
        let seen = map.looking_towards(Coord::new(8, 8), Direction::East);
        assert_eq!(seen.coord(), Coord::new(10, 8));

        // Nothing but plains: the gaze travels the full three tiles.
        let seen = map.looking_towards(Coord::new(20, 20), Direction::South);
        assert_eq!(seen.coord(), Coord::new(20, 23));
    }

    #[test]
    fn distance_is_manhattan() {
        assert_eq!(Map::distance(Coord::new(1, 2), Coord::new(4, 6)), 7);
        assert_eq!(Map::distance(Coord::new(4, 6), Coord::new(1, 2)), 7);
        assert_eq!(Map::distance(Coord::new(3, 3), Coord::new(3, 3)), 0);
    }

    #[test]
    fn headings_prefer_diagonals_and_collapse_on_equal_axes() {
        let origin = Coord::new(10, 10);
        assert_eq!(
            Map::direction_towards(origin, Coord::new(30, 11)),
            Direction::Southeast
        );
        assert_eq!(
            Map::direction_towards(origin, Coord::new(30, 10)),
            Direction::East
        );
        assert_eq!(
            Map::direction_towards(origin, Coord::new(10, 2)),
            Direction::North
        );
        assert_eq!(
            Map::direction_towards(origin, Coord::new(9, 11)),
            Direction::Southwest
        );
    }

    #[test]
    fn route_queries_follow_the_node_table() {
        let (terrain, reference) = open_plains();
        let routes = [
            RouteNode::new(5, 5, 1, 2),
            RouteNode::new(9, 5, 2, 0),
            RouteNode::new(9, 9, 0, 1),
        ];
        let map = Map::from_tables(&terrain, &reference, &routes).unwrap();

        assert_eq!(map.route_node(1), Some(Coord::new(9, 5)));
        assert_eq!(map.node_index(Coord::new(9, 9)), Some(2));
        assert_eq!(map.node_index(Coord::new(9, 8)), None);
        assert_eq!(map.next_node_a(Coord::new(5, 5)), Some(Coord::new(9, 5)));
        assert_eq!(map.next_node_b(Coord::new(5, 5)), Some(Coord::new(9, 9)));
    }

    #[test]
    fn dangling_route_successors_are_rejected() {
        let (terrain, reference) = open_plains();
        let routes = [RouteNode::new(5, 5, 0, 9)];
        let result = Map::from_tables(&terrain, &reference, &routes);
        assert!(matches!(result, Err(MapError::RouteSuccessor { .. })));
    }
}
