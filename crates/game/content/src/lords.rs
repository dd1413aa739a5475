//! The 32 named lords, in roster order.

use midnight_core::{Direction, LordSpec, Object, Race};

pub static LORDS: [LordSpec; 32] = [
    LordSpec {
        name: "Luxor",
        title: "Luxor the Moonprince",
        race: Race::Free,
        x: 12,
        y: 40,
        life: 180,
        energy: 127,
        strength: 25,
        courage_base: 80,
        recruiting_key: 0x17,
        recruited_by_key: 0x00,
        riders: 0,
        warriors: 0,
        direction: Direction::Southeast,
        mounted: true,
        recruited: true,
        object: Object::MoonRing,
    },
    LordSpec {
        name: "Morkin",
        title: "Morkin",
        race: Race::Morkin,
        x: 12,
        y: 40,
        life: 200,
        energy: 127,
        strength: 5,
        courage_base: 127,
        recruiting_key: 0x7e,
        recruited_by_key: 0x00,
        riders: 0,
        warriors: 0,
        direction: Direction::Southeast,
        mounted: true,
        recruited: true,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Corleth",
        title: "Corleth the Fey",
        race: Race::Fey,
        x: 12,
        y: 40,
        life: 180,
        energy: 127,
        strength: 20,
        courage_base: 96,
        recruiting_key: 0x6b,
        recruited_by_key: 0x00,
        riders: 0,
        warriors: 0,
        direction: Direction::East,
        mounted: true,
        recruited: true,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Rothron",
        title: "Rothron the Wise",
        race: Race::Wise,
        x: 12,
        y: 40,
        life: 220,
        energy: 127,
        strength: 40,
        courage_base: 80,
        recruiting_key: 0x7f,
        recruited_by_key: 0x00,
        riders: 0,
        warriors: 0,
        direction: Direction::Northeast,
        mounted: true,
        recruited: true,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Gard",
        title: "the Lord of Gard",
        race: Race::Free,
        x: 10,
        y: 55,
        life: 150,
        energy: 64,
        strength: 10,
        courage_base: 64,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 500,
        warriors: 1000,
        direction: Direction::East,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Marakith",
        title: "the Lord of Marakith",
        race: Race::Free,
        x: 43,
        y: 32,
        life: 150,
        energy: 64,
        strength: 10,
        courage_base: 64,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 500,
        warriors: 1000,
        direction: Direction::West,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Xajorkith",
        title: "the Lord of Xajorkith",
        race: Race::Free,
        x: 45,
        y: 59,
        life: 150,
        energy: 64,
        strength: 15,
        courage_base: 64,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 800,
        warriors: 1200,
        direction: Direction::North,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Gloom",
        title: "the Lord of Gloom",
        race: Race::Free,
        x: 8,
        y: 0,
        life: 150,
        energy: 64,
        strength: 15,
        courage_base: 56,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 500,
        warriors: 1000,
        direction: Direction::East,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Shimeril",
        title: "the Lord of Shimeril",
        race: Race::Free,
        x: 28,
        y: 42,
        life: 150,
        energy: 64,
        strength: 15,
        courage_base: 64,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 800,
        warriors: 1000,
        direction: Direction::Northwest,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Kumar",
        title: "the Lord of Kumar",
        race: Race::Free,
        x: 57,
        y: 29,
        life: 150,
        energy: 64,
        strength: 10,
        courage_base: 64,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 700,
        warriors: 1000,
        direction: Direction::North,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Ithrorn",
        title: "the Lord of Ithrorn",
        race: Race::Free,
        x: 57,
        y: 15,
        life: 150,
        energy: 64,
        strength: 15,
        courage_base: 64,
        recruiting_key: 0x09,
        recruited_by_key: 0x01,
        riders: 1000,
        warriors: 1200,
        direction: Direction::Northwest,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Dawn",
        title: "the Lord of Dawn",
        race: Race::Free,
        x: 44,
        y: 45,
        life: 150,
        energy: 64,
        strength: 8,
        courage_base: 48,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 500,
        warriors: 800,
        direction: Direction::North,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Dreams",
        title: "the Lord Of Dreams",
        race: Race::Fey,
        x: 42,
        y: 16,
        life: 180,
        energy: 64,
        strength: 20,
        courage_base: 90,
        recruiting_key: 0x1f,
        recruited_by_key: 0x08,
        riders: 800,
        warriors: 1200,
        direction: Direction::North,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Dregrim",
        title: "the Lord Of Dregrim",
        race: Race::Fey,
        x: 59,
        y: 43,
        life: 150,
        energy: 64,
        strength: 15,
        courage_base: 80,
        recruiting_key: 0x1f,
        recruited_by_key: 0x08,
        riders: 400,
        warriors: 1000,
        direction: Direction::North,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Thimrath",
        title: "Thimrath the Fey",
        race: Race::Fey,
        x: 33,
        y: 60,
        life: 130,
        energy: 64,
        strength: 12,
        courage_base: 90,
        recruiting_key: 0x1a,
        recruited_by_key: 0x02,
        riders: 600,
        warriors: 400,
        direction: Direction::West,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Whispers",
        title: "the Lord Of Whispers",
        race: Race::Fey,
        x: 57,
        y: 20,
        life: 150,
        energy: 64,
        strength: 12,
        courage_base: 80,
        recruiting_key: 0x1a,
        recruited_by_key: 0x02,
        riders: 300,
        warriors: 600,
        direction: Direction::Northwest,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Shadows",
        title: "the Lord Of Shadows",
        race: Race::Fey,
        x: 11,
        y: 37,
        life: 130,
        energy: 64,
        strength: 12,
        courage_base: 70,
        recruiting_key: 0x1a,
        recruited_by_key: 0x02,
        riders: 0,
        warriors: 1000,
        direction: Direction::North,
        mounted: false,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Lothoril",
        title: "the Lord Of Lothoril",
        race: Race::Fey,
        x: 11,
        y: 10,
        life: 100,
        energy: 64,
        strength: 8,
        courage_base: 60,
        recruiting_key: 0x1a,
        recruited_by_key: 0x02,
        riders: 200,
        warriors: 500,
        direction: Direction::East,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Korinel",
        title: "Korinel the Fey",
        race: Race::Fey,
        x: 23,
        y: 21,
        life: 120,
        energy: 64,
        strength: 12,
        courage_base: 60,
        recruiting_key: 0x1a,
        recruited_by_key: 0x02,
        riders: 0,
        warriors: 1000,
        direction: Direction::North,
        mounted: false,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Thrall",
        title: "the Lord Of Thrall",
        race: Race::Fey,
        x: 33,
        y: 38,
        life: 150,
        energy: 64,
        strength: 10,
        courage_base: 70,
        recruiting_key: 0x1a,
        recruited_by_key: 0x02,
        riders: 300,
        warriors: 600,
        direction: Direction::Northwest,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Brith",
        title: "Lord Brith",
        race: Race::Free,
        x: 21,
        y: 49,
        life: 100,
        energy: 64,
        strength: 8,
        courage_base: 40,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 500,
        warriors: 300,
        direction: Direction::Northeast,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Rorath",
        title: "Lord Rorath",
        race: Race::Free,
        x: 23,
        y: 60,
        life: 100,
        energy: 64,
        strength: 8,
        courage_base: 50,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 800,
        warriors: 400,
        direction: Direction::North,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Trorn",
        title: "Lord Trorn",
        race: Race::Free,
        x: 54,
        y: 50,
        life: 100,
        energy: 64,
        strength: 8,
        courage_base: 35,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 400,
        warriors: 800,
        direction: Direction::Northwest,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Morning",
        title: "the Lord Of Morning",
        race: Race::Free,
        x: 39,
        y: 51,
        life: 120,
        energy: 64,
        strength: 8,
        courage_base: 40,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 300,
        warriors: 800,
        direction: Direction::North,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Athoril",
        title: "Lord Athoril",
        race: Race::Free,
        x: 54,
        y: 38,
        life: 120,
        energy: 64,
        strength: 8,
        courage_base: 50,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 800,
        warriors: 300,
        direction: Direction::North,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Blood",
        title: "Lord Blood",
        race: Race::Free,
        x: 21,
        y: 36,
        life: 150,
        energy: 64,
        strength: 15,
        courage_base: 80,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 1200,
        warriors: 0,
        direction: Direction::North,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Herath",
        title: "Lord Herath",
        race: Race::Free,
        x: 45,
        y: 26,
        life: 130,
        energy: 64,
        strength: 8,
        courage_base: 40,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 500,
        warriors: 600,
        direction: Direction::Northeast,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Mitharg",
        title: "Lord Mitharg",
        race: Race::Free,
        x: 29,
        y: 46,
        life: 130,
        energy: 64,
        strength: 8,
        courage_base: 50,
        recruiting_key: 0x01,
        recruited_by_key: 0x01,
        riders: 500,
        warriors: 600,
        direction: Direction::North,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Utarg",
        title: "the Utarg Of Utarg",
        race: Race::Targ,
        x: 59,
        y: 34,
        life: 180,
        energy: 64,
        strength: 20,
        courage_base: 80,
        recruiting_key: 0x00,
        recruited_by_key: 0x04,
        riders: 1000,
        warriors: 0,
        direction: Direction::West,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Fawkrin",
        title: "Fawkrin the Skulkrin",
        race: Race::Skulkrin,
        x: 1,
        y: 10,
        life: 200,
        energy: 64,
        strength: 1,
        courage_base: 30,
        recruiting_key: 0x00,
        recruited_by_key: 0x20,
        riders: 0,
        warriors: 0,
        direction: Direction::East,
        mounted: false,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Lorgrim",
        title: "Lorgrim the Wise",
        race: Race::Wise,
        x: 62,
        y: 0,
        life: 200,
        energy: 64,
        strength: 20,
        courage_base: 70,
        recruiting_key: 0x7f,
        recruited_by_key: 0x10,
        riders: 0,
        warriors: 0,
        direction: Direction::South,
        mounted: true,
        recruited: false,
        object: Object::Nothing,
    },
    LordSpec {
        name: "Farflame",
        title: "Farflame the Dragonlord",
        race: Race::Dragon,
        x: 12,
        y: 23,
        life: 200,
        energy: 64,
        strength: 100,
        courage_base: 127,
        recruiting_key: 0x00,
        recruited_by_key: 0x40,
        riders: 0,
        warriors: 0,
        direction: Direction::Southeast,
        mounted: false,
        recruited: false,
        object: Object::Nothing,
    },
];
