//! The shipped campaign, exercised through the public engine surface.

use midnight_core::{
    CharacterId, Command, Coord, Feature, Map, Midnight, Object, Orders, PcgRandom, Race, Target,
    Time, TroopKind,
};

fn world() -> Midnight {
    Midnight::new(&midnight_content::scenario(), Box::new(PcgRandom::new(42)))
        .expect("the shipped tables are well-formed")
}

/// The structural invariants that must hold after every command and night.
fn assert_invariants(world: &Midnight) {
    for lord in world.characters() {
        assert!(
            world.location(lord.coord()).characters().contains(&lord.id),
            "{} missing from his tile",
            lord.name
        );
        assert!(lord.energy() <= 127);
        assert!(lord.riders().energy() <= 127);
        assert!(lord.warriors().energy() <= 127);
    }
    for army in world.doomguard() {
        assert!(
            world.location(army.coord()).armies().contains(&army.id),
            "doomguard {} missing from its tile",
            army.id
        );
        assert!(army.army().how_many() > 0, "drained doomguard still listed");
    }
    for garrison in world.garrisons() {
        assert!(world.location(garrison.at).feature().is_stronghold());
    }
    for y in 0..Map::HEIGHT {
        for x in 0..Map::WIDTH {
            let at = Coord::new(x, y);
            let tile = world.location(at);
            let occupied = !tile.armies().is_empty()
                || tile
                    .characters()
                    .iter()
                    .any(|&id| world.character(id).has_soldiers());
            match tile.feature() {
                Feature::Army => assert!(occupied, "bare army tile at {at}"),
                Feature::Plains => assert!(!occupied, "unraised banner at {at}"),
                _ => {}
            }
        }
    }
}

fn moon_rings_in_play(world: &Midnight) -> usize {
    let carried = world
        .characters()
        .iter()
        .filter(|lord| lord.object() == Object::MoonRing)
        .count();
    let mut grounded = 0;
    for y in 0..Map::HEIGHT {
        for x in 0..Map::WIDTH {
            if world.location(Coord::new(x, y)).object() == Object::MoonRing {
                grounded += 1;
            }
        }
    }
    carried + grounded
}

fn digest(world: &Midnight) -> String {
    let mut state = format!("day {};", world.day());
    for lord in world.characters() {
        state.push_str(&format!(
            "{} {} e{} l{} {:?} r{} w{};",
            lord.id,
            lord.coord(),
            lord.energy(),
            lord.life(),
            lord.object(),
            lord.riders().how_many(),
            lord.warriors().how_many(),
        ));
    }
    for army in world.doomguard() {
        state.push_str(&format!(
            "{} {} n{};",
            army.id,
            army.coord(),
            army.army().how_many()
        ));
    }
    for garrison in world.garrisons() {
        state.push_str(&format!(
            "{} n{} {:?};",
            garrison.at,
            garrison.army.how_many(),
            garrison.army.race()
        ));
    }
    state
}

#[test]
fn the_world_rises_from_the_shipped_tables() {
    let world = world();

    assert_eq!(world.characters().len(), 32);
    assert_eq!(world.garrisons().len(), 102);
    assert_eq!(world.doomguard().len(), 128);
    assert_eq!(world.day(), 0);
    assert_invariants(&world);

    // The princes muster at the Tower of the Moon.
    let luxor = world.character(CharacterId::LUXOR);
    assert_eq!(luxor.coord(), Coord::new(12, 40));
    assert_eq!(luxor.object(), Object::MoonRing);
    assert!(luxor.is_recruited());
    assert!(world.is_moon_ring_controlled());
    assert_eq!(world.character(CharacterId::MORKIN).coord(), Coord::new(12, 40));

    // The two citadels whose fate decides the war.
    let ushgarak = world.guard_at(Map::USHGARAK).unwrap();
    assert_eq!(ushgarak.race(), Race::Foul);
    assert_eq!(ushgarak.how_many(), 1200);
    assert_eq!(ushgarak.troop(), TroopKind::Riders);
    let xajorkith = world.guard_at(Map::XAJORKITH).unwrap();
    assert_eq!(xajorkith.race(), Race::Free);
    assert_eq!(xajorkith.how_many(), 750);

    // The Ice Crown waits in the Tower of Despair, the lake to its south.
    assert_eq!(
        world.location(Map::TOWER_OF_DESPAIR).object(),
        Object::IceCrown
    );
    assert_eq!(world.location(Map::TOWER_OF_DESPAIR).feature(), Feature::Tower);
    assert_eq!(world.location(Map::LAKE_MIRROW).feature(), Feature::Lake);

    assert_eq!(moon_rings_in_play(&world), 1);
}

#[test]
fn the_roster_matches_the_histories() {
    let world = world();
    let gard = world.character(CharacterId(4));
    assert_eq!(gard.name, "Gard");
    assert_eq!(gard.coord(), Coord::new(10, 55));
    assert_eq!(gard.riders().how_many(), 500);
    assert_eq!(gard.warriors().how_many(), 1000);
    assert!(!gard.is_recruited());

    let guard = world.guard_at(Coord::new(10, 55)).unwrap();
    assert_eq!(guard.race(), Race::Free);
    assert_eq!(guard.troop(), TroopKind::Riders);
    assert_eq!(guard.how_many(), 600);

    // The first Doomguard rides for Ushgarak with Luxor's name on its orders.
    let vanguard = &world.doomguard()[0];
    assert_eq!(vanguard.coord(), Map::USHGARAK);
    assert_eq!(vanguard.orders(), Orders::Follow);
    assert_eq!(vanguard.target(), Target::Character(CharacterId::LUXOR));
    assert_eq!(vanguard.army().how_many(), 1000);
}

#[test]
fn the_route_graph_lands_where_the_orders_point() {
    let world = world();
    let map = world.map();
    assert_eq!(map.node_index(Coord::new(22, 5)), Some(3));
    assert_eq!(map.node_index(Coord::new(29, 7)), Some(6));
    assert_eq!(map.node_index(Coord::new(37, 7)), Some(7));
    assert_eq!(map.node_index(Coord::new(29, 12)), Some(14));
    assert_eq!(map.node_index(Coord::new(18, 21)), Some(32));
    assert_eq!(map.node_index(Coord::new(24, 29)), Some(44));

    // Every route node is marked interesting so GOTO and ROUTE orders bite.
    for node in map.routes() {
        assert!(world.location(node.coord()).is_special());
    }
}

#[test]
fn luxor_rides_southeast_for_three_points() {
    let mut world = world();
    assert!(world.character(CharacterId::LUXOR).is_on_horse());

    world.execute(Command::WalkForward).unwrap();

    let luxor = world.character(CharacterId::LUXOR);
    assert_eq!(luxor.coord(), Coord::new(13, 41));
    assert_eq!(luxor.energy(), 124);
    assert_eq!(luxor.time().hours(), Time::DAWN - 3);
    assert_invariants(&world);
}

#[test]
fn nights_pass_and_the_world_stays_sound() {
    let mut world = world();
    for _ in 0..4 {
        let _ = world.execute(Command::WalkForward);
        world.execute(Command::EndDay).unwrap();
        assert!(world.character(CharacterId::LUXOR).time().is_dawn());
        assert_invariants(&world);
        assert_eq!(moon_rings_in_play(&world), 1);
        if world.is_game_over() {
            break;
        }
    }
    assert!(world.day() >= 1);
    // Doomdark's strongholds feed the fear every night.
    assert!(world.doom_darks_citadels() > 0);
}

#[test]
fn equal_seeds_and_commands_keep_two_worlds_identical() {
    let mut first = world();
    let mut second = world();
    let script = [
        Command::WalkForward,
        Command::EndDay,
        Command::TurnRight,
        Command::WalkForward,
        Command::EndDay,
        Command::EndDay,
    ];
    for command in script {
        let a = first.execute(command);
        let b = second.execute(command);
        assert_eq!(a, b);
    }
    assert_eq!(digest(&first), digest(&second));
}
