//! Wildmap wander: two walkers roam a small wilderness.
//!
//! Demonstrates:
//!   1. Building a terrain grid and a WorldEngine
//!   2. Registering a static portal on the map
//!   3. Moving by coordinate and by exit name
//!   4. Watching locations get merged, re-keyed and recycled
//!   5. Logout / login through stow and restore
//!
//! Run with:
//!   cargo run --example wander

use wildmap_core::{Coord, EntityId, LastKnown, MoveOptions, RoomRef, Traveler};
use wildmap_engine::{StaticRoom, WorldConfig, WorldEngine};
use wildmap_terrain::TerrainKind;
use wildmap_test_utils::TerrainFixture;

// ─── Grid parameters ────────────────────────────────────────────

const SIDE: u32 = 8;
const PEAK: Coord = Coord::new(4, 4);
const CAVE: Coord = Coord::new(6, 1);

// ─── A walker ───────────────────────────────────────────────────

struct Walker {
    id: EntityId,
    name: &'static str,
    location: Option<RoomRef>,
    coordinates: Option<Coord>,
    last_known: Option<LastKnown>,
}

impl Walker {
    fn new(id: u64, name: &'static str) -> Self {
        Self {
            id: EntityId(id),
            name,
            location: None,
            coordinates: None,
            last_known: None,
        }
    }
}

impl Traveler for Walker {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn location(&self) -> Option<RoomRef> {
        self.location
    }

    fn set_location(&mut self, location: Option<RoomRef>) {
        self.location = location;
    }

    fn coordinates(&self) -> Option<Coord> {
        self.coordinates
    }

    fn set_coordinates(&mut self, coordinates: Option<Coord>) {
        self.coordinates = coordinates;
    }

    fn last_known(&self) -> Option<LastKnown> {
        self.last_known.clone()
    }

    fn set_last_known(&mut self, last: LastKnown) {
        self.last_known = Some(last);
    }
}

fn describe(world: &WorldEngine, walker: &Walker) {
    let Some(room) = walker.location else {
        println!("  {:<6} is nowhere", walker.name);
        return;
    };
    let Some(location) = world.room(room) else {
        println!("  {:<6} holds a stale handle {room}", walker.name);
        return;
    };
    let at = walker
        .coordinates
        .map_or_else(|| "-".to_string(), |c| c.to_string());
    println!(
        "  {:<6} {at:<8} {room:<8} {:<14} {}",
        walker.name,
        location.title(),
        location.description()
    );
}

fn main() {
    let grid = TerrainFixture::filled(SIDE, SIDE, TerrainKind::PLAIN)
        .with(PEAK, TerrainKind::MOUNTAIN)
        .with(Coord::new(4, 3), TerrainKind::HILL)
        .with(Coord::new(0, 7), TerrainKind::OCEAN)
        .grid();
    let config = WorldConfig {
        seed: 7,
        ..WorldConfig::default()
    };
    let mut world = match WorldEngine::new(grid, config) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("cannot build world: {e}");
            return;
        }
    };

    let cave = world
        .register_static_portal(
            CAVE,
            StaticRoom::new("grotta", "Grotta Umida", "Gocce cadono dal soffitto.", "grotte"),
        )
        .ok();
    println!("static portal at {CAVE}: {cave:?}");

    let mut ada = Walker::new(1, "ada");
    let mut bruno = Walker::new(2, "bruno");
    let walk = MoveOptions::default();

    println!("\n-- arrival --");
    for (walker, at) in [(&mut ada, Coord::new(4, 2)), (&mut bruno, Coord::new(1, 1))] {
        match world.move_entity(walker, Some(at), &walk) {
            Ok(report) => println!("  {} -> {at}: {:?}", walker.name, report.path),
            Err(e) => println!("  {} -> {at}: {}", walker.name, e.player_message()),
        }
    }
    describe(&world, &ada);
    describe(&world, &bruno);

    println!("\n-- ada climbs north --");
    for _ in 0..3 {
        match world.traverse(&mut ada, "nord", &walk) {
            Ok(report) => println!("  step: {:?}", report.path),
            Err(e) => println!("  step refused: {}", e.player_message()),
        }
        describe(&world, &ada);
    }

    println!("\n-- bruno heads for the cave --");
    if let Err(e) = world.move_entity(&mut bruno, Some(CAVE), &walk) {
        println!("  {}", e.player_message());
    }
    describe(&world, &bruno);

    println!("\n-- ada joins bruno --");
    if let Ok(report) = world.move_entity(&mut ada, Some(CAVE), &walk) {
        println!("  {:?}, evicted {:?}", report.path, report.evicted);
    }
    describe(&world, &ada);

    println!("\n-- off the map --");
    if let Err(e) = world.move_entity(&mut ada, Some(Coord::new(-3, 40)), &walk) {
        println!("  {e}: {}", e.player_message());
    }

    println!("\n-- logout / login --");
    world.stow(&mut bruno);
    describe(&world, &bruno);
    match world.restore(&mut bruno, None) {
        Ok(_) => describe(&world, &bruno),
        Err(e) => println!("  restore failed: {e}"),
    }

    let swept = world.sweep();
    let m = world.metrics();
    println!("\n-- metrics --");
    println!("  moves           {}", m.moves);
    println!("  rejected        {}", m.rejected_moves);
    println!("  merges          {}", m.merges);
    println!("  reused in place {}", m.reused_in_place);
    println!("  room pool       {} hits / {} misses", m.room_pool_hits, m.room_pool_misses);
    println!("  exit pool       {} hits / {} misses", m.exit_pool_hits, m.exit_pool_misses);
    println!("  evictions       {}", m.evictions);
    println!("  sweep           {swept:?}");
    println!("  active          {}", world.state().registry().len());
    println!("  pooled          {}", world.state().rooms().pooled_count());

    if let Err(e) = world.verify_invariants() {
        eprintln!("invariant violated: {e}");
    }
}
