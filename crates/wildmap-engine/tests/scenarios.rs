//! Integration test: end-to-end movement scenarios on a 10x10 wilderness.
//!
//! Covers materialization on an empty grid, reuse-in-place for a lone
//! walker, merging into a static portal, out-of-bounds rejection without
//! side effects, and no eviction while another entity remains.

use wildmap_core::{Coord, MoveError, MoveOptions};
use wildmap_engine::{Location, MovePath, StaticRoom, WorldConfig, WorldEngine};
use wildmap_terrain::TerrainKind;
use wildmap_test_utils::{MockTraveler, TerrainFixture};

fn world() -> WorldEngine {
    let grid = TerrainFixture::filled(10, 10, TerrainKind::PLAIN)
        .with(Coord::new(5, 5), TerrainKind::MOUNTAIN)
        .with(Coord::new(4, 3), TerrainKind::HILL)
        .grid();
    WorldEngine::new(grid, WorldConfig::default()).unwrap()
}

fn go(world: &mut WorldEngine, who: &mut MockTraveler, x: i32, y: i32) -> Result<MovePath, MoveError> {
    world
        .move_entity(who, Some(Coord::new(x, y)), &MoveOptions::default())
        .map(|report| report.path)
}

// ── A: first move onto a mountain ──────────────────────────────────

#[test]
fn unplaced_entity_materializes_a_mountain() {
    let mut world = world();
    let mut a = MockTraveler::new(1);
    assert_eq!(go(&mut world, &mut a, 5, 5), Ok(MovePath::Allocated));

    let room = world.get_room(Coord::new(5, 5)).unwrap();
    assert_eq!(a.location, Some(room));
    assert_eq!(a.coordinates, Some(Coord::new(5, 5)));
    let loc = world.room(room).unwrap();
    assert_eq!(loc.title(), "Montagna");
    assert!(["MontagnaDesc1", "MontagnaDesc2"].contains(&loc.description()));
}

// ── B: lone walker re-keys its own location ───────────────────────

#[test]
fn lone_walker_reuses_location_in_place() {
    let mut world = world();
    let mut a = MockTraveler::new(1);
    go(&mut world, &mut a, 3, 3).unwrap();
    let room = a.location;
    let before = world.metrics();

    assert_eq!(go(&mut world, &mut a, 4, 3), Ok(MovePath::ReusedInPlace));
    let after = world.metrics();
    assert_eq!(after.room_pool_hits, before.room_pool_hits);
    assert_eq!(after.room_pool_misses, before.room_pool_misses);
    assert_eq!(after.reused_in_place, 1);

    assert!(world.get_room(Coord::new(3, 3)).is_none());
    assert_eq!(world.get_room(Coord::new(4, 3)), room);
    assert_eq!(a.location, room);
    assert_eq!(world.room(room.unwrap()).unwrap().title(), "Collina");
    world.verify_invariants().unwrap();
}

// ── C: two entities merge into a static portal ────────────────────

#[test]
fn second_entity_merges_into_static_portal() {
    let mut world = world();
    let portal = world
        .register_static_portal(
            Coord::new(2, 2),
            StaticRoom::new("grotta_lunare", "Grotta Lunare", "Una grotta.", "grotte"),
        )
        .unwrap();

    let mut a = MockTraveler::new(1);
    let mut b = MockTraveler::new(2);
    assert_eq!(go(&mut world, &mut a, 2, 2), Ok(MovePath::Merged));
    assert_eq!(go(&mut world, &mut b, 2, 2), Ok(MovePath::Merged));
    assert_eq!(a.location, Some(portal));
    assert_eq!(b.location, Some(portal));
    assert_eq!(b.last_known.as_ref().unwrap().area, "grotte");
    match world.room(portal).unwrap() {
        Location::Static(s) => assert_eq!(s.key, "grotta_lunare"),
        other => panic!("portal became {other:?}"),
    }
    assert_eq!(world.room(portal).unwrap().occupants().len(), 2);
}

// ── D: out of bounds touches nothing ──────────────────────────────

#[test]
fn out_of_bounds_move_changes_nothing() {
    let mut world = world();
    let mut a = MockTraveler::new(1);
    go(&mut world, &mut a, 1, 1).unwrap();
    let active = world.state().registry().len();
    let pooled = world.state().rooms().pooled_count();
    let location = a.location;
    a.clear_calls();

    assert_eq!(
        go(&mut world, &mut a, -100, -100),
        Err(MoveError::OutOfBounds {
            coord: Coord::new(-100, -100)
        })
    );
    assert_eq!(world.state().registry().len(), active);
    assert_eq!(world.state().rooms().pooled_count(), pooled);
    assert_eq!(a.location, location);
    assert!(a.calls.is_empty());

    let err = go(&mut world, &mut a, 10, 0).unwrap_err();
    assert_eq!(err.player_message(), "Non puoi andare qui.");
}

// ── E: shared dynamic location survives one departure ─────────────

#[test]
fn shared_location_is_not_evicted() {
    let mut world = world();
    let mut a = MockTraveler::new(1);
    let mut b = MockTraveler::new(2);
    go(&mut world, &mut a, 6, 6).unwrap();
    assert_eq!(go(&mut world, &mut b, 6, 6), Ok(MovePath::Merged));
    let shared = a.location.unwrap();

    go(&mut world, &mut a, 7, 6).unwrap();
    assert_eq!(world.metrics().evictions, 0);
    assert_eq!(world.get_room(Coord::new(6, 6)), Some(shared));
    assert_eq!(world.room(shared).unwrap().occupants(), &[b.id]);

    // The last one out does trigger eviction.
    go(&mut world, &mut b, 7, 6).unwrap();
    assert_eq!(world.metrics().evictions, 1);
    assert!(world.get_room(Coord::new(6, 6)).is_none());
    world.verify_invariants().unwrap();
}

#[test]
fn rematerializing_a_coordinate_keeps_its_terrain() {
    let mut world = world();
    let mut a = MockTraveler::new(1);
    let mut b = MockTraveler::new(2);
    go(&mut world, &mut a, 5, 5).unwrap();
    go(&mut world, &mut b, 0, 0).unwrap();
    // a leaves by merging into b's location, evicting (5, 5).
    go(&mut world, &mut a, 0, 0).unwrap();
    assert!(world.get_room(Coord::new(5, 5)).is_none());

    go(&mut world, &mut a, 5, 5).unwrap();
    let loc = world.room(a.location.unwrap()).unwrap();
    assert_eq!(loc.title(), "Montagna");
    assert!(loc.description().starts_with("MontagnaDesc"));
}
