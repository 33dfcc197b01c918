// Host-side tests for population seeding and traversal order.

mod common;

use field_core::{ParticleStore, SHADE_MAX, SHADE_MIN};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn reset_places_particles_inside_surface_with_bounded_speed() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut store = ParticleStore::new();
    let size = Vec2::new(640.0, 360.0);
    let base_speed = 0.8;
    for _ in 0..20 {
        store.reset(150, size, base_speed, &mut rng);
        assert_eq!(store.len(), 150);
        for p in store.iter() {
            assert!(p.pos.x >= 0.0 && p.pos.x < size.x, "x out of range: {}", p.pos.x);
            assert!(p.pos.y >= 0.0 && p.pos.y < size.y, "y out of range: {}", p.pos.y);
            assert!(p.vel.x.abs() <= base_speed / 2.0);
            assert!(p.vel.y.abs() <= base_speed / 2.0);
            assert!(p.vel.length() <= base_speed);
            assert!(p.shade >= SHADE_MIN && p.shade < SHADE_MAX);
        }
    }
}

#[test]
fn reset_discards_previous_population() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut store = ParticleStore::new();
    store.reset(150, Vec2::new(100.0, 100.0), 0.8, &mut rng);
    store.reset(80, Vec2::new(100.0, 100.0), 2.5, &mut rng);
    assert_eq!(store.len(), 80);
}

#[test]
fn reset_with_zero_count_is_empty_and_valid() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut store = ParticleStore::from_particles(vec![common::still(1.0, 1.0)]);
    store.reset(0, Vec2::new(100.0, 100.0), 0.8, &mut rng);
    assert!(store.is_empty());
    let mut visited = 0;
    store.for_each(|_, _| visited += 1);
    assert_eq!(visited, 0);
}

#[test]
fn reset_tolerates_degenerate_surface() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut store = ParticleStore::new();
    store.reset(5, Vec2::ZERO, 0.0, &mut rng);
    assert_eq!(store.len(), 5);
    assert!(store.iter().all(|p| p.pos == Vec2::ZERO && p.vel == Vec2::ZERO));
}

#[test]
fn same_seed_gives_same_population() {
    let mut a = ParticleStore::new();
    let mut b = ParticleStore::new();
    a.reset(30, Vec2::new(500.0, 500.0), 0.8, &mut StdRng::seed_from_u64(42));
    b.reset(30, Vec2::new(500.0, 500.0), 0.8, &mut StdRng::seed_from_u64(42));
    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn for_each_visits_in_index_order_and_sees_earlier_writes() {
    let mut store = ParticleStore::from_particles(vec![
        common::still(0.0, 0.0),
        common::still(1.0, 0.0),
        common::still(2.0, 0.0),
    ]);
    let mut order = Vec::new();
    store.for_each(|ps, i| {
        order.push(i);
        // Each visit records how many earlier particles were already touched.
        let touched = ps[..i].iter().filter(|p| p.vel.x > 0.0).count();
        assert_eq!(touched, i);
        ps[i].vel.x = 1.0;
    });
    assert_eq!(order, vec![0, 1, 2]);
}
