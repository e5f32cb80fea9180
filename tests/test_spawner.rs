use std::f32::consts::TAU;

use glam::Vec2;
use mini_galaga::spawner::*;
use mini_galaga::Config;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn rows_grow_with_wave_until_cap() {
    let c = Config::default();
    assert_eq!(formation_rows(1, &c), 4);
    assert_eq!(formation_rows(2, &c), 5);
    assert_eq!(formation_rows(3, &c), 6);
    assert_eq!(formation_rows(4, &c), 6);
    assert_eq!(formation_rows(100, &c), 6);
}

#[test]
fn first_wave_is_six_by_four() {
    let c = Config::default();
    let enemies = spawn_wave(1, &c, c.enemy_size, &mut seeded_rng());
    assert_eq!(enemies.len(), 24);
    assert_eq!(formation_size(1, &c), 24);
}

#[test]
fn capped_wave_size() {
    let c = Config::default();
    let enemies = spawn_wave(9, &c, c.enemy_size, &mut seeded_rng());
    assert_eq!(enemies.len(), 36);
}

#[test]
fn slots_divide_screen_width_evenly() {
    let c = Config::default();
    let slots = formation_slots(1, &c);
    // gap_x = 640 / 7 = 91 (integer division)
    assert_eq!(slots[0], Vec2::new(91.0, 80.0));
    assert_eq!(slots[5], Vec2::new(546.0, 80.0));
    assert_eq!(slots[6], Vec2::new(91.0, 140.0));
    assert_eq!(slots[23], Vec2::new(546.0, 260.0));
}

#[test]
fn enemies_are_anchored_on_their_slots() {
    let c = Config::default();
    let enemies = spawn_wave(1, &c, c.enemy_size, &mut seeded_rng());
    for (enemy, slot) in enemies.iter().zip(formation_slots(1, &c)) {
        assert_eq!(enemy.base + c.enemy_size / 2.0, slot);
        assert_eq!(enemy.rect.pos, enemy.sway_position(&c));
    }
}

#[test]
fn phases_are_random_and_in_range() {
    let c = Config::default();
    let enemies = spawn_wave(1, &c, c.enemy_size, &mut seeded_rng());
    assert!(enemies.iter().all(|e| (0.0..TAU).contains(&e.phase)));
    let first = enemies[0].phase;
    assert!(enemies.iter().any(|e| e.phase != first));
}

#[test]
fn fresh_enemies_share_the_base_cooldown() {
    let c = Config::default();
    let enemies = spawn_wave(1, &c, c.enemy_size, &mut seeded_rng());
    assert!(enemies.iter().all(|e| e.cooldown_ms == 1000));
}

#[test]
fn same_seed_same_formation() {
    let c = Config::default();
    let a = spawn_wave(2, &c, c.enemy_size, &mut seeded_rng());
    let b = spawn_wave(2, &c, c.enemy_size, &mut seeded_rng());
    assert_eq!(a, b);
}
