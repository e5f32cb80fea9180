//! Wave formations.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::entities::Enemy;

/// Rows in the formation for `wave`: grows by one per wave up to the cap.
pub fn formation_rows(wave: u32, config: &Config) -> u32 {
    config.formation_base_rows + wave.min(config.formation_row_cap)
}

/// Number of enemies a fresh formation for `wave` holds.
pub fn formation_size(wave: u32, config: &Config) -> usize {
    config
        .formation_columns
        .saturating_mul(formation_rows(wave, config)) as usize
}

/// Slot centres for `wave`, row by row, left to right.
pub fn formation_slots(wave: u32, config: &Config) -> Vec<Vec2> {
    let cols = config.formation_columns;
    let gap_x = (config.screen_width / (cols + 1) as f32).floor();
    (0..formation_rows(wave, config))
        .flat_map(|row| {
            (0..cols).map(move |col| {
                Vec2::new(
                    gap_x * (col + 1) as f32,
                    config.formation_top + row as f32 * config.formation_row_gap,
                )
            })
        })
        .collect()
}

/// Build the formation for `wave`. Every enemy starts at an independent
/// random phase in `[0, 2π)` so the grid doesn't sway in lock-step.
pub fn spawn_wave(wave: u32, config: &Config, enemy_size: Vec2, rng: &mut impl Rng) -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(formation_size(wave, config));
    enemies.extend(
        formation_slots(wave, config)
            .into_iter()
            .map(|slot| Enemy::at_slot(slot, rng.gen_range(0.0..TAU), enemy_size, config)),
    );
    log::info!(
        "Wave {wave}: {} enemies in {} rows",
        enemies.len(),
        formation_rows(wave, config)
    );
    enemies
}
