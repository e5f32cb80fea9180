//! Per-frame update rules for the player, the enemies and the bullets.
//!
//! Each function touches only the actors it is given plus the injected RNG,
//! so callers control determinism (tests pass a seeded RNG).

use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::entities::{Bullet, Enemy, Player};
use crate::geometry::Rect;
use crate::input::FrameInput;

// ── Player ───────────────────────────────────────────────────────────────────

/// How many nominal frames `dt_ms` is worth.
pub fn frame_factor(dt_ms: u32, config: &Config) -> f32 {
    dt_ms as f32 / config.frame_ms()
}

/// Move the ship, tick its fire cooldown and fire if allowed.
///
/// Returns the new player bullet, if one was fired this frame.
pub fn update_player(
    player: &mut Player,
    input: &FrameInput,
    dt_ms: u32,
    config: &Config,
    bullet_size: Vec2,
) -> Option<Bullet> {
    let dx = input.direction() * config.player_speed * frame_factor(dt_ms, config);
    let max_x = (config.screen_width - player.rect.size.x).max(0.0);
    player.rect.pos.x = (player.rect.pos.x + dx).min(max_x).max(0.0);

    player.fire_timer_ms = player.fire_timer_ms.saturating_sub(dt_ms);
    if !input.fire || player.fire_timer_ms > 0 {
        return None;
    }
    player.fire_timer_ms = config.player_cooldown_ms;
    Some(Bullet {
        rect: Rect::from_midbottom(player.rect.midtop(), bullet_size),
        velocity: Vec2::new(0.0, -config.player_bullet_speed),
    })
}

// ── Bullets ──────────────────────────────────────────────────────────────────

/// True once the bullet has fully left the vertical play area.
pub fn is_off_screen(bullet: &Bullet, screen_height: f32) -> bool {
    bullet.rect.bottom() < 0.0 || bullet.rect.top() > screen_height
}

/// Advance every bullet by its velocity and drop the ones that left the
/// screen.
pub fn update_bullets(bullets: &mut Vec<Bullet>, screen_height: f32) {
    bullets.retain_mut(|bullet| {
        bullet.rect.translate(bullet.velocity);
        !is_off_screen(bullet, screen_height)
    });
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Advance one enemy along its sway curve and fire when its cooldown runs
/// out. Returns the new enemy bullet, if any.
pub fn update_enemy(
    enemy: &mut Enemy,
    dt_ms: u32,
    config: &Config,
    bullet_size: Vec2,
    rng: &mut impl Rng,
) -> Option<Bullet> {
    enemy.phase += dt_ms as f32 * config.enemy_phase_rate * enemy.direction.sign();
    enemy.rect.pos = enemy.sway_position(config);

    let elapsed = i32::try_from(dt_ms).unwrap_or(i32::MAX);
    enemy.cooldown_ms = enemy.cooldown_ms.saturating_sub(elapsed);
    if enemy.cooldown_ms > 0 {
        return None;
    }
    let jitter = config.enemy_fire_jitter_ms;
    enemy.cooldown_ms = config
        .enemy_cooldown_ms
        .saturating_add(rng.gen_range(-jitter..=jitter));
    Some(Bullet {
        rect: Rect::from_midtop(enemy.rect.midbottom(), bullet_size),
        velocity: Vec2::new(0.0, config.enemy_bullet_speed),
    })
}

/// Update every enemy, collect their shots into `enemy_bullets`, then give
/// each one a small chance to reverse its sway.
pub fn update_enemies(
    enemies: &mut [Enemy],
    enemy_bullets: &mut Vec<Bullet>,
    dt_ms: u32,
    config: &Config,
    bullet_size: Vec2,
    rng: &mut impl Rng,
) {
    for enemy in enemies.iter_mut() {
        if let Some(bullet) = update_enemy(enemy, dt_ms, config, bullet_size, rng) {
            enemy_bullets.push(bullet);
        }
        if rng.gen_bool(config.enemy_flip_chance) {
            enemy.direction = enemy.direction.flipped();
        }
    }
}
