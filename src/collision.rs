//! Collision & damage resolution.
//!
//! Runs once per frame after every actor has moved. The three passes run in
//! a fixed order, which decides what happens when one actor could be consumed
//! by several interactions in the same frame:
//!
//! 1. player bullets × enemies
//! 2. enemy bullets × player
//! 3. enemies × bottom line (breach)
//!
//! Removals are two-phase: hits are marked during the scan and the
//! collections are compacted afterwards, so no element is skipped or visited
//! twice.

use crate::config::Config;
use crate::entities::{Bullet, Enemy, GameState, Player};

/// What the resolver did this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub enemies_destroyed: u32,
    pub player_hit: bool,
    pub breaches: u32,
}

impl CollisionReport {
    pub fn lives_lost(&self) -> i32 {
        self.player_hit as i32 + self.breaches as i32
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Resolve every interaction for this frame, updating score and lives.
pub fn resolve_collisions(state: &mut GameState, config: &Config) -> CollisionReport {
    let enemies_destroyed = resolve_player_fire(&mut state.player_bullets, &mut state.enemies);
    state.score = state
        .score
        .saturating_add(enemies_destroyed * config.score_per_enemy);

    let player_hit = resolve_enemy_fire(&mut state.enemy_bullets, &mut state.player);
    let breaches = resolve_breaches(&mut state.enemies, config.breach_line());

    let report = CollisionReport {
        enemies_destroyed,
        player_hit,
        breaches,
    };
    state.lives -= report.lives_lost();
    if !report.is_empty() {
        log::debug!(
            "frame {}: {report:?} score={} lives={}",
            state.frame,
            state.score,
            state.lives
        );
    }
    report
}

// ── Pass 1: player bullets ↔ enemies ─────────────────────────────────────────

/// Each bullet takes out the first live enemy it overlaps. A bullet kills at
/// most one enemy and an enemy killed earlier in the scan can't be hit again.
/// Returns the number of enemies destroyed.
pub fn resolve_player_fire(bullets: &mut Vec<Bullet>, enemies: &mut Vec<Enemy>) -> u32 {
    let mut killed = vec![false; enemies.len()];
    let mut used = vec![false; bullets.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        let hit = enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !killed[*ei] && bullet.rect.intersects(&enemy.rect));
        if let Some((ei, _)) = hit {
            killed[ei] = true;
            used[bi] = true;
        }
    }

    compact(bullets, &used);
    compact(enemies, &killed);
    killed.iter().filter(|&&k| k).count() as u32
}

// ── Pass 2: enemy bullets ↔ player ───────────────────────────────────────────

/// The first enemy bullet touching the ship is consumed and the ship goes
/// back to its spawn point. At most one hit per frame; any other overlapping
/// bullets stay in flight.
pub fn resolve_enemy_fire(bullets: &mut Vec<Bullet>, player: &mut Player) -> bool {
    let Some(index) = bullets
        .iter()
        .position(|bullet| bullet.rect.intersects(&player.rect))
    else {
        return false;
    };
    bullets.remove(index);
    player.respawn();
    true
}

// ── Pass 3: breach ───────────────────────────────────────────────────────────

/// Remove every enemy whose bottom edge reached `line`. Returns how many.
pub fn resolve_breaches(enemies: &mut Vec<Enemy>, line: f32) -> u32 {
    let before = enemies.len();
    enemies.retain(|enemy| enemy.rect.bottom() < line);
    (before - enemies.len()) as u32
}

/// Drop every element whose flag is set.
fn compact<T>(items: &mut Vec<T>, remove: &[bool]) {
    let mut flags = remove.iter();
    items.retain(|_| !flags.next().copied().unwrap_or(false));
}
