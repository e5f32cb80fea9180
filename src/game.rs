//! Game loop state machine.
//!
//! `Running` → `GameOver` when lives drop to zero or below.
//! `Running` → `Stopped` on a quit/escape request.
//! Both are terminal; only `GameOver` shows the banner.

use rand::Rng;

use crate::collision::{resolve_collisions, CollisionReport};
use crate::compute::{update_bullets, update_enemies, update_player};
use crate::config::Config;
use crate::entities::{GameState, GameStatus, Player, SpriteSizes};
use crate::input::FrameInput;
use crate::spawner::spawn_wave;
use crate::starfield::StarField;

/// What happened during one `tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub collisions: CollisionReport,
    pub player_fired: bool,
    /// Set when the formation was cleared and the next wave spawned.
    pub wave_cleared: bool,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: ship at its spawn point, wave 1 in
/// formation, full lives.
pub fn init_state(config: &Config, sizes: SpriteSizes, rng: &mut impl Rng) -> GameState {
    let background = StarField::new(
        config.screen_width,
        config.screen_height,
        config.star_count,
        config.star_speed,
        rng,
    );
    let mut state = GameState {
        player: Player::new(config.player_spawn(), sizes.player),
        enemies: Vec::new(),
        player_bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        background,
        sizes,
        score: 0,
        lives: config.starting_lives,
        wave: 1,
        status: GameStatus::Running,
        frame: 0,
    };
    reset(&mut state, config, rng);
    state
}

/// Restore score, lives, wave and actors to their starting values and spawn
/// a fresh first wave. The star field keeps scrolling.
pub fn reset(state: &mut GameState, config: &Config, rng: &mut impl Rng) {
    state.status = GameStatus::Running;
    state.player = Player::new(config.player_spawn(), state.sizes.player);
    state.player_bullets.clear();
    state.enemy_bullets.clear();
    state.score = 0;
    state.lives = config.starting_lives;
    state.wave = 1;
    state.frame = 0;
    state.enemies = spawn_wave(state.wave, config, state.sizes.enemy, rng);
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame of `dt_ms` milliseconds.
///
/// Does nothing once the game has left `Running`. Otherwise, in order:
/// quit check, background, player, bullets, enemies, collisions, wave
/// completion, terminal check.
pub fn tick(
    state: &mut GameState,
    input: &FrameInput,
    dt_ms: u32,
    config: &Config,
    rng: &mut impl Rng,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if !state.is_running() {
        return outcome;
    }
    if input.wants_quit() {
        log::info!("Quit requested at frame {}", state.frame);
        state.status = GameStatus::Stopped;
        return outcome;
    }
    state.frame += 1;

    state.background.update(rng);

    if let Some(bullet) =
        update_player(&mut state.player, input, dt_ms, config, state.sizes.player_bullet)
    {
        state.player_bullets.push(bullet);
        outcome.player_fired = true;
    }

    update_bullets(&mut state.player_bullets, config.screen_height);
    update_bullets(&mut state.enemy_bullets, config.screen_height);

    update_enemies(
        &mut state.enemies,
        &mut state.enemy_bullets,
        dt_ms,
        config,
        state.sizes.enemy_bullet,
        rng,
    );

    outcome.collisions = resolve_collisions(state, config);

    if state.enemies.is_empty() {
        state.wave += 1;
        state.enemies = spawn_wave(state.wave, config, state.sizes.enemy, rng);
        outcome.wave_cleared = true;
    }

    if state.lives <= 0 {
        log::info!(
            "Game over: score {} on wave {} after {} frames",
            state.score,
            state.wave,
            state.frame
        );
        state.status = GameStatus::GameOver;
    }

    outcome
}
