//! Game tuning table.
//!
//! Defaults reproduce the arcade's original balance. A JSON file named by the
//! `MINI_GALAGA_CONFIG` environment variable may override any subset of the
//! fields; missing fields keep their defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Environment variable holding the optional config file path.
pub const CONFIG_ENV: &str = "MINI_GALAGA_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // ── Screen & pacing ──────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,

    // ── Player ───────────────────────────────────────────────────────────────
    /// Pixels per nominal frame.
    pub player_speed: f32,
    pub player_cooldown_ms: u32,
    /// Upward pixels per frame.
    pub player_bullet_speed: f32,
    /// Distance between the ship's bottom edge and the screen bottom.
    pub player_spawn_margin: f32,
    pub starting_lives: i32,

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub enemy_cooldown_ms: i32,
    /// Fire cooldown jitter, applied as a uniform offset in `[-j, +j]`.
    pub enemy_fire_jitter_ms: i32,
    /// Downward pixels per frame.
    pub enemy_bullet_speed: f32,
    /// Radians of phase per elapsed millisecond.
    pub enemy_phase_rate: f32,
    pub enemy_sway_x: f32,
    pub enemy_sway_y: f32,
    /// Per-enemy, per-frame chance of reversing the sway direction.
    pub enemy_flip_chance: f64,
    /// An enemy whose bottom edge reaches `screen_height - breach_margin`
    /// has breached the defence line.
    pub breach_margin: f32,
    pub score_per_enemy: u32,

    // ── Formation ────────────────────────────────────────────────────────────
    pub formation_columns: u32,
    pub formation_base_rows: u32,
    pub formation_row_cap: u32,
    pub formation_top: f32,
    pub formation_row_gap: f32,

    // ── Background ───────────────────────────────────────────────────────────
    pub star_count: usize,
    pub star_speed: f32,

    // ── Sprites ──────────────────────────────────────────────────────────────
    pub player_size: Vec2,
    pub enemy_size: Vec2,
    pub player_bullet_size: Vec2,
    pub enemy_bullet_size: Vec2,
    pub asset_dir: PathBuf,

    // ── Session ──────────────────────────────────────────────────────────────
    /// How long the "Game Over" banner stays up before the program exits.
    pub game_over_linger_ms: u64,
    /// Fixed RNG seed for a replayable run.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 640.0,
            screen_height: 800.0,
            fps: 60,

            player_speed: 5.0,
            player_cooldown_ms: 250,
            player_bullet_speed: 8.0,
            player_spawn_margin: 40.0,
            starting_lives: 3,

            enemy_cooldown_ms: 1000,
            enemy_fire_jitter_ms: 200,
            enemy_bullet_speed: 3.0,
            enemy_phase_rate: 0.002,
            enemy_sway_x: 80.0,
            enemy_sway_y: 10.0,
            enemy_flip_chance: 0.005,
            breach_margin: 40.0,
            score_per_enemy: 100,

            formation_columns: 6,
            formation_base_rows: 3,
            formation_row_cap: 3,
            formation_top: 80.0,
            formation_row_gap: 60.0,

            star_count: 64,
            star_speed: 1.0,

            player_size: Vec2::new(48.0, 48.0),
            enemy_size: Vec2::new(44.0, 44.0),
            player_bullet_size: Vec2::new(6.0, 20.0),
            enemy_bullet_size: Vec2::new(8.0, 24.0),
            asset_dir: PathBuf::from("assets"),

            game_over_linger_ms: 2000,
            seed: None,
        }
    }
}

impl Config {
    /// Parse a JSON config file. The result is already sanitized.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Load the file named by `MINI_GALAGA_CONFIG`, falling back to the
    /// defaults when the variable is unset or the file is unusable.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            log::info!("Using default config");
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config: {err:#}");
                Self::default()
            }
        }
    }

    /// Clamp values that would otherwise make the simulation panic or
    /// degenerate: probabilities outside `[0, 1]`, a formation without
    /// columns or rows, a zero frame rate, negative cooldowns or jitter.
    pub fn sanitized(mut self) -> Self {
        self.fps = self.fps.max(1);
        self.formation_columns = self.formation_columns.max(1);
        // Wave 1 gets `base + min(1, cap)` rows.
        if self.formation_base_rows == 0 && self.formation_row_cap == 0 {
            self.formation_base_rows = 1;
        }
        self.enemy_cooldown_ms = self.enemy_cooldown_ms.max(0);
        self.enemy_flip_chance = if self.enemy_flip_chance.is_finite() {
            self.enemy_flip_chance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.enemy_fire_jitter_ms = self.enemy_fire_jitter_ms.max(0);
        self.screen_width = self.screen_width.max(1.0);
        self.screen_height = self.screen_height.max(1.0);
        self
    }

    /// Nominal frame length in milliseconds.
    pub fn frame_ms(&self) -> f32 {
        1000.0 / self.fps as f32
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Midbottom anchor of the player's spawn point.
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.screen_width / 2.0).floor(),
            self.screen_height - self.player_spawn_margin,
        )
    }

    pub fn breach_line(&self) -> f32 {
        self.screen_height - self.breach_margin
    }
}
