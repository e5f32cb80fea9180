//! All game entity types. Pure data, no per-frame logic.

use glam::Vec2;

use crate::config::Config;
use crate::geometry::Rect;
use crate::starfield::StarField;

// ── Actor kinds ───────────────────────────────────────────────────────────────

/// The closed set of things that get a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Enemy,
    PlayerBullet,
    EnemyBullet,
}

impl ActorKind {
    pub const ALL: [ActorKind; 4] = [
        ActorKind::Player,
        ActorKind::Enemy,
        ActorKind::PlayerBullet,
        ActorKind::EnemyBullet,
    ];

    /// Asset file stem.
    pub fn name(self) -> &'static str {
        match self {
            ActorKind::Player => "player",
            ActorKind::Enemy => "enemy",
            ActorKind::PlayerBullet => "player_bullet",
            ActorKind::EnemyBullet => "enemy_bullet",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Lives ran out. Terminal; the banner is shown.
    GameOver,
    /// The player asked to quit. Terminal; no banner.
    Stopped,
}

/// Dimensions for every actor kind, as supplied by the asset provider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSizes {
    pub player: Vec2,
    pub enemy: Vec2,
    pub player_bullet: Vec2,
    pub enemy_bullet: Vec2,
}

impl SpriteSizes {
    pub fn from_config(config: &Config) -> Self {
        Self {
            player: config.player_size,
            enemy: config.enemy_size,
            player_bullet: config.player_bullet_size,
            enemy_bullet: config.enemy_bullet_size,
        }
    }

    pub fn get(&self, kind: ActorKind) -> Vec2 {
        match kind {
            ActorKind::Player => self.player,
            ActorKind::Enemy => self.enemy,
            ActorKind::PlayerBullet => self.player_bullet,
            ActorKind::EnemyBullet => self.enemy_bullet,
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A projectile. Whether it belongs to the player or an enemy is given by the
/// collection it lives in.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    /// Pixels per frame.
    pub velocity: Vec2,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Milliseconds until the next shot is allowed.
    pub fire_timer_ms: u32,
    /// Midbottom of the spawn point.
    pub spawn: Vec2,
}

impl Player {
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::from_midbottom(spawn, size),
            fire_timer_ms: 0,
            spawn,
        }
    }

    pub fn respawn(&mut self) {
        self.rect = Rect::from_midbottom(self.spawn, self.rect.size);
    }
}

/// Sway direction of an enemy's phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    /// Accumulated phase in radians.
    pub phase: f32,
    /// Top-left of the formation slot the enemy sways around.
    pub base: Vec2,
    pub direction: Direction,
    /// Milliseconds until the next shot; fires once this reaches zero or less.
    pub cooldown_ms: i32,
}

impl Enemy {
    /// Place an enemy in the slot centred on `slot_center`.
    pub fn at_slot(slot_center: Vec2, phase: f32, size: Vec2, config: &Config) -> Self {
        let rect = Rect::from_center(slot_center, size);
        let mut enemy = Self {
            rect,
            phase,
            base: rect.pos,
            direction: Direction::Forward,
            cooldown_ms: config.enemy_cooldown_ms,
        };
        enemy.rect.pos = enemy.sway_position(config);
        enemy
    }

    /// Top-left corner for the current phase.
    pub fn sway_position(&self, config: &Config) -> Vec2 {
        self.base
            + Vec2::new(
                config.enemy_sway_x * self.phase.sin(),
                config.enemy_sway_y * self.phase.cos(),
            )
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Owned by the loop and mutated only inside `tick`.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub background: StarField,
    pub sizes: SpriteSizes,
    pub score: u32,
    /// Checked against `<= 0`; several losses in one frame may push it below.
    pub lives: i32,
    pub wave: u32,
    pub status: GameStatus,
    pub frame: u64,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn show_game_over(&self) -> bool {
        self.lives <= 0
    }
}
