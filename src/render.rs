//! Renderer interface and the fixed per-frame draw order.

use std::io;

use glam::Vec2;

use crate::config::Config;
use crate::entities::{ActorKind, GameState};
use crate::geometry::Rect;

/// Where a text overlay is pinned, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextAnchor {
    TopLeft(Vec2),
    Center(Vec2),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Hud,
    Banner,
}

/// HUD position, top-left.
pub const HUD_POS: Vec2 = Vec2::new(20.0, 20.0);

/// Receives one frame of draw calls. The game never reads anything back.
pub trait Renderer {
    fn begin_frame(&mut self) -> io::Result<()>;
    fn draw_stars(&mut self, stars: &[Vec2]) -> io::Result<()>;
    fn draw_sprite(&mut self, kind: ActorKind, rect: &Rect) -> io::Result<()>;
    fn draw_text(&mut self, text: &str, anchor: TextAnchor, style: TextStyle) -> io::Result<()>;
    fn end_frame(&mut self) -> io::Result<()>;
}

pub fn hud_text(state: &GameState) -> String {
    format!("Score: {}   Lives: {}", state.score, state.lives)
}

/// Render one complete frame: background, bullets, enemies, player, HUD,
/// and the "Game Over" banner when the lives are gone.
pub fn draw_frame<R: Renderer>(renderer: &mut R, state: &GameState, config: &Config) -> io::Result<()> {
    renderer.begin_frame()?;
    renderer.draw_stars(&state.background.stars)?;

    for bullet in &state.player_bullets {
        renderer.draw_sprite(ActorKind::PlayerBullet, &bullet.rect)?;
    }
    for bullet in &state.enemy_bullets {
        renderer.draw_sprite(ActorKind::EnemyBullet, &bullet.rect)?;
    }
    for enemy in &state.enemies {
        renderer.draw_sprite(ActorKind::Enemy, &enemy.rect)?;
    }
    renderer.draw_sprite(ActorKind::Player, &state.player.rect)?;

    renderer.draw_text(&hud_text(state), TextAnchor::TopLeft(HUD_POS), TextStyle::Hud)?;
    if state.show_game_over() {
        renderer.draw_text(
            "Game Over",
            TextAnchor::Center(config.screen_size() / 2.0),
            TextStyle::Banner,
        )?;
    }

    renderer.end_frame()
}
