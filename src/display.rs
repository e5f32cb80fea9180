//! Terminal renderer. All terminal output lives here.
//!
//! World coordinates (pixels) are scaled onto the terminal grid; every sprite
//! is drawn as its glyph art centred on the actor's box. No game logic.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};
use glam::Vec2;

use mini_galaga::assets::{AssetProvider, SpriteSet};
use mini_galaga::entities::ActorKind;
use mini_galaga::geometry::Rect;
use mini_galaga::render::{Renderer, TextAnchor, TextStyle};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STAR: Color = Color::DarkGrey;
const C_HUD: Color = Color::White;
const C_BANNER: Color = Color::Red;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Green;
const C_BULLET_ENEMY: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

fn sprite_color(kind: ActorKind) -> Color {
    match kind {
        ActorKind::Player => C_PLAYER,
        ActorKind::Enemy => C_ENEMY,
        ActorKind::PlayerBullet => C_BULLET_PLAYER,
        ActorKind::EnemyBullet => C_BULLET_ENEMY,
    }
}

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Maps world space onto a `cols × rows` character grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub world: Vec2,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(world: Vec2, cols: u16, rows: u16) -> Self {
        Self {
            world,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Cell containing `point`, which may lie off the grid.
    pub fn cell(&self, point: Vec2) -> (i32, i32) {
        let col = (point.x / self.world.x * self.cols as f32).floor() as i32;
        let row = (point.y / self.world.y * self.rows as f32).floor() as i32;
        (col, row)
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        (0..self.cols as i32).contains(&col) && (0..self.rows as i32).contains(&row)
    }
}

/// Print `text` starting at (`col`, `row`), clipped to the grid.
fn put_clipped<W: Write>(
    out: &mut W,
    viewport: Viewport,
    col: i32,
    row: i32,
    text: &str,
) -> std::io::Result<()> {
    if !(0..viewport.rows as i32).contains(&row) {
        return Ok(());
    }
    let skip = (-col).max(0) as usize;
    let room = (viewport.cols as i32 - col.max(0)).max(0) as usize;
    let visible: String = text.chars().skip(skip).take(room).collect();
    if visible.is_empty() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(col.max(0) as u16, row as u16))?;
    out.queue(Print(visible))?;
    Ok(())
}

// ── Renderer ──────────────────────────────────────────────────────────────────

pub struct TerminalRenderer<W: Write> {
    out: W,
    sprites: SpriteSet,
    viewport: Viewport,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, sprites: SpriteSet, viewport: Viewport) -> Self {
        Self {
            out,
            sprites,
            viewport,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport::new(self.viewport.world, cols, rows);
    }

    fn put(&mut self, col: i32, row: i32, text: &str) -> std::io::Result<()> {
        put_clipped(&mut self.out, self.viewport, col, row, text)
    }

    fn draw_controls_hint(&mut self) -> std::io::Result<()> {
        let row = self.viewport.rows as i32 - 1;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.put(1, row, "← → / A D : Move   SPACE : Shoot   Q : Quit")
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin_frame(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_stars(&mut self, stars: &[Vec2]) -> std::io::Result<()> {
        self.out.queue(style::SetForegroundColor(C_STAR))?;
        for star in stars {
            let (col, row) = self.viewport.cell(*star);
            if self.viewport.contains(col, row) {
                self.put(col, row, "·")?;
            }
        }
        Ok(())
    }

    fn draw_sprite(&mut self, kind: ActorKind, rect: &Rect) -> std::io::Result<()> {
        let sprite = self.sprites.sprite(kind);
        let width = sprite.art_width() as i32;
        let (col, row) = self.viewport.cell(rect.center());
        let left = col - width / 2;
        let top = row - sprite.art.len() as i32 / 2;

        self.out.queue(style::SetForegroundColor(sprite_color(kind)))?;
        for (i, line) in sprite.art.iter().enumerate() {
            put_clipped(&mut self.out, self.viewport, left, top + i as i32, line)?;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        anchor: TextAnchor,
        text_style: TextStyle,
    ) -> std::io::Result<()> {
        let (col, row) = match anchor {
            TextAnchor::TopLeft(pos) => self.viewport.cell(pos),
            TextAnchor::Center(pos) => {
                let (col, row) = self.viewport.cell(pos);
                (col - text.chars().count() as i32 / 2, row)
            }
        };
        match text_style {
            TextStyle::Hud => {
                self.out.queue(style::SetForegroundColor(C_HUD))?;
                self.put(col.max(1), row.max(0), text)
            }
            TextStyle::Banner => {
                let boxed = format!("╔{}╗", "═".repeat(text.chars().count() + 4));
                let bottom = format!("╚{}╝", "═".repeat(text.chars().count() + 4));
                let middle = format!("║  {text}  ║");
                self.out.queue(style::SetForegroundColor(C_BANNER))?;
                self.out.queue(style::SetAttribute(Attribute::Bold))?;
                self.put(col - 3, row - 1, &boxed)?;
                self.put(col - 3, row, &middle)?;
                self.put(col - 3, row + 1, &bottom)?;
                self.out.queue(style::SetAttribute(Attribute::Reset))?;
                Ok(())
            }
        }
    }

    fn end_frame(&mut self) -> std::io::Result<()> {
        self.draw_controls_hint()?;
        // Park the cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, self.viewport.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
