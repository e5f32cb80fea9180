//! Axis-aligned boxes in world space (pixels, y pointing down).

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    /// Box whose bottom edge is centred on `anchor`.
    pub fn from_midbottom(anchor: Vec2, size: Vec2) -> Self {
        Self::new(Vec2::new(anchor.x - size.x / 2.0, anchor.y - size.y), size)
    }

    /// Box whose top edge is centred on `anchor`.
    pub fn from_midtop(anchor: Vec2, size: Vec2) -> Self {
        Self::new(Vec2::new(anchor.x - size.x / 2.0, anchor.y), size)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn midtop(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.top())
    }

    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.bottom())
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// True when the two boxes share a non-empty area. Touching edges do
    /// not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
