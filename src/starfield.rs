//! Scrolling star background. Purely decorative.

use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct StarField {
    pub stars: Vec<Vec2>,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl StarField {
    pub fn new(width: f32, height: f32, count: usize, speed: f32, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| Vec2::new(random_column(width, rng), random_column(height, rng)))
            .collect();
        Self {
            stars,
            speed,
            width,
            height,
        }
    }

    /// Move every star down; stars leaving the bottom wrap to the top at a
    /// fresh column.
    pub fn update(&mut self, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.y += self.speed;
            if star.y >= self.height {
                star.y = 0.0;
                star.x = random_column(self.width, rng);
            }
        }
    }
}

fn random_column(extent: f32, rng: &mut impl Rng) -> f32 {
    let cells = extent.max(1.0) as u32;
    rng.gen_range(0..cells) as f32
}
