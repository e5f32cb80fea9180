//! Sprite provider.
//!
//! Each actor kind has a size (from `Config`) and a small block of glyph art
//! for the terminal. Art is read from `<asset_dir>/<kind>.txt` when present;
//! a missing, empty or oversized file falls back to the built-in art, so the
//! game always runs with zero asset files.

use std::path::Path;

use glam::Vec2;

use crate::config::Config;
use crate::entities::{ActorKind, SpriteSizes};

/// Widest/tallest glyph art accepted from disk.
pub const MAX_ART_COLS: usize = 12;
pub const MAX_ART_ROWS: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// World-space size used for collision and placement.
    pub size: Vec2,
    /// Glyph rows, drawn centred on the actor.
    pub art: Vec<String>,
}

impl Sprite {
    pub fn art_width(&self) -> usize {
        self.art.iter().map(|row| row.chars().count()).max().unwrap_or(0)
    }
}

/// Anything that can hand out a sprite for every actor kind.
pub trait AssetProvider {
    fn sprite(&self, kind: ActorKind) -> &Sprite;

    fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            player: self.sprite(ActorKind::Player).size,
            enemy: self.sprite(ActorKind::Enemy).size,
            player_bullet: self.sprite(ActorKind::PlayerBullet).size,
            enemy_bullet: self.sprite(ActorKind::EnemyBullet).size,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SpriteSet {
    player: Sprite,
    enemy: Sprite,
    player_bullet: Sprite,
    enemy_bullet: Sprite,
}

impl SpriteSet {
    fn build(mut make: impl FnMut(ActorKind) -> Sprite) -> Self {
        Self {
            player: make(ActorKind::Player),
            enemy: make(ActorKind::Enemy),
            player_bullet: make(ActorKind::PlayerBullet),
            enemy_bullet: make(ActorKind::EnemyBullet),
        }
    }

    /// Built-in art only.
    pub fn builtin(config: &Config) -> Self {
        let sizes = SpriteSizes::from_config(config);
        Self::build(|kind| builtin_sprite(kind, sizes.get(kind)))
    }

    /// Load art from `dir`, kind by kind, falling back to the built-in art.
    pub fn load_or_builtin(dir: &Path, config: &Config) -> Self {
        let sizes = SpriteSizes::from_config(config);
        Self::build(|kind| {
            let size = sizes.get(kind);
            let path = dir.join(format!("{}.txt", kind.name()));
            let Ok(text) = std::fs::read_to_string(&path) else {
                return builtin_sprite(kind, size);
            };
            match parse_art(&text) {
                Some(art) => {
                    log::info!("Loaded sprite {}", path.display());
                    Sprite { size, art }
                }
                None => {
                    log::warn!("Malformed sprite {}, using built-in", path.display());
                    builtin_sprite(kind, size)
                }
            }
        })
    }
}

impl AssetProvider for SpriteSet {
    fn sprite(&self, kind: ActorKind) -> &Sprite {
        match kind {
            ActorKind::Player => &self.player,
            ActorKind::Enemy => &self.enemy,
            ActorKind::PlayerBullet => &self.player_bullet,
            ActorKind::EnemyBullet => &self.enemy_bullet,
        }
    }
}

/// Trim trailing blank lines; reject empty or oversized art.
fn parse_art(text: &str) -> Option<Vec<String>> {
    let mut rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    let too_wide = rows.iter().any(|r| r.chars().count() > MAX_ART_COLS);
    if rows.is_empty() || rows.len() > MAX_ART_ROWS || too_wide {
        return None;
    }
    Some(rows)
}

fn builtin_sprite(kind: ActorKind, size: Vec2) -> Sprite {
    let art: &[&str] = match kind {
        //   ▲
        //  /█\
        ActorKind::Player => &[" ▲ ", "/█\\"],
        //  «▼»    swept-back wings
        //  ╚═╝    engine block
        ActorKind::Enemy => &["«▼»", "╚═╝"],
        ActorKind::PlayerBullet => &["║"],
        ActorKind::EnemyBullet => &["↓"],
    };
    Sprite {
        size,
        art: art.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("mini_galaga_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn builtin_covers_every_kind() {
        let set = SpriteSet::builtin(&Config::default());
        for kind in ActorKind::ALL {
            assert!(!set.sprite(kind).art.is_empty());
        }
        assert_eq!(set.sizes(), SpriteSizes::from_config(&Config::default()));
    }

    #[test]
    fn missing_dir_falls_back() {
        let config = Config::default();
        let set = SpriteSet::load_or_builtin(Path::new("/no/such/assets"), &config);
        assert_eq!(set.sprite(ActorKind::Enemy).art, vec!["«▼»", "╚═╝"]);
    }

    #[test]
    fn art_file_overrides_builtin_but_not_size() {
        let dir = scratch_dir("override");
        fs::write(dir.join("enemy.txt"), "<O>\n/ \\\n\n").unwrap();
        let config = Config::default();
        let set = SpriteSet::load_or_builtin(&dir, &config);
        let enemy = set.sprite(ActorKind::Enemy);
        assert_eq!(enemy.art, vec!["<O>", "/ \\"]);
        assert_eq!(enemy.size, config.enemy_size);
        assert_eq!(set.sprite(ActorKind::Player).art, vec![" ▲ ", "/█\\"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_art_falls_back() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("player.txt"), "\n\n").unwrap();
        fs::write(dir.join("enemy.txt"), "x".repeat(MAX_ART_COLS + 1)).unwrap();
        let set = SpriteSet::load_or_builtin(&dir, &Config::default());
        assert_eq!(set.sprite(ActorKind::Player).art, vec![" ▲ ", "/█\\"]);
        assert_eq!(set.sprite(ActorKind::Enemy).art, vec!["«▼»", "╚═╝"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn art_width_counts_chars() {
        let set = SpriteSet::builtin(&Config::default());
        assert_eq!(set.sprite(ActorKind::Player).art_width(), 3);
    }
}
