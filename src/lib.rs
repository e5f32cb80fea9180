//! Mini Galaga, a terminal arcade shooter.
//!
//! The simulation (`entities`, `compute`, `spawner`, `collision`, `game`) is
//! pure and driven by explicit inputs: the current `GameState`, the frame's
//! `FrameInput`, the elapsed milliseconds, the `Config` and an injected RNG.
//! Everything that touches the terminal lives in the binary.

pub mod assets;
pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod spawner;
pub mod starfield;

pub use config::Config;
pub use entities::{GameState, GameStatus};
pub use game::{init_state, reset, tick};
