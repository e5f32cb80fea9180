mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc::{self, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use mini_galaga::assets::{AssetProvider, SpriteSet};
use mini_galaga::clock::FrameClock;
use mini_galaga::input::KeyTracker;
use mini_galaga::render::draw_frame;
use mini_galaga::{init_state, tick, Config, GameState, GameStatus};

use display::{TerminalRenderer, Viewport};

const LOG_FILE: &str = "mini_galaga.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so log lines go to a file in the temp
/// directory. `RUST_LOG` picks the level (default `info`).
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    match File::create(std::env::temp_dir().join(LOG_FILE)) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run frames until the game leaves `Running`.
///
/// Each frame: wait out the frame budget, drain pending terminal events into
/// the key tracker, sample the held keys, advance the simulation, draw.
fn game_loop<W: Write>(
    renderer: &mut TerminalRenderer<W>,
    rx: &mpsc::Receiver<Event>,
    state: &mut GameState,
    config: &Config,
    rng: &mut Pcg32,
    mut keys: KeyTracker,
) -> std::io::Result<()> {
    let mut clock = FrameClock::new(config.fps);
    log::debug!("Frame budget {:?}", clock.frame_duration());
    let mut frame: u64 = 0;

    while state.is_running() {
        let dt = clock.tick();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            match rx.try_recv() {
                Ok(Event::Resize(cols, rows)) => renderer.resize(cols, rows),
                Ok(ev) => keys.handle_event(&ev, frame),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    keys.request_quit();
                    break;
                }
            }
        }

        let input = keys.sample(frame);
        tick(state, &input, dt, config, rng);
        draw_frame(renderer, state, config)?;
    }
    Ok(())
}

/// Keep the "Game Over" banner on screen until a key is pressed or the
/// linger time runs out.
fn linger(rx: &mpsc::Receiver<Event>, config: &Config) {
    let deadline = Instant::now() + Duration::from_millis(config.game_over_linger_ms);
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break,
            Ok(_) => {}
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => break,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();

    let config = Config::load();
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Mini Galaga starting, seed {seed}");
    let mut rng = Pcg32::seed_from_u64(seed);

    let sprites = SpriteSet::load_or_builtin(&config.asset_dir, &config);
    let mut state = init_state(&config, sprites.sizes(), &mut rng);

    let mut out = stdout();
    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::info!("Key release events: {keyboard_enhanced}");
    let keys = if keyboard_enhanced {
        KeyTracker::with_release_events()
    } else {
        KeyTracker::new()
    };

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = terminal::size().and_then(|(cols, rows)| {
        let viewport = Viewport::new(config.screen_size(), cols, rows);
        let mut renderer = TerminalRenderer::new(BufWriter::new(stdout()), sprites, viewport);
        game_loop(&mut renderer, &rx, &mut state, &config, &mut rng, keys)
    });
    if result.is_ok() && state.status == GameStatus::GameOver {
        linger(&rx, &config);
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("running game loop")?;
    log::info!(
        "Session ended ({:?}): score {}, wave {}",
        state.status,
        state.score,
        state.wave
    );
    Ok(())
}
