//! Per-frame input snapshot and the terminal key tracker that produces it.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input state sampled once per frame. Movement and fire are held states,
/// not presses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub escape: bool,
    /// Raw quit signal from the platform (Ctrl-C, closed input stream).
    pub quit_requested: bool,
}

impl FrameInput {
    /// -1.0, 0.0 or +1.0. Holding both directions cancels out.
    pub fn direction(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    pub fn wants_quit(&self) -> bool {
        self.escape || self.quit_requested
    }
}

/// A key is considered held if its last press/repeat event arrived within
/// this many frames. Covers terminals that never send release events: OS
/// key repeat is ≥ 15 Hz, so a key being held refreshes well inside the
/// window at 60 FPS.
pub const HOLD_WINDOW: u64 = 8;

/// Tracks which keys are held, frame by frame.
///
/// Keyboard-enhancement capable terminals (kitty protocol) report
/// `Press`/`Repeat`/`Release`, so keys stay held until their release.
/// Classic terminals only repeat `Press`; keys then expire after
/// `HOLD_WINDOW` frames of silence. The first `Release` seen switches a
/// classic tracker over to release mode.
#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Held key → frame it was last seen.
    key_frame: HashMap<KeyCode, u64>,
    quit_requested: bool,
    escape_pressed: bool,
    reports_release: bool,
}

impl KeyTracker {
    /// Tracker for a terminal that only sends presses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker for a terminal known to send release events.
    pub fn with_release_events() -> Self {
        Self {
            reports_release: true,
            ..Self::default()
        }
    }

    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// Feed one terminal event observed during `frame`.
    pub fn handle_event(&mut self, event: &Event, frame: u64) {
        let Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
        else {
            return;
        };
        let code = normalize(*code);
        match kind {
            KeyEventKind::Press => {
                if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                    self.quit_requested = true;
                    return;
                }
                if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
                    self.escape_pressed = true;
                }
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.reports_release = true;
                self.key_frame.remove(&code);
            }
        }
    }

    /// The input source went away; treat it like closing the window.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&normalize(key))
            .map(|&last| self.reports_release || frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn sample(&self, frame: u64) -> FrameInput {
        FrameInput {
            left: self.is_held(KeyCode::Left, frame) || self.is_held(KeyCode::Char('a'), frame),
            right: self.is_held(KeyCode::Right, frame) || self.is_held(KeyCode::Char('d'), frame),
            fire: self.is_held(KeyCode::Char(' '), frame),
            escape: self.escape_pressed,
            quit_requested: self.quit_requested,
        }
    }
}

/// Fold letter case so `A` and `a` are the same key.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    #[test]
    fn direction_cancels_when_both_held() {
        let input = FrameInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), 0.0);
        let input = FrameInput {
            left: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), -1.0);
    }

    #[test]
    fn press_is_held_until_window_expires() {
        let mut t = KeyTracker::new();
        t.handle_event(&key(KeyCode::Left, KeyEventKind::Press), 10);
        assert!(t.sample(10).left);
        assert!(t.sample(10 + HOLD_WINDOW).left);
        assert!(!t.sample(11 + HOLD_WINDOW).left);
    }

    #[test]
    fn release_drops_key_immediately() {
        let mut t = KeyTracker::new();
        t.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Press), 1);
        assert!(t.sample(1).fire);
        t.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Release), 2);
        assert!(!t.sample(2).fire);
    }

    #[test]
    fn release_terminal_holds_key_until_release() {
        let mut t = KeyTracker::with_release_events();
        t.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Press), 1);
        for frame in 1..=31 {
            assert!(t.sample(frame).fire, "fire dropped at frame {frame}");
        }
        t.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Release), 32);
        assert!(!t.sample(32).fire);
    }

    #[test]
    fn first_release_switches_off_hold_window() {
        let mut t = KeyTracker::new();
        assert!(!t.reports_release());
        t.handle_event(&key(KeyCode::Left, KeyEventKind::Press), 1);
        t.handle_event(&key(KeyCode::Char('d'), KeyEventKind::Press), 2);
        t.handle_event(&key(KeyCode::Char('d'), KeyEventKind::Release), 3);
        assert!(t.reports_release());
        assert!(t.sample(1 + 4 * HOLD_WINDOW).left);
        assert!(!t.sample(1 + 4 * HOLD_WINDOW).right);
    }

    #[test]
    fn repeat_refreshes_hold() {
        let mut t = KeyTracker::new();
        t.handle_event(&key(KeyCode::Char('d'), KeyEventKind::Press), 1);
        t.handle_event(&key(KeyCode::Char('d'), KeyEventKind::Repeat), 1 + HOLD_WINDOW);
        assert!(t.sample(1 + 2 * HOLD_WINDOW).right);
    }

    #[test]
    fn uppercase_letters_move_too() {
        let mut t = KeyTracker::new();
        t.handle_event(&key(KeyCode::Char('A'), KeyEventKind::Press), 3);
        assert!(t.sample(3).left);
    }

    #[test]
    fn escape_and_ctrl_c_are_latched() {
        let mut t = KeyTracker::new();
        t.handle_event(&key(KeyCode::Esc, KeyEventKind::Press), 1);
        assert!(t.sample(100).escape);

        let mut t = KeyTracker::new();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        t.handle_event(&ctrl_c, 1);
        let input = t.sample(1);
        assert!(input.quit_requested);
        assert!(input.wants_quit());
    }

    #[test]
    fn non_key_events_are_ignored() {
        let mut t = KeyTracker::new();
        t.handle_event(&Event::Resize(80, 24), 1);
        assert_eq!(t.sample(1), FrameInput::default());
    }
}
