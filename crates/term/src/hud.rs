//! HUD overlay: read-only display of a [`HudSnapshot`].
//!
//! Drawn on top of the scene every frame. It never sees the session itself,
//! only the copied snapshot, so it cannot disagree with the canvas stats.
//!
//! - top-left panel: score (8 digits), wave (3 digits), level (2 digits)
//! - top-right panel: lives, gems, run indicator
//! - bottom bar: key hints for the control commands

use crate::core::HudSnapshot;
use crate::fb::{FrameBuffer, Rgb};
use crate::scene::{NEON_CYAN, NEON_GOLD, NEON_RED, NEON_VIOLET};
use crate::types::RunState;

pub const SCORE_DIGITS: usize = 8;
pub const WAVE_DIGITS: usize = 3;
pub const LEVEL_DIGITS: usize = 2;

const PANEL_INNER_W: u16 = 17;
const PANEL_W: u16 = PANEL_INNER_W + 2;
const PANEL_H: u16 = 5;
const MARGIN: u16 = 2;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const GREEN: Rgb = Rgb::new(74, 222, 128);
const GRAY: Rgb = Rgb::new(156, 163, 175);
const PURPLE: Rgb = Rgb::new(168, 85, 247);

/// Glyph drawn before the run state label.
pub fn status_glyph(state: RunState) -> &'static str {
    match state {
        RunState::Stopped => "[]",
        RunState::Running => "|>",
        RunState::Paused => "||",
    }
}

pub fn status_color(state: RunState) -> Rgb {
    match state {
        RunState::Stopped => GRAY,
        RunState::Running => GREEN,
        RunState::Paused => NEON_GOLD,
    }
}

#[derive(Debug, Clone, Copy)]
struct Button {
    label: &'static str,
    bg: Rgb,
    fg: Rgb,
}

#[derive(Debug, Clone, Default)]
pub struct HudOverlay;

impl HudOverlay {
    pub fn new() -> Self {
        Self
    }

    /// Draw the overlay over whatever is already in `fb`.
    pub fn render_into(&self, fb: &mut FrameBuffer, snap: &HudSnapshot) -> bool {
        if fb.is_empty() {
            return false;
        }

        if fb.width() >= PANEL_W + MARGIN && fb.height() >= PANEL_H + 1 {
            self.draw_stats_panel(fb, snap);
            if fb.width() >= 2 * (PANEL_W + MARGIN) + 1 {
                self.draw_status_panel(fb, snap);
            }
        }
        if fb.height() >= 3 {
            self.draw_control_bar(fb, snap);
        }
        true
    }

    fn draw_stats_panel(&self, fb: &mut FrameBuffer, snap: &HudSnapshot) {
        let x = MARGIN;
        let y = 1;
        draw_panel(fb, x, y, NEON_CYAN);

        let rows: [(&str, u64, usize, Rgb); 3] = [
            ("SCORE: ", snap.stats.score, SCORE_DIGITS, NEON_CYAN),
            ("WAVE: ", snap.stats.wave as u64, WAVE_DIGITS, NEON_VIOLET),
            ("LEVEL: ", snap.stats.level as u64, LEVEL_DIGITS, NEON_GOLD),
        ];
        for (i, (label, value, digits, color)) in rows.into_iter().enumerate() {
            let ry = y + 1 + i as u16;
            let used = fb.overprint_str(x + 2, ry, label, color, false);
            fb.overprint_u64(x + 2 + used, ry, value, digits, color, false);
        }
    }

    fn draw_status_panel(&self, fb: &mut FrameBuffer, snap: &HudSnapshot) {
        let x = fb.width() - MARGIN - PANEL_W;
        let y = 1;
        draw_panel(fb, x, y, NEON_RED);

        let used = fb.overprint_str(x + 2, y + 1, "LIVES: ", NEON_RED, false);
        fb.overprint_u64(x + 2 + used, y + 1, snap.stats.lives as u64, 0, NEON_RED, false);

        let used = fb.overprint_str(x + 2, y + 2, "◆ GEMS: ", NEON_GOLD, false);
        fb.overprint_u64(x + 2 + used, y + 2, snap.stats.gems as u64, 0, NEON_GOLD, false);

        let state = snap.run_state;
        let color = status_color(state);
        let used = fb.overprint_str(x + 2, y + 3, status_glyph(state), color, true);
        fb.overprint_str(x + 3 + used, y + 3, state.label(), color, true);
    }

    fn draw_control_bar(&self, fb: &mut FrameBuffer, snap: &HudSnapshot) {
        let mut buttons = [None::<Button>; 4];
        let mut n = 0usize;
        let mut push = |b: Button| {
            buttons[n] = Some(b);
            n += 1;
        };

        match snap.run_state {
            RunState::Stopped => push(Button {
                label: " [S] START GAME ",
                bg: NEON_CYAN,
                fg: BLACK,
            }),
            RunState::Running | RunState::Paused => {
                let label = if snap.run_state == RunState::Paused {
                    " [P] RESUME "
                } else {
                    " [P] PAUSE "
                };
                push(Button {
                    label,
                    bg: NEON_GOLD,
                    fg: BLACK,
                });
                push(Button {
                    label: " [R] RESET ",
                    bg: NEON_RED,
                    fg: WHITE,
                });
            }
        }
        push(Button {
            label: if snap.sound_enabled {
                " [M] SOUND ON "
            } else {
                " [M] SOUND OFF "
            },
            bg: PURPLE,
            fg: WHITE,
        });
        push(Button {
            label: " [Q] QUIT ",
            bg: GRAY,
            fg: BLACK,
        });

        let gap = 2u16;
        let count = buttons.iter().flatten().count() as u16;
        let total: u16 = buttons
            .iter()
            .flatten()
            .map(|b| b.label.chars().count() as u16)
            .sum::<u16>()
            + gap * count.saturating_sub(1);

        let y = fb.height() - 2;
        let mut x = fb.width().saturating_sub(total) / 2;
        for b in buttons.iter().flatten() {
            let start = x;
            let used = fb.overprint_str(x, y, b.label, b.fg, true);
            for cx in start..start + used {
                fb.tint_bg(cx, y, b.bg, 1.0);
            }
            x = x.saturating_add(used + gap);
            if x >= fb.width() {
                break;
            }
        }
    }
}

/// Bordered, darkened panel of `PANEL_W x PANEL_H` at (x, y).
fn draw_panel(fb: &mut FrameBuffer, x: u16, y: u16, border: Rgb) {
    for dy in 0..PANEL_H {
        for dx in 0..PANEL_W {
            fb.tint_bg(x + dx, y + dy, BLACK, 0.6);
        }
    }

    let w = PANEL_W;
    let h = PANEL_H;
    fb.overprint_char(x, y, '┌', border, false);
    fb.overprint_char(x + w - 1, y, '┐', border, false);
    fb.overprint_char(x, y + h - 1, '└', border, false);
    fb.overprint_char(x + w - 1, y + h - 1, '┘', border, false);
    for dx in 1..w - 1 {
        fb.overprint_char(x + dx, y, '─', border, false);
        fb.overprint_char(x + dx, y + h - 1, '─', border, false);
    }
    for dy in 1..h - 1 {
        fb.overprint_char(x, y + dy, '│', border, false);
        fb.overprint_char(x + w - 1, y + dy, '│', border, false);
    }
    for dy in 1..h - 1 {
        for dx in 1..w - 1 {
            fb.overprint_char(x + dx, y + dy, ' ', border, false);
        }
    }
}
