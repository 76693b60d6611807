//! Scene: draws the animated canvas for one frame.
//!
//! This module is pure (no I/O). Layout is expressed in virtual canvas
//! pixels and converted to cells with `CELL_PX_W`/`CELL_PX_H`, so the scene
//! scales with the terminal size. Draw order is back to front:
//!
//! 1. vertical gradient
//! 2. scrolling diagonal grid
//! 3. drifting soft circles
//! 4. title and subtitle with glow
//! 5. stats block

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Stats, CELL_PX_H, CELL_PX_W, GRID_SIZE_PX, SCROLL_SPEED_PX, WOBBLE_AMPLITUDE_PX,
    WOBBLE_PHASE_FRAMES, WOBBLE_RATE,
};
use crate::viewport::Viewport;

pub const BG_EDGE: Rgb = Rgb::new(0x02, 0x03, 0x0a);
pub const BG_MID: Rgb = Rgb::new(0x0a, 0x05, 0x15);

pub const NEON_CYAN: Rgb = Rgb::new(0, 255, 231);
pub const NEON_VIOLET: Rgb = Rgb::new(192, 132, 252);
pub const NEON_RED: Rgb = Rgb::new(255, 45, 85);
pub const NEON_GOLD: Rgb = Rgb::new(255, 214, 10);

const GRID_GLYPH: char = '╱';
const GRID_ALPHA: f64 = 0.35;

const TITLE_OFFSET_PX: f64 = -120.0;
const SUBTITLE_OFFSET_PX: f64 = -40.0;
const STATS_OFFSET_X_PX: f64 = -200.0;
const STATS_OFFSET_Y_PX: f64 = 80.0;
const STAT_LINE_SPACING_PX: f64 = 32.0;
const STAT_LINES: usize = 5;

/// A background circle, positioned as a fraction of the canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub fx: f64,
    pub fy: f64,
    pub radius_px: f64,
    pub color: Rgb,
    pub alpha: f64,
}

pub const CIRCLES: [Circle; 3] = [
    Circle {
        fx: 0.15,
        fy: 0.2,
        radius_px: 150.0,
        color: NEON_CYAN,
        alpha: 0.16,
    },
    Circle {
        fx: 0.85,
        fy: 0.3,
        radius_px: 120.0,
        color: NEON_VIOLET,
        alpha: 0.14,
    },
    Circle {
        fx: 0.5,
        fy: 0.8,
        radius_px: 180.0,
        color: NEON_RED,
        alpha: 0.12,
    },
];

/// Grid scroll offset in pixels, in `[0, GRID_SIZE_PX)`.
///
/// The frame index is reduced modulo the scroll period first, so the offset
/// is exactly periodic however large the index grows.
pub fn grid_offset(frame: u64) -> f64 {
    let period = (GRID_SIZE_PX / SCROLL_SPEED_PX) as u64;
    ((frame % period) as f64 * SCROLL_SPEED_PX) % GRID_SIZE_PX
}

/// Drift of circle `index` at `frame`, applied to both axes.
pub fn wobble(frame: u64, index: usize) -> f64 {
    let phase = frame.wrapping_add(index as u64 * WOBBLE_PHASE_FRAMES) as f64 * WOBBLE_RATE;
    phase.sin() * WOBBLE_AMPLITUDE_PX
}

/// Background color of row `y` on a canvas `height` rows tall.
pub fn background_at(y: u16, height: u16) -> Rgb {
    if height == 0 {
        return BG_EDGE;
    }
    let t = (y as f64 + 0.5) / height as f64;
    if t < 0.5 {
        BG_EDGE.lerp(BG_MID, t * 2.0)
    } else {
        BG_MID.lerp(BG_EDGE, (t - 0.5) * 2.0)
    }
}

fn px_to_cols(px: f64) -> i32 {
    (px / CELL_PX_W).round() as i32
}

fn px_to_rows(px: f64) -> i32 {
    (px / CELL_PX_H).round() as i32
}

/// Renders the decorative canvas and the in-canvas stats block.
#[derive(Debug, Clone)]
pub struct Scene {
    title: &'static str,
    subtitle: &'static str,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            title: "BUBBLE WARS EX ∞",
            subtitle: "UPGRADED EDITION",
        }
    }
}

impl Scene {
    /// Render one frame into an existing framebuffer.
    ///
    /// Returns `false` when the surface is unavailable (zero-sized); the
    /// frame is skipped and nothing else happens.
    pub fn render_into(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        frame: u64,
        stats: &Stats,
    ) -> bool {
        fb.resize(viewport.width, viewport.height);
        if !viewport.is_drawable() {
            log::debug!(
                "frame {frame}: surface unavailable ({}x{}), skipped",
                viewport.width,
                viewport.height
            );
            return false;
        }

        self.draw_background(fb);
        self.draw_grid(fb, frame);
        self.draw_circles(fb, frame);
        self.draw_titles(fb);
        self.draw_stats(fb, stats);
        true
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, viewport: Viewport, frame: u64, stats: &Stats) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(&mut fb, viewport, frame, stats);
        fb
    }

    fn draw_background(&self, fb: &mut FrameBuffer) {
        let h = fb.height();
        let w = fb.width();
        for y in 0..h {
            let style = CellStyle {
                bg: background_at(y, h),
                ..CellStyle::default()
            };
            fb.fill_rect(0, y, w, 1, ' ', style);
        }
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, frame: u64) {
        let offset = grid_offset(frame);
        // Each row spans CELL_PX_H of the 45° line, i.e. two cells.
        let band = CELL_PX_H;
        for y in 0..fb.height() {
            let cy = (y as f64 + 0.5) * CELL_PX_H;
            for x in 0..fb.width() {
                let cx = (x as f64 + 0.5) * CELL_PX_W;
                let d = (cx + cy - offset).rem_euclid(GRID_SIZE_PX);
                if d < band {
                    let bg = background_at(y, fb.height());
                    fb.overprint_char(x, y, GRID_GLYPH, bg.blend(NEON_CYAN, GRID_ALPHA), false);
                }
            }
        }
    }

    fn draw_circles(&self, fb: &mut FrameBuffer, frame: u64) {
        let canvas_w = fb.width() as f64 * CELL_PX_W;
        let canvas_h = fb.height() as f64 * CELL_PX_H;

        for (i, circle) in CIRCLES.iter().enumerate() {
            let drift = wobble(frame, i);
            let ox = circle.fx * canvas_w + drift;
            let oy = circle.fy * canvas_h + drift;
            let r = circle.radius_px;

            let x0 = ((ox - r) / CELL_PX_W).floor().max(0.0) as u16;
            let x1 = ((ox + r) / CELL_PX_W).ceil().clamp(0.0, fb.width() as f64) as u16;
            let y0 = ((oy - r) / CELL_PX_H).floor().max(0.0) as u16;
            let y1 = ((oy + r) / CELL_PX_H).ceil().clamp(0.0, fb.height() as f64) as u16;

            for y in y0..y1 {
                let dy = (y as f64 + 0.5) * CELL_PX_H - oy;
                for x in x0..x1 {
                    let dx = (x as f64 + 0.5) * CELL_PX_W - ox;
                    let dist = (dx * dx + dy * dy).sqrt();
                    if dist > r {
                        continue;
                    }
                    // Soft rim over the outer fifth of the radius.
                    let rim = ((dist - 0.8 * r) / (0.2 * r)).clamp(0.0, 1.0);
                    fb.tint_bg(x, y, circle.color, circle.alpha * (1.0 - 0.5 * rim));
                }
            }
        }
    }

    fn draw_titles(&self, fb: &mut FrameBuffer) {
        let center_row = (fb.height() / 2) as i32;
        draw_glow_text(
            fb,
            self.title,
            center_row + px_to_rows(TITLE_OFFSET_PX),
            NEON_CYAN,
            0.3,
        );
        draw_glow_text(
            fb,
            self.subtitle,
            center_row + px_to_rows(SUBTITLE_OFFSET_PX),
            NEON_VIOLET,
            0.2,
        );
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, stats: &Stats) {
        let center_col = (fb.width() / 2) as i32;
        let x = (center_col + px_to_cols(STATS_OFFSET_X_PX)).max(0) as u16;
        let (top, spacing) = stats_layout(fb.height());

        let lines: [(&str, u64); STAT_LINES] = [
            ("SCORE: ", stats.score),
            ("WAVE: ", stats.wave as u64),
            ("LEVEL: ", stats.level as u64),
            ("LIVES: ", stats.lives as u64),
            ("◆ GEMS: ", stats.gems as u64),
        ];

        for (i, (label, value)) in lines.iter().enumerate() {
            let y = top + spacing * i as i32;
            if y < 0 || y >= fb.height() as i32 {
                continue;
            }
            let y = y as u16;
            let used = fb.overprint_str(x, y, label, NEON_GOLD, false);
            fb.overprint_u64(x.saturating_add(used), y, *value, 0, NEON_GOLD, false);
        }
    }
}

/// First row and row spacing of the stats block on a surface `height` rows tall.
///
/// The block keeps its canvas offset when it fits between the subtitle glow
/// and the control bar row (`height - 2`). Otherwise it moves up, and on
/// short surfaces the lines are packed one row apart.
fn stats_layout(height: u16) -> (i32, i32) {
    let center_row = (height / 2) as i32;
    let preferred = center_row + px_to_rows(STATS_OFFSET_Y_PX);
    let floor = center_row + px_to_rows(SUBTITLE_OFFSET_PX) + 2;
    let last = height as i32 - 3;
    let span = (STAT_LINES - 1) as i32;

    for spacing in [px_to_rows(STAT_LINE_SPACING_PX), 1] {
        let top = preferred.min(last - span * spacing);
        if top >= floor {
            return (top, spacing);
        }
    }
    (preferred.min(last - span).max(0), 1)
}

/// Centered text with a tinted halo one cell around it.
fn draw_glow_text(fb: &mut FrameBuffer, text: &str, row: i32, color: Rgb, glow: f64) {
    if row < 0 || row >= fb.height() as i32 {
        return;
    }
    let len = text.chars().count() as i32;
    let x = ((fb.width() as i32 - len) / 2).max(0);

    for dy in -1..=1 {
        let y = row + dy;
        if y < 0 || y >= fb.height() as i32 {
            continue;
        }
        let alpha = if dy == 0 { glow } else { glow * 0.5 };
        for hx in (x - 1)..=(x + len) {
            if hx >= 0 {
                fb.tint_bg(hx as u16, y as u16, color, alpha);
            }
        }
    }
    fb.overprint_str(x as u16, row as u16, text, color, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_text(fb: &FrameBuffer) -> String {
        let mut all = String::new();
        for y in 0..fb.height() {
            all.push_str(&fb.row_text(y));
            all.push('\n');
        }
        all
    }

    #[test]
    fn zero_sized_surface_is_skipped() {
        let scene = Scene::default();
        let mut fb = FrameBuffer::new(10, 10);
        assert!(!scene.render_into(&mut fb, Viewport::new(0, 0), 5, &Stats::default()));
        assert!(!scene.render_into(&mut fb, Viewport::new(80, 0), 6, &Stats::default()));
        assert!(scene.render_into(&mut fb, Viewport::new(80, 24), 7, &Stats::default()));
    }

    #[test]
    fn grid_offset_is_periodic() {
        let period = (GRID_SIZE_PX / SCROLL_SPEED_PX) as u64;
        for f in [0u64, 1, 59, 119, 120, 1_000, 123_456_789, u64::MAX / 2] {
            assert_eq!(grid_offset(f), grid_offset(f + period));
            let o = grid_offset(f);
            assert!((0.0..GRID_SIZE_PX).contains(&o));
        }
        assert_eq!(grid_offset(1), 0.5);
        assert_eq!(grid_offset(119), 59.5);
        assert_eq!(grid_offset(120), 0.0);
    }

    #[test]
    fn circles_move_out_of_phase() {
        let a: Vec<f64> = (0..CIRCLES.len()).map(|i| wobble(0, i)).collect();
        assert_ne!(a[0], a[1]);
        assert_ne!(a[1], a[2]);
        for f in [0u64, 100, 10_000] {
            for i in 0..CIRCLES.len() {
                assert!(wobble(f, i).abs() <= WOBBLE_AMPLITUDE_PX);
            }
        }
    }

    #[test]
    fn gradient_is_dark_at_edges_and_violet_in_the_middle() {
        let h = 40;
        let top = background_at(0, h);
        let mid = background_at(20, h);
        let bottom = background_at(39, h);
        assert_eq!(top, bottom);
        assert!(mid.b > top.b);
        assert!(mid.r > top.r);
    }

    #[test]
    fn gradient_shows_where_no_circle_reaches() {
        let fb = Scene::default().render(Viewport::new(120, 40), 0, &Stats::default());
        assert_eq!(fb.get(119, 0).unwrap().style.bg, background_at(0, 40));
        assert_eq!(fb.get(119, 20).unwrap().style.bg, background_at(20, 40));
    }

    #[test]
    fn circles_tint_their_centers() {
        let fb = Scene::default().render(Viewport::new(120, 40), 0, &Stats::default());
        // Circle 0 sits at 15%/20% of the canvas.
        let x = (0.15 * 120.0) as u16;
        let y = (0.2 * 40.0) as u16;
        assert_ne!(fb.get(x, y).unwrap().style.bg, background_at(y, 40));
    }

    #[test]
    fn draws_title_subtitle_and_stats() {
        let stats = Stats {
            score: 1234,
            wave: 7,
            lives: 3,
            level: 2,
            gems: 42,
        };
        let fb = Scene::default().render(Viewport::new(120, 40), 0, &stats);
        let all = all_text(&fb);
        assert!(all.contains("BUBBLE WARS EX ∞"));
        assert!(all.contains("UPGRADED EDITION"));
        assert!(all.contains("SCORE: 1234"));
        assert!(all.contains("WAVE: 7"));
        assert!(all.contains("LEVEL: 2"));
        assert!(all.contains("LIVES: 3"));
        assert!(all.contains("◆ GEMS: 42"));
    }

    #[test]
    fn every_stats_line_fits_a_standard_terminal() {
        let stats = Stats {
            score: 99,
            wave: 4,
            lives: 3,
            level: 1,
            gems: 12,
        };
        let fb = Scene::default().render(Viewport::new(80, 24), 0, &stats);
        let row_of = |needle: &str| (0..fb.height()).find(|y| fb.row_text(*y).contains(needle));
        let subtitle = row_of("UPGRADED").unwrap();
        let rows: Vec<u16> = ["SCORE: 99", "WAVE: 4", "LEVEL: 1", "LIVES: 3", "◆ GEMS: 12"]
            .iter()
            .map(|label| row_of(label).unwrap_or_else(|| panic!("missing {label}")))
            .collect();
        assert!(rows.windows(2).all(|w| w[0] < w[1]));
        assert!(rows[0] > subtitle + 1);
        // The HUD control bar owns row height - 2.
        assert!(*rows.last().unwrap() < 22);
    }

    #[test]
    fn stats_block_keeps_its_offset_when_there_is_room() {
        assert_eq!(stats_layout(40), (25, 2));
    }

    #[test]
    fn stats_block_packs_on_short_surfaces() {
        assert_eq!(stats_layout(24), (13, 2));
        let (top, spacing) = stats_layout(16);
        assert_eq!(spacing, 1);
        assert!(top + 4 * spacing <= 16 - 3);
        for h in 0..=60u16 {
            let (top, spacing) = stats_layout(h);
            assert!(top >= 0 && spacing >= 1);
        }
    }

    #[test]
    fn title_is_above_subtitle_above_stats() {
        let fb = Scene::default().render(Viewport::new(120, 40), 0, &Stats::default());
        let row_of = |needle: &str| (0..fb.height()).find(|y| fb.row_text(*y).contains(needle));
        let title = row_of("BUBBLE WARS").unwrap();
        let subtitle = row_of("UPGRADED").unwrap();
        let score = row_of("SCORE:").unwrap();
        let gems = row_of("GEMS:").unwrap();
        assert!(title < subtitle);
        assert!(subtitle < score);
        assert!(score < gems);
    }

    #[test]
    fn stats_lines_are_left_aligned() {
        let fb = Scene::default().render(Viewport::new(120, 40), 0, &Stats::default());
        let col_of = |needle: &str| {
            (0..fb.height())
                .find_map(|y| fb.row_text(y).find(needle).map(|i| fb.row_text(y)[..i].chars().count()))
                .unwrap()
        };
        let score_col = col_of("SCORE:");
        assert_eq!(col_of("WAVE:"), score_col);
        assert_eq!(col_of("LEVEL:"), score_col);
        assert_eq!(col_of("LIVES:"), score_col);
        assert_eq!(col_of("◆ GEMS:"), score_col);
    }

    #[test]
    fn grid_scrolls_between_frames() {
        let scene = Scene::default();
        let stats = Stats::default();
        let vp = Viewport::new(80, 24);
        let a = scene.render(vp, 0, &stats);
        let b = scene.render(vp, 30, &stats);
        assert_ne!(a, b);
        assert_eq!(a, scene.render(vp, 0, &stats));
    }

    #[test]
    fn tiny_viewports_do_not_panic() {
        let scene = Scene::default();
        for (w, h) in [(1, 1), (2, 1), (1, 3), (5, 2), (300, 2)] {
            let fb = scene.render(Viewport::new(w, h), 99, &Stats::default());
            assert_eq!(fb.width(), w);
            assert_eq!(fb.height(), h);
        }
    }
}
