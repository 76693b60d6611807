//! Canvas and HUD rendering through the public API.

use bubble_wars::core::Session;
use bubble_wars::engine::Driver;
use bubble_wars::term::scene::grid_offset;
use bubble_wars::term::{FrameBuffer, HudOverlay, Scene, Viewport};
use bubble_wars::types::{Command, Stats, GRID_SIZE_PX, SCROLL_SPEED_PX};

fn text(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

#[test]
fn render_does_not_mutate_stats() {
    let stats = Stats {
        score: 987_654,
        wave: 12,
        lives: 3,
        level: 4,
        gems: 77,
    };
    let before = stats;
    let scene = Scene::default();
    let mut fb = FrameBuffer::new(0, 0);
    for frame in [0u64, 1, 500, 1_000_000] {
        scene.render_into(&mut fb, Viewport::new(100, 30), frame, &stats);
    }
    assert_eq!(stats, before);
}

#[test]
fn grid_glyphs_repeat_with_the_scroll_period() {
    let period = (GRID_SIZE_PX / SCROLL_SPEED_PX) as u64;
    let scene = Scene::default();
    let stats = Stats::default();
    let vp = Viewport::new(100, 30);
    for f in [0u64, 37, 119, 5_000] {
        let a = scene.render(vp, f, &stats);
        let b = scene.render(vp, f + period, &stats);
        // Circles drift on their own period and only tint backgrounds, so
        // the glyph layer must match exactly.
        assert_eq!(text(&a), text(&b));
        assert_eq!(grid_offset(f), grid_offset(f + period));
    }
}

#[test]
fn grid_is_seamless_across_the_modulo() {
    // Offsets just before and at the wrap differ by exactly one step.
    let period = (GRID_SIZE_PX / SCROLL_SPEED_PX) as u64;
    let last = grid_offset(period - 1);
    let wrapped = grid_offset(period);
    assert_eq!((last + SCROLL_SPEED_PX) % GRID_SIZE_PX, wrapped);
}

#[test]
fn hud_and_canvas_agree_on_stats() {
    let mut driver = Driver::new(Session::new(123));
    driver.apply(Command::Start);
    let vp = Viewport::new(120, 40);
    for f in 0..400 {
        driver.tick(f, vp);
    }
    // Draw one more frame with the run paused so the stats are stable.
    driver.apply(Command::Pause);
    driver.tick(400, vp);

    let stats = driver.stats();
    let rows = text(driver.framebuffer());
    let all = rows.join("\n");
    assert!(all.contains(&format!("SCORE: {:08}", stats.score)));
    let canvas = format!("SCORE: {}", stats.score);
    let on_canvas = rows.iter().any(|row| {
        row.find(&canvas).map_or(false, |i| {
            !row[i + canvas.len()..].starts_with(|c: char| c.is_ascii_digit())
        })
    });
    assert!(on_canvas, "canvas should show {canvas}");
    assert!(all.contains(&format!("WAVE: {:03}", stats.wave)));
    assert!(all.contains(&format!("LEVEL: {:02}", stats.level)));
    assert!(all.contains("|| PAUSED"));
}

#[test]
fn overlay_draws_over_the_scene() {
    let scene = Scene::default();
    let vp = Viewport::new(80, 24);
    let mut fb = scene.render(vp, 0, &Stats::default());
    let bare = fb.clone();
    let snap = Session::new(1).snapshot(0);
    assert!(HudOverlay::new().render_into(&mut fb, &snap));
    assert_ne!(fb, bare);
    assert!(fb.row_text(1).starts_with("  ┌"));
}
