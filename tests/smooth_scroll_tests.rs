// Host-side tests for the eased wheel scroller.

use interim_site::core::smooth::ease_out_expo;
use interim_site::core::{SmoothScroll, SmoothScrollConfig};

const LIMIT: f64 = 5_000.0;

fn scroller(position: f64) -> SmoothScroll {
    SmoothScroll::new(SmoothScrollConfig::default(), position, LIMIT)
}

#[test]
fn ease_is_monotonic_and_ends_at_one() {
    let mut last = ease_out_expo(0.0);
    assert!((0.0..0.01).contains(&last));
    for i in 1..=100 {
        let v = ease_out_expo(i as f32 / 100.0);
        assert!(v >= last);
        last = v;
    }
    assert_eq!(ease_out_expo(1.0), 1.0);
}

#[test]
fn construction_clamps_into_the_document() {
    assert_eq!(scroller(-10.0).position(), 0.0);
    assert_eq!(scroller(9_999.0).position(), LIMIT);
    assert_eq!(scroller(f64::NAN).position(), 0.0);
    assert!(!scroller(100.0).is_animating());
}

#[test]
fn wheel_delta_glides_to_its_target() {
    let mut s = scroller(0.0);
    s.scroll_by(600.0);
    assert!(s.is_animating());
    assert_eq!(s.target(), 600.0);

    let mut last = s.position();
    let mut frames = 0;
    while s.is_animating() {
        let y = s.advance(1.0 / 60.0);
        assert!(y >= last && y <= 600.0);
        last = y;
        frames += 1;
        assert!(frames < 1_000, "glide never finished");
    }
    assert_eq!(s.position(), 600.0);
    // 1.2s at 60fps, give or take rounding of the frame sum
    assert!((70..=74).contains(&frames), "{frames} frames");
}

#[test]
fn glide_is_mostly_done_early() {
    let mut s = scroller(0.0);
    s.scroll_by(1_000.0);
    let y = s.advance(0.3);
    // expo ease covers most of the distance in the first quarter
    assert!(y > 800.0, "{y}");
}

#[test]
fn deltas_accumulate_on_the_target() {
    let mut s = scroller(0.0);
    s.scroll_by(100.0);
    s.advance(0.05);
    s.scroll_by(100.0);
    assert_eq!(s.target(), 200.0);
}

#[test]
fn retargeting_continues_from_the_current_position() {
    let mut s = scroller(0.0);
    s.scroll_by(1_000.0);
    let mid = s.advance(0.1);
    s.scroll_by(500.0);
    let next = s.advance(0.0);
    // the new glide starts where the old one was, not at its target
    assert!((next - mid).abs() < 2.0, "jumped from {mid} to {next}");
}

#[test]
fn target_is_clamped_to_the_document() {
    let mut s = scroller(100.0);
    s.scroll_by(1e9);
    assert_eq!(s.target(), LIMIT);
    s.scroll_to(-500.0);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn tiny_moves_snap() {
    let mut s = scroller(100.0);
    s.scroll_by(0.3);
    assert!(!s.is_animating());
    assert!((s.position() - 100.3).abs() < 1e-9);
}

#[test]
fn non_finite_deltas_are_ignored() {
    let mut s = scroller(100.0);
    s.scroll_by(f64::NAN);
    s.scroll_by(f64::INFINITY);
    assert!(!s.is_animating());
    assert_eq!(s.position(), 100.0);
}

#[test]
fn native_scroll_is_adopted_only_when_idle() {
    let mut s = scroller(0.0);
    s.sync(1_234.0);
    assert_eq!(s.position(), 1_234.0);
    assert_eq!(s.target(), 1_234.0);

    s.scroll_by(500.0);
    s.sync(0.0);
    assert_eq!(s.target(), 1_734.0);
    assert!(s.is_animating());
}

#[test]
fn shrinking_document_pulls_the_target_in() {
    let mut s = scroller(0.0);
    s.scroll_to(4_000.0);
    s.set_limit(1_000.0);
    assert_eq!(s.target(), 1_000.0);
    while s.is_animating() {
        s.advance(0.1);
    }
    assert_eq!(s.position(), 1_000.0);
}

#[test]
fn stop_freezes_in_place() {
    let mut s = scroller(0.0);
    s.scroll_to(2_000.0);
    let y = s.advance(0.2);
    s.stop();
    assert!(!s.is_animating());
    assert_eq!(s.target(), y);
    assert_eq!(s.advance(0.5), y);
}
