//! Timeline of the full-screen intro overlay shown on page load.

use super::constants::{INTRO_BLUR_END_PX, INTRO_BLUR_START_PX, INTRO_DELAY_SEC, INTRO_FADE_SEC};

/// Symmetric quadratic ease, slow at both ends.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroFrame {
    pub blur_px: f32,
    pub opacity: f32,
    /// The overlay stops catching clicks as soon as it starts fading.
    pub interactive: bool,
    /// The overlay can be removed from the DOM.
    pub done: bool,
}

/// Overlay state `elapsed_sec` after mount.
pub fn intro_frame(elapsed_sec: f32) -> IntroFrame {
    let elapsed = if elapsed_sec.is_finite() {
        elapsed_sec.max(0.0)
    } else {
        0.0
    };
    let local = elapsed - INTRO_DELAY_SEC;
    if local < 0.0 {
        return IntroFrame {
            blur_px: INTRO_BLUR_START_PX,
            opacity: 1.0,
            interactive: true,
            done: false,
        };
    }
    let t = if INTRO_FADE_SEC > 0.0 {
        (local / INTRO_FADE_SEC).min(1.0)
    } else {
        1.0
    };
    let e = ease_in_out_quad(t);
    IntroFrame {
        blur_px: INTRO_BLUR_START_PX + (INTRO_BLUR_END_PX - INTRO_BLUR_START_PX) * e,
        opacity: 1.0 - e,
        interactive: false,
        done: t >= 1.0,
    }
}
