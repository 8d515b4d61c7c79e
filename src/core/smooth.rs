//! Eased scroll position that trails wheel input.
//!
//! Each wheel delta moves the target; the displayed position then eases from
//! wherever it currently is to the new target over a fixed duration.

use super::constants::{SMOOTH_SCROLL_DURATION_SEC, SMOOTH_SCROLL_SNAP_PX, SMOOTH_SCROLL_WHEEL_MULTIPLIER};

/// Exponential ease-out used for wheel scrolling.
#[inline]
pub fn ease_out_expo(t: f32) -> f32 {
    (1.001 - 2f32.powf(-10.0 * t)).min(1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScrollConfig {
    pub duration_sec: f32,
    pub wheel_multiplier: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration_sec: SMOOTH_SCROLL_DURATION_SEC,
            wheel_multiplier: SMOOTH_SCROLL_WHEEL_MULTIPLIER,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Glide {
    from: f64,
    to: f64,
    elapsed: f32,
}

#[derive(Clone, Debug)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    current: f64,
    target: f64,
    limit: f64,
    glide: Option<Glide>,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig, position: f64, limit: f64) -> Self {
        let limit = sanitize(limit).max(0.0);
        let position = sanitize(position).clamp(0.0, limit);
        Self {
            config,
            current: position,
            target: position,
            limit,
            glide: None,
        }
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    /// Updates the maximum scroll offset (document height changed).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = sanitize(limit).max(0.0);
        if self.target > self.limit {
            self.retarget(self.limit);
        }
    }

    /// Feeds a wheel delta in pixels.
    pub fn scroll_by(&mut self, delta: f64) {
        let delta = sanitize(delta) * self.config.wheel_multiplier;
        self.retarget(self.target + delta);
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.retarget(sanitize(offset));
    }

    fn retarget(&mut self, to: f64) {
        let to = to.clamp(0.0, self.limit);
        if (to - self.current).abs() < SMOOTH_SCROLL_SNAP_PX {
            self.current = to;
            self.target = to;
            self.glide = None;
            return;
        }
        self.target = to;
        self.glide = Some(Glide {
            from: self.current,
            to,
            elapsed: 0.0,
        });
    }

    /// Adopts a position set outside the driver (touch, keyboard,
    /// scrollbar). Ignored while a glide is running.
    pub fn sync(&mut self, native: f64) {
        if self.glide.is_some() || !native.is_finite() {
            return;
        }
        let native = native.clamp(0.0, self.limit);
        self.current = native;
        self.target = native;
    }

    /// Stops any glide where it is.
    pub fn stop(&mut self) {
        self.glide = None;
        self.target = self.current;
    }

    /// Advances the glide by `dt_sec` and returns the new position.
    pub fn advance(&mut self, dt_sec: f32) -> f64 {
        let Some(mut glide) = self.glide else {
            return self.current;
        };
        glide.elapsed += dt_sec.max(0.0);
        let t = if self.config.duration_sec > 0.0 {
            (glide.elapsed / self.config.duration_sec).min(1.0)
        } else {
            1.0
        };
        if t >= 1.0 {
            self.current = glide.to;
            self.glide = None;
            return self.current;
        }
        let eased = ease_out_expo(t) as f64;
        self.current = glide.from + (glide.to - glide.from) * eased;
        self.glide = Some(glide);
        self.current
    }
}

#[inline]
fn sanitize(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
