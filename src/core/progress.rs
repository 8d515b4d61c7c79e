//! Scroll boundaries and normalized track progress.

use super::viewport::{ElementBox, Viewport};

/// One end of a track's scroll range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary {
    /// The point `element_frac` down the trigger (plus `element_px`) reaches
    /// the point `viewport_frac` down the viewport.
    Anchored {
        element_frac: f64,
        element_px: f64,
        viewport_frac: f64,
    },
    /// Pixels past the resolved start. As a start boundary it counts from
    /// the trigger's top edge.
    AfterStart(f64),
}

impl Boundary {
    /// Trigger top reaches `viewport_frac` of the viewport height.
    pub const fn top_at(viewport_frac: f64) -> Self {
        Boundary::Anchored {
            element_frac: 0.0,
            element_px: 0.0,
            viewport_frac,
        }
    }

    /// Trigger center reaches `viewport_frac` of the viewport height.
    pub const fn center_at(viewport_frac: f64) -> Self {
        Boundary::Anchored {
            element_frac: 0.5,
            element_px: 0.0,
            viewport_frac,
        }
    }

    /// Trigger bottom reaches `viewport_frac` of the viewport height.
    pub const fn bottom_at(viewport_frac: f64) -> Self {
        Boundary::Anchored {
            element_frac: 1.0,
            element_px: 0.0,
            viewport_frac,
        }
    }

    pub const fn after(px: f64) -> Self {
        Boundary::AfterStart(px)
    }

    /// Scroll offset at which this boundary is reached.
    fn resolve(&self, trigger: ElementBox, viewport: Viewport, start: Option<f64>) -> f64 {
        match *self {
            Boundary::Anchored {
                element_frac,
                element_px,
                viewport_frac,
            } => {
                trigger.top + element_frac * trigger.height + element_px
                    - viewport_frac * viewport.height
            }
            Boundary::AfterStart(px) => start.unwrap_or(trigger.top) + px,
        }
    }
}

/// Resolved scroll offsets of a track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn resolve(start: Boundary, end: Boundary, trigger: ElementBox, viewport: Viewport) -> Self {
        let s = start.resolve(trigger, viewport, None);
        let e = end.resolve(trigger, viewport, Some(s));
        Self { start: s, end: e }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.end <= self.start
    }

    /// True when the two ranges share more than a single boundary point.
    pub fn overlaps(&self, other: &ScrollRange) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// Progress at `scroll`, see [`progress`].
    #[inline]
    pub fn progress(&self, scroll: f64) -> f32 {
        progress(scroll, self)
    }
}

/// Normalized position of `scroll` within `range`.
///
/// 0 at or before the start, 1 at or after the end, linear in between.
/// A degenerate range (end at or before start) steps from 0 to 1 at its
/// start. Non-finite inputs yield 0.
pub fn progress(scroll: f64, range: &ScrollRange) -> f32 {
    if !scroll.is_finite() || !range.start.is_finite() || !range.end.is_finite() {
        return 0.0;
    }
    if scroll < range.start {
        return 0.0;
    }
    if range.is_degenerate() || scroll >= range.end {
        return 1.0;
    }
    let t = (scroll - range.start) / (range.end - range.start);
    (t as f32).clamp(0.0, 1.0)
}

/// True when no two ranges overlap by more than a boundary point.
pub fn pairwise_disjoint(ranges: &[ScrollRange]) -> bool {
    ranges
        .iter()
        .enumerate()
        .all(|(i, a)| ranges[i + 1..].iter().all(|b| !a.overlaps(b)))
}
