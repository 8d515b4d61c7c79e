//! Scroll-bound tracks and their rule bindings.
//!
//! Every frame the sequencer resolves each live track against the current
//! layout, derives its progress, evaluates its bindings and merges the
//! results per target. Styles are rebuilt from progress alone each frame;
//! nothing written in one frame leaks into the next.

use super::constants::TOGGLE_PLAY_SEC;
use super::progress::{Boundary, ScrollRange};
use super::sections::Section;
use super::tween::{Property, StylePatch, TweenRule};
use super::viewport::{ElementId, LayoutQuery};
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(u32);

/// How progress follows scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scrub {
    /// Progress is the scroll position within the range.
    Linked,
    /// Plays 0 → 1 over `secs` once the start is crossed, reverses when
    /// scrolled back above it.
    Toggle { secs: f32 },
}

/// A rule applied to one target element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Binding {
    pub target: ElementId,
    pub rule: TweenRule,
    /// Higher wins when two bindings write the same property of the same
    /// target. Equal priorities fall back to evaluation order.
    pub priority: i16,
}

#[derive(Clone, Debug)]
pub struct Track {
    pub trigger: ElementId,
    pub start: Boundary,
    pub end: Boundary,
    /// Boundaries used instead of `start`/`end` on mobile viewports.
    pub mobile: Option<(Boundary, Boundary)>,
    pub scrub: Scrub,
    pub bindings: SmallVec<[Binding; 4]>,
}

impl Track {
    pub fn new(trigger: ElementId, start: Boundary, end: Boundary) -> Self {
        Self {
            trigger,
            start,
            end,
            mobile: None,
            scrub: Scrub::Linked,
            bindings: SmallVec::new(),
        }
    }

    pub fn on_mobile(mut self, start: Boundary, end: Boundary) -> Self {
        self.mobile = Some((start, end));
        self
    }

    pub fn toggled(mut self) -> Self {
        self.scrub = Scrub::Toggle {
            secs: TOGGLE_PLAY_SEC,
        };
        self
    }

    pub fn bind(self, target: ElementId, rule: TweenRule) -> Self {
        self.bind_with_priority(target, rule, 0)
    }

    pub fn bind_with_priority(mut self, target: ElementId, rule: TweenRule, priority: i16) -> Self {
        self.bindings.push(Binding {
            target,
            rule,
            priority,
        });
        self
    }

    /// Resolves this track's scroll range, or `None` if its trigger is not
    /// mounted.
    pub fn resolve(&self, layout: &impl LayoutQuery) -> Option<ScrollRange> {
        let trigger = layout.element_box(self.trigger)?;
        let viewport = layout.viewport();
        let (start, end) = match self.mobile {
            Some(bounds) if viewport.is_mobile() => bounds,
            _ => (self.start, self.end),
        };
        Some(ScrollRange::resolve(start, end, trigger, viewport))
    }
}

struct TrackEntry {
    id: TrackId,
    owner: Section,
    track: Track,
    progress: Option<f32>,
}

/// Output of one binding in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuleSample {
    pub track: TrackId,
    pub binding: usize,
    pub target: ElementId,
    pub patch: StylePatch,
}

#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub samples: Vec<RuleSample>,
    pub styles: FnvHashMap<ElementId, StylePatch>,
}

impl Frame {
    pub fn style(&self, target: ElementId) -> Option<&StylePatch> {
        self.styles.get(target)
    }

    /// Samples of one track, in declaration order.
    pub fn samples_for(&self, track: TrackId) -> impl Iterator<Item = &RuleSample> {
        self.samples.iter().filter(move |s| s.track == track)
    }
}

#[derive(Default)]
pub struct Sequencer {
    tracks: Vec<TrackEntry>,
    next_id: u32,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, owner: Section, track: Track) -> TrackId {
        let id = TrackId(self.next_id);
        self.next_id += 1;
        self.tracks.push(TrackEntry {
            id,
            owner,
            track,
            progress: None,
        });
        id
    }

    /// Returns false if the track was already gone.
    pub fn unregister(&mut self, id: TrackId) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != id);
        before != self.tracks.len()
    }

    /// Disposes every track owned by `section`, returns how many were removed.
    pub fn unmount(&mut self, section: Section) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.owner != section);
        let removed = before - self.tracks.len();
        if removed > 0 {
            log::debug!("[scroll] unmounted {:?}: {} track(s)", section, removed);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.tracks.iter().any(|t| t.id == id)
    }

    /// Progress from the last evaluation; `None` for unknown tracks or
    /// tracks whose trigger was missing.
    pub fn progress(&self, id: TrackId) -> Option<f32> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .and_then(|t| t.progress)
    }

    /// Resolved range of a live track against `layout`.
    pub fn range(&self, id: TrackId, layout: &impl LayoutQuery) -> Option<ScrollRange> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .and_then(|t| t.track.resolve(layout))
    }

    pub fn evaluate(&mut self, scroll: f64, layout: &impl LayoutQuery, dt_sec: f32) -> Frame {
        let mut frame = Frame::default();
        let mut winners: FnvHashMap<(ElementId, Property), i16> = FnvHashMap::default();

        for entry in &mut self.tracks {
            let Some(range) = entry.track.resolve(layout) else {
                entry.progress = None;
                continue;
            };
            let p = match entry.track.scrub {
                Scrub::Linked => range.progress(scroll),
                Scrub::Toggle { secs } => {
                    let target = if scroll >= range.start {
                        1.0
                    } else {
                        0.0
                    };
                    step_toward(entry.progress.unwrap_or(target), target, dt_sec, secs)
                }
            };
            entry.progress = Some(p);

            for (index, binding) in entry.track.bindings.iter().enumerate() {
                let patch = binding.rule.eval(p);
                frame.samples.push(RuleSample {
                    track: entry.id,
                    binding: index,
                    target: binding.target,
                    patch,
                });
                let merged = frame.styles.entry(binding.target).or_default();
                for (property, value) in patch.iter() {
                    let key = (binding.target, property);
                    match winners.get(&key) {
                        Some(&held) if held > binding.priority => {}
                        _ => {
                            winners.insert(key, binding.priority);
                            merged.set(property, value);
                        }
                    }
                }
            }
        }
        frame
    }
}

fn step_toward(current: f32, target: f32, dt_sec: f32, secs: f32) -> f32 {
    if secs <= 0.0 || !dt_sec.is_finite() {
        return target;
    }
    let step = dt_sec.max(0.0) / secs;
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}
