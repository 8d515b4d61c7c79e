//! The shared logo and the four tracks that take turns driving it.
//!
//! Stage N animates from pose N to pose N+1 of the constant tables in
//! `constants.rs`, so the end of one stage is the start of the next.

use super::constants::{
    LOGO_OFFSET_VH, LOGO_OFFSET_VW, LOGO_OPACITY, LOGO_ROTATION_DEG, LOGO_SCALE,
};
use super::progress::Boundary;
use super::sections::Section;
use super::sequencer::Track;
use super::viewport::ElementId;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoTransform {
    pub rotate_deg: f32,
    pub scale: f32,
    /// x in vw, y in vh, relative to the logo's resting place.
    pub offset: Vec2,
    pub opacity: f32,
}

impl LogoTransform {
    pub fn pose(index: usize) -> Self {
        Self {
            rotate_deg: LOGO_ROTATION_DEG[index],
            scale: LOGO_SCALE[index],
            offset: Vec2::new(LOGO_OFFSET_VW[index], LOGO_OFFSET_VH[index]),
            opacity: LOGO_OPACITY[index],
        }
    }

    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            rotate_deg: self.rotate_deg + (to.rotate_deg - self.rotate_deg) * t,
            scale: self.scale + (to.scale - self.scale) * t,
            offset: self.offset.lerp(to.offset, t),
            opacity: (self.opacity + (to.opacity - self.opacity) * t).clamp(0.0, 1.0),
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.3}vw, {:.3}vh) rotate({:.3}deg) scale({:.4})",
            self.offset.x, self.offset.y, self.rotate_deg, self.scale
        )
    }
}

impl Default for LogoTransform {
    fn default() -> Self {
        Self::pose(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoPhase {
    Idle,
    HeroExit,
    QualityToProcess,
    ProcessToSuppliers,
    CtaFadeOut,
    Gone,
}

#[derive(Clone, Copy, Debug)]
pub struct LogoStage {
    pub phase: LogoPhase,
    pub owner: Section,
    pub trigger: ElementId,
    pub start: Boundary,
    pub end: Boundary,
    pub mobile: Option<(Boundary, Boundary)>,
    /// Index of the pose this stage starts from.
    pub pose: usize,
}

impl LogoStage {
    pub fn from(&self) -> LogoTransform {
        LogoTransform::pose(self.pose)
    }

    pub fn to(&self) -> LogoTransform {
        LogoTransform::pose(self.pose + 1)
    }

    pub fn at(&self, progress: f32) -> LogoTransform {
        self.from().lerp(&self.to(), progress.clamp(0.0, 1.0))
    }

    /// A track without bindings; the logo is written by [`LogoMachine`].
    pub fn track(&self) -> Track {
        let track = Track::new(self.trigger, self.start, self.end);
        match self.mobile {
            Some((start, end)) => track.on_mobile(start, end),
            None => track,
        }
    }
}

pub const LOGO_STAGES: [LogoStage; 4] = [
    LogoStage {
        phase: LogoPhase::HeroExit,
        owner: Section::Hero,
        trigger: Section::Hero.id(),
        start: Boundary::top_at(0.0),
        end: Boundary::bottom_at(0.5),
        mobile: Some((Boundary::top_at(0.0), Boundary::bottom_at(0.3))),
        pose: 0,
    },
    LogoStage {
        phase: LogoPhase::QualityToProcess,
        owner: Section::Process,
        trigger: Section::Process.id(),
        start: Boundary::top_at(1.0),
        end: Boundary::top_at(0.5),
        mobile: None,
        pose: 1,
    },
    LogoStage {
        phase: LogoPhase::ProcessToSuppliers,
        owner: Section::Suppliers,
        trigger: Section::Suppliers.id(),
        start: Boundary::top_at(1.0),
        end: Boundary::top_at(0.5),
        mobile: None,
        pose: 2,
    },
    LogoStage {
        phase: LogoPhase::CtaFadeOut,
        owner: Section::Cta,
        trigger: Section::Cta.id(),
        start: Boundary::top_at(0.5),
        end: Boundary::bottom_at(1.0),
        mobile: None,
        pose: 3,
    },
];

/// Picks the stage driving the logo and computes its transform.
#[derive(Clone, Debug)]
pub struct LogoMachine {
    phase: LogoPhase,
    transform: LogoTransform,
}

impl Default for LogoMachine {
    fn default() -> Self {
        Self {
            phase: LogoPhase::Idle,
            transform: LogoTransform::default(),
        }
    }
}

impl LogoMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LogoPhase {
        self.phase
    }

    pub fn transform(&self) -> LogoTransform {
        self.transform
    }

    /// Feeds the latest progress of the four logo tracks, in stage order.
    ///
    /// The driving stage is the last one reporting progress above 0.
    /// Stages whose trigger is missing (`None`) are skipped. The logo only
    /// returns to rest when the hero stage resolved at 0; otherwise a frame
    /// with no driver keeps the current pose. Returns true when the phase
    /// changed.
    pub fn update(&mut self, progress: [Option<f32>; 4]) -> bool {
        let driver = progress
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.filter(|p| *p > 0.0).map(|p| (i, p)))
            .last();

        let (phase, transform) = match driver {
            None if progress[0].is_some() => (LogoPhase::Idle, LogoTransform::pose(0)),
            None => return false,
            Some((i, p)) => {
                let stage = &LOGO_STAGES[i];
                let phase = if i == LOGO_STAGES.len() - 1 && p >= 1.0 {
                    LogoPhase::Gone
                } else {
                    stage.phase
                };
                (phase, stage.at(p))
            }
        };
        self.transform = transform;
        if phase != self.phase {
            log::debug!("[logo] {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
            return true;
        }
        false
    }
}
