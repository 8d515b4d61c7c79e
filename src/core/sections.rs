//! Page sections and their scroll-track tables.
//!
//! Boundaries are tuning data, not derived values: they were chosen for
//! visual parity and are kept together here so they can be adjusted in one
//! place.

use super::logo::{LogoStage, LOGO_STAGES};
use super::progress::Boundary;
use super::sequencer::{Sequencer, Track, TrackId};
use super::tween::{Property, TweenRule};
use super::viewport::ElementId;

pub const LOGO_ID: ElementId = "site-logo";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Quality,
    Process,
    Suppliers,
    Trainings,
    About,
    Cta,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Quality,
        Section::Process,
        Section::Suppliers,
        Section::Trainings,
        Section::About,
        Section::Cta,
    ];

    /// Sections linked from the navigation bar, in page order.
    pub const NAV: [Section; 4] = [
        Section::Quality,
        Section::Process,
        Section::Suppliers,
        Section::About,
    ];

    /// DOM id of the section element; also its `#fragment`.
    pub const fn id(self) -> ElementId {
        match self {
            Section::Hero => "hero",
            Section::Quality => "quality",
            Section::Process => "prozess",
            Section::Suppliers => "lieferanten",
            Section::Trainings => "schulungen",
            Section::About => "about",
            Section::Cta => "cta",
        }
    }

    pub const fn title_id(self) -> ElementId {
        match self {
            Section::Hero => "hero-title",
            Section::Quality => "quality-title",
            Section::Process => "prozess-title",
            Section::Suppliers => "lieferanten-title",
            Section::Trainings => "schulungen-title",
            Section::About => "about-title",
            Section::Cta => "cta-title",
        }
    }

    pub const fn body_id(self) -> ElementId {
        match self {
            Section::Hero => "hero-subtitle",
            Section::Quality => "quality-body",
            Section::Process => "prozess-body",
            Section::Suppliers => "lieferanten-body",
            Section::Trainings => "schulungen-body",
            Section::About => "about-body",
            Section::Cta => "cta-body",
        }
    }

    /// Wrapper around title and body; faded out as the section leaves.
    pub const fn content_id(self) -> ElementId {
        match self {
            Section::Hero => "hero-content",
            Section::Quality => "quality-content",
            Section::Process => "prozess-content",
            Section::Suppliers => "lieferanten-content",
            Section::Trainings => "schulungen-content",
            Section::About => "about-content",
            Section::Cta => "cta-content",
        }
    }

    pub const fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Start",
            Section::Quality => "Qualitätsmanagement",
            Section::Process => "Prozessmanagement",
            Section::Suppliers => "Lieferantenaufbau",
            Section::Trainings => "Schulungen",
            Section::About => "Über mich",
            Section::Cta => "Kontakt",
        }
    }

    /// Height in viewport heights on the reference layout.
    pub const fn height_vh(self) -> f64 {
        match self {
            Section::Hero | Section::Cta => 1.0,
            _ => 1.5,
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Title rises into place as the section enters.
fn reveal(section: Section) -> Track {
    Track::new(section.id(), Boundary::top_at(0.8), Boundary::top_at(0.3))
        .on_mobile(Boundary::top_at(0.9), Boundary::top_at(0.5))
        .bind(section.title_id(), TweenRule::fade_in(0.0, 1.0))
        .bind(
            section.title_id(),
            TweenRule::lerp(Property::TranslateY, 60.0, 0.0),
        )
        .bind(section.body_id(), TweenRule::fade_in(0.3, 1.0))
}

/// Whole content block fades and lifts as the section leaves.
fn exit(section: Section) -> Track {
    Track::new(
        section.id(),
        Boundary::bottom_at(0.6),
        Boundary::bottom_at(0.2),
    )
    .bind(section.content_id(), TweenRule::fade_out(0.0, 1.0))
    .bind(
        section.content_id(),
        TweenRule::lerp(Property::TranslateY, 0.0, -40.0),
    )
}

fn hero_exit() -> Track {
    let hero = Section::Hero;
    Track::new(hero.id(), Boundary::top_at(0.0), Boundary::bottom_at(0.5))
        .on_mobile(Boundary::top_at(0.0), Boundary::bottom_at(0.3))
        .bind(hero.title_id(), TweenRule::fade_out(0.0, 1.0))
        .bind(
            hero.title_id(),
            TweenRule::lerp(Property::TranslateY, 0.0, -80.0),
        )
        .bind(hero.body_id(), TweenRule::fade_out(0.0, 0.6))
        .bind(hero.body_id(), TweenRule::lerp(Property::Blur, 0.0, 6.0))
}

fn training_cards() -> Track {
    let s = Section::Trainings;
    Track::new(s.id(), Boundary::top_at(0.5), Boundary::after(1.0))
        .toggled()
        .bind("schulungen-cards", TweenRule::fade_in(0.0, 1.0))
        .bind(
            "schulungen-cards",
            TweenRule::lerp(Property::TranslateY, 40.0, 0.0),
        )
}

/// Tracks of one section, in declaration order. Logo tracks are listed
/// separately in [`LOGO_STAGES`].
pub fn section_tracks(section: Section) -> Vec<Track> {
    match section {
        Section::Hero => vec![hero_exit()],
        Section::Trainings => vec![reveal(section), training_cards(), exit(section)],
        Section::Cta => vec![reveal(section)],
        _ => vec![reveal(section), exit(section)],
    }
}

/// Handles of everything mounted for the home page.
#[derive(Clone, Debug)]
pub struct HomeTracks {
    pub sections: Vec<(Section, TrackId)>,
    pub logo: [TrackId; 4],
}

impl HomeTracks {
    pub fn of(&self, section: Section) -> impl Iterator<Item = TrackId> + '_ {
        self.sections
            .iter()
            .filter(move |(s, _)| *s == section)
            .map(|(_, id)| *id)
    }
}

/// Registers every section's tracks and the four logo tracks, in page order.
pub fn mount_home(sequencer: &mut Sequencer) -> HomeTracks {
    let mut sections = Vec::new();
    for section in Section::ALL {
        for track in section_tracks(section) {
            sections.push((section, sequencer.register(section, track)));
        }
    }
    let logo = LOGO_STAGES.map(|stage: LogoStage| sequencer.register(stage.owner, stage.track()));
    HomeTracks { sections, logo }
}

/// Disposes every track of every section.
pub fn unmount_home(sequencer: &mut Sequencer) {
    for section in Section::ALL {
        sequencer.unmount(section);
    }
}
