// Host-side tests for the logo stages: pose continuity, range disjointness
// and the stage-selection state machine.

use interim_site::core::progress::pairwise_disjoint;
use interim_site::core::{
    mount_home, LayoutQuery, LogoMachine, LogoPhase, LogoTransform, PageLayout, ScrollRange,
    Section, Sequencer, Viewport, LOGO_STAGES,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn reference_layout(viewport: Viewport) -> PageLayout {
    let sections: Vec<_> = Section::ALL.iter().map(|s| (s.id(), s.height_vh())).collect();
    PageLayout::stacked(viewport, &sections)
}

fn stage_ranges(layout: &PageLayout) -> Vec<ScrollRange> {
    LOGO_STAGES
        .iter()
        .map(|s| s.track().resolve(layout).expect("stage trigger mounted"))
        .collect()
}

fn close(a: &LogoTransform, b: &LogoTransform) -> bool {
    (a.rotate_deg - b.rotate_deg).abs() < 1e-3
        && (a.scale - b.scale).abs() < 1e-5
        && (a.offset - b.offset).length() < 1e-4
        && (a.opacity - b.opacity).abs() < 1e-5
}

#[test]
fn each_stage_starts_where_the_previous_one_ends() {
    for pair in LOGO_STAGES.windows(2) {
        assert_eq!(pair[0].to(), pair[1].from(), "{:?}", pair[1].phase);
    }
    assert_eq!(LOGO_STAGES[0].from(), LogoTransform::default());
}

#[test]
fn stage_endpoints_match_their_poses() {
    for stage in &LOGO_STAGES {
        assert!(close(&stage.at(0.0), &stage.from()));
        assert!(close(&stage.at(1.0), &stage.to()));
        // out-of-range progress clamps to the endpoints
        assert!(close(&stage.at(-1.0), &stage.from()));
        assert!(close(&stage.at(2.0), &stage.to()));
    }
}

#[test]
fn stage_ranges_are_disjoint_on_desktop() {
    let layout = reference_layout(Viewport::new(1280.0, 800.0));
    let ranges = stage_ranges(&layout);
    assert!(pairwise_disjoint(&ranges), "{ranges:?}");
    for w in ranges.windows(2) {
        assert!(w[0].end <= w[1].start);
    }
}

#[test]
fn stage_ranges_are_disjoint_on_mobile() {
    let layout = reference_layout(Viewport::new(375.0, 700.0));
    assert!(layout.viewport().is_mobile());
    let ranges = stage_ranges(&layout);
    assert!(pairwise_disjoint(&ranges), "{ranges:?}");
    // hero hands over earlier on phones
    assert!((ranges[0].end - 0.7 * 700.0).abs() < 1e-6);
}

#[test]
fn stage_ranges_are_disjoint_for_any_full_height_layout() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let viewport = Viewport::new(rng.gen_range(320.0..2_560.0), rng.gen_range(480.0..1_440.0));
        // every section is at least one viewport tall
        let sections: Vec<_> = Section::ALL
            .iter()
            .map(|s| (s.id(), rng.gen_range(1.0..2.5)))
            .collect();
        let layout = PageLayout::stacked(viewport, &sections);
        let ranges = stage_ranges(&layout);
        assert!(pairwise_disjoint(&ranges), "{viewport:?} {sections:?}: {ranges:?}");
        for w in ranges.windows(2) {
            assert!(w[0].end <= w[1].start + 1e-9, "{viewport:?} {sections:?}");
        }
    }
}

#[test]
fn final_stage_completes_within_the_scrollable_area() {
    for viewport in [Viewport::new(1280.0, 800.0), Viewport::new(375.0, 700.0)] {
        let layout = reference_layout(viewport);
        let ranges = stage_ranges(&layout);
        let last = ranges[ranges.len() - 1];
        assert!(last.end <= layout.scroll_limit() + 1e-6);
    }
}

#[test]
fn machine_ignores_a_frame_with_nothing_resolved() {
    let mut logo = LogoMachine::new();
    logo.update([Some(0.5), Some(0.0), Some(0.0), Some(0.0)]);
    let before = logo.transform();
    assert!(!logo.update([None; 4]));
    assert_eq!(logo.phase(), LogoPhase::HeroExit);
    assert_eq!(logo.transform(), before);
}

#[test]
fn machine_walks_through_all_phases() {
    let mut logo = LogoMachine::new();
    assert_eq!(logo.phase(), LogoPhase::Idle);

    assert!(!logo.update([Some(0.0); 4]));
    assert_eq!(logo.phase(), LogoPhase::Idle);

    assert!(logo.update([Some(0.5), Some(0.0), Some(0.0), Some(0.0)]));
    assert_eq!(logo.phase(), LogoPhase::HeroExit);

    logo.update([Some(1.0), Some(0.2), Some(0.0), Some(0.0)]);
    assert_eq!(logo.phase(), LogoPhase::QualityToProcess);

    logo.update([Some(1.0), Some(1.0), Some(0.4), Some(0.0)]);
    assert_eq!(logo.phase(), LogoPhase::ProcessToSuppliers);

    logo.update([Some(1.0), Some(1.0), Some(1.0), Some(0.5)]);
    assert_eq!(logo.phase(), LogoPhase::CtaFadeOut);

    logo.update([Some(1.0); 4]);
    assert_eq!(logo.phase(), LogoPhase::Gone);
    assert_eq!(logo.transform().opacity, 0.0);

    // all the way back up
    assert!(logo.update([Some(0.0); 4]));
    assert_eq!(logo.phase(), LogoPhase::Idle);
    assert_eq!(logo.transform(), LogoTransform::default());
}

#[test]
fn unresolved_stage_is_skipped() {
    let mut logo = LogoMachine::new();
    logo.update([Some(1.0), None, Some(0.5), None]);
    assert_eq!(logo.phase(), LogoPhase::ProcessToSuppliers);
    assert!(close(&logo.transform(), &LOGO_STAGES[2].at(0.5)));
}

#[test]
fn missing_hero_stage_keeps_the_last_pose() {
    let mut logo = LogoMachine::new();
    logo.update([Some(1.0), Some(0.0), Some(0.0), Some(0.0)]);
    let held = logo.transform();
    assert_eq!(held.rotate_deg, 90.0);
    assert_eq!(logo.phase(), LogoPhase::HeroExit);

    // hero unmounted, later stages resolved but idle
    assert!(!logo.update([None, Some(0.0), Some(0.0), Some(0.0)]));
    assert_eq!(logo.phase(), LogoPhase::HeroExit);
    assert_eq!(logo.transform(), held);

    // once the hero resolves again at 0 the logo comes back to rest
    assert!(logo.update([Some(0.0), Some(0.0), Some(0.0), Some(0.0)]));
    assert_eq!(logo.phase(), LogoPhase::Idle);
    assert_eq!(logo.transform(), LogoTransform::default());
}

#[test]
fn logo_never_jumps_while_scrolling() {
    for viewport in [Viewport::new(1280.0, 800.0), Viewport::new(375.0, 700.0)] {
        let layout = reference_layout(viewport);
        let mut seq = Sequencer::new();
        let tracks = mount_home(&mut seq);
        let mut logo = LogoMachine::new();

        let step = 4.0;
        let mut scroll = 0.0;
        let mut prev: Option<LogoTransform> = None;
        while scroll <= layout.scroll_limit() {
            seq.evaluate(scroll, &layout, 0.016);
            logo.update(tracks.logo.map(|id| seq.progress(id)));
            let t = logo.transform();
            if let Some(p) = prev {
                assert!((t.rotate_deg - p.rotate_deg).abs() < 5.0, "rotation jump at {scroll}");
                assert!((t.scale - p.scale).abs() < 0.05, "scale jump at {scroll}");
                assert!((t.offset - p.offset).length() < 2.0, "offset jump at {scroll}");
                assert!((t.opacity - p.opacity).abs() < 0.05, "opacity jump at {scroll}");
            }
            prev = Some(t);
            scroll += step;
        }
        // bottom of the page: the logo has faded away
        seq.evaluate(layout.scroll_limit(), &layout, 0.016);
        logo.update(tracks.logo.map(|id| seq.progress(id)));
        assert_eq!(logo.phase(), LogoPhase::Gone);
    }
}

#[test]
fn css_transform_of_rest_pose() {
    assert_eq!(
        LogoTransform::default().css_transform(),
        "translate(0.000vw, 0.000vh) rotate(0.000deg) scale(1.0000)"
    );
}
