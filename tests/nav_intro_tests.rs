// Host-side tests for the nav highlight and the intro overlay timeline.

use interim_site::core::intro::{ease_in_out_quad, intro_frame};
use interim_site::core::nav::active_section;
use interim_site::core::{PageLayout, Section, Viewport};

/// Reference page on an 800px viewport: quality starts at 800, prozess at
/// 2000, lieferanten at 3200, schulungen at 4400, about at 5600.
fn layout() -> PageLayout {
    let sections: Vec<_> = Section::ALL.iter().map(|s| (s.id(), s.height_vh())).collect();
    PageLayout::stacked(Viewport::new(1280.0, 800.0), &sections)
}

#[test]
fn nothing_is_active_on_the_hero() {
    assert_eq!(active_section(0.0, &layout()), None);
    assert_eq!(active_section(679.0, &layout()), None);
}

#[test]
fn section_activates_with_header_offset() {
    let layout = layout();
    assert_eq!(active_section(680.0, &layout), Some(Section::Quality));
    assert_eq!(active_section(1_879.0, &layout), Some(Section::Quality));
    assert_eq!(active_section(1_880.0, &layout), Some(Section::Process));
    assert_eq!(active_section(3_100.0, &layout), Some(Section::Suppliers));
}

#[test]
fn sections_without_a_nav_link_keep_the_previous_one() {
    // schulungen is not in the nav bar
    assert_eq!(active_section(4_500.0, &layout()), Some(Section::Suppliers));
    assert_eq!(active_section(5_600.0, &layout()), Some(Section::About));
    assert_eq!(active_section(50_000.0, &layout()), Some(Section::About));
}

#[test]
fn unmounted_sections_are_skipped() {
    let mut layout = layout();
    layout.remove(Section::Process.id());
    assert_eq!(active_section(2_500.0, &layout), Some(Section::Quality));
}

#[test]
fn ease_is_symmetric() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(0.5), 0.5);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    let a = ease_in_out_quad(0.2);
    let b = ease_in_out_quad(0.8);
    assert!((a + b - 1.0).abs() < 1e-6);
}

#[test]
fn intro_fades_from_blurred_to_clear() {
    let start = intro_frame(0.0);
    assert_eq!(start.opacity, 1.0);
    assert_eq!(start.blur_px, 12.0);
    assert!(!start.done);

    let mid = intro_frame(0.25);
    assert!((mid.opacity - 0.5).abs() < 1e-6);
    assert!((mid.blur_px - 6.0).abs() < 1e-5);
    assert!(!mid.interactive);

    let end = intro_frame(0.5);
    assert!(end.done);
    assert_eq!(end.opacity, 0.0);
    assert_eq!(end.blur_px, 0.0);
    assert!(intro_frame(30.0).done);
}

#[test]
fn intro_never_brightens_again() {
    let mut last = intro_frame(0.0);
    for i in 1..=60 {
        let f = intro_frame(i as f32 / 100.0);
        assert!(f.opacity <= last.opacity);
        assert!(f.blur_px <= last.blur_px);
        last = f;
    }
}

#[test]
fn bad_clock_reads_as_the_first_frame() {
    assert_eq!(intro_frame(f32::NAN), intro_frame(0.0));
    assert_eq!(intro_frame(-1.0), intro_frame(0.0));
}
