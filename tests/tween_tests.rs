// Host-side tests for tween rules and style patches.

use interim_site::core::tween::ramp;
use interim_site::core::{Property, StylePatch, TweenRule};

fn opacity(rule: TweenRule, p: f32) -> f32 {
    rule.eval(p).opacity().expect("rule sets opacity")
}

#[test]
fn fades_hit_their_endpoints_exactly() {
    let fade_in = TweenRule::fade_in(0.0, 1.0);
    let fade_out = TweenRule::fade_out(0.0, 1.0);
    assert_eq!(opacity(fade_in, 0.0), 0.0);
    assert_eq!(opacity(fade_in, 1.0), 1.0);
    assert_eq!(opacity(fade_out, 0.0), 1.0);
    assert_eq!(opacity(fade_out, 1.0), 0.0);
}

#[test]
fn delayed_fade_holds_until_its_window() {
    let rule = TweenRule::fade_in(0.3, 1.0);
    assert_eq!(opacity(rule, 0.0), 0.0);
    assert_eq!(opacity(rule, 0.3), 0.0);
    assert!((opacity(rule, 0.65) - 0.5).abs() < 1e-6);
    assert_eq!(opacity(rule, 1.0), 1.0);
}

#[test]
fn window_rule_fades_in_holds_and_fades_out() {
    let rule = TweenRule::Window {
        in_start: 0.0,
        in_end: 0.2,
        out_start: 0.8,
        out_end: 1.0,
    };
    assert_eq!(opacity(rule, 0.0), 0.0);
    assert_eq!(opacity(rule, 0.5), 1.0);
    assert!((opacity(rule, 0.9) - 0.5).abs() < 1e-5);
    assert_eq!(opacity(rule, 1.0), 0.0);
}

#[test]
fn progress_outside_unit_range_is_clamped() {
    let rule = TweenRule::lerp(Property::TranslateY, 60.0, 0.0);
    assert_eq!(rule.eval(-3.0).get(Property::TranslateY), Some(60.0));
    assert_eq!(rule.eval(7.0).get(Property::TranslateY), Some(0.0));
    assert_eq!(rule.eval(f32::NAN).get(Property::TranslateY), Some(60.0));
}

#[test]
fn empty_ramp_steps() {
    assert_eq!(ramp(0.49, 0.5, 0.5), 0.0);
    assert_eq!(ramp(0.5, 0.5, 0.5), 1.0);
    assert_eq!(ramp(0.9, 0.6, 0.2), 1.0);
}

#[test]
fn patch_rejects_out_of_range_values() {
    let mut patch = StylePatch::default();
    assert!(patch.is_empty());
    patch.set(Property::Opacity, 1.7);
    patch.set(Property::Blur, -2.0);
    patch.set(Property::Scale, f32::NAN);
    assert_eq!(patch.opacity(), Some(1.0));
    assert_eq!(patch.get(Property::Blur), Some(0.0));
    assert_eq!(patch.get(Property::Scale), None);
    assert_eq!(patch.iter().count(), 2);
}

#[test]
fn transform_only_lists_set_properties() {
    assert_eq!(StylePatch::one(Property::Opacity, 0.5).css_transform(), None);
    assert_eq!(
        StylePatch::one(Property::TranslateY, -40.0).css_transform().as_deref(),
        Some("translateY(-40.000px)")
    );
    let mut patch = StylePatch::one(Property::TranslateX, 10.0);
    patch.set(Property::Rotate, 90.0);
    assert_eq!(
        patch.css_transform().as_deref(),
        Some("translateX(10.000%) rotate(90.000deg)")
    );
}
