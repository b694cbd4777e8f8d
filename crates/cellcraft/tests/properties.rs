//! Clamping and rotation laws

use cellcraft::prelude::*;
use cellcraft::{
    apply_tint, clamp_line_weight, clamp_tint, text_rotation_to_intuitive, text_rotation_to_ooxml,
    TextRotation, MAX_LINE_WEIGHT,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tint_always_in_range(tint in proptest::num::f64::ANY) {
        let clamped = clamp_tint(tint);
        prop_assert!((-1.0..=1.0).contains(&clamped));
    }

    #[test]
    fn tint_in_range_is_kept(tint in -1.0f64..=1.0) {
        prop_assert_eq!(clamp_tint(tint), tint);
    }

    #[test]
    fn tint_keeps_alpha(rgb in 0u32..=0xFF_FFFF, tint in -1.0f64..=1.0) {
        let color = Argb::from_u32(rgb);
        prop_assert_eq!(apply_tint(color, tint).a, 0xFF);
    }

    #[test]
    fn line_weight_always_in_range(weight in proptest::num::f64::ANY) {
        let clamped = clamp_line_weight(weight);
        prop_assert!((0.0..=MAX_LINE_WEIGHT).contains(&clamped));
    }

    #[test]
    fn group_line_weight_in_range(weight in -10_000.0f64..10_000.0) {
        let mut group = SlSparklineGroup::new("Sheet1", 1, 1, 1, 4);
        group.set_line_weight(weight);
        prop_assert!((0.0..=MAX_LINE_WEIGHT).contains(&group.line_weight()));
    }

    #[test]
    fn ooxml_rotation_round_trips(value in 0u32..=180) {
        prop_assert_eq!(text_rotation_to_ooxml(text_rotation_to_intuitive(value)), value);
    }

    #[test]
    fn degrees_round_trip(degrees in -90i16..=90) {
        let rotation = TextRotation::Degrees(degrees);
        prop_assert_eq!(text_rotation_to_intuitive(text_rotation_to_ooxml(rotation)), rotation);
    }

    #[test]
    fn theme_color_key_round_trips(index in 0u32..10, tint in -1.0f64..=1.0) {
        let palette = Palette::default();
        let mut color = SlColor::new(&palette);
        color.set_theme_index(index, Some(tint));
        let key = color.to_key();
        prop_assert_eq!(SlColor::from_key(&key, &palette).to_key(), key);
    }
}

#[test]
fn stacked_text_round_trips() {
    assert_eq!(text_rotation_to_ooxml(TextRotation::Stacked), 255);
    assert_eq!(text_rotation_to_intuitive(255), TextRotation::Stacked);
}
