//! Dedup keys: mirrors rebuilt from their keys give the same key back

use cellcraft::ooxml::UnderlineValues;
use cellcraft::prelude::*;
use cellcraft::{GradientShading, SlBorderProperties, TextRotation};
use pretty_assertions::assert_eq;

fn accent_palette() -> Palette {
    Palette::default()
}

#[test]
fn test_theme_color_zero_tint_not_kept() {
    let palette = accent_palette();
    let color = SlColor::from_theme(&palette, ThemeColorIndex::Accent1, 0.0);

    let back = SlColor::from_key(&color.to_key(), &palette);
    assert_eq!(back.to_key(), color.to_key());
    assert_eq!(back.theme_index(), Some(4));
    assert_eq!(back.tint(), None);
    assert_eq!(back.display_color(), color.display_color());
}

#[test]
fn test_font_key_round_trip() {
    let palette = accent_palette();
    let mut font = SlFont::new(&palette);
    font.set_font("Georgia", 12.5);
    font.set_italic(true);
    font.underline = Some(UnderlineValues::Double);
    font.set_font_theme_color(ThemeColorIndex::Dark2, -0.25);

    let key = font.to_key();
    assert_eq!(SlFont::from_key(&key, &palette).to_key(), key);
}

#[test]
fn test_fill_key_round_trip() {
    let palette = accent_palette();

    let mut solid = SlFill::new(&palette);
    solid.set_solid_theme(ThemeColorIndex::Accent3, 0.4);
    let key = solid.to_key();
    assert_eq!(SlFill::from_key(&key, &palette).to_key(), key);

    let mut gradient = SlFill::new(&palette);
    gradient.set_gradient(
        GradientShading::FromCenter,
        Argb::from_u32(0xFFFFFF),
        Argb::from_u32(0x4F81BD),
    );
    let key = gradient.to_key();
    assert_eq!(SlFill::from_key(&key, &palette).to_key(), key);
}

#[test]
fn test_every_border_style_round_trips() {
    let palette = accent_palette();
    for &style in BorderStyleValues::ALL {
        let mut edge = SlBorderProperties::new(&palette);
        edge.style = Some(style);
        edge.color.set_color(Argb::from_u32(0x336699));

        let back = SlBorderProperties::from_key(&edge.to_key(), &palette);
        assert_eq!(back.style, Some(style), "{}", style);
        assert_eq!(back.color.display_color(), edge.color.display_color());
        assert_eq!(back.to_key(), edge.to_key());
    }
}

#[test]
fn test_style_key_round_trip() {
    let palette = accent_palette();
    let mut style = SlStyle::new(&palette);
    style.set_bold(true);
    style.set_font_color(Argb::from_u32(0x1F497D));
    style.set_pattern_fill(
        PatternValues::LightGrid,
        Argb::from_u32(0xC0C0C0),
        Argb::from_u32(0xFFFFFF),
    );
    style.set_bottom_border(BorderStyleValues::Double, Argb::from_u32(0x000000));
    style.set_horizontal_alignment(HorizontalAlignmentValues::Center);
    style.set_text_rotation(TextRotation::Degrees(-45));
    style.set_format_code("0.000");
    style.set_locked(false);

    let key = style.to_key();
    let back = SlStyle::from_key(&key, &palette);
    assert_eq!(back.to_key(), key);
    assert_eq!(back.format_code(), "0.000");
}

#[test]
fn test_equal_styles_share_an_id() {
    let palette = accent_palette();
    let build = || {
        let mut style = SlStyle::new(&palette);
        style.apply_named_cell_style(NamedCellStyle::Good);
        style.set_wrap_text(true);
        style
    };

    let mut tables = StyleTables::new(&palette);
    let first = tables.register_style(&build());
    let second = tables.register_style(&build());
    assert_eq!(first, second);

    let mut other = build();
    other.set_italic(true);
    assert_ne!(tables.register_style(&other), first);
    assert_eq!(tables.fills().len(), 3);
}

#[test]
fn test_bad_named_style() {
    let palette = accent_palette();
    let mut style = SlStyle::new(&palette);
    style.set_left_border(BorderStyleValues::Thin, Argb::from_u32(0x00FF00));

    style.apply_named_cell_style(NamedCellStyle::Bad);

    assert_eq!(style.font.color.display_color().to_hex(), "FF9C0006");
    let pattern = style.fill.pattern().unwrap();
    assert_eq!(pattern.pattern_type, Some(PatternValues::Solid));
    assert_eq!(pattern.foreground.display_color().to_hex(), "FFFFC7CE");
    let left = style.border.left.as_ref().unwrap();
    assert_eq!(left.style, Some(BorderStyleValues::Thin));
    assert_eq!(left.color.display_color().to_hex(), "FF00FF00");
}

#[test]
fn test_clone_is_independent() {
    let palette = accent_palette();
    let mut style = SlStyle::new(&palette);
    style.set_solid_fill(Argb::from_u32(0xFF0000));
    let before = style.to_key();

    let mut copy = style.clone();
    copy.set_solid_fill(Argb::from_u32(0x0000FF));
    copy.set_bold(true);
    copy.border.set_outline(BorderStyleValues::Thick, Argb::from_u32(0));

    assert_eq!(style.to_key(), before);
    assert_ne!(copy.to_key(), before);
}

#[test]
fn test_palette_snapshot() {
    let theme: Vec<Argb> = accent_palette().theme_colors().to_vec();
    let palette = Palette::with_theme(theme.clone());
    let color = SlColor::from_theme(&palette, ThemeColorIndex::Accent1, 0.0);

    let mut changed = theme;
    changed[4] = Argb::from_u32(0x00FF00);
    let other = Palette::with_theme(changed);
    let recolored = SlColor::from_theme(&other, ThemeColorIndex::Accent1, 0.0);

    assert_eq!(recolored.display_color().to_hex(), "FF00FF00");
    assert_eq!(color.display_color().to_hex(), "FF4F81BD");
    assert_eq!(color.palette(), &palette);
}
