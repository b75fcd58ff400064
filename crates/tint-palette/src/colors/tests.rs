//! Tests for color parsing, normalization and conversion.

use super::*;

fn channel_delta(a: Color, b: Color) -> u8 {
    a.r.abs_diff(b.r)
        .max(a.g.abs_diff(b.g))
        .max(a.b.abs_diff(b.b))
}

fn sample_colors() -> impl Iterator<Item = Color> {
    (0..=255u16).step_by(17).flat_map(|r| {
        (0..=255u16).step_by(17).flat_map(move |g| {
            (0..=255u16)
                .step_by(17)
                .map(move |b| Color::rgb(r as u8, g as u8, b as u8))
        })
    })
}

#[test]
fn parse_hex_6_digit() {
    assert_eq!(parse_color("#00d4ff"), Some(Color::rgb(0, 212, 255)));
}

#[test]
fn parse_hex_8_digit() {
    assert_eq!(
        parse_color("#00d4ff80"),
        Some(Color::from_rgba(0, 212, 255, 128))
    );
}

#[test]
fn parse_hex_short_forms() {
    assert_eq!(parse_color("#f00"), Some(Color::rgb(255, 0, 0)));
    assert_eq!(parse_color("#f008"), Some(Color::from_rgba(255, 0, 0, 136)));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(0,212,255,0.12)").unwrap();
    // 0.12 * 255 = 30.6 -> 31
    assert_eq!(c, Color::from_rgba(0, 212, 255, 31));
}

#[test]
fn parse_rgb_without_alpha() {
    assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Color::rgb(10, 20, 30)));
}

#[test]
fn parse_hsl_function_forms() {
    assert_eq!(parse_color("hsl(0, 100%, 50%)"), Some(Color::rgb(255, 0, 0)));
    assert_eq!(parse_color("hsl(120 100% 25%)"), Some(Color::rgb(0, 128, 0)));
    let translucent = parse_color("hsla(240, 100%, 50%, 0.5)").unwrap();
    assert_eq!(translucent, Color::from_rgba(0, 0, 255, 128));
}

#[test]
fn parse_bare_hsl_triplet() {
    assert_eq!(parse_color("210 40% 98%"), Some(Color::rgb(248, 250, 252)));
}

#[test]
fn parse_oklch_white_and_red() {
    assert_eq!(parse_color("oklch(1 0 0)"), Some(Color::WHITE));
    assert_eq!(parse_color("oklch(100% 0 0)"), Some(Color::WHITE));

    let red = parse_color("oklch(0.628 0.2577 29.23)").unwrap();
    assert!(red.r >= 254, "{red:?}");
    assert!(red.g <= 2, "{red:?}");
    assert!(red.b <= 2, "{red:?}");
}

#[test]
fn parse_color_rejects_garbage() {
    assert!(parse_color("not-a-color").is_none());
    assert!(parse_color("").is_none());
    assert!(parse_color("#xyz").is_none());
    assert!(parse_color("#12345").is_none());
    assert!(parse_color("rgba(300,0,0,1.0)").is_none());
    assert!(parse_color("red").is_none());
    assert!(parse_color("hsl(a, b, c)").is_none());
}

#[test]
fn normalize_lowercases_hex() {
    let n = normalize_color("#ABCDEF", None);
    assert_eq!(n.value, "#abcdef");
    assert!(!n.fell_back);
}

#[test]
fn normalize_converts_other_formats_to_hex() {
    assert_eq!(normalize_color("hsl(0, 100%, 50%)", None).value, "#ff0000");
    assert_eq!(normalize_color("rgb(0,0,0)", None).value, "#000000");
}

#[test]
fn normalize_falls_back_to_previous_value() {
    let n = normalize_color("nonsense", Some("#123456"));
    assert_eq!(n.value, "#123456");
    assert!(n.fell_back);
}

#[test]
fn normalize_falls_back_to_black_without_valid_previous() {
    assert_eq!(normalize_color("nonsense", None).value, "#000000");
    assert_eq!(normalize_color("nonsense", Some("also bad")).value, "#000000");
}

#[test]
fn lenient_conversions_fall_back_to_black() {
    let hsla = hex_to_hsla("garbage");
    assert_eq!(hsla, Hsla::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(hex_to_oklch("garbage").l, 0.0);
    assert!(try_hex_to_hsla("garbage").is_none());
    assert!(try_hex_to_oklch("garbage").is_none());
}

#[test]
fn hsla_channels_are_clamped() {
    let c = Hsla::new(-30.0, 150.0, -5.0, 2.0).clamped();
    assert_eq!(c.h, 330.0);
    assert_eq!(c.s, 100.0);
    assert_eq!(c.l, 0.0);
    assert_eq!(c.a, 1.0);
    assert_eq!(hsla_to_hex(Hsla::new(400.0, 150.0, 120.0, 3.0)), "#ffffff");
}

#[test]
fn hsla_display_formats() {
    assert_eq!(
        Hsla::new(210.0, 40.0, 98.0, 1.0).to_string(),
        "hsl(210.0, 40.0%, 98.0%)"
    );
    assert_eq!(
        Hsla::new(0.0, 0.0, 0.0, 0.5).to_string(),
        "hsla(0.0, 0.0%, 0.0%, 0.50)"
    );
}

#[test]
fn hex_hsla_round_trip_within_one_unit() {
    for color in sample_colors() {
        let back = parse_color(&hsla_to_hex(hex_to_hsla(&color.to_hex()))).unwrap();
        assert!(
            channel_delta(color, back) <= 1,
            "{} -> {}",
            color.to_hex(),
            back.to_hex()
        );
    }
}

#[test]
fn hex_oklch_round_trip_within_one_unit() {
    for color in sample_colors() {
        let back = parse_color(&oklch_to_hex(hex_to_oklch(&color.to_hex()))).unwrap();
        assert!(
            channel_delta(color, back) <= 1,
            "{} -> {}",
            color.to_hex(),
            back.to_hex()
        );
    }
}

#[test]
fn oklch_out_of_gamut_is_clipped() {
    let hex = oklch_to_hex(Oklch::new(0.7, 0.9, 140.0, 1.0));
    assert!(parse_color(&hex).is_some());
    assert_eq!(hex.len(), 7);
}

#[test]
fn alpha_survives_hsla_round_trip() {
    let hsla = hex_to_hsla("#11223380");
    assert!((hsla.a - 128.0 / 255.0).abs() < 1e-9);
    assert_eq!(hsla_to_hex(hsla), "#11223380");
}
