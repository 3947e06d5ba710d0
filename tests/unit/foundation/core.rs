use super::*;

#[test]
fn parse_hex_accepts_rgb_and_argb() {
    assert_eq!(
        Rgba8::parse_hex("#F44336").unwrap(),
        Rgba8::opaque(0xF4, 0x43, 0x36)
    );
    assert_eq!(
        Rgba8::parse_hex("#80FF0000").unwrap(),
        Rgba8 {
            r: 255,
            g: 0,
            b: 0,
            a: 0x80
        }
    );
}

#[test]
fn parse_hex_rejects_malformed() {
    assert!(Rgba8::parse_hex("F44336").is_err());
    assert!(Rgba8::parse_hex("#F443").is_err());
    assert!(Rgba8::parse_hex("#GG4336").is_err());
}

#[test]
fn color_string_form_is_stable() {
    let c = Rgba8::opaque(0xBD, 0xBD, 0xBD);
    assert_eq!(String::from(c), "#BDBDBD");
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#BDBDBD\"");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn premultiplied_scales_channels_by_alpha() {
    let c = Rgba8 {
        r: 255,
        g: 128,
        b: 0,
        a: 0,
    };
    assert_eq!(c.premultiplied(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::opaque(10, 20, 30).premultiplied(), [10, 20, 30, 255]);
}

#[test]
fn direction_flips() {
    assert_eq!(Direction::Forward.flipped(), Direction::Backward);
    assert_eq!(Direction::Backward.flipped(), Direction::Forward);
}

#[test]
fn canvas_rejects_zero_sides() {
    assert!(Canvas::new(0, 10).is_err());
    assert_eq!(Canvas::new(300, 200).unwrap().min_side(), 200.0);
}
