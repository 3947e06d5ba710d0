use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = EffectConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.node_count(), 5);
    assert_eq!(cfg.tick_step(), 0.005);
    assert_eq!(cfg.tick_delay(), Duration::from_millis(20));
    assert_eq!(cfg.background, Rgba8::opaque(0xBD, 0xBD, 0xBD));
}

#[test]
fn empty_palette_is_rejected() {
    let cfg = EffectConfig {
        colors: Vec::new(),
        ..EffectConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("palette"));
}

#[test]
fn zero_phases_is_rejected() {
    let cfg = EffectConfig {
        phases: 0,
        ..EffectConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(BitrifillError::Config(_))));
}

#[test]
fn step_size_must_be_a_proper_fraction() {
    for step_size in [0.0, -0.1, 1.0, f64::NAN] {
        let cfg = EffectConfig {
            step_size,
            ..EffectConfig::default()
        };
        assert!(cfg.validate().is_err(), "step_size {step_size} accepted");
    }
}

#[test]
fn json_fills_missing_fields_from_defaults() {
    let cfg = EffectConfig::from_json_str(r##"{"colors":["#000000","#FFFFFF"],"phases":2}"##)
        .unwrap();
    assert_eq!(cfg.node_count(), 2);
    assert_eq!(cfg.phases, 2);
    assert_eq!(cfg.stroke_factor, 90.0);
    assert_eq!(cfg.tick_step(), 0.01);
}

#[test]
fn json_with_invalid_values_fails_fast() {
    assert!(matches!(
        EffectConfig::from_json_str(r#"{"colors":[]}"#),
        Err(BitrifillError::Config(_))
    ));
    assert!(matches!(
        EffectConfig::from_json_str(r#"{"colors":["red"]}"#),
        Err(BitrifillError::Serde(_))
    ));
}

#[test]
fn color_for_wraps_by_palette_length() {
    let cfg = EffectConfig::default();
    assert_eq!(cfg.color_for(0), cfg.colors[0]);
    assert_eq!(cfg.color_for(6), cfg.colors[1]);
}

#[test]
fn vanishing_tick_step_is_rejected() {
    let cfg = EffectConfig {
        step_size: 1e-17,
        ..EffectConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(BitrifillError::Config(_))));

    let cfg = EffectConfig {
        step_size: 0.5,
        phases: u32::MAX,
        ..EffectConfig::default()
    };
    assert!(cfg.validate().is_err());
}
