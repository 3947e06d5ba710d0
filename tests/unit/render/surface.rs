use super::*;

fn paint() -> Paint {
    Paint {
        color: Rgba8::opaque(1, 2, 3),
        stroke_width: 2.0,
        round_cap: true,
    }
}

#[test]
fn recording_keeps_calls_in_order() {
    let mut s = RecordingSurface::new(10.0, 20.0);
    assert_eq!(s.width(), 10.0);
    assert_eq!(s.height(), 20.0);

    s.clear(Rgba8::opaque(9, 9, 9));
    s.draw_line(Line::new((0.0, 0.0), (1.0, 1.0)), &paint());
    s.fill_clipped_path(
        &BezPath::new(),
        Rect::new(0.0, 0.0, 1.0, 1.0),
        Affine::IDENTITY,
        &paint(),
    );
    let cmds = s.take_commands();
    assert_eq!(cmds.len(), 3);
    assert_eq!(cmds[0], DrawCmd::Clear(Rgba8::opaque(9, 9, 9)));
    assert!(matches!(cmds[1], DrawCmd::Line { .. }));
    assert!(matches!(cmds[2], DrawCmd::ClippedFill { .. }));
    assert!(s.commands().is_empty());
}

#[test]
fn clear_discards_earlier_calls() {
    let mut s = RecordingSurface::new(10.0, 10.0);
    s.draw_line(Line::new((0.0, 0.0), (1.0, 1.0)), &paint());
    s.clear(Rgba8::opaque(0, 0, 0));
    assert_eq!(s.commands(), &[DrawCmd::Clear(Rgba8::opaque(0, 0, 0))]);
}
