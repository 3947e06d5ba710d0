use std::time::Duration;

use super::*;
use crate::host::HostError;
use crate::render::surface::{DrawCmd, RecordingSurface};

#[derive(Default)]
struct ManualHost {
    immediate: usize,
    scheduled: usize,
}

impl ViewHost for ManualHost {
    fn request_redraw(&mut self) -> Result<(), HostError> {
        self.immediate += 1;
        Ok(())
    }

    fn schedule_redraw(&mut self, _delay: Duration) -> Result<(), HostError> {
        self.scheduled += 1;
        Ok(())
    }
}

fn sweep(r: &mut Renderer, host: &mut ManualHost, surface: &mut RecordingSurface) -> Settle {
    assert!(r.handle_tap(host));
    loop {
        if let Some(settle) = r.render(surface, host) {
            return settle;
        }
    }
}

#[test]
fn invalid_config_fails_at_construction() {
    let cfg = EffectConfig {
        phases: 0,
        ..EffectConfig::default()
    };
    assert!(Renderer::new(cfg).is_err());
}

#[test]
fn render_clears_then_draws_active_node() {
    let mut r = Renderer::new(EffectConfig::default()).unwrap();
    let mut host = ManualHost::default();
    let mut surface = RecordingSurface::new(200.0, 100.0);
    assert_eq!(r.render(&mut surface, &mut host), None);

    let cmds = surface.commands();
    assert_eq!(cmds[0], DrawCmd::Clear(r.config().background));
    assert_eq!(cmds.len(), 7);
    let DrawCmd::Line { paint, .. } = &cmds[1] else {
        panic!("expected a line, got {:?}", cmds[1]);
    };
    assert_eq!(paint.color, r.config().colors[0]);
    assert_eq!(host.scheduled, 0);
}

#[test]
fn tap_starts_animator_with_one_redraw() {
    let mut r = Renderer::new(EffectConfig::default()).unwrap();
    let mut host = ManualHost::default();
    assert!(r.handle_tap(&mut host));
    assert!(r.animator().is_running());
    assert_eq!(host.immediate, 1);

    assert!(!r.handle_tap(&mut host));
    assert_eq!(host.immediate, 1);
}

#[test]
fn each_render_while_running_schedules_one_redraw() {
    let mut r = Renderer::new(EffectConfig::default()).unwrap();
    let mut host = ManualHost::default();
    let mut surface = RecordingSurface::new(100.0, 100.0);
    r.handle_tap(&mut host);
    for i in 1..=10 {
        r.render(&mut surface, &mut host);
        assert_eq!(host.scheduled, i);
    }
    assert!((r.chain().active().scale() - 0.05).abs() < 1e-12);
}

#[test]
fn settle_stops_the_animator_and_advances_the_chain() {
    let mut r = Renderer::new(EffectConfig::default()).unwrap();
    let mut host = ManualHost::default();
    let mut surface = RecordingSurface::new(100.0, 100.0);

    let settle = sweep(&mut r, &mut host, &mut surface);
    assert_eq!(
        settle,
        Settle {
            node: 0,
            value: 1.0,
            boundary: false
        }
    );
    assert!(!r.animator().is_running());
    assert_eq!(r.chain().active().index(), 1);

    let scheduled = host.scheduled;
    assert_eq!(r.render(&mut surface, &mut host), None);
    assert_eq!(host.scheduled, scheduled);
}

#[test]
fn taps_walk_the_chain_back_and_forth() {
    let mut r = Renderer::new(EffectConfig::default()).unwrap();
    let mut host = ManualHost::default();
    let mut surface = RecordingSurface::new(100.0, 100.0);
    let nodes: Vec<usize> = (0..10)
        .map(|_| sweep(&mut r, &mut host, &mut surface).node)
        .collect();
    assert_eq!(nodes, vec![0, 1, 2, 3, 4, 4, 3, 2, 1, 0]);
    assert_eq!(r.chain().active().index(), 0);
    assert_eq!(r.chain().active().scale(), 0.0);
    assert_eq!(r.chain().direction(), crate::foundation::core::Direction::Forward);
}
