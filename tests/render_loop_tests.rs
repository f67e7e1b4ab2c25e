// Host-side tests for the render loop state machine.

use portfolio_fx::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_loop() -> RenderLoop {
    let mut rl = RenderLoop::new(Surface::new(300, 300), FieldParams::default());
    rl.populate(&mut StdRng::seed_from_u64(9));
    rl
}

#[test]
fn idle_loop_draws_nothing() {
    let mut rl = seeded_loop();
    let mut list = DisplayList::default();
    assert_eq!(rl.state(), LoopState::Idle);
    assert!(!rl.tick(Pointer::default(), &mut list));
    assert!(list.ops.is_empty());
    assert_eq!(rl.frames(), 0);
}

#[test]
fn running_tick_clears_updates_and_draws() {
    let mut rl = seeded_loop();
    assert_eq!(rl.start(), LoopState::Running);

    let before: Vec<_> = rl.field().particles().iter().map(|p| p.pos).collect();
    let mut list = DisplayList::default();
    assert!(rl.tick(Pointer::new(-1_000.0, -1_000.0), &mut list));

    assert_eq!(
        list.ops[0],
        PaintOp::Clear {
            width: 300.0,
            height: 300.0
        }
    );
    assert_eq!(list.circles().count(), 6);
    assert_eq!(rl.frames(), 1);

    let after: Vec<_> = rl.field().particles().iter().map(|p| p.pos).collect();
    assert_ne!(before, after, "particles should have moved");
}

#[test]
fn each_frame_starts_with_a_clear() {
    let mut rl = seeded_loop();
    rl.start();
    let mut list = DisplayList::default();
    for _ in 0..3 {
        rl.tick(Pointer::default(), &mut list);
    }
    let clears = list
        .ops
        .iter()
        .filter(|op| matches!(op, PaintOp::Clear { .. }))
        .count();
    assert_eq!(clears, 3);
    assert_eq!(rl.frames(), 3);
}

#[test]
fn stop_ends_the_loop() {
    let mut rl = seeded_loop();
    rl.start();
    let mut list = DisplayList::default();
    assert!(rl.tick(Pointer::default(), &mut list));

    rl.stop();
    assert_eq!(rl.state(), LoopState::Stopped);
    let drawn = list.ops.len();
    assert!(!rl.tick(Pointer::default(), &mut list));
    assert_eq!(list.ops.len(), drawn);
}

#[test]
fn cancel_token_stops_running_loop_on_next_tick() {
    let mut rl = seeded_loop();
    let token = rl.cancel_token();
    rl.start();

    token.cancel();
    assert!(token.is_cancelled());
    let mut list = DisplayList::default();
    assert!(!rl.tick(Pointer::default(), &mut list));
    assert!(list.ops.is_empty());
    assert_eq!(rl.state(), LoopState::Stopped);
}

#[test]
fn stopped_loop_cannot_restart() {
    let mut rl = seeded_loop();
    rl.start();
    rl.stop();
    assert_eq!(rl.start(), LoopState::Stopped);

    let mut early = seeded_loop();
    early.cancel_token().cancel();
    assert_eq!(early.start(), LoopState::Stopped);
}

#[test]
fn resize_recreates_field_at_new_budget() {
    let mut rl = seeded_loop();
    assert_eq!(rl.field().len(), 6);

    let mut rng = StdRng::seed_from_u64(10);
    assert_eq!(rl.resize(600, 300, &mut rng), 12);
    assert_eq!(rl.surface(), &Surface::new(600, 300));
    assert_eq!(rl.field().len(), 12);
    for p in rl.field().particles() {
        assert!(p.pos.x < 600.0 && p.pos.y < 300.0);
    }
}

#[test]
fn empty_surface_runs_without_particles() {
    let mut rl = RenderLoop::new(Surface::new(0, 0), FieldParams::default());
    assert_eq!(rl.populate(&mut StdRng::seed_from_u64(1)), 0);
    rl.start();
    let mut list = DisplayList::default();
    assert!(rl.tick(Pointer::default(), &mut list));
    assert_eq!(list.ops.len(), 1);
}
