// Crossfade state machine driven directly through the scheduler.

use spindial_core::scheduler::Scheduler;
use spindial_core::transition::{TransitionDurations, TransitionEvent, TransitionStateMachine};
use spindial_core::{EngineConfig, TransitionPhase};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn machine() -> TransitionStateMachine {
    TransitionStateMachine::new(Some(0), TransitionDurations::from(&EngineConfig::default()))
}

/// Move time to `to` and feed every due timer to the machine.
fn run_until(t: &mut TransitionStateMachine, sched: &mut Scheduler, to: Duration) -> Vec<TransitionEvent> {
    sched.set_now(to);
    let mut events = Vec::new();
    while let Some(fired) = sched.pop_due() {
        events.extend(t.on_timer(fired, sched));
    }
    events
}

#[test]
fn phases_run_in_order_with_exact_durations() {
    let mut sched = Scheduler::new();
    let mut t = machine();
    let ticket = t.request(3, &mut sched).unwrap();
    assert_eq!(t.phase(), TransitionPhase::Loading);
    assert_eq!(t.highlighted(), Some(3));
    assert_eq!(t.active(), Some(0));

    sched.set_now(ms(250));
    assert!(t.preload_complete(ticket.token, &mut sched));
    assert_eq!(t.phase(), TransitionPhase::FadingToBlack);
    assert_eq!(t.phase_entered_at(), ms(250));

    assert!(run_until(&mut t, &mut sched, ms(649)).is_empty());
    assert_eq!(t.active(), Some(0), "no swap before full black");

    // frame lands late; the phase still starts at its due instant
    let events = run_until(&mut t, &mut sched, ms(660));
    assert_eq!(events, vec![TransitionEvent::Swapped(3)]);
    assert_eq!(t.phase(), TransitionPhase::Holding);
    assert_eq!(t.phase_entered_at(), ms(650));
    assert_eq!(t.active(), Some(3));

    run_until(&mut t, &mut sched, ms(850));
    assert_eq!(t.phase(), TransitionPhase::FadingOut);
    assert_eq!(t.phase_entered_at(), ms(850));

    let events = run_until(&mut t, &mut sched, ms(1650));
    assert_eq!(events, vec![TransitionEvent::Finished]);
    assert!(t.is_idle());
    assert_eq!(t.phase_entered_at() - ms(250), ms(1400));
}

#[test]
fn overlay_opacity_follows_the_phases() {
    let mut sched = Scheduler::new();
    let mut t = machine();
    assert_eq!(t.overlay_opacity(ms(0)), 0.0);
    let ticket = t.request(2, &mut sched).unwrap();
    assert_eq!(t.overlay_opacity(ms(100)), 0.0);
    t.preload_complete(ticket.token, &mut sched);
    assert!((t.overlay_opacity(ms(200)) - 0.5).abs() < 1e-6);
    run_until(&mut t, &mut sched, ms(400));
    assert_eq!(t.overlay_opacity(ms(500)), 1.0);
    run_until(&mut t, &mut sched, ms(600));
    assert!((t.overlay_opacity(ms(1000)) - 0.5).abs() < 1e-6);
    run_until(&mut t, &mut sched, ms(1400));
    assert_eq!(t.overlay_opacity(ms(1400)), 0.0);
}

#[test]
fn requests_are_ignored_while_busy_or_already_active() {
    let mut sched = Scheduler::new();
    let mut t = machine();
    assert!(t.request(0, &mut sched).is_none());
    assert!(t.request(4, &mut sched).is_some());
    assert!(t.request(5, &mut sched).is_none());
    assert_eq!(t.pending(), Some(4));
}

#[test]
fn preload_timeout_proceeds_and_late_completion_is_ignored() {
    let mut sched = Scheduler::new();
    let mut t = machine();
    let ticket = t.request(1, &mut sched).unwrap();
    run_until(&mut t, &mut sched, ms(5999));
    assert_eq!(t.phase(), TransitionPhase::Loading);
    run_until(&mut t, &mut sched, ms(6000));
    assert_eq!(t.phase(), TransitionPhase::FadingToBlack);
    assert!(!t.preload_complete(ticket.token, &mut sched));
    assert_eq!(t.phase_entered_at(), ms(6000));
}

#[test]
fn stale_tokens_do_not_advance_a_new_transition() {
    let mut sched = Scheduler::new();
    let mut t = machine();
    let first = t.request(1, &mut sched).unwrap();
    t.preload_complete(first.token, &mut sched);
    run_until(&mut t, &mut sched, ms(1400));
    assert!(t.is_idle());

    let second = t.request(2, &mut sched).unwrap();
    assert_ne!(first.token, second.token);
    assert!(!t.preload_complete(first.token, &mut sched));
    assert_eq!(t.phase(), TransitionPhase::Loading);
    assert!(t.preload_complete(second.token, &mut sched));
}

#[test]
fn cancel_disarms_everything() {
    let mut sched = Scheduler::new();
    let mut t = machine();
    let ticket = t.request(1, &mut sched).unwrap();
    t.cancel(&mut sched);
    assert_eq!(sched.pending_count(), 0);
    assert!(!t.preload_complete(ticket.token, &mut sched));
}
