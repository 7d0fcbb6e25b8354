// Intro sequencing: stage delays, loading gate and the working indicator.

use spindial_core::onboarding::OnboardingSequencer;
use spindial_core::scheduler::Scheduler;
use spindial_core::{EngineConfig, OnboardingStage, StageFade};
use std::time::Duration;

fn run_until(o: &mut OnboardingSequencer, sched: &mut Scheduler, ms: u64) {
    sched.set_now(Duration::from_millis(ms));
    while let Some(fired) = sched.pop_due() {
        o.on_timer(fired, sched);
    }
}

fn begun() -> (OnboardingSequencer, Scheduler) {
    let mut sched = Scheduler::new();
    let mut o = OnboardingSequencer::new(&EngineConfig::default());
    o.begin(&mut sched);
    (o, sched)
}

#[test]
fn stage_one_action_unlocks_after_its_delay() {
    let (mut o, mut sched) = begun();
    assert!(!o.advance(&mut sched));
    run_until(&mut o, &mut sched, 1199);
    assert!(!o.can_continue());
    run_until(&mut o, &mut sched, 1200);
    assert!(o.can_continue());
    assert!(o.advance(&mut sched));
    assert_eq!(o.view().fade, StageFade::Out);
}

#[test]
fn stage_swap_fades_out_then_in() {
    let (mut o, mut sched) = begun();
    run_until(&mut o, &mut sched, 1200);
    o.advance(&mut sched);
    run_until(&mut o, &mut sched, 1600);
    assert_eq!(o.stage(), OnboardingStage::Rotate);
    assert_eq!(o.view().fade, StageFade::In);
    run_until(&mut o, &mut sched, 2000);
    assert_eq!(o.view().fade, StageFade::None);
    assert!(!o.view().action_ready);
    run_until(&mut o, &mut sched, 3200);
    assert!(o.view().action_ready);
}

#[test]
fn entering_waits_for_loading() {
    let (mut o, mut sched) = begun();
    run_until(&mut o, &mut sched, 1200);
    o.advance(&mut sched);
    run_until(&mut o, &mut sched, 3200);
    assert!(o.is_loading());
    assert!(!o.complete(&mut sched));

    o.set_renderer_ready(&mut sched);
    assert!(!o.can_enter());
    o.set_assets_ready(&mut sched);
    assert!(o.can_enter());
    assert!(o.complete(&mut sched));
    assert_eq!(o.stage(), OnboardingStage::Entered);
    assert_eq!(sched.pending_count(), 0);
    assert!(!o.complete(&mut sched));
}

#[test]
fn minimum_loading_time_applies_even_when_everything_is_ready() {
    let (mut o, mut sched) = begun();
    o.set_renderer_ready(&mut sched);
    o.set_assets_ready(&mut sched);
    run_until(&mut o, &mut sched, 999);
    assert!(o.is_loading());
    run_until(&mut o, &mut sched, 1000);
    assert!(!o.is_loading());
}

#[test]
fn working_indicator_cycles_while_loading() {
    let (mut o, mut sched) = begun();
    assert_eq!(o.view().indicator, "");
    run_until(&mut o, &mut sched, 350);
    assert_eq!(o.view().indicator, ".");
    run_until(&mut o, &mut sched, 700);
    assert_eq!(o.view().indicator, "..");
    run_until(&mut o, &mut sched, 1050);
    assert_eq!(o.view().indicator, "...");
    run_until(&mut o, &mut sched, 1400);
    assert_eq!(o.view().indicator, "");

    o.set_renderer_ready(&mut sched);
    o.set_assets_ready(&mut sched);
    assert_eq!(o.view().indicator, "");
    assert!(!o.view().loading);
}
