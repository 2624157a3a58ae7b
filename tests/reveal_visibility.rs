use motion_charts_wasm::application::InteractiveChart;
use motion_charts_wasm::domain::chart::{RevealPhase, SampleChart};
use motion_charts_wasm::domain::scheduling::ManualScheduler;
use motion_charts_wasm::domain::visibility::{VisibilityConfig, VisibilityEdge, VisibilityTrigger};

fn chart(sample: SampleChart, config: VisibilityConfig, scheduler: &ManualScheduler) -> InteractiveChart<ManualScheduler> {
    InteractiveChart::new(sample.build(), config, scheduler.clone())
}

#[test]
fn once_reveal_starts_exactly_once() {
    let scheduler = ManualScheduler::new();
    let chart = chart(SampleChart::YieldCurve, VisibilityConfig { visible_fraction: 0.1, once: true }, &scheduler);

    assert!(chart.on_visibility(true));
    assert!(!chart.on_visibility(false));
    assert!(!chart.on_visibility(true));
    assert_eq!(chart.reveal_start_count(), 1);
}

#[test]
fn reveal_never_restarts_even_without_once() {
    let scheduler = ManualScheduler::new();
    let chart = chart(SampleChart::OptionsGreeks, VisibilityConfig { visible_fraction: 0.1, once: false }, &scheduler);

    chart.on_visibility(true);
    scheduler.run_frames(100, 16.0);
    assert_eq!(chart.reveal_phase(), RevealPhase::Settled);

    chart.on_visibility(false);
    assert!(!chart.on_visibility(true));
    assert_eq!(chart.reveal_start_count(), 1);
    assert_eq!(chart.reveal_phase(), RevealPhase::Settled);
}

#[test]
fn ratio_below_threshold_is_not_visible() {
    let scheduler = ManualScheduler::new();
    let chart = chart(SampleChart::VolSurface, VisibilityConfig { visible_fraction: 0.25, once: true }, &scheduler);

    assert!(!chart.on_visibility_ratio(0.2));
    assert_eq!(chart.reveal_phase(), RevealPhase::Hidden);
    assert!(chart.on_visibility_ratio(0.3));
    assert_eq!(chart.reveal_phase(), RevealPhase::Revealing);
}

#[test]
fn trigger_emits_left_edges_but_suppresses_repeat_entry() {
    let mut trigger = VisibilityTrigger::new(VisibilityConfig::default());
    assert_eq!(trigger.observe(true), Some(VisibilityEdge::Entered));
    assert_eq!(trigger.observe(true), None);
    assert_eq!(trigger.observe(false), Some(VisibilityEdge::Left));
    assert_eq!(trigger.observe(true), None);
    assert_eq!(trigger.entered_count(), 1);
}

#[test]
fn hidden_chart_schedules_nothing() {
    let scheduler = ManualScheduler::new();
    let chart = chart(SampleChart::CorrelationPair, VisibilityConfig::default(), &scheduler);
    assert_eq!(scheduler.pending_count(), 0);
    assert!(!chart.is_animating());
    assert!(chart.scene().is_finite());
}
