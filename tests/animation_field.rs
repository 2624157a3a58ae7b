use std::cell::RefCell;
use std::rc::Rc;

use motion_charts_wasm::application::AnimationEngine;
use motion_charts_wasm::domain::animation::{
    AnimationField, DrawSurface, FieldConfig, FieldVariant, ParticlePool, RecordingSurface, ViewportSize,
};
use motion_charts_wasm::domain::scheduling::ManualScheduler;
use quickcheck_macros::quickcheck;

const DESKTOP: ViewportSize = ViewportSize { width: 1280.0, height: 720.0 };

#[test]
fn resize_is_idempotent() {
    let mut field = AnimationField::new(FieldVariant::Flow, FieldConfig::flow().with_seed(7), DESKTOP, 2.0);
    let first = field.resize(DESKTOP, 2.0);
    let particles = field.particles().len();
    for _ in 0..5 {
        assert_eq!(field.resize(DESKTOP, 2.0), first);
        assert_eq!(field.particles().len(), particles);
    }
    assert_eq!(particles, 28);
    assert_eq!((first.width, first.height), (2560, 1440));
}

#[test]
fn pixel_ratio_is_capped() {
    let mut field = AnimationField::new(FieldVariant::Aurora, FieldConfig::aurora(), DESKTOP, 3.0);
    assert_eq!(field.backing().scale, 2.0);
    assert_eq!(field.resize(ViewportSize::new(100.0, 50.0), 1.0).width, 100);
}

#[quickcheck]
fn particles_stay_within_wrap_bounds(seed: u64, width: u16, height: u16, ticks: u8) -> bool {
    let size = ViewportSize::new(f64::from(width), f64::from(height));
    let mut pool = ParticlePool::new(28, seed, size);
    (0..usize::from(ticks) * 8).all(|_| {
        pool.step(size);
        pool.particles().iter().all(|p| -p.radius <= p.y && p.y <= size.height + p.radius)
    })
}

fn flow_engine(scheduler: &ManualScheduler, surface: &Rc<RefCell<RecordingSurface>>) -> AnimationEngine<ManualScheduler> {
    AnimationEngine::initialize(
        FieldVariant::Flow,
        FieldConfig::flow().with_seed(3),
        Ok(Box::new(surface.clone()) as Box<dyn DrawSurface>),
        DESKTOP,
        1.0,
        scheduler.clone(),
    )
}

#[test]
fn teardown_cancels_all_frames() {
    let scheduler = ManualScheduler::new();
    let surface = Rc::new(RefCell::new(RecordingSurface::default()));
    let mut engine = flow_engine(&scheduler, &surface);

    scheduler.run_frames(5, 16.0);
    assert_eq!(surface.borrow().frames, 5);

    engine.teardown();
    assert_eq!(scheduler.pending_count(), 0);
    assert_eq!(scheduler.run_frames(30, 16.0), 0);
    assert_eq!(surface.borrow().frames, 5);
    assert!(!engine.is_running());
}

#[test]
fn dropping_the_engine_cancels_its_frame() {
    let scheduler = ManualScheduler::new();
    let surface = Rc::new(RefCell::new(RecordingSurface::default()));
    drop(flow_engine(&scheduler, &surface));
    assert_eq!(scheduler.pending_count(), 0);
    assert_eq!(scheduler.advance(16.0), 0);
    assert_eq!(surface.borrow().frames, 0);
}

#[test]
fn independent_engines_do_not_share_state() {
    let scheduler = ManualScheduler::new();
    let first = Rc::new(RefCell::new(RecordingSurface::default()));
    let second = Rc::new(RefCell::new(RecordingSurface::default()));
    let mut a = flow_engine(&scheduler, &first);
    let b = flow_engine(&scheduler, &second);

    a.set_scroll_offset(400.0);
    scheduler.run_frames(2, 16.0);
    a.teardown();
    scheduler.run_frames(2, 16.0);

    assert_eq!(b.field().scroll_offset(), 0.0);
    assert_eq!(first.borrow().frames, 2);
    assert_eq!(second.borrow().frames, 4);
}
