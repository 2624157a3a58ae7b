use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::chart::{
    ChartWidget, HoverState, PixelBox, PixelPoint, RenderState, RevealAnimation, RevealPhase, Scene, TooltipPayload,
};
use crate::domain::logging::LogComponent;
use crate::domain::scheduling::FrameScheduler;
use crate::domain::visibility::{VisibilityConfig, VisibilityEdge, VisibilityTrigger};
use crate::log_debug;

use super::frame_loop::{FrameLoop, LoopControl};

type ChangeListener = Rc<dyn Fn()>;

struct ChartCore {
    widget: Box<dyn ChartWidget>,
    hover: HoverState,
    reveal: RevealAnimation,
    trigger: VisibilityTrigger,
    on_change: Option<ChangeListener>,
}

impl ChartCore {
    fn listener(&self) -> Option<ChangeListener> {
        self.on_change.clone()
    }
}

fn notify(listener: Option<ChangeListener>) {
    if let Some(listener) = listener {
        listener();
    }
}

/// One mounted chart: widget, hover state, one-shot reveal and its frame loop.
pub struct InteractiveChart<S: FrameScheduler + Clone + 'static> {
    core: Rc<RefCell<ChartCore>>,
    reveal_loop: FrameLoop<S>,
}

impl<S: FrameScheduler + Clone + 'static> InteractiveChart<S> {
    pub fn new(widget: Box<dyn ChartWidget>, visibility: VisibilityConfig, scheduler: S) -> Self {
        let reveal = widget.reveal();
        Self {
            core: Rc::new(RefCell::new(ChartCore {
                widget,
                hover: HoverState::new(),
                reveal,
                trigger: VisibilityTrigger::new(visibility),
                on_change: None,
            })),
            reveal_loop: FrameLoop::new(scheduler),
        }
    }

    /// Called after every change that needs a redraw.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.core.borrow_mut().on_change = Some(Rc::new(listener));
    }

    /// Feed a boolean visibility sample. Returns true if this started the reveal.
    pub fn on_visibility(&self, visible: bool) -> bool {
        let edge = self.core.borrow_mut().trigger.observe(visible);
        matches!(edge, Some(VisibilityEdge::Entered)) && self.play_reveal_once()
    }

    /// Feed an intersection ratio. Returns true if this started the reveal.
    pub fn on_visibility_ratio(&self, ratio: f64) -> bool {
        let edge = self.core.borrow_mut().trigger.observe_ratio(ratio);
        matches!(edge, Some(VisibilityEdge::Entered)) && self.play_reveal_once()
    }

    /// Measure the primary path and start the reveal. No-op after the first call.
    pub fn play_reveal_once(&self) -> bool {
        let (started, title) = {
            let mut core = self.core.borrow_mut();
            let length = core.widget.primary_path_length();
            (core.reveal.trigger(length), core.widget.title().to_string())
        };
        if !started {
            return false;
        }

        log_debug!(LogComponent::Application("InteractiveChart"), "reveal started: {title}");
        let core = self.core.clone();
        self.reveal_loop.start(move |now| {
            let (phase, listener) = {
                let mut core = core.borrow_mut();
                (core.reveal.advance(now), core.listener())
            };
            notify(listener);
            if phase == RevealPhase::Settled {
                log_debug!(LogComponent::Application("InteractiveChart"), "reveal settled: {title}");
                LoopControl::Stop
            } else {
                LoopControl::Continue
            }
        });
        true
    }

    /// Hit-test `pointer` (chart-local pixels) and update hover state.
    pub fn on_pointer_move(&self, pointer: PixelPoint) -> Option<TooltipPayload> {
        let (changed, tooltip, listener) = {
            let mut core = self.core.borrow_mut();
            let hit = core.widget.hit_test(pointer);
            let changed = core.hover.on_pointer_move(hit);
            (changed, core.hover.tooltip().cloned(), core.listener())
        };
        if changed {
            notify(listener);
        }
        tooltip
    }

    pub fn on_pointer_leave(&self) {
        let (changed, listener) = {
            let mut core = self.core.borrow_mut();
            (core.hover.on_pointer_leave(), core.listener())
        };
        if changed {
            notify(listener);
        }
    }

    /// Current frame of the chart.
    pub fn scene(&self) -> Scene {
        let core = self.core.borrow();
        core.widget.render_static(&RenderState::new(core.hover.hovered_index(), &core.reveal))
    }

    pub fn tooltip(&self) -> Option<TooltipPayload> {
        self.core.borrow().hover.tooltip().cloned()
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.core.borrow().hover.hovered_index()
    }

    pub fn reveal_phase(&self) -> RevealPhase {
        self.core.borrow().reveal.phase()
    }

    pub fn reveal_start_count(&self) -> u32 {
        self.core.borrow().reveal.start_count()
    }

    pub fn is_animating(&self) -> bool {
        self.reveal_loop.is_active()
    }

    pub fn title(&self) -> String {
        self.core.borrow().widget.title().to_string()
    }

    pub fn pixel_box(&self) -> PixelBox {
        self.core.borrow().widget.pixel_box()
    }

    /// Stop the reveal loop and drop the change listener.
    pub fn teardown(&self) {
        self.reveal_loop.stop();
        self.core.borrow_mut().on_change = None;
    }
}
