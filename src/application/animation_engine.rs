use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::domain::animation::{
    AnimationField, BackingResolution, DrawCommand, DrawSurface, FieldConfig, FieldVariant, NullSurface, ViewportSize,
};
use crate::domain::errors::SurfaceResult;
use crate::domain::logging::LogComponent;
use crate::domain::scheduling::FrameScheduler;
use crate::{log_debug, log_info, log_warn};

use super::frame_loop::{FrameLoop, LoopControl};

/// A host subscription (resize, scroll) released on teardown.
pub trait HostListener {
    fn detach(self: Box<Self>);
}

struct EngineCore {
    field: AnimationField,
    surface: Box<dyn DrawSurface>,
    frame: Vec<DrawCommand>,
    frames_drawn: u64,
}

impl EngineCore {
    fn render_frame(&mut self) {
        self.field.tick(&mut self.frame);
        self.surface.draw(&self.frame);
        self.frames_drawn += 1;
    }
}

/// Continuous procedural background bound to one drawing surface.
///
/// Without a surface the engine stays degraded: every operation is a no-op
/// and no frame is ever scheduled.
pub struct AnimationEngine<S: FrameScheduler + Clone + 'static> {
    core: Rc<RefCell<EngineCore>>,
    frame_loop: FrameLoop<S>,
    listeners: Vec<Box<dyn HostListener>>,
    degraded: bool,
    torn_down: bool,
}

impl<S: FrameScheduler + Clone + 'static> AnimationEngine<S> {
    /// Size the backing store and start ticking on `scheduler`.
    pub fn initialize(
        variant: FieldVariant,
        config: FieldConfig,
        surface: SurfaceResult<Box<dyn DrawSurface>>,
        viewport: ViewportSize,
        device_pixel_ratio: f64,
        scheduler: S,
    ) -> Self {
        let field = AnimationField::new(variant, config, viewport, device_pixel_ratio);
        let (mut surface, degraded): (Box<dyn DrawSurface>, bool) = match surface {
            Ok(surface) => (surface, false),
            Err(err) => {
                log_warn!(LogComponent::Application("AnimationEngine"), "{variant} background disabled: {err}");
                (Box::new(NullSurface), true)
            }
        };
        surface.resize_backing(field.backing());

        let backing = field.backing();
        let engine = Self {
            core: Rc::new(RefCell::new(EngineCore { field, surface, frame: Vec::new(), frames_drawn: 0 })),
            frame_loop: FrameLoop::new(scheduler),
            listeners: Vec::new(),
            degraded,
            torn_down: false,
        };

        if !degraded {
            let core = engine.core.clone();
            engine.frame_loop.start(move |_now| {
                core.borrow_mut().render_frame();
                LoopControl::Continue
            });
            log_info!(
                LogComponent::Application("AnimationEngine"),
                "{variant} background mounted, backing {}x{} @{}",
                backing.width,
                backing.height,
                backing.scale
            );
        }
        engine
    }

    /// Hand a host listener to the engine so teardown can detach it.
    pub fn attach_listener(&mut self, listener: Box<dyn HostListener>) {
        if self.torn_down {
            listener.detach();
        } else {
            self.listeners.push(listener);
        }
    }

    /// Draw one frame immediately.
    pub fn tick(&self) {
        if self.degraded || self.torn_down {
            return;
        }
        self.core.borrow_mut().render_frame();
    }

    pub fn resize(&self, viewport: ViewportSize, device_pixel_ratio: f64) -> BackingResolution {
        let mut core = self.core.borrow_mut();
        let backing = core.field.resize(viewport, device_pixel_ratio);
        core.surface.resize_backing(backing);
        backing
    }

    pub fn set_scroll_offset(&self, offset: f64) {
        self.core.borrow_mut().field.set_scroll_offset(offset);
    }

    /// Cancel the pending frame and detach every listener. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.frame_loop.stop();
        let detached = self.listeners.len();
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        log_debug!(
            LogComponent::Application("AnimationEngine"),
            "teardown after {} frames, {} listeners detached",
            self.core.borrow().frames_drawn,
            detached
        );
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_active()
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.core.borrow().frames_drawn
    }

    pub fn backing(&self) -> BackingResolution {
        self.core.borrow().field.backing()
    }

    pub fn field(&self) -> Ref<'_, AnimationField> {
        Ref::map(self.core.borrow(), |core| &core.field)
    }
}

impl<S: FrameScheduler + Clone + 'static> Drop for AnimationEngine<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
