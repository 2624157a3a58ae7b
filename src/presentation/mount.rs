//! Wiring of domain controllers to live DOM nodes, shared by the Leptos
//! components and the `wasm_bindgen` API.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, HtmlElement, MouseEvent};

use crate::application::{AnimationEngine, InteractiveChart};
use crate::domain::animation::{DrawSurface, FieldConfig, FieldVariant};
use crate::domain::chart::{PixelPoint, SampleChart, TooltipPayload};
use crate::domain::logging::LogComponent;
use crate::domain::visibility::VisibilityConfig;
use crate::infrastructure::browser::{
    RafScheduler, VisibilityObserver, device_pixel_ratio, on_window_resize, on_window_scroll, scroll_offset,
    viewport_size,
};
use crate::infrastructure::rendering::{CanvasSurface, render_svg};
use crate::log_warn;

type Engine = AnimationEngine<RafScheduler>;

/// A running background bound to a canvas. Tears down on drop.
pub struct BackgroundMount {
    engine: Rc<RefCell<Engine>>,
}

impl BackgroundMount {
    pub fn mount(canvas: HtmlCanvasElement, variant: FieldVariant, config: FieldConfig) -> Self {
        let surface = CanvasSurface::acquire(canvas).map(|surface| Box::new(surface) as Box<dyn DrawSurface>);
        let engine = AnimationEngine::initialize(
            variant,
            config,
            surface,
            viewport_size(),
            device_pixel_ratio(),
            RafScheduler::new(),
        );
        let engine = Rc::new(RefCell::new(engine));
        if engine.borrow().is_degraded() {
            return Self { engine };
        }

        let weak = Rc::downgrade(&engine);
        let resize = on_window_resize(move |_| {
            if let Some(engine) = weak.upgrade() {
                engine.borrow().resize(viewport_size(), device_pixel_ratio());
            }
        });
        engine.borrow_mut().attach_listener(Box::new(resize));

        if variant.uses_scroll() {
            engine.borrow().set_scroll_offset(scroll_offset());
            let weak = Rc::downgrade(&engine);
            let scroll = on_window_scroll(move |_| {
                if let Some(engine) = weak.upgrade() {
                    engine.borrow().set_scroll_offset(scroll_offset());
                }
            });
            engine.borrow_mut().attach_listener(Box::new(scroll));
        }
        Self { engine }
    }

    pub fn is_running(&self) -> bool {
        self.engine.borrow().is_running()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.engine.borrow().frames_drawn()
    }

    pub fn teardown(&self) {
        self.engine.borrow_mut().teardown();
    }
}

impl Drop for BackgroundMount {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Tooltip positioned in CSS pixels relative to the chart host.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTooltip {
    pub payload: TooltipPayload,
    pub left: f64,
    pub top: f64,
}

type TooltipSink = Rc<dyn Fn(Option<PlacedTooltip>)>;

/// A chart rendered as SVG into `host`, with hover and a one-shot reveal.
pub struct ChartMount {
    chart: Rc<InteractiveChart<RafScheduler>>,
    _observer: Option<VisibilityObserver>,
    _pointer: [EventListener; 2],
}

fn local_point(host: &HtmlElement, chart: &InteractiveChart<RafScheduler>, event: &MouseEvent) -> (PixelPoint, f64, f64) {
    let rect = host.get_bounding_client_rect();
    let pixel_box = chart.pixel_box();
    let scale_x = if rect.width() > 0.0 { pixel_box.width / rect.width() } else { 1.0 };
    let scale_y = if rect.height() > 0.0 { pixel_box.height / rect.height() } else { 1.0 };
    let point = PixelPoint::new(
        (event.client_x() as f64 - rect.left()) * scale_x,
        (event.client_y() as f64 - rect.top()) * scale_y,
    );
    (point, scale_x, scale_y)
}

impl ChartMount {
    pub fn mount(host: HtmlElement, sample: SampleChart, on_tooltip: impl Fn(Option<PlacedTooltip>) + 'static) -> Self {
        let visibility = VisibilityConfig::default();
        let chart = Rc::new(InteractiveChart::new(sample.build(), visibility, RafScheduler::new()));
        let on_tooltip: TooltipSink = Rc::new(on_tooltip);

        host.set_inner_html(&render_svg(&chart.scene()));
        {
            let weak = Rc::downgrade(&chart);
            let host = host.clone();
            chart.subscribe(move || {
                if let Some(chart) = weak.upgrade() {
                    host.set_inner_html(&render_svg(&chart.scene()));
                }
            });
        }

        let observer = {
            let weak = Rc::downgrade(&chart);
            VisibilityObserver::observe(&host, visibility.visible_fraction, move |ratio| {
                if let Some(chart) = weak.upgrade() {
                    chart.on_visibility_ratio(ratio);
                }
            })
        };
        let observer = match observer {
            Ok(observer) => Some(observer),
            Err(err) => {
                log_warn!(LogComponent::Presentation("ChartMount"), "{sample}: no visibility source, revealing now: {err}");
                chart.play_reveal_once();
                None
            }
        };

        let moved = {
            let weak = Rc::downgrade(&chart);
            let host_el = host.clone();
            let on_tooltip = on_tooltip.clone();
            EventListener::new(&host, "mousemove", move |event: &Event| {
                let (Some(chart), Some(event)) = (weak.upgrade(), event.dyn_ref::<MouseEvent>()) else {
                    return;
                };
                let (point, scale_x, scale_y) = local_point(&host_el, &chart, event);
                let placed = chart.on_pointer_move(point).map(|payload| PlacedTooltip {
                    left: payload.anchor.x / scale_x,
                    top: payload.anchor.y / scale_y,
                    payload,
                });
                on_tooltip(placed);
            })
        };
        let left = {
            let weak = Rc::downgrade(&chart);
            EventListener::new(&host, "mouseleave", move |_event: &Event| {
                if let Some(chart) = weak.upgrade() {
                    chart.on_pointer_leave();
                }
                on_tooltip(None);
            })
        };

        Self { chart, _observer: observer, _pointer: [moved, left] }
    }

    pub fn chart(&self) -> &InteractiveChart<RafScheduler> {
        &self.chart
    }
}

impl Drop for ChartMount {
    fn drop(&mut self) {
        self.chart.teardown();
    }
}
