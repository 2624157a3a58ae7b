use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::{Canvas, Div};
use leptos::*;

use crate::domain::animation::{FieldConfig, FieldVariant};
use crate::domain::chart::SampleChart;
use crate::domain::logging::LogComponent;
use crate::log_debug;

use super::mount::{BackgroundMount, ChartMount, PlacedTooltip};

/// Full-viewport procedural background drawn on a fixed canvas.
#[component]
pub fn AnimatedBackground(
    variant: FieldVariant,
    #[prop(optional)] config: Option<FieldConfig>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let mounted: Rc<RefCell<Option<BackgroundMount>>> = Rc::default();
    let config = config.unwrap_or_else(|| FieldConfig::for_variant(variant));

    {
        let mounted = mounted.clone();
        canvas_ref.on_load(move |canvas| {
            let canvas: web_sys::HtmlCanvasElement = (*canvas).clone();
            *mounted.borrow_mut() = Some(BackgroundMount::mount(canvas, variant, config));
        });
    }

    on_cleanup(move || {
        if let Some(mount) = mounted.borrow_mut().take() {
            log_debug!(LogComponent::Presentation("AnimatedBackground"), "{variant} unmounted after {} frames", mount.frames_drawn());
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class=format!("motion-background motion-background--{variant}")
            aria-hidden="true"
        />
    }
}

/// One gallery chart with its hover tooltip.
#[component]
pub fn ChartPanel(sample: SampleChart) -> impl IntoView {
    let host_ref = create_node_ref::<Div>();
    let (tooltip, set_tooltip) = create_signal::<Option<PlacedTooltip>>(None);
    let mounted: Rc<RefCell<Option<ChartMount>>> = Rc::default();

    {
        let mounted = mounted.clone();
        host_ref.on_load(move |host| {
            let host: web_sys::HtmlElement = (**host).clone();
            *mounted.borrow_mut() = Some(ChartMount::mount(host, sample, move |placed| set_tooltip.set(placed)));
        });
    }

    on_cleanup(move || {
        mounted.borrow_mut().take();
    });

    view! {
        <figure class="chart-panel" data-chart=sample.as_ref().to_string()>
            <figcaption class="chart-panel__title">{sample.to_string()}</figcaption>
            <div class="chart-panel__frame">
                <div class="chart-panel__svg" node_ref=host_ref></div>
                {move || {
                    tooltip
                        .get()
                        .map(|placed| {
                            view! {
                                <div
                                    class="chart-tooltip"
                                    style:left=format!("{:.0}px", placed.left)
                                    style:top=format!("{:.0}px", placed.top)
                                >
                                    <span class="chart-tooltip__label">{placed.payload.label.clone()}</span>
                                    <span class="chart-tooltip__value">{placed.payload.text.clone()}</span>
                                </div>
                            }
                        })
                }}
            </div>
        </figure>
    }
}
