use std::str::FromStr;

use js_sys::Array;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::domain::animation::{FieldConfig, FieldVariant};
use crate::domain::chart::{RenderState, SampleChart};
use crate::domain::logging::LogComponent;
use crate::infrastructure::rendering::render_svg;
use crate::log_warn;

use super::mount::{BackgroundMount, ChartMount};

fn parse_sample(id: &str) -> Result<SampleChart, JsValue> {
    SampleChart::from_str(id).map_err(|_| JsValue::from_str(&format!("unknown chart: {id}")))
}

/// Background engine handle for hosts that do not use Leptos.
#[wasm_bindgen]
pub struct BackgroundHandle {
    mount: BackgroundMount,
}

#[wasm_bindgen]
impl BackgroundHandle {
    /// `variant` is `"aurora"` or `"flow"`. `config_json` overrides
    /// individual [`FieldConfig`] fields; an invalid override falls back to
    /// the variant defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, variant: &str, config_json: Option<String>) -> Result<BackgroundHandle, JsValue> {
        let variant = FieldVariant::from_str(variant)
            .map_err(|_| JsValue::from_str(&format!("unknown background variant: {variant}")))?;
        let config = match config_json {
            Some(json) => FieldConfig::from_json(variant, &json).unwrap_or_else(|err| {
                log_warn!(LogComponent::Presentation("BackgroundHandle"), "{err}, using defaults");
                FieldConfig::for_variant(variant)
            }),
            None => FieldConfig::for_variant(variant),
        };
        Ok(Self { mount: BackgroundMount::mount(canvas, variant, config) })
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mount.is_running()
    }

    #[wasm_bindgen(js_name = framesDrawn)]
    pub fn frames_drawn(&self) -> f64 {
        self.mount.frames_drawn() as f64
    }

    /// Stop the loop and release window listeners. Safe to call twice.
    pub fn teardown(&self) {
        self.mount.teardown();
    }
}

/// Interactive gallery chart rendered into a host element.
#[wasm_bindgen]
pub struct ChartHandle {
    mount: ChartMount,
}

#[wasm_bindgen]
impl ChartHandle {
    /// Tooltip updates are passed to `on_tooltip` as JSON strings, or `null`
    /// when the pointer leaves.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement, id: &str, on_tooltip: Option<js_sys::Function>) -> Result<ChartHandle, JsValue> {
        let sample = parse_sample(id)?;
        let mount = ChartMount::mount(host, sample, move |placed| {
            let Some(callback) = &on_tooltip else {
                return;
            };
            let arg = match placed.map(|placed| placed.payload.to_json()) {
                Some(Ok(json)) => JsValue::from_str(&json),
                Some(Err(_)) | None => JsValue::NULL,
            };
            let _ = callback.call1(&JsValue::NULL, &arg);
        });
        Ok(Self { mount })
    }

    /// Start the reveal without waiting for visibility.
    pub fn reveal(&self) -> bool {
        self.mount.chart().play_reveal_once()
    }

    pub fn title(&self) -> String {
        self.mount.chart().title()
    }
}

/// Settled SVG markup of a gallery chart, for static embedding.
#[wasm_bindgen(js_name = renderChartSvg)]
pub fn render_chart_svg(id: &str) -> Result<String, JsValue> {
    let widget = parse_sample(id)?.build();
    let reveal = widget.reveal().into_settled();
    Ok(render_svg(&widget.render_static(&RenderState::new(None, &reveal))))
}

/// Ids accepted by [`render_chart_svg`] and [`ChartHandle`].
#[wasm_bindgen(js_name = chartIds)]
pub fn chart_ids() -> Array {
    SampleChart::iter().map(|sample| JsValue::from_str(sample.as_ref())).collect()
}
