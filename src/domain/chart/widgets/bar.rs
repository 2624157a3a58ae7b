use super::axes::push_axes;
use super::{ChartWidget, RenderState};
use crate::domain::chart::dataset::ChartDataset;
use crate::domain::chart::hit_test::TooltipPayload;
use crate::domain::chart::reveal::RevealAnimation;
use crate::domain::chart::scene::{Scene, Shape};
use crate::domain::chart::value_objects::{ChartKind, Color, Margins, PixelBox, PixelPoint};
use crate::domain::chart::viewport::{AxisDomain, ChartViewport};

const BAR_GAP: f64 = 4.0;
const STAGGER_MS: f64 = 60.0;
const FADE_MS: f64 = 300.0;

/// Pixel rectangle of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    pub fn top_center(&self) -> PixelPoint {
        PixelPoint::new(self.x + self.width / 2.0, self.y)
    }
}

/// Bars scaled by `value / max(values)`.
#[derive(Debug, Clone)]
pub struct BarChart {
    title: String,
    dataset: ChartDataset,
    viewport: ChartViewport,
    bars: Vec<BarGeometry>,
}

impl BarChart {
    pub fn new(title: &str, dataset: ChartDataset, pixel_box: PixelBox, margins: Margins) -> Self {
        let viewport = ChartViewport::from_domains(
            AxisDomain::new(0.0, dataset.len().max(1) as f64),
            AxisDomain::new(0.0, 1.0),
            pixel_box,
            margins,
        );
        let bars = layout_bars(&dataset, &viewport);
        Self { title: title.to_string(), dataset, viewport, bars }
    }

    pub fn bars(&self) -> &[BarGeometry] {
        &self.bars
    }
}

/// Non-positive or missing maximum gives every bar height zero.
fn layout_bars(dataset: &ChartDataset, viewport: &ChartViewport) -> Vec<BarGeometry> {
    let count = dataset.len();
    if count == 0 {
        return Vec::new();
    }

    let max = dataset.values().filter(|v| v.is_finite()).fold(f64::NEG_INFINITY, f64::max);
    let plot_height = viewport.plot_height();
    let bottom = viewport.plot_bottom();
    let width = ((viewport.plot_width() - (count - 1) as f64 * BAR_GAP) / count as f64).max(0.0);

    dataset
        .values()
        .enumerate()
        .map(|(i, value)| {
            let ratio = if max > 0.0 && value.is_finite() { (value / max).clamp(0.0, 1.0) } else { 0.0 };
            let height = ratio * plot_height;
            BarGeometry { x: viewport.plot_left() + i as f64 * (width + BAR_GAP), y: bottom - height, width, height }
        })
        .collect()
}

impl ChartWidget for BarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn pixel_box(&self) -> PixelBox {
        self.viewport.pixel_box
    }

    fn hit_threshold(&self) -> f64 {
        16.0
    }

    fn reveal(&self) -> RevealAnimation {
        let last = self.bars.len().saturating_sub(1) as f64;
        RevealAnimation::staggered_fade(last * STAGGER_MS + FADE_MS)
    }

    fn anchors(&self) -> Vec<PixelPoint> {
        self.bars.iter().map(BarGeometry::top_center).collect()
    }

    fn tooltip(&self, index: usize) -> Option<TooltipPayload> {
        let bar = self.bars.get(index)?;
        let value = self.dataset.points().get(index)?.y;
        let label = self.dataset.label_at(index);
        let text = format!("{label} {value:.0}");
        Some(TooltipPayload::new(label, vec![value], text, bar.top_center()))
    }

    fn render_static(&self, state: &RenderState<'_>) -> Scene {
        let mut scene = Scene::new(self.viewport.pixel_box);
        push_axes(&mut scene, &self.viewport);

        for (i, bar) in self.bars.iter().enumerate() {
            let alpha = if state.is_hovered(i) { 0.7 } else { 0.5 };
            scene.push(Shape::Rect {
                origin: PixelPoint::new(bar.x, bar.y),
                width: bar.width,
                height: bar.height,
                corner_radius: 2.0,
                fill: Color::ACCENT.with_alpha(alpha),
                stroke: None,
                opacity: state.reveal.item_opacity(i as f64 * STAGGER_MS, FADE_MS) * state.emphasis(i),
            });
        }

        scene
    }
}
