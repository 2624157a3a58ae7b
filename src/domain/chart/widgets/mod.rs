//! Chart widgets. Each one owns its dataset and geometry and renders into a
//! [`Scene`]; hover and reveal progress come in through [`RenderState`].

mod axes;
pub mod bar;
pub mod donut;
pub mod heatmap;
pub mod line;
pub mod scatter;

pub use bar::BarChart;
pub use donut::{DonutChart, DonutSize};
pub use heatmap::{HeatmapChart, HeatmapGrid};
pub use line::{LineChart, LineChartConfig, LineSeries, LineStyle, YLabels};
pub use scatter::ScatterChart;

use super::hit_test::{HoverHit, TooltipPayload, nearest_within};
use super::reveal::RevealAnimation;
use super::scene::Scene;
use super::value_objects::{ChartKind, PixelBox, PixelPoint};

/// Per-frame inputs of [`ChartWidget::render_static`].
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    pub hovered: Option<usize>,
    pub reveal: &'a RevealAnimation,
}

impl<'a> RenderState<'a> {
    pub fn new(hovered: Option<usize>, reveal: &'a RevealAnimation) -> Self {
        Self { hovered, reveal }
    }

    /// Dimming applied to item `index` while another item is hovered.
    pub(crate) fn emphasis(&self, index: usize) -> f64 {
        match self.hovered {
            Some(hovered) if hovered != index => 0.4,
            _ => 1.0,
        }
    }

    pub(crate) fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }
}

pub trait ChartWidget {
    fn kind(&self) -> ChartKind;

    fn title(&self) -> &str;

    /// Fixed drawing box; pointer coordinates arrive in this space.
    fn pixel_box(&self) -> PixelBox;

    fn hit_threshold(&self) -> f64;

    /// Fresh, hidden reveal configured for this widget.
    fn reveal(&self) -> RevealAnimation;

    /// Length of the path drawn by a path reveal. Zero for fade reveals.
    fn primary_path_length(&self) -> f64 {
        0.0
    }

    /// Projected hover anchors in dataset order.
    fn anchors(&self) -> Vec<PixelPoint>;

    fn tooltip(&self, index: usize) -> Option<TooltipPayload>;

    /// Closest anchor within [`hit_threshold`](Self::hit_threshold), if any.
    fn hit_test(&self, pointer: PixelPoint) -> Option<HoverHit> {
        let anchors = self.anchors();
        let (index, _) = nearest_within(&anchors, pointer, self.hit_threshold())?;
        let anchor = anchors.get(index).copied()?;
        let tooltip = self.tooltip(index)?;
        Some(HoverHit { index, anchor, tooltip })
    }

    /// Axes, grid, labels and data geometry.
    fn render_static(&self, state: &RenderState<'_>) -> Scene;
}
