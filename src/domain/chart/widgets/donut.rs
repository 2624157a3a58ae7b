use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

use super::{ChartWidget, RenderState};
use crate::domain::chart::dataset::ChartDataset;
use crate::domain::chart::hit_test::{HoverHit, TooltipPayload, nearest_within};
use crate::domain::chart::polar::{PolarLayout, Wedge};
use crate::domain::chart::reveal::RevealAnimation;
use crate::domain::chart::scene::{Scene, Shape};
use crate::domain::chart::value_objects::{ChartKind, Color, PixelBox, PixelPoint};

const VIEW_SIZE: f64 = 120.0;
const STAGGER_MS: f64 = 80.0;
const FADE_MS: f64 = 400.0;
const SLICE_ALPHAS: [f32; 5] = [1.0, 1.0, 0.7, 0.5, 0.3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum DonutSize {
    #[display(fmt = "sm")]
    Sm,
    #[display(fmt = "md")]
    Md,
    #[display(fmt = "lg")]
    Lg,
}

impl DonutSize {
    /// `(outer, inner)` radius in the 120 x 120 box.
    pub fn radii(self) -> (f64, f64) {
        match self {
            DonutSize::Sm => (24.0, 16.0),
            DonutSize::Md => (34.0, 22.0),
            DonutSize::Lg => (42.0, 28.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DonutChart {
    title: String,
    dataset: ChartDataset,
    layout: PolarLayout,
    wedges: Vec<Wedge>,
}

impl DonutChart {
    pub fn new(title: &str, dataset: ChartDataset, size: DonutSize) -> Self {
        let (outer, inner) = size.radii();
        let center = VIEW_SIZE / 2.0;
        let layout = PolarLayout::new(PixelPoint::new(center, center), outer, inner);
        let wedges = layout.wedges(dataset.values());
        Self { title: title.to_string(), dataset, layout, wedges }
    }

    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    pub fn layout(&self) -> &PolarLayout {
        &self.layout
    }

    fn slice_color(index: usize) -> Color {
        Color::ACCENT.with_alpha(SLICE_ALPHAS[index % SLICE_ALPHAS.len()])
    }

    fn slice_opacity(index: usize) -> f64 {
        (0.9 - index as f64 * 0.1).max(0.1)
    }
}

impl ChartWidget for DonutChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Donut
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn pixel_box(&self) -> PixelBox {
        PixelBox::new(VIEW_SIZE, VIEW_SIZE)
    }

    fn hit_threshold(&self) -> f64 {
        self.layout.outer_radius - self.layout.inner_radius + 6.0
    }

    fn reveal(&self) -> RevealAnimation {
        let last = self.wedges.len().saturating_sub(1) as f64;
        RevealAnimation::staggered_fade(last * STAGGER_MS + FADE_MS)
    }

    fn anchors(&self) -> Vec<PixelPoint> {
        self.wedges.iter().map(|w| self.layout.centroid(w)).collect()
    }

    fn tooltip(&self, index: usize) -> Option<TooltipPayload> {
        let wedge = self.wedges.get(index)?;
        let share = wedge.sweep_deg / 360.0 * 100.0;
        let label = self.dataset.label_at(index);
        Some(TooltipPayload::new(
            label.clone(),
            vec![wedge.value],
            format!("{label} {share:.0}%"),
            self.layout.centroid(wedge),
        ))
    }

    /// Empty wedges have no anchor.
    fn hit_test(&self, pointer: PixelPoint) -> Option<HoverHit> {
        let candidates: Vec<(usize, PixelPoint)> = self
            .wedges
            .iter()
            .filter(|w| !w.is_empty())
            .map(|w| (w.index, self.layout.centroid(w)))
            .collect();
        let anchors: Vec<PixelPoint> = candidates.iter().map(|(_, p)| *p).collect();
        let (slot, _) = nearest_within(&anchors, pointer, self.hit_threshold())?;
        let (index, anchor) = *candidates.get(slot)?;
        Some(HoverHit { index, anchor, tooltip: self.tooltip(index)? })
    }

    fn render_static(&self, state: &RenderState<'_>) -> Scene {
        let mut scene = Scene::new(self.pixel_box());
        for wedge in self.wedges.iter().filter(|w| !w.is_empty()) {
            let i = wedge.index;
            let base = if state.is_hovered(i) { 1.0 } else { Self::slice_opacity(i) * state.emphasis(i) };
            scene.push(Shape::Path {
                data: self.layout.wedge_path(wedge),
                fill: Some(Self::slice_color(i)),
                stroke: None,
                opacity: base * state.reveal.item_opacity(i as f64 * STAGGER_MS, FADE_MS),
                reveal: None,
            });
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn size_parses_from_lowercase() {
        assert_eq!(DonutSize::from_str("lg").ok(), Some(DonutSize::Lg));
        assert_eq!(DonutSize::Md.radii(), (34.0, 22.0));
    }

    #[test]
    fn pointer_over_slice_reports_share() {
        let chart = DonutChart::new("s", ChartDataset::from_labeled("s", &[("Core", 60.0), ("Satellite", 40.0)]), DonutSize::Sm);
        let centroid = chart.anchors()[1];
        let hit = chart.hit_test(centroid).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.tooltip.text, "Satellite 40%");
    }

    #[test]
    fn empty_slices_are_skipped() {
        let chart = DonutChart::new("z", ChartDataset::from_values("z", &[0.0, 10.0]), DonutSize::Md);
        let reveal = chart.reveal().into_settled();
        let scene = chart.render_static(&RenderState::new(None, &reveal));
        assert_eq!(scene.len(), 1);
        assert!(scene.is_finite());
    }
}
