use super::axes::{push_axes, push_label};
use super::{ChartWidget, RenderState};
use crate::domain::chart::dataset::ChartDataset;
use crate::domain::chart::hit_test::TooltipPayload;
use crate::domain::chart::reveal::RevealAnimation;
use crate::domain::chart::scene::{PathData, Scene, Shape, Stroke, TextAnchor};
use crate::domain::chart::value_objects::{ChartKind, Color, Margins, Padding, PixelBox, PixelPoint};
use crate::domain::chart::viewport::{AxisPadding, ChartViewport, compute_viewport};

pub const SCATTER_PADDING: Padding = Padding::Fraction(0.15);
const GUIDE_REVEAL_MS: f64 = 1000.0;
const DOT_STAGGER_MS: f64 = 40.0;
const DOT_FADE_MS: f64 = 500.0;
const DOT_RADIUS: f64 = 4.0;
const HOVER_RADIUS: f64 = 6.0;

/// Paired returns with a dashed diagonal guide drawn on reveal.
#[derive(Debug, Clone)]
pub struct ScatterChart {
    title: String,
    dataset: ChartDataset,
    viewport: ChartViewport,
    projected: Vec<PixelPoint>,
    hit_threshold: f64,
}

impl ScatterChart {
    pub fn new(title: &str, dataset: ChartDataset, pixel_box: PixelBox, margins: Margins, hit_threshold: f64) -> Self {
        let viewport = compute_viewport(&dataset, pixel_box, margins, AxisPadding::both(SCATTER_PADDING));
        let projected = dataset.points().iter().map(|p| viewport.project_xy(p.x, p.y)).collect();
        Self { title: title.to_string(), dataset, viewport, projected, hit_threshold }
    }

    pub fn viewport(&self) -> &ChartViewport {
        &self.viewport
    }

    /// Guide from the padded domain minimum corner to the maximum corner.
    pub fn guide_path(&self) -> PathData {
        let (x, y) = (self.viewport.x.domain, self.viewport.y.domain);
        PathData::polyline(&[self.viewport.project_xy(x.min, y.min), self.viewport.project_xy(x.max, y.max)])
    }
}

impl ChartWidget for ScatterChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Scatter
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn pixel_box(&self) -> PixelBox {
        self.viewport.pixel_box
    }

    fn hit_threshold(&self) -> f64 {
        self.hit_threshold
    }

    fn reveal(&self) -> RevealAnimation {
        RevealAnimation::path_draw(GUIDE_REVEAL_MS)
    }

    fn primary_path_length(&self) -> f64 {
        self.guide_path().length()
    }

    fn anchors(&self) -> Vec<PixelPoint> {
        self.projected.clone()
    }

    fn tooltip(&self, index: usize) -> Option<TooltipPayload> {
        let point = self.dataset.points().get(index)?;
        let anchor = *self.projected.get(index)?;
        Some(TooltipPayload::new(
            format!("#{}", index + 1),
            vec![point.x, point.y],
            format!("A {:+.1}% · B {:+.1}%", point.x, point.y),
            anchor,
        ))
    }

    fn render_static(&self, state: &RenderState<'_>) -> Scene {
        let mut scene = Scene::new(self.viewport.pixel_box);
        push_axes(&mut scene, &self.viewport);

        let bottom_center = PixelPoint::new(
            self.viewport.plot_left() + self.viewport.plot_width() / 2.0,
            self.viewport.pixel_box.height - 10.0,
        );
        push_label(&mut scene, bottom_center, "Asset A".to_string(), TextAnchor::Middle);
        push_label(
            &mut scene,
            PixelPoint::new(self.viewport.plot_left() - 8.0, self.viewport.plot_top()),
            "Asset B".to_string(),
            TextAnchor::End,
        );

        let guide = self.guide_path();
        let reveal = state.reveal.primary_dash(guide.length(), 1.0);
        scene.push(Shape::Path {
            data: guide,
            fill: None,
            stroke: Some(Stroke::solid(Color::ACCENT.with_alpha(0.4), 1.0).dashed(4.0, 4.0)),
            opacity: 1.0,
            reveal,
        });

        for (i, center) in self.projected.iter().enumerate() {
            let fade = state.reveal.item_opacity(i as f64 * DOT_STAGGER_MS, DOT_FADE_MS);
            let (radius, opacity) = if state.is_hovered(i) { (HOVER_RADIUS, 1.0) } else { (DOT_RADIUS, 0.8 * state.emphasis(i)) };
            scene.push(Shape::Circle { center: *center, radius, fill: Color::ACCENT, opacity: opacity * fade });
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::dataset::DataPoint;

    fn chart() -> ScatterChart {
        let points = vec![DataPoint::new(-1.0, -1.0), DataPoint::new(1.0, 1.0)];
        ScatterChart::new("c", ChartDataset::new("c", points), PixelBox::new(280.0, 180.0), Margins::new(44.0, 24.0, 24.0, 40.0), 24.0)
    }

    #[test]
    fn guide_spans_the_plot_diagonal() {
        let chart = chart();
        let expected = chart.viewport().plot_width().hypot(chart.viewport().plot_height());
        assert!((chart.primary_path_length() - expected).abs() < 1e-9);
    }

    #[test]
    fn padding_keeps_points_off_the_edges() {
        let chart = chart();
        let anchors = chart.anchors();
        assert!(anchors[0].x > 44.0 && anchors[1].x < 256.0);
    }

    #[test]
    fn tooltip_shows_signed_returns() {
        assert_eq!(chart().tooltip(1).unwrap().text, "A +1.0% · B +1.0%");
    }
}
