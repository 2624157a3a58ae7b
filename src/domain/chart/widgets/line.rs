use super::axes::{push_axes, push_grid, push_label};
use super::{ChartWidget, RenderState};
use crate::domain::chart::dataset::{ChartDataset, extent};
use crate::domain::chart::hit_test::TooltipPayload;
use crate::domain::chart::reveal::RevealAnimation;
use crate::domain::chart::scene::{PathData, Scene, Shape, Stroke, TextAnchor};
use crate::domain::chart::value_objects::{ChartKind, Color, Margins, PixelBox, PixelPoint};
use crate::domain::chart::viewport::{AxisDomain, AxisPadding, ChartViewport};

const MARKER_RADIUS: f64 = 3.0;
const HOVER_RADIUS: f64 = 5.0;
const MARKER_OPACITY: f64 = 0.8;
const DIMMED_OPACITY: f64 = 0.3;
const AREA_ALPHA: f32 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    WithAxes,
    WithGrid,
    Minimal,
    /// Filled region under the primary path.
    Area,
}

impl LineStyle {
    fn shows_axes(self) -> bool {
        matches!(self, LineStyle::WithAxes | LineStyle::Area)
    }

    fn shows_grid(self) -> bool {
        matches!(self, LineStyle::WithAxes | LineStyle::WithGrid)
    }
}

/// Which y values get a tick label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YLabels {
    None,
    MinMax,
    MinMidMax,
}

/// One stroked series. The first series of a chart is the primary one.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub dataset: ChartDataset,
    pub color: Color,
    pub width: f64,
    pub opacity: f64,
    /// Reveal speed relative to the primary path.
    pub reveal_speed: f64,
}

impl LineSeries {
    pub fn primary(dataset: ChartDataset) -> Self {
        Self { dataset, color: Color::ACCENT, width: 2.0, opacity: 1.0, reveal_speed: 1.0 }
    }

    pub fn secondary(dataset: ChartDataset, color: Color, reveal_speed: f64) -> Self {
        Self { dataset, color, width: 1.5, opacity: 0.7, reveal_speed }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartConfig {
    pub title: String,
    pub pixel_box: PixelBox,
    pub margins: Margins,
    pub padding: AxisPadding,
    /// Fixed `(x, y)` domains instead of data-derived ones.
    pub domains: Option<(AxisDomain, AxisDomain)>,
    pub style: LineStyle,
    /// Horizontal and vertical grid line counts.
    pub grid: (usize, usize),
    pub y_labels: YLabels,
    pub x_labels: bool,
    pub markers: bool,
    pub hit_threshold: f64,
    pub reveal_ms: f64,
    pub unit: &'static str,
    pub decimals: usize,
    /// Dashed vertical reference line at this x value.
    pub reference_x: Option<f64>,
}

impl LineChartConfig {
    pub fn new(title: &str, pixel_box: PixelBox, margins: Margins) -> Self {
        Self {
            title: title.to_string(),
            pixel_box,
            margins,
            padding: AxisPadding::NONE,
            domains: None,
            style: LineStyle::WithAxes,
            grid: (0, 0),
            y_labels: YLabels::None,
            x_labels: false,
            markers: false,
            hit_threshold: 24.0,
            reveal_ms: 800.0,
            unit: "",
            decimals: 2,
            reference_x: None,
        }
    }
}

/// Line (or area) chart over one or more series sharing a viewport.
#[derive(Debug, Clone)]
pub struct LineChart {
    config: LineChartConfig,
    series: Vec<LineSeries>,
    viewport: ChartViewport,
    projected: Vec<Vec<PixelPoint>>,
}

impl LineChart {
    pub fn new(config: LineChartConfig, series: Vec<LineSeries>) -> Self {
        let viewport = match config.domains {
            Some((x, y)) => ChartViewport::from_domains(x, y, config.pixel_box, config.margins),
            None => {
                let points = || series.iter().flat_map(|s| s.dataset.points());
                ChartViewport::from_extents(
                    extent(points().map(|p| p.x)),
                    extent(points().map(|p| p.y)),
                    config.pixel_box,
                    config.margins,
                    config.padding,
                )
            }
        };

        let projected = series
            .iter()
            .map(|s| s.dataset.points().iter().map(|p| viewport.project_xy(p.x, p.y)).collect())
            .collect();

        Self { config, series, viewport, projected }
    }

    pub fn viewport(&self) -> &ChartViewport {
        &self.viewport
    }

    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    fn primary_points(&self) -> &[PixelPoint] {
        self.projected.first().map(Vec::as_slice).unwrap_or(&[])
    }

    fn format_value(&self, value: f64) -> String {
        format!("{:.*}{}", self.config.decimals, value, self.config.unit)
    }

    fn push_labels(&self, scene: &mut Scene) {
        let ticks = match self.config.y_labels {
            YLabels::None => Vec::new(),
            YLabels::MinMax => self.viewport.y.ticks(1),
            YLabels::MinMidMax => self.viewport.y.ticks(2),
        };
        for value in ticks {
            let at = PixelPoint::new(self.viewport.plot_left() - 8.0, self.viewport.y.scale(value));
            push_label(scene, at, format!("{value:.1}{}", self.config.unit), TextAnchor::End);
        }

        if self.config.x_labels {
            if let Some(primary) = self.series.first() {
                let y = self.config.pixel_box.height - 8.0;
                for (i, point) in self.primary_points().iter().enumerate() {
                    let label = primary.dataset.label_at(i);
                    push_label(scene, PixelPoint::new(point.x, y), label, TextAnchor::Middle);
                }
            }
        }
    }

    fn push_reference(&self, scene: &mut Scene) {
        let Some(x_value) = self.config.reference_x else {
            return;
        };
        let x = self.viewport.x.scale(x_value);
        let stroke = Stroke::solid(Color::WHITE.with_alpha(0.2), 1.0).dashed(3.0, 3.0);
        scene.push(Shape::Line {
            from: PixelPoint::new(x, self.viewport.plot_top()),
            to: PixelPoint::new(x, self.viewport.plot_bottom()),
            stroke,
        });
        push_label(scene, PixelPoint::new(x, self.viewport.plot_top() - 6.0), "K".to_string(), TextAnchor::Middle);
    }

    fn push_area(&self, scene: &mut Scene, state: &RenderState<'_>) {
        let points = self.primary_points();
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return;
        };
        let bottom = self.viewport.plot_bottom();
        let mut data = PathData::polyline(points);
        data.line_to(PixelPoint::new(last.x, bottom)).line_to(PixelPoint::new(first.x, bottom)).close();
        scene.push(Shape::Path {
            data,
            fill: Some(Color::ACCENT.with_alpha(AREA_ALPHA)),
            stroke: None,
            opacity: state.reveal.elapsed_fraction(),
            reveal: None,
        });
    }
}

impl ChartWidget for LineChart {
    fn kind(&self) -> ChartKind {
        if self.config.style == LineStyle::Area { ChartKind::Area } else { ChartKind::Line }
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn pixel_box(&self) -> PixelBox {
        self.config.pixel_box
    }

    fn hit_threshold(&self) -> f64 {
        self.config.hit_threshold
    }

    fn reveal(&self) -> RevealAnimation {
        RevealAnimation::path_draw(self.config.reveal_ms)
    }

    fn primary_path_length(&self) -> f64 {
        PathData::polyline(self.primary_points()).length()
    }

    fn anchors(&self) -> Vec<PixelPoint> {
        self.primary_points().to_vec()
    }

    fn tooltip(&self, index: usize) -> Option<TooltipPayload> {
        let anchor = *self.primary_points().get(index)?;
        let primary = self.series.first()?;
        let values: Vec<f64> = self.series.iter().filter_map(|s| s.dataset.points().get(index)).map(|p| p.y).collect();

        let text = if self.series.len() == 1 {
            values.iter().map(|v| self.format_value(*v)).collect::<Vec<_>>().join(" · ")
        } else {
            self.series
                .iter()
                .zip(&values)
                .map(|(s, v)| format!("{} {}", s.dataset.name, self.format_value(*v)))
                .collect::<Vec<_>>()
                .join(" · ")
        };

        Some(TooltipPayload::new(primary.dataset.label_at(index), values, text, anchor))
    }

    fn render_static(&self, state: &RenderState<'_>) -> Scene {
        let mut scene = Scene::new(self.config.pixel_box);
        let style = self.config.style;

        if style.shows_grid() {
            push_grid(&mut scene, &self.viewport, self.config.grid.0, self.config.grid.1);
        }
        self.push_labels(&mut scene);
        if style.shows_axes() {
            push_axes(&mut scene, &self.viewport);
        }
        self.push_reference(&mut scene);
        if style == LineStyle::Area {
            self.push_area(&mut scene, state);
        }

        for (i, (series, points)) in self.series.iter().zip(&self.projected).enumerate() {
            let data = PathData::polyline(points);
            let reveal = if i == 0 {
                state.reveal.primary_dash(data.length(), series.reveal_speed)
            } else {
                state.reveal.dash_reveal(data.length(), series.reveal_speed)
            };
            scene.push(Shape::Path {
                data,
                fill: None,
                stroke: Some(Stroke::rounded(series.color, series.width)),
                opacity: series.opacity,
                reveal,
            });
        }

        for (i, point) in self.primary_points().iter().enumerate() {
            let (radius, opacity) = match state.hovered {
                Some(hovered) if hovered == i => (HOVER_RADIUS, 1.0),
                Some(_) => (MARKER_RADIUS, DIMMED_OPACITY),
                None => (MARKER_RADIUS, MARKER_OPACITY),
            };
            if self.config.markers || state.is_hovered(i) {
                scene.push(Shape::Circle { center: *point, radius, fill: Color::ACCENT, opacity });
            }
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::reveal::RevealPhase;
    use crate::domain::chart::value_objects::Padding;

    fn chart(values: &[f64]) -> LineChart {
        let mut config = LineChartConfig::new("t", PixelBox::new(240.0, 120.0), Margins::new(32.0, 16.0, 16.0, 28.0));
        config.padding = AxisPadding::y_only(Padding::Additive(2.0));
        config.markers = true;
        LineChart::new(config, vec![LineSeries::primary(ChartDataset::from_values("v", values))])
    }

    #[test]
    fn first_and_last_points_touch_plot_edges() {
        let chart = chart(&[18.0, 22.0, 25.0]);
        let anchors = chart.anchors();
        assert_eq!(anchors[0].x, 32.0);
        assert_eq!(anchors[2].x, 224.0);
    }

    #[test]
    fn hidden_reveal_hides_whole_path() {
        let chart = chart(&[18.0, 22.0, 25.0]);
        let reveal = chart.reveal();
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
        let scene = chart.render_static(&RenderState::new(None, &reveal));
        let hidden = scene.shapes().iter().any(|s| {
            matches!(s, Shape::Path { reveal: Some(r), .. } if (r.offset - r.length).abs() < 1e-9)
        });
        assert!(hidden);
    }

    #[test]
    fn tooltip_formats_unit_and_decimals() {
        let mut config = LineChartConfig::new("y", PixelBox::new(360.0, 200.0), Margins::new(48.0, 24.0, 24.0, 36.0));
        config.unit = "%";
        let chart = LineChart::new(
            config,
            vec![LineSeries::primary(ChartDataset::from_labeled("yield", &[("1M", 4.2), ("3M", 4.35)]))],
        );
        let tooltip = chart.tooltip(1).unwrap();
        assert_eq!(tooltip.label, "3M");
        assert_eq!(tooltip.text, "4.35%");
        assert!(chart.tooltip(5).is_none());
    }

    #[test]
    fn primary_dash_uses_length_latched_at_trigger() {
        let chart = chart(&[18.0, 22.0, 25.0]);
        let mut reveal = chart.reveal();
        reveal.trigger(400.0);
        reveal.advance(0.0);
        reveal.advance(200.0);
        let scene = chart.render_static(&RenderState::new(None, &reveal));
        let dash = scene
            .shapes()
            .iter()
            .find_map(|s| match s {
                Shape::Path { reveal: Some(r), stroke: Some(_), .. } => Some(*r),
                _ => None,
            })
            .unwrap();
        assert_eq!(dash.length, 400.0);
        assert!((dash.offset - 300.0).abs() < 1e-9);
    }

    #[test]
    fn hover_dims_other_markers() {
        let chart = chart(&[18.0, 22.0, 25.0]);
        let reveal = chart.reveal().into_settled();
        let markers = |hovered: Option<usize>| -> Vec<(f64, f64)> {
            chart
                .render_static(&RenderState::new(hovered, &reveal))
                .shapes()
                .iter()
                .filter_map(|s| match s {
                    Shape::Circle { radius, opacity, .. } => Some((*radius, *opacity)),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(markers(None), vec![(3.0, 0.8); 3]);
        assert_eq!(markers(Some(1)), vec![(3.0, 0.3), (5.0, 1.0), (3.0, 0.3)]);
    }
}
