//! Backend-neutral vector scene produced by chart widgets.
//!
//! Widgets never emit markup; they push [`Shape`]s into a [`Scene`], which the
//! SVG writer in `infrastructure::rendering` serialises.

use super::value_objects::{Color, PixelBox, PixelPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    /// Circular arc to `to`, SVG `A` semantics.
    ArcTo { radius: f64, large_arc: bool, clockwise: bool, to: PixelPoint },
    Close,
}

/// Sequence of path commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open polyline through `points`.
    pub fn polyline(points: &[PixelPoint]) -> Self {
        let mut data = Self::new();
        for (i, point) in points.iter().enumerate() {
            if i == 0 {
                data.move_to(*point);
            } else {
                data.line_to(*point);
            }
        }
        data
    }

    pub fn move_to(&mut self, point: PixelPoint) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    pub fn line_to(&mut self, point: PixelPoint) -> &mut Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn arc_to(&mut self, radius: f64, large_arc: bool, clockwise: bool, to: PixelPoint) -> &mut Self {
        self.commands.push(PathCommand::ArcTo { radius, large_arc, clockwise, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Length of the straight segments; arcs contribute their chord.
    pub fn length(&self) -> f64 {
        let mut total = 0.0;
        let mut start: Option<PixelPoint> = None;
        let mut cursor: Option<PixelPoint> = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    start = Some(p);
                    cursor = Some(p);
                }
                PathCommand::LineTo(p) | PathCommand::ArcTo { to: p, .. } => {
                    if let Some(c) = cursor {
                        total += c.distance_to(p);
                    }
                    cursor = Some(p);
                }
                PathCommand::Close => {
                    if let (Some(c), Some(s)) = (cursor, start) {
                        total += c.distance_to(s);
                    }
                    cursor = start;
                }
            }
        }
        total
    }

    /// Leading part of the path up to `length`. Line segments are cut at the
    /// boundary; an arc is kept only when it fits entirely.
    pub fn truncated(&self, length: f64) -> Self {
        let mut out = Self::new();
        let mut budget = length.max(0.0);
        let mut start: Option<PixelPoint> = None;
        let mut cursor: Option<PixelPoint> = None;
        for command in &self.commands {
            let (from, to) = match *command {
                PathCommand::MoveTo(p) => {
                    start = Some(p);
                    cursor = Some(p);
                    out.commands.push(*command);
                    continue;
                }
                PathCommand::LineTo(p) | PathCommand::ArcTo { to: p, .. } => (cursor, p),
                PathCommand::Close => match start {
                    Some(s) => (cursor, s),
                    None => continue,
                },
            };
            let Some(from) = from else {
                continue;
            };
            let segment = from.distance_to(to);
            if segment <= budget {
                budget -= segment;
                out.commands.push(*command);
                cursor = Some(to);
                continue;
            }
            if !matches!(command, PathCommand::ArcTo { .. }) && segment > 0.0 {
                let t = budget / segment;
                out.line_to(PixelPoint::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t));
            }
            break;
        }
        out
    }

    fn points(&self) -> impl Iterator<Item = PixelPoint> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::ArcTo { to: p, .. } => Some(p),
            PathCommand::Close => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// `(dash, gap)` pattern.
    pub dash: Option<(f64, f64)>,
    pub round: bool,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None, round: false }
    }

    pub fn rounded(color: Color, width: f64) -> Self {
        Self { color, width, dash: None, round: true }
    }

    pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }
}

/// Dash pattern that hides the trailing part of a path during a reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashReveal {
    pub length: f64,
    pub offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: PixelPoint,
        to: PixelPoint,
        stroke: Stroke,
    },
    Path {
        data: PathData,
        fill: Option<Color>,
        stroke: Option<Stroke>,
        opacity: f64,
        reveal: Option<DashReveal>,
    },
    Rect {
        origin: PixelPoint,
        width: f64,
        height: f64,
        corner_radius: f64,
        fill: Color,
        stroke: Option<Stroke>,
        opacity: f64,
    },
    Circle {
        center: PixelPoint,
        radius: f64,
        fill: Color,
        opacity: f64,
    },
    Text {
        at: PixelPoint,
        content: String,
        anchor: TextAnchor,
        size: f64,
        fill: Color,
    },
}

impl Shape {
    fn is_finite(&self) -> bool {
        match self {
            Shape::Line { from, to, stroke } => from.is_finite() && to.is_finite() && stroke.width.is_finite(),
            Shape::Path { data, opacity, reveal, .. } => {
                data.points().all(|p| p.is_finite())
                    && opacity.is_finite()
                    && reveal.is_none_or(|r| r.length.is_finite() && r.offset.is_finite())
            }
            Shape::Rect { origin, width, height, opacity, .. } => {
                origin.is_finite() && width.is_finite() && height.is_finite() && opacity.is_finite()
            }
            Shape::Circle { center, radius, opacity, .. } => {
                center.is_finite() && radius.is_finite() && opacity.is_finite()
            }
            Shape::Text { at, .. } => at.is_finite(),
        }
    }
}

/// One rendered frame of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub pixel_box: PixelBox,
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(pixel_box: PixelBox) -> Self {
        Self { pixel_box, shapes: Vec::new() }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// True when no coordinate in the scene is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.shapes.iter().all(Shape::is_finite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_length_sums_segments() {
        let data = PathData::polyline(&[
            PixelPoint::new(0.0, 0.0),
            PixelPoint::new(3.0, 4.0),
            PixelPoint::new(3.0, 10.0),
        ]);
        assert!((data.length() - 11.0).abs() < 1e-12);
        assert_eq!(data.commands().len(), 3);
    }

    #[test]
    fn close_adds_return_segment() {
        let mut data = PathData::new();
        data.move_to(PixelPoint::new(0.0, 0.0))
            .line_to(PixelPoint::new(4.0, 0.0))
            .line_to(PixelPoint::new(4.0, 3.0))
            .close();
        assert!((data.length() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn truncation_cuts_inside_a_segment() {
        let data = PathData::polyline(&[
            PixelPoint::new(0.0, 0.0),
            PixelPoint::new(10.0, 0.0),
            PixelPoint::new(10.0, 10.0),
        ]);
        let cut = data.truncated(15.0);
        assert_eq!(
            cut.commands(),
            &[
                PathCommand::MoveTo(PixelPoint::new(0.0, 0.0)),
                PathCommand::LineTo(PixelPoint::new(10.0, 0.0)),
                PathCommand::LineTo(PixelPoint::new(10.0, 5.0)),
            ]
        );
        assert_eq!(data.truncated(100.0), data);
    }

    #[test]
    fn scene_reports_nan_geometry() {
        let mut scene = Scene::new(PixelBox::new(10.0, 10.0));
        scene.push(Shape::Circle { center: PixelPoint::new(1.0, 1.0), radius: 2.0, fill: Color::ACCENT, opacity: 1.0 });
        assert!(scene.is_finite());
        scene.push(Shape::Circle { center: PixelPoint::new(f64::NAN, 1.0), radius: 2.0, fill: Color::ACCENT, opacity: 1.0 });
        assert!(!scene.is_finite());
    }
}
