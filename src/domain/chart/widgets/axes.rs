use crate::domain::chart::scene::{Scene, Shape, Stroke, TextAnchor};
use crate::domain::chart::value_objects::{Color, PixelPoint};
use crate::domain::chart::viewport::ChartViewport;

pub(super) const GRID_ALPHA: f32 = 0.06;
pub(super) const AXIS_ALPHA: f32 = 0.15;
pub(super) const LABEL_ALPHA: f32 = 0.4;
pub(super) const LABEL_SIZE: f64 = 10.0;

/// Left and bottom axis lines.
pub(super) fn push_axes(scene: &mut Scene, viewport: &ChartViewport) {
    let stroke = Stroke::solid(Color::WHITE.with_alpha(AXIS_ALPHA), 1.0);
    let (left, right) = (viewport.plot_left(), viewport.plot_right());
    let (top, bottom) = (viewport.plot_top(), viewport.plot_bottom());
    scene.push(Shape::Line { from: PixelPoint::new(left, top), to: PixelPoint::new(left, bottom), stroke });
    scene.push(Shape::Line { from: PixelPoint::new(left, bottom), to: PixelPoint::new(right, bottom), stroke });
}

/// `rows` horizontal and `columns` vertical hairlines, skipping the top and left edges.
pub(super) fn push_grid(scene: &mut Scene, viewport: &ChartViewport, rows: usize, columns: usize) {
    let stroke = Stroke::solid(Color::WHITE.with_alpha(GRID_ALPHA), 0.5);
    let (left, right) = (viewport.plot_left(), viewport.plot_right());
    let (top, bottom) = (viewport.plot_top(), viewport.plot_bottom());

    for i in 1..=rows {
        let y = top + viewport.plot_height() * i as f64 / rows as f64;
        scene.push(Shape::Line { from: PixelPoint::new(left, y), to: PixelPoint::new(right, y), stroke });
    }
    for i in 1..=columns {
        let x = left + viewport.plot_width() * i as f64 / columns as f64;
        scene.push(Shape::Line { from: PixelPoint::new(x, top), to: PixelPoint::new(x, bottom), stroke });
    }
}

pub(super) fn push_label(scene: &mut Scene, at: PixelPoint, content: String, anchor: TextAnchor) {
    scene.push(Shape::Text { at, content, anchor, size: LABEL_SIZE, fill: Color::WHITE.with_alpha(LABEL_ALPHA) });
}
