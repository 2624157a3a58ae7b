//! Scroll-linked layers of the flow variant.

use std::f64::consts::TAU;

use crate::domain::chart::value_objects::{Color, PixelPoint};

use super::field::ViewportSize;
use super::frame::{DrawCommand, StrokeStyle};

/// Opacity seed of flow line `index`.
pub fn line_seed(scroll: f64, t: f64, index: usize) -> f64 {
    (scroll * 0.02 + t * 0.5 + index as f64 * 0.7).rem_euclid(TAU)
}

/// Vertical lines jittered by `scroll + t`.
pub fn push_flow_lines(out: &mut Vec<DrawCommand>, count: usize, scroll: f64, t: f64, size: ViewportSize) {
    let spacing = size.width / (count + 1) as f64;
    for index in 0..count {
        let base_x = spacing * (index + 1) as f64;
        let alpha = 0.03 + line_seed(scroll, t, index).sin() * 0.025;

        let mut points = Vec::new();
        let mut y = -50.0;
        while y < size.height + 50.0 {
            let global_y = scroll + y;
            let noise = (global_y * 0.008 + t * 0.3 + index as f64).sin() * 12.0 + (global_y * 0.015).sin() * 6.0;
            points.push(PixelPoint::new(base_x + noise, y));
            y += 6.0;
        }

        out.push(DrawCommand::StrokePolyline {
            points,
            style: StrokeStyle::Solid(Color::ACCENT.with_alpha(alpha as f32)),
            width: 1.0,
            round_cap: false,
        });
    }
}

/// First grid line position; moves up with scroll and wraps every `step`.
pub fn grid_start(scroll: f64, step: f64) -> f64 {
    -scroll.rem_euclid(step)
}

pub fn push_scroll_grid(out: &mut Vec<DrawCommand>, step: f64, scroll: f64, t: f64, size: ViewportSize) {
    let mut y = grid_start(scroll, step);
    while y < size.height + step {
        let alpha = 0.015 + (t * 0.1 + y * 0.02).sin() * 0.01;
        out.push(DrawCommand::StrokePolyline {
            points: vec![PixelPoint::new(0.0, y), PixelPoint::new(size.width, y)],
            style: StrokeStyle::Solid(Color::WHITE.with_alpha(alpha as f32)),
            width: 1.0,
            round_cap: false,
        });
        y += step;
    }
}

/// Glowing centre stream.
pub fn push_center_stream(out: &mut Vec<DrawCommand>, scroll: f64, t: f64, size: ViewportSize) {
    let stream_x = size.width * 0.5 + (t * 0.3).sin() * 20.0;
    let mut points = Vec::new();
    let mut y = -20.0;
    while y < size.height + 20.0 {
        let global_y = scroll + y;
        points.push(PixelPoint::new(stream_x + (global_y * 0.01 + t * 0.4).sin() * 8.0, y));
        y += 4.0;
    }

    out.push(DrawCommand::StrokePolyline {
        points,
        style: StrokeStyle::Solid(Color::ACCENT.with_alpha((0.06 + t.sin() * 0.02) as f32)),
        width: 2.0,
        round_cap: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_wraps_with_scroll() {
        assert_eq!(grid_start(0.0, 60.0), 0.0);
        assert_eq!(grid_start(75.0, 60.0), -15.0);
        assert_eq!(grid_start(120.0, 60.0), 0.0);
        assert_eq!(grid_start(-15.0, 60.0), -45.0);
    }

    #[test]
    fn lines_are_evenly_spaced() {
        let mut out = Vec::new();
        push_flow_lines(&mut out, 3, 0.0, 0.0, ViewportSize::new(400.0, 10.0));
        assert_eq!(out.len(), 3);
        let DrawCommand::StrokePolyline { points, .. } = &out[1] else { panic!("expected polyline") };
        assert!((points[0].x - 200.0).abs() <= 18.0);
    }

    #[test]
    fn seed_stays_in_one_turn() {
        for i in 0..50 {
            let seed = line_seed(i as f64 * 997.0, i as f64, i);
            assert!((0.0..TAU).contains(&seed));
        }
    }
}
