//! Drifting gradient ribbons.

use crate::domain::chart::value_objects::{Color, PixelPoint};

use super::field::ViewportSize;
use super::frame::{DrawCommand, GradientStop, StrokeStyle};

const RIBBON_WIDTH: f64 = 160.0;
const SAMPLE_STEP: f64 = 60.0;
const OVERSCAN: f64 = 80.0;
const AMPLITUDE: f64 = 60.0;

/// Phase of ribbon `index` at clock phase `t`.
pub fn ribbon_phase(t: f64, index: usize) -> f64 {
    t * 0.05 + index as f64 * 1.5
}

/// Vertical centre line of ribbon `index` before the wave is added.
pub fn ribbon_base_y(t: f64, index: usize, height: f64) -> f64 {
    height * (0.15 + index as f64 * 0.22) + ribbon_phase(t, index).sin() * AMPLITUDE
}

/// Sum of two sinusoids of different spatial frequency.
pub fn ribbon_wave(x: f64, t: f64, index: usize) -> f64 {
    (x * 0.004 + t * 0.15 + index as f64).sin() * AMPLITUDE + (x * 0.008 + t * 0.1).sin() * 30.0
}

/// Edge-transparent gradient whose inner stops pulse with the ribbon phase.
pub fn ribbon_stops(phase: f64) -> Vec<GradientStop> {
    let stop = |offset: f64, alpha: f64| GradientStop { offset, color: Color::ACCENT.with_alpha(alpha as f32) };
    vec![
        stop(0.0, 0.0),
        stop(0.25, 0.015 + phase.sin() * 0.008),
        stop(0.5, 0.03 + (phase * 1.1).sin() * 0.01),
        stop(0.75, 0.015 + (phase * 0.9).sin() * 0.008),
        stop(1.0, 0.0),
    ]
}

pub fn push_ribbons(out: &mut Vec<DrawCommand>, count: usize, t: f64, size: ViewportSize) {
    for index in 0..count {
        let base = ribbon_base_y(t, index, size.height);
        let mut points = Vec::new();
        let mut x = -OVERSCAN;
        while x < size.width + OVERSCAN {
            points.push(PixelPoint::new(x, base + ribbon_wave(x, t, index)));
            x += SAMPLE_STEP;
        }

        out.push(DrawCommand::StrokePolyline {
            points,
            style: StrokeStyle::HorizontalGradient {
                x0: 0.0,
                x1: size.width,
                stops: ribbon_stops(ribbon_phase(t, index)),
            },
            width: RIBBON_WIDTH,
            round_cap: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_overscan_both_edges() {
        let mut out = Vec::new();
        push_ribbons(&mut out, 1, 0.0, ViewportSize::new(100.0, 100.0));
        let DrawCommand::StrokePolyline { points, .. } = &out[0] else { panic!("expected polyline") };
        assert_eq!(points.first().map(|p| p.x), Some(-80.0));
        assert_eq!(points.last().map(|p| p.x), Some(160.0));
    }

    #[test]
    fn gradient_stays_faint() {
        for i in 0..100 {
            let stops = ribbon_stops(i as f64 * 0.37);
            assert!(stops.iter().all(|s| s.color.a >= 0.0 && s.color.a <= 0.04));
            assert_eq!(stops[0].color.a, 0.0);
        }
    }

    #[test]
    fn base_line_starts_at_fifteen_percent() {
        assert_eq!(ribbon_base_y(0.0, 0, 1000.0), 150.0);
    }
}
