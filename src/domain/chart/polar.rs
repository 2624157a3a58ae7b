//! Polar layout for donut charts.

use super::scene::PathData;
use super::value_objects::PixelPoint;

/// Angle of the first wedge edge, 12 o'clock in screen coordinates.
pub const START_ANGLE_DEG: f64 = -90.0;

const FULL_TURN_DEG: f64 = 360.0;
const FULL_CIRCLE_EPS: f64 = 1e-9;

/// One annular slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub value: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

impl Wedge {
    pub fn end_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg
    }

    pub fn mid_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg / 2.0
    }

    /// SVG large-arc flag.
    pub fn large_arc(&self) -> bool {
        self.sweep_deg > 180.0
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep_deg >= FULL_TURN_DEG - FULL_CIRCLE_EPS
    }

    pub fn is_empty(&self) -> bool {
        self.sweep_deg <= 0.0
    }
}

/// Centre and radii of a donut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarLayout {
    pub center: PixelPoint,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl PolarLayout {
    pub fn new(center: PixelPoint, outer_radius: f64, inner_radius: f64) -> Self {
        Self { center, outer_radius, inner_radius }
    }

    /// Lay out `values` clockwise from [`START_ANGLE_DEG`].
    ///
    /// Each sweep is `value / total * 360`. Negative and non-finite values
    /// count as zero. The last non-empty wedge absorbs rounding so sweeps sum
    /// to exactly 360. A zero total yields zero-sweep wedges.
    pub fn wedges(&self, values: impl IntoIterator<Item = f64>) -> Vec<Wedge> {
        let values: Vec<f64> =
            values.into_iter().map(|v| if v.is_finite() && v > 0.0 { v } else { 0.0 }).collect();
        let total: f64 = values.iter().sum();
        let last_positive = values.iter().rposition(|v| *v > 0.0);

        let mut wedges = Vec::with_capacity(values.len());
        let mut start = START_ANGLE_DEG;
        let mut accumulated = 0.0;
        for (index, &value) in values.iter().enumerate() {
            let sweep = if total <= 0.0 {
                0.0
            } else if Some(index) == last_positive {
                FULL_TURN_DEG - accumulated
            } else {
                value / total * FULL_TURN_DEG
            };
            wedges.push(Wedge { index, value, start_deg: start, sweep_deg: sweep });
            start += sweep;
            accumulated += sweep;
        }
        wedges
    }

    pub fn point_at(&self, radius: f64, deg: f64) -> PixelPoint {
        let rad = deg.to_radians();
        PixelPoint::new(self.center.x + radius * rad.cos(), self.center.y + radius * rad.sin())
    }

    /// Hover anchor: mid-angle on the mid radius.
    pub fn centroid(&self, wedge: &Wedge) -> PixelPoint {
        let radius = (self.outer_radius + self.inner_radius) / 2.0;
        self.point_at(radius, wedge.mid_deg())
    }

    /// Annular wedge outline. Full circles are split into two half arcs,
    /// since a single arc with equal endpoints draws nothing.
    pub fn wedge_path(&self, wedge: &Wedge) -> PathData {
        let mut data = PathData::new();
        if wedge.is_empty() {
            return data;
        }

        let (r, ri) = (self.outer_radius, self.inner_radius);
        let start = wedge.start_deg;
        let end = wedge.end_deg();

        if wedge.is_full_circle() {
            let half = start + 180.0;
            data.move_to(self.point_at(r, start))
                .arc_to(r, false, true, self.point_at(r, half))
                .arc_to(r, false, true, self.point_at(r, end))
                .line_to(self.point_at(ri, end))
                .arc_to(ri, false, false, self.point_at(ri, half))
                .arc_to(ri, false, false, self.point_at(ri, start))
                .close();
            return data;
        }

        let large = wedge.large_arc();
        data.move_to(self.point_at(r, start))
            .arc_to(r, large, true, self.point_at(r, end))
            .line_to(self.point_at(ri, end))
            .arc_to(ri, large, false, self.point_at(ri, start))
            .close();
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::scene::PathCommand;

    fn layout() -> PolarLayout {
        PolarLayout::new(PixelPoint::new(60.0, 60.0), 42.0, 28.0)
    }

    #[test]
    fn large_arc_flag_only_past_half_turn() {
        let wedges = layout().wedges([60.0, 40.0]);
        assert!(wedges[0].large_arc());
        assert!(!wedges[1].large_arc());
    }

    #[test]
    fn zero_total_yields_empty_wedges() {
        let wedges = layout().wedges([0.0, 0.0, -3.0]);
        assert!(wedges.iter().all(|w| w.sweep_deg == 0.0 && w.start_deg == START_ANGLE_DEG));
        assert!(layout().wedge_path(&wedges[0]).is_empty());
    }

    #[test]
    fn single_value_renders_as_two_half_arcs() {
        let wedges = layout().wedges([100.0]);
        assert!(wedges[0].is_full_circle());
        let path = layout().wedge_path(&wedges[0]);
        let arcs = path.commands().iter().filter(|c| matches!(c, PathCommand::ArcTo { .. })).count();
        assert_eq!(arcs, 4);
    }

    #[test]
    fn centroid_of_first_quarter_is_upper_right() {
        let wedges = layout().wedges([25.0, 75.0]);
        let anchor = layout().centroid(&wedges[0]);
        assert!(anchor.x > 60.0 && anchor.y < 60.0);
    }
}
