//! Cartesian coordinate mapping shared by every non-polar widget.

use super::dataset::ChartDataset;
use super::value_objects::{Margins, Padding, PixelBox, PixelPoint};

/// Span substituted when every value on an axis is equal.
pub const FALLBACK_SPAN: f64 = 0.5;

/// Data interval covered by one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> f64 {
        self.min + self.span() / 2.0
    }

    /// Widen a raw `(min, max)` extent by `padding`.
    ///
    /// Zero or non-finite spans are replaced by [`FALLBACK_SPAN`] centred on
    /// the data, so projection never divides by zero. An empty extent yields
    /// `0..1`.
    pub fn from_extent(extent: Option<(f64, f64)>, padding: Padding) -> Self {
        let Some((lo, hi)) = extent else {
            return Self::new(0.0, 1.0);
        };

        let pad = padding.amount(hi - lo);
        let pad = if pad.is_finite() { pad } else { 0.0 };
        let candidate = Self::new(lo - pad, hi + pad);
        candidate.guarded((lo + hi) / 2.0)
    }

    fn guarded(self, center: f64) -> Self {
        let span = self.span();
        let scale = self.min.abs().max(self.max.abs()).max(1.0);
        if span.is_finite() && span > f64::EPSILON * scale {
            self
        } else {
            let center = if center.is_finite() { center } else { 0.0 };
            Self::new(center - FALLBACK_SPAN / 2.0, center + FALLBACK_SPAN / 2.0)
        }
    }
}

/// Pixel interval an axis is drawn into.
///
/// `pixel_min` is where `domain.min` lands, so for a y axis it is the bottom
/// edge of the plot and is numerically larger than `pixel_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub pixel_min: f64,
    pub pixel_max: f64,
}

impl AxisRange {
    pub fn new(pixel_min: f64, pixel_max: f64) -> Self {
        Self { pixel_min, pixel_max }
    }

    pub fn length(&self) -> f64 {
        self.pixel_max - self.pixel_min
    }
}

/// Affine domain -> range map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: AxisDomain,
    pub range: AxisRange,
}

impl LinearScale {
    pub fn new(domain: AxisDomain, range: AxisRange) -> Self {
        Self { domain: domain.guarded(domain.midpoint()), range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let normalized = (value - self.domain.min) / self.domain.span();
        self.range.pixel_min + normalized * self.range.length()
    }

    pub fn unscale(&self, pixel: f64) -> f64 {
        let length = self.range.length();
        if length == 0.0 {
            return self.domain.midpoint();
        }
        let normalized = (pixel - self.range.pixel_min) / length;
        self.domain.min + normalized * self.domain.span()
    }

    /// `count + 1` evenly spaced values from domain min to max.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        (0..=count).map(|i| self.domain.min + self.domain.span() * i as f64 / count as f64).collect()
    }
}

/// Per-axis padding used when deriving domains from data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPadding {
    pub x: Padding,
    pub y: Padding,
}

impl AxisPadding {
    pub const NONE: AxisPadding = AxisPadding { x: Padding::None, y: Padding::None };

    pub fn y_only(y: Padding) -> Self {
        Self { x: Padding::None, y }
    }

    pub fn both(padding: Padding) -> Self {
        Self { x: padding, y: padding }
    }
}

/// Domain/range pair for both axes of a cartesian widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartViewport {
    pub pixel_box: PixelBox,
    pub margins: Margins,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartViewport {
    pub fn from_domains(x_domain: AxisDomain, y_domain: AxisDomain, pixel_box: PixelBox, margins: Margins) -> Self {
        let x_range = AxisRange::new(margins.left, margins.plot_right(pixel_box));
        let y_range = AxisRange::new(margins.plot_bottom(pixel_box), margins.top);
        Self {
            pixel_box,
            margins,
            x: LinearScale::new(x_domain, x_range),
            y: LinearScale::new(y_domain, y_range),
        }
    }

    pub fn from_extents(
        x_extent: Option<(f64, f64)>,
        y_extent: Option<(f64, f64)>,
        pixel_box: PixelBox,
        margins: Margins,
        padding: AxisPadding,
    ) -> Self {
        Self::from_domains(
            AxisDomain::from_extent(x_extent, padding.x),
            AxisDomain::from_extent(y_extent, padding.y),
            pixel_box,
            margins,
        )
    }

    pub fn project_xy(&self, x: f64, y: f64) -> PixelPoint {
        PixelPoint::new(self.x.scale(x), self.y.scale(y))
    }

    pub fn plot_left(&self) -> f64 {
        self.margins.left
    }

    pub fn plot_right(&self) -> f64 {
        self.margins.plot_right(self.pixel_box)
    }

    pub fn plot_top(&self) -> f64 {
        self.margins.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.margins.plot_bottom(self.pixel_box)
    }

    pub fn plot_width(&self) -> f64 {
        self.margins.plot_width(self.pixel_box)
    }

    pub fn plot_height(&self) -> f64 {
        self.margins.plot_height(self.pixel_box)
    }
}

/// Derive a viewport from a dataset's extents.
pub fn compute_viewport(
    dataset: &ChartDataset,
    pixel_box: PixelBox,
    margins: Margins,
    padding: AxisPadding,
) -> ChartViewport {
    ChartViewport::from_extents(dataset.x_extent(), dataset.y_extent(), pixel_box, margins, padding)
}
