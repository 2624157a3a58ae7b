use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ChartKind {
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Area")]
    #[strum(serialize = "area")]
    Area,
    #[display(fmt = "Bar")]
    #[strum(serialize = "bar")]
    Bar,
    #[display(fmt = "Donut")]
    #[strum(serialize = "donut")]
    Donut,
    #[display(fmt = "Scatter")]
    #[strum(serialize = "scatter")]
    Scatter,
    #[display(fmt = "Heatmap")]
    #[strum(serialize = "heatmap")]
    Heatmap,
}

/// Value Object - Point in a chart's local pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn distance_to(&self, other: PixelPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Value Object - Fixed drawing box of a widget (its SVG viewBox)
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct PixelBox {
    pub width: f64,
    pub height: f64,
}

/// Value Object - Space reserved around the plot area for axis labels
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub fn plot_width(&self, pixel_box: PixelBox) -> f64 {
        (pixel_box.width - self.left - self.right).max(0.0)
    }

    pub fn plot_height(&self, pixel_box: PixelBox) -> f64 {
        (pixel_box.height - self.top - self.bottom).max(0.0)
    }

    pub fn plot_bottom(&self, pixel_box: PixelBox) -> f64 {
        self.top + self.plot_height(pixel_box)
    }

    pub fn plot_right(&self, pixel_box: PixelBox) -> f64 {
        self.left + self.plot_width(pixel_box)
    }
}

/// How far the data domain is widened beyond the raw min/max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padding {
    None,
    /// Fraction of the raw span added on each side.
    Fraction(f64),
    /// Absolute amount added on each side.
    Additive(f64),
}

impl Padding {
    pub fn amount(&self, span: f64) -> f64 {
        match *self {
            Padding::None => 0.0,
            Padding::Fraction(fraction) => span * fraction,
            Padding::Additive(pad) => pad,
        }
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u32;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u32;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u32;
        (r << 16) | (g << 8) | b
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha.clamp(0.0, 1.0), ..*self }
    }

    /// `rgba(r, g, b, a)` with 8-bit channels, usable by canvas and SVG alike.
    pub fn to_css(&self) -> String {
        let hex = self.to_hex();
        format!(
            "rgba({}, {}, {}, {:.3})",
            (hex >> 16) & 0xFF,
            (hex >> 8) & 0xFF,
            hex & 0xFF,
            self.a.clamp(0.0, 1.0)
        )
    }

    /// Site accent, #00d4aa.
    pub const ACCENT: Color = Color { r: 0.0, g: 212.0 / 255.0, b: 170.0 / 255.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
}

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(f32, f32, f32, f32)> for Color {
    fn from((r, g, b, a): (f32, f32, f32, f32)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}
