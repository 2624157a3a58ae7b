use serde::Serialize;

/// One sample of a chart dataset.
///
/// `x` is the horizontal value (an index for categorical charts), `y` the
/// plotted value. `label` is the category (tenor, strike, asset).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    pub fn labeled(x: f64, y: f64, label: &str) -> Self {
        Self { x, y, label: Some(label.to_string()) }
    }
}

/// Immutable, compiled-in sample data for one widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub name: String,
    points: Vec<DataPoint>,
}

impl ChartDataset {
    pub fn new(name: &str, points: Vec<DataPoint>) -> Self {
        Self { name: name.to_string(), points }
    }

    /// Values laid out at x = 0, 1, 2, ...
    pub fn from_values(name: &str, values: &[f64]) -> Self {
        let points = values.iter().enumerate().map(|(i, &v)| DataPoint::new(i as f64, v)).collect();
        Self::new(name, points)
    }

    /// Labeled values laid out at x = 0, 1, 2, ...
    pub fn from_labeled(name: &str, values: &[(&str, f64)]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &(label, v))| DataPoint::labeled(i as f64, v, label))
            .collect();
        Self::new(name, points)
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// `(min, max)` of the finite x values.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.x))
    }

    /// `(min, max)` of the finite y values.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.values())
    }

    /// Sum of positive values; the donut divisor.
    pub fn positive_sum(&self) -> f64 {
        self.values().filter(|v| v.is_finite() && *v > 0.0).sum()
    }

    /// Label for tooltips, falling back to the x value.
    pub fn label_at(&self, index: usize) -> String {
        match self.points.get(index) {
            Some(DataPoint { label: Some(label), .. }) => label.clone(),
            Some(point) => format!("{}", point.x),
            None => String::new(),
        }
    }
}

pub(crate) fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
