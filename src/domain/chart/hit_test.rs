//! Pointer hit testing and hover state.

use serde::Serialize;

use super::value_objects::PixelPoint;

/// Index and distance of the closest anchor strictly inside `threshold`.
///
/// Exact distance ties resolve to the earliest anchor. Non-finite anchors are
/// skipped.
pub fn nearest_within(anchors: &[PixelPoint], pointer: PixelPoint, threshold: f64) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, anchor) in anchors.iter().enumerate() {
        let distance = anchor.distance_to(pointer);
        if !distance.is_finite() || distance >= threshold {
            continue;
        }
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((index, distance));
        }
    }
    best
}

/// Data handed to the surrounding page when a point is hovered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipPayload {
    pub label: String,
    pub values: Vec<f64>,
    /// Preformatted tooltip body.
    pub text: String,
    /// Pixel the tooltip box points at, in the chart's local space.
    pub anchor: PixelPoint,
}

impl TooltipPayload {
    pub fn new(label: impl Into<String>, values: Vec<f64>, text: impl Into<String>, anchor: PixelPoint) -> Self {
        Self { label: label.into(), values, text: text.into(), anchor }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Result of a successful hit test.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverHit {
    pub index: usize,
    pub anchor: PixelPoint,
    pub tooltip: TooltipPayload,
}

/// Transient hover state of one chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    nearest: Option<HoverHit>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the hovered point. Returns true when the hovered index changed.
    pub fn on_pointer_move(&mut self, hit: Option<HoverHit>) -> bool {
        let changed = self.hovered_index() != hit.as_ref().map(|h| h.index);
        self.nearest = hit;
        changed
    }

    /// Clear unconditionally. Returns true when something was hovered.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.nearest.take().is_some()
    }

    pub fn nearest(&self) -> Option<&HoverHit> {
        self.nearest.as_ref()
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.nearest.as_ref().map(|hit| hit.index)
    }

    pub fn tooltip(&self) -> Option<&TooltipPayload> {
        self.nearest.as_ref().map(|hit| &hit.tooltip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_prefer_first_anchor() {
        let anchors = [PixelPoint::new(0.0, 0.0), PixelPoint::new(10.0, 0.0)];
        let hit = nearest_within(&anchors, PixelPoint::new(5.0, 0.0), 24.0);
        assert_eq!(hit.map(|(i, _)| i), Some(0));
    }

    #[test]
    fn threshold_is_exclusive() {
        let anchors = [PixelPoint::new(0.0, 0.0)];
        assert!(nearest_within(&anchors, PixelPoint::new(24.0, 0.0), 24.0).is_none());
        assert!(nearest_within(&anchors, PixelPoint::new(23.9, 0.0), 24.0).is_some());
    }

    #[test]
    fn nan_anchor_is_ignored() {
        let anchors = [PixelPoint::new(f64::NAN, 0.0), PixelPoint::new(1.0, 1.0)];
        assert_eq!(nearest_within(&anchors, PixelPoint::new(0.0, 0.0), 24.0).map(|(i, _)| i), Some(1));
    }

    #[test]
    fn leave_clears_hover() {
        let mut hover = HoverState::new();
        let hit = HoverHit {
            index: 2,
            anchor: PixelPoint::new(1.0, 2.0),
            tooltip: TooltipPayload::new("1M", vec![4.2], "4.20%", PixelPoint::new(1.0, 2.0)),
        };
        assert!(hover.on_pointer_move(Some(hit.clone())));
        assert!(!hover.on_pointer_move(Some(hit)));
        assert_eq!(hover.hovered_index(), Some(2));
        assert!(hover.on_pointer_leave());
        assert!(hover.nearest().is_none());
        assert!(!hover.on_pointer_leave());
    }

    #[test]
    fn tooltip_serialises_for_js_hosts() {
        let payload = TooltipPayload::new("10Y", vec![4.5], "4.50%", PixelPoint::new(3.0, 4.0));
        let json = payload.to_json().unwrap();
        assert_eq!(json, r#"{"label":"10Y","values":[4.5],"text":"4.50%","anchor":{"x":3.0,"y":4.0}}"#);
    }
}
