use super::axes::push_label;
use super::{ChartWidget, RenderState};
use crate::domain::chart::hit_test::{HoverHit, TooltipPayload};
use crate::domain::chart::reveal::RevealAnimation;
use crate::domain::chart::scene::{Scene, Shape, Stroke, TextAnchor};
use crate::domain::chart::value_objects::{ChartKind, Color, Margins, PixelBox, PixelPoint};

/// Value mapped to the faintest cell.
pub const INTENSITY_MIN: f64 = 14.0;
/// Value mapped to the strongest cell.
pub const INTENSITY_MAX: f64 = 26.0;
const ALPHA_FLOOR: f64 = 0.25;
const ALPHA_SPAN: f64 = 0.6;
const CELL_DELAY_MS: f64 = 50.0;
const CELL_FADE_MS: f64 = 400.0;
const CELL_INSET: f64 = 1.0;

/// Accent alpha for a cell value, linear between the intensity bounds.
pub fn intensity_alpha(value: f64) -> f64 {
    let t = ((value - INTENSITY_MIN) / (INTENSITY_MAX - INTENSITY_MIN)).clamp(0.0, 1.0);
    ALPHA_FLOOR + t * ALPHA_SPAN
}

/// Column-major grid: `values[column][row]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub columns: Vec<String>,
    pub rows: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl HeatmapGrid {
    pub fn value(&self, column: usize, row: usize) -> Option<f64> {
        self.values.get(column)?.get(row).copied()
    }
}

/// Grid of cells coloured by intensity, revealed diagonally.
#[derive(Debug, Clone)]
pub struct HeatmapChart {
    title: String,
    grid: HeatmapGrid,
    pixel_box: PixelBox,
    margins: Margins,
}

impl HeatmapChart {
    pub fn new(title: &str, grid: HeatmapGrid, pixel_box: PixelBox, margins: Margins) -> Self {
        Self { title: title.to_string(), grid, pixel_box, margins }
    }

    fn cell_size(&self) -> (f64, f64) {
        let columns = self.grid.columns.len().max(1) as f64;
        let rows = self.grid.rows.len().max(1) as f64;
        (self.margins.plot_width(self.pixel_box) / columns, self.margins.plot_height(self.pixel_box) / rows)
    }

    /// Flattened index of a cell, column-major.
    pub fn cell_index(&self, column: usize, row: usize) -> usize {
        column * self.grid.rows.len() + row
    }

    fn cell_position(&self, index: usize) -> Option<(usize, usize)> {
        let rows = self.grid.rows.len();
        if rows == 0 || index >= rows * self.grid.columns.len() {
            return None;
        }
        Some((index / rows, index % rows))
    }

    fn cell_center(&self, column: usize, row: usize) -> PixelPoint {
        let (w, h) = self.cell_size();
        PixelPoint::new(
            self.margins.left + column as f64 * w + w / 2.0,
            self.margins.top + row as f64 * h + h / 2.0,
        )
    }

    /// Reveal delay of a cell, proportional to its diagonal rank.
    pub fn cell_delay_ms(column: usize, row: usize) -> f64 {
        (column + row) as f64 * CELL_DELAY_MS
    }
}

impl ChartWidget for HeatmapChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Heatmap
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn pixel_box(&self) -> PixelBox {
        self.pixel_box
    }

    fn hit_threshold(&self) -> f64 {
        let (w, h) = self.cell_size();
        w.hypot(h) / 2.0
    }

    fn reveal(&self) -> RevealAnimation {
        let max_rank = (self.grid.columns.len() + self.grid.rows.len()).saturating_sub(2);
        RevealAnimation::staggered_fade(max_rank as f64 * CELL_DELAY_MS + CELL_FADE_MS)
    }

    fn anchors(&self) -> Vec<PixelPoint> {
        (0..self.grid.columns.len())
            .flat_map(|c| (0..self.grid.rows.len()).map(move |r| (c, r)))
            .map(|(c, r)| self.cell_center(c, r))
            .collect()
    }

    fn tooltip(&self, index: usize) -> Option<TooltipPayload> {
        let (column, row) = self.cell_position(index)?;
        let value = self.grid.value(column, row)?;
        let column_label = self.grid.columns.get(column)?;
        let row_label = self.grid.rows.get(row)?;
        Some(TooltipPayload::new(
            format!("K {column_label} · {row_label}"),
            vec![value],
            format!("IV {value:.0}%"),
            self.cell_center(column, row),
        ))
    }

    /// Cells are hit by containment rather than distance.
    fn hit_test(&self, pointer: PixelPoint) -> Option<HoverHit> {
        let (w, h) = self.cell_size();
        let x = pointer.x - self.margins.left;
        let y = pointer.y - self.margins.top;
        let columns = self.grid.columns.len();
        let rows = self.grid.rows.len();
        if !(x >= 0.0 && y >= 0.0 && x <= w * columns as f64 && y <= h * rows as f64) || w <= 0.0 || h <= 0.0 {
            return None;
        }

        let column = ((x / w).floor() as usize).min(columns.checked_sub(1)?);
        let row = ((y / h).floor() as usize).min(rows.checked_sub(1)?);
        let index = self.cell_index(column, row);
        Some(HoverHit { index, anchor: self.cell_center(column, row), tooltip: self.tooltip(index)? })
    }

    fn render_static(&self, state: &RenderState<'_>) -> Scene {
        let mut scene = Scene::new(self.pixel_box);
        let (w, h) = self.cell_size();

        for (column, cells) in self.grid.values.iter().enumerate() {
            for (row, &value) in cells.iter().enumerate() {
                let index = self.cell_index(column, row);
                let hovered = state.is_hovered(index);
                scene.push(Shape::Rect {
                    origin: PixelPoint::new(
                        self.margins.left + column as f64 * w + CELL_INSET,
                        self.margins.top + row as f64 * h + CELL_INSET,
                    ),
                    width: (w - 2.0 * CELL_INSET).max(0.0),
                    height: (h - 2.0 * CELL_INSET).max(0.0),
                    corner_radius: 2.0,
                    fill: Color::ACCENT.with_alpha(intensity_alpha(value) as f32),
                    stroke: hovered.then(|| Stroke::solid(Color::WHITE.with_alpha(0.5), 1.0)),
                    opacity: state.reveal.item_opacity(Self::cell_delay_ms(column, row), CELL_FADE_MS),
                });
            }
        }

        let label_y = self.margins.plot_bottom(self.pixel_box) + 16.0;
        for (column, label) in self.grid.columns.iter().enumerate() {
            let x = self.margins.left + column as f64 * w + w / 2.0;
            push_label(&mut scene, PixelPoint::new(x, label_y), label.clone(), TextAnchor::Middle);
        }
        for (row, label) in self.grid.rows.iter().enumerate() {
            let y = self.margins.top + row as f64 * h + h / 2.0;
            push_label(&mut scene, PixelPoint::new(self.margins.left - 6.0, y), label.clone(), TextAnchor::End);
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> HeatmapChart {
        let grid = HeatmapGrid {
            columns: vec!["90".into(), "100".into()],
            rows: vec!["1M".into(), "3M".into()],
            values: vec![vec![14.0, 20.0], vec![26.0, 30.0]],
        };
        HeatmapChart::new("iv", grid, PixelBox::new(140.0, 100.0), Margins::new(20.0, 20.0, 20.0, 20.0))
    }

    #[test]
    fn intensity_maps_bounds_to_alpha_range() {
        assert_eq!(intensity_alpha(INTENSITY_MIN), 0.25);
        assert!((intensity_alpha(INTENSITY_MAX) - 0.85).abs() < 1e-12);
        assert!((intensity_alpha(99.0) - 0.85).abs() < 1e-12);
    }

    #[test]
    fn containment_picks_cell_under_pointer() {
        let hit = chart().hit_test(PixelPoint::new(100.0, 30.0)).unwrap();
        assert_eq!(hit.index, 2);
        assert_eq!(hit.tooltip.label, "K 100 · 1M");
        assert_eq!(hit.anchor, PixelPoint::new(95.0, 35.0));
    }

    #[test]
    fn pointer_outside_grid_misses() {
        assert!(chart().hit_test(PixelPoint::new(5.0, 30.0)).is_none());
        assert!(chart().hit_test(PixelPoint::new(100.0, 95.0)).is_none());
    }

    #[test]
    fn reveal_covers_last_diagonal() {
        assert_eq!(chart().reveal().duration_ms(), 2.0 * 50.0 + 400.0);
        assert_eq!(HeatmapChart::cell_delay_ms(1, 1), 100.0);
    }
}
