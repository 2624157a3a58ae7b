use motion_charts_wasm::domain::chart::{
    AxisDomain, AxisPadding, AxisRange, ChartDataset, LinearScale, Margins, PixelBox, compute_viewport,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const BOX: PixelBox = PixelBox { width: 240.0, height: 120.0 };
const MARGINS: Margins = Margins { left: 40.0, right: 20.0, top: 16.0, bottom: 32.0 };

#[test]
fn domain_spans_data_and_maps_to_range_ends() {
    let dataset = ChartDataset::from_values("v", &[1.0, 5.0, 3.0]);
    let viewport = compute_viewport(&dataset, BOX, MARGINS, AxisPadding::NONE);

    assert_eq!(viewport.y.domain, AxisDomain::new(1.0, 5.0));
    let range = viewport.y.range;
    assert!((viewport.y.scale(1.0) - range.pixel_min).abs() < 1e-9);
    assert!((viewport.y.scale(5.0) - range.pixel_max).abs() < 1e-9);
    assert!((viewport.y.scale(3.0) - (range.pixel_min + range.pixel_max) / 2.0).abs() < 1e-9);
    assert_eq!(range.pixel_min, viewport.plot_bottom());
    assert_eq!(range.pixel_max, viewport.plot_top());
}

#[test]
fn flat_dataset_projects_to_finite_midpoint() {
    let dataset = ChartDataset::from_values("flat", &[4.0, 4.0, 4.0]);
    let viewport = compute_viewport(&dataset, BOX, MARGINS, AxisPadding::NONE);

    assert!(viewport.y.domain.span() > 0.0);
    let middle = (viewport.plot_top() + viewport.plot_bottom()) / 2.0;
    for point in dataset.points() {
        let pixel = viewport.project_xy(point.x, point.y);
        assert!(pixel.is_finite());
        assert!((pixel.y - middle).abs() < 1e-9);
    }
}

#[test]
fn single_point_is_centred_on_both_axes() {
    let dataset = ChartDataset::from_values("one", &[7.0]);
    let viewport = compute_viewport(&dataset, BOX, MARGINS, AxisPadding::NONE);
    let pixel = viewport.project_xy(0.0, 7.0);
    assert!((pixel.x - (viewport.plot_left() + viewport.plot_right()) / 2.0).abs() < 1e-9);
    assert!(pixel.is_finite());
}

#[test]
fn empty_dataset_still_yields_finite_viewport() {
    let dataset = ChartDataset::from_values("empty", &[]);
    let viewport = compute_viewport(&dataset, BOX, MARGINS, AxisPadding::NONE);
    assert!(viewport.project_xy(0.5, 0.5).is_finite());
}

#[quickcheck]
fn unscale_inverts_scale(min: i16, span: u16, pixel_min: i16, pixel_len: i16, value: i16) -> TestResult {
    if pixel_len == 0 {
        return TestResult::discard();
    }
    let domain = AxisDomain::new(f64::from(min), f64::from(min) + f64::from(span));
    let range = AxisRange::new(f64::from(pixel_min), f64::from(pixel_min) + f64::from(pixel_len));
    let scale = LinearScale::new(domain, range);

    let value = f64::from(value);
    let pixel = scale.scale(value);
    let back = scale.unscale(pixel);
    TestResult::from_bool(pixel.is_finite() && (back - value).abs() <= 1e-6 * value.abs().max(1.0))
}
