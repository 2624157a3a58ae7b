use motion_charts_wasm::domain::chart::{RenderState, SampleChart};
use motion_charts_wasm::infrastructure::rendering::render_svg;
use strum::IntoEnumIterator;

fn settled_svg(sample: SampleChart) -> String {
    let widget = sample.build();
    let reveal = widget.reveal().into_settled();
    render_svg(&widget.render_static(&RenderState::new(None, &reveal)))
}

#[test]
fn every_sample_renders_without_nan() {
    for sample in SampleChart::iter() {
        let svg = settled_svg(sample);
        assert!(svg.starts_with("<svg"), "{sample}");
        assert!(!svg.contains("NaN") && !svg.contains("inf"), "{sample}");
    }
}

#[test]
fn donut_renders_one_path_per_slice() {
    let svg = settled_svg(SampleChart::AssetAllocation);
    assert_eq!(svg.matches("<path").count(), 5);
}

#[test]
fn heatmap_renders_every_cell() {
    let svg = settled_svg(SampleChart::VolSurface);
    assert_eq!(svg.matches("<rect").count(), 20);
}

#[test]
fn payoff_chart_draws_dashed_strike_marker() {
    let svg = settled_svg(SampleChart::OptionsPayoff);
    assert!(svg.contains("stroke-dasharray"));
    assert!(svg.contains(">K</text>"));
}
