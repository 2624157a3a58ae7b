//! Compiled-in sample datasets and the chart gallery built from them.

use derive_more::Display;
use once_cell::sync::Lazy;
use strum::{AsRefStr, EnumIter, EnumString};

use super::dataset::{ChartDataset, DataPoint};
use super::value_objects::{Color, Margins, Padding, PixelBox};
use super::viewport::{AxisDomain, AxisPadding};
use super::widgets::{
    BarChart, ChartWidget, DonutChart, DonutSize, HeatmapChart, LineChart, LineChartConfig, LineSeries, LineStyle,
    HeatmapGrid, ScatterChart, YLabels,
};

pub static YIELD_CURVE: Lazy<ChartDataset> = Lazy::new(|| {
    ChartDataset::from_labeled(
        "UST",
        &[
            ("1M", 4.2),
            ("3M", 4.35),
            ("6M", 4.5),
            ("1Y", 4.55),
            ("2Y", 4.45),
            ("5Y", 4.35),
            ("10Y", 4.5),
            ("30Y", 4.7),
        ],
    )
});

pub static MACRO_VOLATILITY: Lazy<ChartDataset> =
    Lazy::new(|| ChartDataset::from_values("vol", &[18.0, 22.0, 19.0, 24.0, 21.0, 23.0, 25.0]));

pub static FX_NOMINAL: Lazy<ChartDataset> =
    Lazy::new(|| ChartDataset::from_values("Nominal", &[1.02, 1.05, 1.03, 1.08, 1.06, 1.04, 1.07]));

pub static FX_REAL: Lazy<ChartDataset> =
    Lazy::new(|| ChartDataset::from_values("Real", &[0.98, 1.0, 0.99, 1.02, 1.01, 1.0, 1.03]));

/// Strike of the sample call.
pub const PAYOFF_STRIKE: f64 = 100.0;

/// `max(S - K, 0)` for S in 85..=115 step 2.
pub static CALL_PAYOFF: Lazy<ChartDataset> = Lazy::new(|| {
    let points = (0..=15)
        .map(|i| {
            let spot = 85.0 + 2.0 * i as f64;
            DataPoint::labeled(spot, (spot - PAYOFF_STRIKE).max(0.0), &format!("S {spot:.0}"))
        })
        .collect();
    ChartDataset::new("payoff", points)
});

pub static FX_AREA: Lazy<ChartDataset> = Lazy::new(|| ChartDataset::from_values("fx", &[45.0, 40.0, 48.0]));

pub static OPTIONS_GREEKS: Lazy<ChartDataset> = Lazy::new(|| {
    ChartDataset::from_labeled(
        "greeks",
        &[("Delta", 22.0), ("Gamma", 18.0), ("Vega", 35.0), ("Theta", 28.0), ("Rho", 42.0)],
    )
});

pub static ASSET_ALLOCATION: Lazy<ChartDataset> = Lazy::new(|| {
    ChartDataset::from_labeled(
        "allocation",
        &[("Equities", 35.0), ("Rates", 25.0), ("FX", 20.0), ("Commodities", 12.0), ("Cash", 8.0)],
    )
});

pub static EXPOSURE_BY_ASSET: Lazy<ChartDataset> = Lazy::new(|| {
    ChartDataset::from_labeled("exposure", &[("Rates", 45.0), ("FX", 30.0), ("Credit", 25.0)])
});

pub static STRATEGY_SPLIT: Lazy<ChartDataset> =
    Lazy::new(|| ChartDataset::from_labeled("split", &[("Systematic", 60.0), ("Discretionary", 40.0)]));

pub static CORRELATION_PAIRS: Lazy<ChartDataset> = Lazy::new(|| {
    let pairs = [
        (-1.2, -1.1),
        (0.8, 0.7),
        (-0.5, -0.6),
        (1.5, 1.4),
        (-0.9, -0.8),
        (0.4, 0.5),
        (-1.5, -1.4),
        (2.0, 1.9),
        (-0.3, -0.2),
        (1.0, 1.1),
        (0.2, 0.3),
        (-1.0, -0.9),
    ];
    ChartDataset::new("pairs", pairs.iter().map(|&(x, y)| DataPoint::new(x, y)).collect())
});

pub static VOL_SURFACE: Lazy<HeatmapGrid> = Lazy::new(|| HeatmapGrid {
    columns: ["90", "95", "100", "105", "110"].iter().map(|s| s.to_string()).collect(),
    rows: ["1M", "3M", "6M", "1Y"].iter().map(|s| s.to_string()).collect(),
    values: vec![
        vec![22.0, 23.0, 24.0, 25.0],
        vec![18.0, 19.0, 20.0, 21.0],
        vec![16.0, 17.0, 18.0, 19.0],
        vec![18.0, 19.0, 20.0, 21.0],
        vec![22.0, 23.0, 24.0, 25.0],
    ],
});

const PANEL_BOX: PixelBox = PixelBox { width: 240.0, height: 120.0 };
const WIDGET_BOX: PixelBox = PixelBox { width: 120.0, height: 80.0 };
const WIDGET_MARGINS: Margins = Margins { left: 32.0, right: 8.0, top: 4.0, bottom: 18.0 };
const GRID_BOX: PixelBox = PixelBox { width: 280.0, height: 180.0 };
const GRID_MARGINS: Margins = Margins { left: 44.0, right: 24.0, top: 24.0, bottom: 40.0 };

/// Every chart of the gallery, addressable by a kebab-case id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum SampleChart {
    #[display(fmt = "Yield Curve")]
    YieldCurve,
    #[display(fmt = "Macro Volatility")]
    MacroVolatility,
    #[display(fmt = "FX Relative Value")]
    FxRelativeValue,
    #[display(fmt = "Options Payoff")]
    OptionsPayoff,
    #[display(fmt = "FX Nominal/Real")]
    FxNominalReal,
    #[display(fmt = "Options Greeks")]
    OptionsGreeks,
    #[display(fmt = "Asset Allocation")]
    AssetAllocation,
    #[display(fmt = "Exposure by Asset")]
    ExposureByAsset,
    #[display(fmt = "Strategy Split")]
    StrategySplit,
    #[display(fmt = "Pairs Correlation")]
    CorrelationPair,
    #[display(fmt = "IV Surface")]
    VolSurface,
}

impl SampleChart {
    pub fn build(self) -> Box<dyn ChartWidget> {
        let title = self.to_string();
        match self {
            SampleChart::YieldCurve => {
                let mut config =
                    LineChartConfig::new(&title, PixelBox::new(360.0, 200.0), Margins::new(48.0, 24.0, 24.0, 36.0));
                config.padding = AxisPadding::y_only(Padding::Additive(0.2));
                config.grid = (5, 7);
                config.y_labels = YLabels::MinMidMax;
                config.x_labels = true;
                config.markers = true;
                config.hit_threshold = 40.0;
                config.reveal_ms = 1200.0;
                config.unit = "%";
                Box::new(LineChart::new(config, vec![LineSeries::primary(YIELD_CURVE.clone())]))
            }
            SampleChart::MacroVolatility => {
                let mut config = LineChartConfig::new(&title, PANEL_BOX, Margins::new(32.0, 16.0, 16.0, 28.0));
                config.padding = AxisPadding::y_only(Padding::Additive(2.0));
                config.y_labels = YLabels::MinMax;
                config.markers = true;
                config.decimals = 0;
                Box::new(LineChart::new(config, vec![LineSeries::primary(MACRO_VOLATILITY.clone())]))
            }
            SampleChart::FxRelativeValue => {
                let mut config = LineChartConfig::new(&title, PANEL_BOX, Margins::new(40.0, 20.0, 16.0, 32.0));
                config.padding = AxisPadding::y_only(Padding::Additive(0.02));
                config.reveal_ms = 1000.0;
                let real = LineSeries::secondary(FX_REAL.clone(), Color::WHITE.with_alpha(0.5), 1.2);
                Box::new(LineChart::new(config, vec![LineSeries::primary(FX_NOMINAL.clone()), real]))
            }
            SampleChart::OptionsPayoff => {
                let mut config = LineChartConfig::new(&title, PANEL_BOX, Margins::new(36.0, 20.0, 20.0, 32.0));
                config.domains = Some((AxisDomain::new(85.0, 115.0), AxisDomain::new(0.0, 25.0)));
                config.reference_x = Some(PAYOFF_STRIKE);
                config.decimals = 0;
                Box::new(LineChart::new(config, vec![LineSeries::primary(CALL_PAYOFF.clone())]))
            }
            SampleChart::FxNominalReal => {
                let mut config = LineChartConfig::new(&title, WIDGET_BOX, WIDGET_MARGINS);
                config.domains = Some((AxisDomain::new(0.0, 2.0), AxisDomain::new(0.0, 80.0)));
                config.style = LineStyle::Area;
                config.hit_threshold = 16.0;
                config.decimals = 0;
                Box::new(LineChart::new(config, vec![LineSeries::primary(FX_AREA.clone())]))
            }
            SampleChart::OptionsGreeks => {
                Box::new(BarChart::new(&title, OPTIONS_GREEKS.clone(), WIDGET_BOX, WIDGET_MARGINS))
            }
            SampleChart::AssetAllocation => Box::new(DonutChart::new(&title, ASSET_ALLOCATION.clone(), DonutSize::Lg)),
            SampleChart::ExposureByAsset => Box::new(DonutChart::new(&title, EXPOSURE_BY_ASSET.clone(), DonutSize::Md)),
            SampleChart::StrategySplit => Box::new(DonutChart::new(&title, STRATEGY_SPLIT.clone(), DonutSize::Sm)),
            SampleChart::CorrelationPair => {
                Box::new(ScatterChart::new(&title, CORRELATION_PAIRS.clone(), GRID_BOX, GRID_MARGINS, 24.0))
            }
            SampleChart::VolSurface => Box::new(HeatmapChart::new(&title, VOL_SURFACE.clone(), GRID_BOX, GRID_MARGINS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::reveal::RevealAnimation;
    use crate::domain::chart::widgets::RenderState;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn every_sample_renders_finite_geometry() {
        for sample in SampleChart::iter() {
            let widget = sample.build();
            let reveal = widget.reveal().into_settled();
            let scene = widget.render_static(&RenderState::new(Some(0), &reveal));
            assert!(scene.is_finite(), "{sample} produced NaN geometry");
            assert!(!scene.is_empty());
        }
    }

    #[test]
    fn ids_are_kebab_case() {
        assert_eq!(SampleChart::from_str("yield-curve").ok(), Some(SampleChart::YieldCurve));
        assert_eq!(SampleChart::VolSurface.as_ref(), "vol-surface");
    }

    #[test]
    fn payoff_is_flat_below_strike() {
        assert_eq!(CALL_PAYOFF.len(), 16);
        assert_eq!(CALL_PAYOFF.points()[7].y, 0.0);
        assert_eq!(CALL_PAYOFF.points()[15].y, 15.0);
    }

    #[test]
    fn path_charts_measure_their_reveal_path() {
        let widget = SampleChart::YieldCurve.build();
        assert!(widget.primary_path_length() > 0.0);
        assert_eq!(widget.reveal(), RevealAnimation::path_draw(1200.0));
    }
}
