//! Chart aggregate: datasets, coordinate transforms, reveal and hover state,
//! and the widgets that render them into a [`Scene`].

pub mod dataset;
pub mod hit_test;
pub mod polar;
pub mod reveal;
pub mod samples;
pub mod scene;
pub mod value_objects;
pub mod viewport;
pub mod widgets;

pub use dataset::{ChartDataset, DataPoint};
pub use hit_test::{HoverHit, HoverState, TooltipPayload, nearest_within};
pub use polar::{PolarLayout, START_ANGLE_DEG, Wedge};
pub use reveal::{RevealAnimation, RevealKind, RevealPhase};
pub use samples::SampleChart;
pub use scene::{DashReveal, PathCommand, PathData, Scene, Shape, Stroke, TextAnchor};
pub use value_objects::*;
pub use viewport::{AxisDomain, AxisPadding, AxisRange, ChartViewport, LinearScale, compute_viewport};
pub use widgets::{ChartWidget, RenderState};
