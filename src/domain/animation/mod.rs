//! Procedural background animation: pure per-frame state and geometry.

pub mod config;
pub mod field;
pub mod flow;
pub mod frame;
pub mod particles;
pub mod ribbons;

pub use config::{FieldConfig, FieldVariant};
pub use field::{AnimationField, BackingResolution, ViewportSize};
pub use frame::{DrawCommand, DrawSurface, GradientStop, NullSurface, RecordingSurface, StrokeStyle};
pub use particles::{Particle, ParticlePool};
