use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::domain::errors::{ConfigResult, MotionError};

/// Which procedural layers a field draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FieldVariant {
    /// Drifting gradient ribbons only.
    #[display(fmt = "aurora")]
    Aurora,
    /// Ribbons plus scroll-linked lines, grid, centre stream and particles.
    #[display(fmt = "flow")]
    Flow,
}

impl FieldVariant {
    pub fn uses_scroll(self) -> bool {
        matches!(self, FieldVariant::Flow)
    }
}

/// Tunables of an animation field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub ribbon_count: usize,
    pub particle_count: usize,
    /// Clock phase increment per frame.
    pub phase_step: f64,
    /// Upper bound on the device pixel ratio used for the backing store.
    pub max_pixel_ratio: f64,
    /// Spacing of the scroll-linked horizontal grid, CSS px.
    pub grid_step: f64,
    pub flow_line_count: usize,
    /// Particle RNG seed. `None` draws one from the host clock.
    pub seed: Option<u64>,
}

impl FieldConfig {
    pub fn aurora() -> Self {
        Self {
            ribbon_count: 2,
            particle_count: 0,
            phase_step: 0.015,
            max_pixel_ratio: 2.0,
            grid_step: 60.0,
            flow_line_count: 14,
            seed: None,
        }
    }

    pub fn flow() -> Self {
        Self { particle_count: 28, phase_step: 0.02, ..Self::aurora() }
    }

    pub fn for_variant(variant: FieldVariant) -> Self {
        match variant {
            FieldVariant::Aurora => Self::aurora(),
            FieldVariant::Flow => Self::flow(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse host JSON over the defaults of `variant`. Unknown keys are rejected.
    pub fn from_json(variant: FieldVariant, json: &str) -> ConfigResult<Self> {
        let overrides: FieldOverrides = serde_json::from_str(json)?;
        let config = overrides.apply(Self::for_variant(variant));
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.phase_step.is_finite() && self.phase_step > 0.0) {
            return Err(MotionError::InvalidConfig(format!("phase_step must be positive, got {}", self.phase_step)));
        }
        if !(self.grid_step.is_finite() && self.grid_step > 0.0) {
            return Err(MotionError::InvalidConfig(format!("grid_step must be positive, got {}", self.grid_step)));
        }
        if !(self.max_pixel_ratio.is_finite() && self.max_pixel_ratio >= 1.0) {
            return Err(MotionError::InvalidConfig(format!(
                "max_pixel_ratio must be at least 1, got {}",
                self.max_pixel_ratio
            )));
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::aurora()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FieldOverrides {
    ribbon_count: Option<usize>,
    particle_count: Option<usize>,
    phase_step: Option<f64>,
    max_pixel_ratio: Option<f64>,
    grid_step: Option<f64>,
    flow_line_count: Option<usize>,
    seed: Option<u64>,
}

impl FieldOverrides {
    fn apply(self, base: FieldConfig) -> FieldConfig {
        FieldConfig {
            ribbon_count: self.ribbon_count.unwrap_or(base.ribbon_count),
            particle_count: self.particle_count.unwrap_or(base.particle_count),
            phase_step: self.phase_step.unwrap_or(base.phase_step),
            max_pixel_ratio: self.max_pixel_ratio.unwrap_or(base.max_pixel_ratio),
            grid_step: self.grid_step.unwrap_or(base.grid_step),
            flow_line_count: self.flow_line_count.unwrap_or(base.flow_line_count),
            seed: self.seed.or(base.seed),
        }
    }
}
