use derive_more::Constructor;

use crate::domain::logging::{LogComponent, get_time_provider};
use crate::log_debug;

use super::config::{FieldConfig, FieldVariant};
use super::flow::{push_center_stream, push_flow_lines, push_scroll_grid};
use super::frame::DrawCommand;
use super::particles::ParticlePool;
use super::ribbons::push_ribbons;

/// CSS size of the area the field covers.
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    /// Negative or non-finite dimensions collapse to zero.
    pub fn sanitized(self) -> Self {
        let clean = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self { width: clean(self.width), height: clean(self.height) }
    }
}

/// Device pixel size of the backing store plus the CSS -> device scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackingResolution {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl BackingResolution {
    /// `css size x min(device_pixel_ratio, max_ratio)`. A missing or bogus
    /// ratio counts as 1.
    pub fn compute(size: ViewportSize, device_pixel_ratio: f64, max_ratio: f64) -> Self {
        let size = size.sanitized();
        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 };
        let scale = ratio.min(max_ratio.max(1.0));
        Self { width: (size.width * scale).floor() as u32, height: (size.height * scale).floor() as u32, scale }
    }
}

/// State of one mounted procedural background.
#[derive(Debug, Clone)]
pub struct AnimationField {
    config: FieldConfig,
    variant: FieldVariant,
    viewport: ViewportSize,
    backing: BackingResolution,
    clock_phase: f64,
    scroll_offset: f64,
    particles: ParticlePool,
}

impl AnimationField {
    pub fn new(variant: FieldVariant, config: FieldConfig, viewport: ViewportSize, device_pixel_ratio: f64) -> Self {
        let viewport = viewport.sanitized();
        let seed = config.seed.unwrap_or_else(|| get_time_provider().current_timestamp());
        let particle_count = if variant == FieldVariant::Flow { config.particle_count } else { 0 };
        Self {
            config,
            variant,
            viewport,
            backing: BackingResolution::compute(viewport, device_pixel_ratio, config.max_pixel_ratio),
            clock_phase: 0.0,
            scroll_offset: 0.0,
            particles: ParticlePool::new(particle_count, seed, viewport),
        }
    }

    pub fn variant(&self) -> FieldVariant {
        self.variant
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn backing(&self) -> BackingResolution {
        self.backing
    }

    pub fn clock_phase(&self) -> f64 {
        self.clock_phase
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    /// Recompute the backing store and reseed particles over the new size.
    pub fn resize(&mut self, viewport: ViewportSize, device_pixel_ratio: f64) -> BackingResolution {
        self.viewport = viewport.sanitized();
        self.backing = BackingResolution::compute(self.viewport, device_pixel_ratio, self.config.max_pixel_ratio);
        self.particles.reseed(self.viewport);
        log_debug!(
            LogComponent::Domain("AnimationField"),
            "resize {}x{} -> backing {}x{} @{}",
            self.viewport.width,
            self.viewport.height,
            self.backing.width,
            self.backing.height,
            self.backing.scale
        );
        self.backing
    }

    /// Only the scroll-linked variant reads this. Non-finite offsets are ignored.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        if offset.is_finite() {
            self.scroll_offset = offset;
        }
    }

    /// Build one frame into `out` and advance the clock.
    pub fn tick(&mut self, out: &mut Vec<DrawCommand>) {
        out.clear();
        let size = self.viewport;
        let t = self.clock_phase;
        out.push(DrawCommand::Clear { width: size.width, height: size.height });

        if self.variant == FieldVariant::Flow {
            let scroll = self.scroll_offset;
            push_flow_lines(out, self.config.flow_line_count, scroll, t, size);
            push_scroll_grid(out, self.config.grid_step, scroll, t, size);
            push_center_stream(out, scroll, t, size);
        }
        push_ribbons(out, self.config.ribbon_count, t, size);

        if !self.particles.is_empty() {
            self.particles.step(size);
            self.particles.push_draw(out);
        }

        self.clock_phase += self.config.phase_step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_caps_pixel_ratio() {
        let size = ViewportSize::new(800.0, 600.0);
        assert_eq!(BackingResolution::compute(size, 3.0, 2.0), BackingResolution { width: 1600, height: 1200, scale: 2.0 });
        assert_eq!(BackingResolution::compute(size, f64::NAN, 2.0).scale, 1.0);
        assert_eq!(BackingResolution::compute(size, 1.5, 2.0).width, 1200);
    }

    #[test]
    fn tick_advances_phase_by_step() {
        let mut field =
            AnimationField::new(FieldVariant::Aurora, FieldConfig::aurora(), ViewportSize::new(300.0, 200.0), 1.0);
        let mut out = Vec::new();
        field.tick(&mut out);
        field.tick(&mut out);
        assert!((field.clock_phase() - 0.03).abs() < 1e-12);
        assert!(matches!(out[0], DrawCommand::Clear { .. }));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn aurora_ignores_particle_count() {
        let config = FieldConfig { particle_count: 10, ..FieldConfig::aurora() };
        let field = AnimationField::new(FieldVariant::Aurora, config, ViewportSize::new(10.0, 10.0), 1.0);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn flow_frame_has_every_layer() {
        let config = FieldConfig::flow().with_seed(9);
        let mut field = AnimationField::new(FieldVariant::Flow, config, ViewportSize::new(300.0, 120.0), 2.0);
        field.set_scroll_offset(90.0);
        field.set_scroll_offset(f64::NAN);
        assert_eq!(field.scroll_offset(), 90.0);

        let mut out = Vec::new();
        field.tick(&mut out);
        let circles = out.iter().filter(|c| matches!(c, DrawCommand::FillCircle { .. })).count();
        assert_eq!(circles, 28);
        // clear + 14 lines + grid (-30, 30, 90, 150) + stream + 2 ribbons + 28 particles
        assert_eq!(out.len(), 1 + 14 + 4 + 1 + 2 + 28);
    }
}
