use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::domain::chart::value_objects::{Color, PixelPoint};

use super::field::ViewportSize;
use super::frame::DrawCommand;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// CSS px per frame, upwards.
    pub fall_speed: f64,
    pub radius: f64,
}

impl Particle {
    /// Size-dependent opacity: larger particles are fainter.
    pub fn alpha(&self) -> f64 {
        (0.12 - self.radius * 0.04).max(0.0)
    }
}

/// Fixed-size particle pool. Count never changes after construction.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl ParticlePool {
    pub fn new(count: usize, seed: u64, size: ViewportSize) -> Self {
        let mut pool = Self {
            particles: vec![Particle { x: 0.0, y: 0.0, fall_speed: 0.0, radius: 0.0 }; count],
            rng: SmallRng::seed_from_u64(seed),
        };
        pool.reseed(size);
        pool
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Scatter every particle over `size` in place.
    pub fn reseed(&mut self, size: ViewportSize) {
        for particle in &mut self.particles {
            particle.x = self.rng.random::<f64>() * size.width;
            particle.y = self.rng.random::<f64>() * size.height;
            particle.fall_speed = 0.4 + self.rng.random::<f64>() * 0.6;
            particle.radius = 1.0 + self.rng.random::<f64>() * 2.0;
        }
    }

    /// Move every particle up by its speed; one that leaves the top re-enters
    /// at the bottom at a random x.
    pub fn step(&mut self, size: ViewportSize) {
        for particle in &mut self.particles {
            particle.y -= particle.fall_speed;
            if particle.y < -particle.radius {
                particle.y = size.height + particle.radius;
                particle.x = self.rng.random::<f64>() * size.width;
            }
        }
    }

    pub fn push_draw(&self, out: &mut Vec<DrawCommand>) {
        out.extend(self.particles.iter().map(|p| DrawCommand::FillCircle {
            center: PixelPoint::new(p.x, p.y),
            radius: p.radius,
            color: Color::ACCENT.with_alpha(p.alpha() as f32),
        }));
    }
}
