//! Background particle field: a fixed pool of dots drifting upward.
//!
//! Particles are never created or destroyed after construction. A particle
//! that leaves the top edge is recycled to just below the bottom edge at a new
//! random column.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::Rng;

/// Distance past the edges where particles wrap.
pub const EDGE_MARGIN: f64 = 10.0;

pub const MIN_DEPTH: f64 = 0.2;
pub const DEPTH_SPAN: f64 = 0.8;
pub const MIN_SPEED: f64 = 0.2;
pub const SPEED_SPAN: f64 = 0.6;

/// Radius of a particle with depth 1.0, in CSS pixels.
pub const BASE_RADIUS: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Depth in `[0.2, 1.0]`; doubles as opacity and radius scale.
    pub z: f64,
    /// Upward travel per redraw.
    pub speed: f64,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            z: rng.random::<f64>() * DEPTH_SPAN + MIN_DEPTH,
            speed: rng.random::<f64>() * SPEED_SPAN + MIN_SPEED,
        }
    }

    pub fn radius(&self) -> f64 {
        self.z * BASE_RADIUS
    }
}

/// The particle pool and the surface size it wraps within.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(rng, width, height)).collect();
        Self { particles, width, height }
    }

    /// Track a new surface size. Existing particles keep their positions and
    /// wrap against the new bounds from the next step on.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle one redraw.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for p in &mut self.particles {
            p.y -= p.speed;
            if p.y < -EDGE_MARGIN {
                p.y = self.height + EDGE_MARGIN;
                p.x = rng.random::<f64>() * self.width;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
