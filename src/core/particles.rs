// Ambient particle field: a fixed population of dots that drift upward and
// re-enter from below once they leave the top edge.
//
// The field owns its particles exclusively. Resizing respawns every particle
// in place and stepping recycles particles that cross the top margin, so the
// population never grows or shrinks after construction.

use super::constants::*;
use super::error::{CoreError, CoreResult};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleColor {
    Gold,
    Flamingo,
}

impl ParticleColor {
    pub fn hex(self) -> &'static str {
        match self {
            ParticleColor::Gold => GOLD_HEX,
            ParticleColor::Flamingo => FLAMINGO_HEX,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
    pub color: ParticleColor,
    /// Number of times this particle has wrapped from the top back to the bottom.
    pub wraps: u32,
}

impl Particle {
    /// Drift upward by `speed`. Returns true when the particle crossed the top
    /// margin and was moved back below the bottom edge.
    #[inline]
    fn advance(&mut self, rng: &mut StdRng, width: f32, height: f32, margin: f32) -> bool {
        self.position.y -= self.speed;
        if self.position.y < -margin {
            self.position.y = height + margin;
            self.position.x = sample_upto(rng, width);
            self.wraps += 1;
            return true;
        }
        false
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub size: (f32, f32),
    pub speed: (f32, f32),
    pub opacity: (f32, f32),
    pub spawn_depth: f32,
    pub wrap_margin: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            size: (PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            speed: (PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX),
            opacity: (PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_MAX),
            spawn_depth: PARTICLE_SPAWN_DEPTH,
            wrap_margin: PARTICLE_WRAP_MARGIN,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.count == 0 {
            return Err(CoreError::EmptyField);
        }
        check_range("size", self.size)?;
        check_range("speed", self.speed)?;
        check_range("opacity", self.opacity)?;
        check_range("spawn depth", (0.0, self.spawn_depth))?;
        check_range("wrap margin", (0.0, self.wrap_margin))?;
        Ok(())
    }
}

fn check_range(name: &'static str, (lo, hi): (f32, f32)) -> CoreResult<()> {
    if lo.is_finite() && hi.is_finite() && lo <= hi {
        Ok(())
    } else {
        Err(CoreError::InvalidRange { name, lo, hi })
    }
}

pub struct ParticleField {
    config: ParticleConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
    total_wraps: u64,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, width: f32, height: f32, seed: u64) -> CoreResult<Self> {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: ParticleConfig, width: f32, height: f32) -> CoreResult<Self> {
        Self::with_rng(config, width, height, StdRng::from_entropy())
    }

    fn with_rng(config: ParticleConfig, width: f32, height: f32, rng: StdRng) -> CoreResult<Self> {
        config.validate()?;
        let mut field = Self {
            particles: Vec::with_capacity(config.count),
            config,
            width: 0.0,
            height: 0.0,
            rng,
            total_wraps: 0,
        };
        field.resize(width, height);
        Ok(field)
    }

    /// Adopt new surface dimensions and respawn every particle below the new
    /// bottom edge.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let Self {
            config,
            particles,
            rng,
            width,
            height,
            ..
        } = self;
        if particles.is_empty() {
            particles.extend((0..config.count).map(|_| spawn(rng, config, *width, *height)));
        } else {
            for p in particles.iter_mut() {
                *p = spawn(rng, config, *width, *height);
            }
        }
    }

    /// Advance every particle one frame. Returns how many wrapped.
    pub fn step(&mut self) -> usize {
        let (width, height, margin) = (self.width, self.height, self.config.wrap_margin);
        let mut wrapped = 0;
        for p in self.particles.iter_mut() {
            if p.advance(&mut self.rng, width, height, margin) {
                wrapped += 1;
            }
        }
        self.total_wraps += wrapped as u64;
        wrapped
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view for tuning individual particles. The slice cannot change
    /// the population size.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn total_wraps(&self) -> u64 {
        self.total_wraps
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }
}

#[inline]
fn sample_upto(rng: &mut StdRng, upper: f32) -> f32 {
    if upper > 0.0 {
        rng.gen_range(0.0..upper)
    } else {
        0.0
    }
}

fn spawn(rng: &mut StdRng, config: &ParticleConfig, width: f32, height: f32) -> Particle {
    let x = sample_upto(rng, width);
    let y = height + sample_upto(rng, config.spawn_depth);
    Particle {
        position: Vec2::new(x, y),
        size: rng.gen_range(config.size.0..=config.size.1),
        speed: rng.gen_range(config.speed.0..=config.speed.1),
        opacity: rng.gen_range(config.opacity.0..=config.opacity.1),
        color: if rng.gen_bool(0.5) {
            ParticleColor::Gold
        } else {
            ParticleColor::Flamingo
        },
        wraps: 0,
    }
}
