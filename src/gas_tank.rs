/*
 * Gas Tank Module
 *
 * Population manager for the ideal gas model. Mirrors the boid environment's
 * tick: every particle first bounces off the walls, then each overlapping
 * pair exchanges momentum, then everything moves ballistically.
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::boundary::{BoundaryPolicy, Bounds};
use crate::collision;
use crate::error::{Error, Result};
use crate::params::GasParams;
use crate::particle::{Particle, ParticleTemplate};
use crate::vector::Vector;

pub const TANK_SPAWN_MARGIN: f32 = 10.0;

pub struct GasTank<R: Rng = StdRng> {
    bounds: Bounds,
    particle_types: Vec<ParticleTemplate>,
    current_type: usize,
    particles: Vec<Particle>,
    rng: R,
}

impl GasTank<StdRng> {
    pub fn seeded(bounds: Bounds, params: &GasParams, seed: u64) -> Result<Self> {
        GasTank::new(bounds, params, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GasTank<R> {
    /// Build a tank and spawn the initial particles of every template.
    ///
    /// Errors with `Error::InvalidParam` when no template is given.
    pub fn new(bounds: Bounds, params: &GasParams, rng: R) -> Result<Self> {
        if params.templates.is_empty() {
            return Err(Error::InvalidParam("gas tank needs at least one particle template".into()));
        }

        let mut tank = Self {
            bounds,
            particle_types: params.templates.clone(),
            current_type: 0,
            particles: Vec::new(),
            rng,
        };
        tank.initialize_particles(&params.counts);
        Ok(tank)
    }

    fn initialize_particles(&mut self, counts: &[usize]) {
        for (kind, &count) in counts.iter().enumerate().take(self.particle_types.len()) {
            for _ in 0..count {
                let position = self.bounds.random_point(&mut self.rng, TANK_SPAWN_MARGIN);
                let particle = self.spawn(kind, position);
                self.particles.push(particle);
            }
        }
        info!(particles = self.particles.len(), types = self.particle_types.len(), "Initialized gas tank");
    }

    // Advance one tick
    pub fn update(&mut self) {
        for i in 0..self.particles.len() {
            BoundaryPolicy::Bounce.apply(&mut self.particles[i], &self.bounds);
            self.check_particle_collisions(i);
        }

        for particle in &mut self.particles {
            particle.update_position();
        }
    }

    // Resolve collisions between particle `index` and every later particle
    fn check_particle_collisions(&mut self, index: usize) {
        for other in (index + 1)..self.particles.len() {
            let a = self.particles[index];
            let b = self.particles[other];
            if collision::overlapping(&a, &b) {
                let (va, vb) = collision::resolve(&a, &b);
                self.particles[index].velocity = va;
                self.particles[other].velocity = vb;
            }
        }
    }

    // Spawn a particle of the current type at a point strictly inside the tank
    pub fn add_particle(&mut self, point: Vector) {
        if !self.bounds.contains(&point) {
            return;
        }
        let particle = self.spawn(self.current_type, point);
        self.particles.push(particle);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        info!("Cleared gas tank");
    }

    // Cycle the type used by add_particle
    pub fn change_current_particle(&mut self) {
        self.current_type = (self.current_type + 1) % self.particle_types.len();
        debug!(current = self.current_type, "Changed current particle type");
    }

    pub fn current_particle(&self) -> &ParticleTemplate {
        &self.particle_types[self.current_type]
    }

    pub fn current_index(&self) -> usize {
        self.current_type
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_types(&self) -> &[ParticleTemplate] {
        &self.particle_types
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> Vector {
        self.particles
            .iter()
            .fold(Vector::ZERO, |sum, particle| sum + particle.momentum())
    }

    // Velocity components are uniform in [-radius, radius]
    fn spawn(&mut self, kind: usize, position: Vector) -> Particle {
        let template = self.particle_types[kind];
        let velocity = Vector::xy(
            self.rng.gen_range(-template.radius..=template.radius),
            self.rng.gen_range(-template.radius..=template.radius),
        );
        Particle::from_template(&template, kind, position, velocity)
    }

    #[cfg(test)]
    fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tank(params: &GasParams) -> Result<GasTank> {
        GasTank::seeded(Bounds::new(Vector::ZERO, 600.0, 400.0), params, 11)
    }

    fn empty_params() -> GasParams {
        GasParams {
            counts: vec![0, 0, 0],
            ..GasParams::default()
        }
    }

    #[test]
    fn default_tank_spawns_every_type() -> Result<()> {
        let tank = tank(&GasParams::default())?;
        assert_eq!(tank.particles().len(), 75);
        for kind in 0..3 {
            assert_eq!(tank.particles().iter().filter(|p| p.kind == kind).count(), 25);
        }
        for p in tank.particles() {
            assert!(p.velocity.x.abs() <= p.radius);
            assert!(p.velocity.y.abs() <= p.radius);
        }
        Ok(())
    }

    #[test]
    fn no_templates_is_an_error() {
        let params = GasParams { templates: vec![], counts: vec![] };
        assert!(tank(&params).is_err());
    }

    #[test]
    fn head_on_pair_exchanges_velocities_then_moves() -> Result<()> {
        let mut tank = tank(&empty_params())?;
        tank.push(Particle::new(Vector::xy(100.0, 100.0), Vector::xy(1.0, 0.0), 1.0, 1.0)?);
        tank.push(Particle::new(Vector::xy(101.5, 100.0), Vector::xy(-1.0, 0.0), 1.0, 1.0)?);
        tank.update();

        let p = tank.particles();
        assert_eq!(p[0].velocity, Vector::xy(-1.0, 0.0));
        assert_eq!(p[1].velocity, Vector::xy(1.0, 0.0));
        assert_eq!(p[0].position, Vector::xy(99.0, 100.0));
        assert_eq!(p[1].position, Vector::xy(102.5, 100.0));
        Ok(())
    }

    #[test]
    fn particle_bounces_off_wall() -> Result<()> {
        let mut tank = tank(&empty_params())?;
        tank.push(Particle::new(Vector::xy(3.0, 200.0), Vector::xy(-2.0, 0.0), 1.0, 5.0)?);
        tank.update();
        assert_eq!(tank.particles()[0].velocity, Vector::xy(2.0, 0.0));
        assert_eq!(tank.particles()[0].position, Vector::xy(5.0, 200.0));
        Ok(())
    }

    #[test]
    fn add_particle_uses_current_type() -> Result<()> {
        let mut tank = tank(&empty_params())?;
        tank.add_particle(Vector::xy(50.0, 50.0));
        tank.change_current_particle();
        tank.add_particle(Vector::xy(60.0, 60.0));
        tank.add_particle(Vector::xy(-10.0, 60.0));

        let kinds: Vec<usize> = tank.particles().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![0, 1]);
        assert_eq!(tank.current_particle().mass, 25.0);
        Ok(())
    }

    #[test]
    fn change_current_particle_wraps() -> Result<()> {
        let mut tank = tank(&empty_params())?;
        for _ in 0..3 {
            tank.change_current_particle();
        }
        assert_eq!(tank.current_index(), 0);
        Ok(())
    }

    #[test]
    fn clear_removes_particles() -> Result<()> {
        let mut tank = tank(&GasParams::default())?;
        tank.clear();
        assert!(tank.particles().is_empty());
        Ok(())
    }
}
