/*
 * Particle Module
 *
 * Rigid circular gas particles. Each particle is stamped out of a
 * ParticleTemplate (mass, radius, colour) and remembers which one, so the
 * host can group particles by type for statistics.
 */

use crate::boundary::Contained;
use crate::error::{Error, Result};
use crate::vector::{Axis, Vector};
use crate::Rgb;

/// A particle "type": every particle spawned from it shares mass, radius and colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleTemplate {
    pub mass: f32,
    pub radius: f32,
    pub color: Rgb,
}

impl ParticleTemplate {
    /// Errors with `Error::InvalidParam` if mass or radius is not finite and positive.
    pub fn new(mass: f32, radius: f32, color: Rgb) -> Result<Self> {
        validate_body(mass, radius)?;
        Ok(Self { mass, radius, color })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    pub mass: f32,
    pub radius: f32,
    pub color: Rgb,
    /// Index of the template this particle was spawned from.
    pub kind: usize,
}

impl Particle {
    pub fn new(position: Vector, velocity: Vector, mass: f32, radius: f32) -> Result<Self> {
        validate_body(mass, radius)?;
        Ok(Self {
            position,
            velocity,
            mass,
            radius,
            color: [255, 255, 255],
            kind: 0,
        })
    }

    pub fn from_template(template: &ParticleTemplate, kind: usize, position: Vector, velocity: Vector) -> Self {
        Self {
            position,
            velocity,
            mass: template.mass,
            radius: template.radius,
            color: template.color,
            kind,
        }
    }

    // Ballistic step: one tick of motion at the current velocity
    pub fn update_position(&mut self) {
        self.position += self.velocity;
    }

    pub fn wall_collide(&mut self, axis: Axis) {
        self.velocity[axis] = -self.velocity[axis];
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

impl Contained for Particle {
    fn position(&self) -> Vector {
        self.position
    }

    fn velocity_mut(&mut self) -> &mut Vector {
        &mut self.velocity
    }

    fn margin(&self) -> f32 {
        self.radius
    }

    fn wall_collide(&mut self, axis: Axis) {
        Particle::wall_collide(self, axis);
    }
}

fn validate_body(mass: f32, radius: f32) -> Result<()> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(Error::InvalidParam("mass must be finite and > 0".into()));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidParam("radius must be finite and > 0".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_position_moves_by_velocity() -> Result<()> {
        let mut p = Particle::new(Vector::xy(1.0, 1.0), Vector::xy(0.5, 0.5), 1.0, 1.0)?;
        p.update_position();
        assert_eq!(p.position, Vector::xy(1.5, 1.5));
        Ok(())
    }

    #[test]
    fn invalid_bodies_rejected() {
        let err = Particle::new(Vector::ZERO, Vector::ZERO, 0.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("mass"));
        let err = ParticleTemplate::new(1.0, -2.0, [0, 0, 0]).unwrap_err();
        assert!(err.to_string().contains("radius"));
        assert!(ParticleTemplate::new(f32::NAN, 1.0, [0, 0, 0]).is_err());
    }

    #[test]
    fn kinetic_energy_and_momentum() -> Result<()> {
        let p = Particle::new(Vector::ZERO, Vector::xy(3.0, 4.0), 2.0, 1.0)?;
        assert!((p.kinetic_energy() - 25.0).abs() < 1e-5);
        assert_eq!(p.momentum(), Vector::xy(6.0, 8.0));
        Ok(())
    }

    #[test]
    fn template_stamps_its_properties() -> Result<()> {
        let template = ParticleTemplate::new(25.0, 10.0, [0, 255, 0])?;
        let p = Particle::from_template(&template, 1, Vector::xy(4.0, 4.0), Vector::ZERO);
        assert_eq!(p.mass, 25.0);
        assert_eq!(p.radius, 10.0);
        assert_eq!(p.color, [0, 255, 0]);
        assert_eq!(p.kind, 1);
        Ok(())
    }
}
