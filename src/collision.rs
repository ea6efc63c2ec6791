/*
 * Collision Module
 *
 * Elastic collision between two rigid circles of possibly different mass.
 * Pure functions: both post-collision velocities are computed from the
 * pre-collision state and nothing is written back here.
 */

use crate::particle::Particle;
use crate::vector::Vector;

// Circles overlap (or touch closer than the sum of their radii)
pub fn overlapping(a: &Particle, b: &Particle) -> bool {
    a.position.distance(&b.position) < a.radius + b.radius
}

// Velocity of `a` after colliding with `b`. Unchanged unless the two are approaching.
pub fn collide_velocity(a: &Particle, b: &Particle) -> Vector {
    let relative_velocity = a.velocity - b.velocity;
    let relative_position = a.position - b.position;

    let approach = relative_velocity.dot(&relative_position);
    if approach >= 0.0 {
        return a.velocity;
    }

    // approach < 0 implies the positions differ, so this is never 0/0
    let projection = approach / relative_position.length_squared();
    let mass_factor = 2.0 * b.mass / (a.mass + b.mass);

    a.velocity - relative_position * (mass_factor * projection)
}

/// New velocities for both particles, each from the other's pre-collision state.
pub fn resolve(a: &Particle, b: &Particle) -> (Vector, Vector) {
    (collide_velocity(a, b), collide_velocity(b, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    fn unit(x: f32, y: f32, vx: f32, vy: f32) -> Result<Particle> {
        Particle::new(Vector::xy(x, y), Vector::xy(vx, vy), 1.0, 1.0)
    }

    #[test]
    fn head_on_equal_masses_swap_velocities() -> Result<()> {
        let a = unit(0.0, 0.0, 1.0, 0.0)?;
        let b = unit(2.0, 0.0, -1.0, 0.0)?;
        let (va, vb) = resolve(&a, &b);
        assert_eq!(va, Vector::xy(-1.0, 0.0));
        assert_eq!(vb, Vector::xy(1.0, 0.0));
        Ok(())
    }

    #[test]
    fn same_velocity_is_a_noop() -> Result<()> {
        let a = unit(0.0, 0.0, 1.0, 0.0)?;
        let b = unit(2.0, 0.0, 1.0, 0.0)?;
        assert_eq!(collide_velocity(&a, &b), Vector::xy(1.0, 0.0));
        Ok(())
    }

    #[test]
    fn separating_particles_are_untouched() -> Result<()> {
        let a = unit(20.0, 20.0, 0.1, 0.0)?;
        let b = unit(21.4, 21.4, 0.1, 0.0)?;
        let (va, vb) = resolve(&a, &b);
        assert_eq!(va, a.velocity);
        assert_eq!(vb, b.velocity);
        Ok(())
    }

    #[test]
    fn diagonal_glancing_collision() -> Result<()> {
        let a = unit(20.0, 20.0, 0.1, 0.0)?;
        let b = unit(21.4, 21.4, -0.1, 0.0)?;
        let (va, vb) = resolve(&a, &b);
        assert!(va.x.abs() < 5e-5);
        assert!((va.y + 0.1).abs() < 5e-5);
        assert!(vb.x.abs() < 5e-5);
        assert!((vb.y - 0.1).abs() < 5e-5);
        Ok(())
    }

    #[test]
    fn unequal_masses_conserve_momentum_and_energy() -> Result<()> {
        let a = Particle::new(Vector::xy(0.0, 0.0), Vector::xy(3.0, 1.0), 10.0, 7.0)?;
        let b = Particle::new(Vector::xy(12.0, 5.0), Vector::xy(-2.0, 0.5), 50.0, 13.0)?;
        let (va, vb) = resolve(&a, &b);

        let before = a.momentum() + b.momentum();
        let after = va * a.mass + vb * b.mass;
        assert!((before - after).length() < 1e-3);

        let ke_before = a.kinetic_energy() + b.kinetic_energy();
        let ke_after = 0.5 * a.mass * va.length_squared() + 0.5 * b.mass * vb.length_squared();
        assert!((ke_before - ke_after).abs() < 1e-2);
        Ok(())
    }

    #[test]
    fn overlap_uses_radius_sum() -> Result<()> {
        let a = unit(0.0, 0.0, 0.0, 0.0)?;
        assert!(overlapping(&a, &unit(1.5, 0.0, 0.0, 0.0)?));
        assert!(!overlapping(&a, &unit(2.0, 0.0, 0.0, 0.0)?));
        Ok(())
    }
}
