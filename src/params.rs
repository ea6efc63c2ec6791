/*
 * Simulation Parameters Module
 *
 * This module defines the tunable parameter blocks for both simulations.
 * The host's UI panel edits these fields directly between ticks; the
 * population managers push them into every agent at the start of its
 * update, so any valid value takes effect without re-initialization.
 * Slider ranges for the UI live here as well.
 */

use crate::boid::{Boid, Role, SteeringWeights};
use crate::error::{Error, Result};
use crate::particle::ParticleTemplate;
use crate::{BOID_MAX_SPEED, BOID_SIZE, BOID_VISION};

// Parameters for the boid environment that can be adjusted via UI
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentParams {
    // Prey
    pub boid_size: f32,
    pub boid_max_speed: f32,
    pub boid_vision: f32,
    pub separation: f32,
    pub alignment: f32,
    pub cohesion: f32,
    // Predators
    pub pred_size: f32,
    pub pred_max_speed: f32,
    pub pred_vision: f32,
    pub chase: f32,
    // Obstacles
    pub obstacle_size: f32,
    // Which role a host click spawns
    pub spawn_predator: bool,
}

impl Default for EnvironmentParams {
    fn default() -> Self {
        Self {
            boid_size: BOID_SIZE,
            boid_max_speed: BOID_MAX_SPEED,
            boid_vision: BOID_VISION,
            separation: 1.0,
            alignment: 1.0,
            cohesion: 1.0,
            pred_size: 12.0,
            pred_max_speed: 7.5,
            pred_vision: 120.0,
            chase: 1.0,
            obstacle_size: 25.0,
            spawn_predator: false,
        }
    }
}

impl EnvironmentParams {
    // Copy the current tunables for the boid's role into it
    pub fn configure(&self, boid: &mut Boid) {
        match boid.role {
            Role::Prey => {
                boid.size = self.boid_size;
                boid.max_speed = self.boid_max_speed;
                boid.vision_radius = self.boid_vision;
            }
            Role::Predator => {
                boid.size = self.pred_size;
                boid.max_speed = self.pred_max_speed;
                boid.vision_radius = self.pred_vision;
            }
        }
        boid.weights = self.weights();
    }

    pub fn weights(&self) -> SteeringWeights {
        SteeringWeights {
            separation: self.separation,
            alignment: self.alignment,
            cohesion: self.cohesion,
            chase: self.chase,
        }
    }

    pub fn spawn_role(&self) -> Role {
        if self.spawn_predator {
            Role::Predator
        } else {
            Role::Prey
        }
    }

    pub fn max_speed_for(&self, role: Role) -> f32 {
        match role {
            Role::Prey => self.boid_max_speed,
            Role::Predator => self.pred_max_speed,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_boid_size_range() -> std::ops::RangeInclusive<f32> {
        5.0..=15.0
    }

    pub fn get_boid_speed_range() -> std::ops::RangeInclusive<f32> {
        1.0..=20.0
    }

    pub fn get_weight_range() -> std::ops::RangeInclusive<f32> {
        0.1..=5.0
    }

    pub fn get_vision_range() -> std::ops::RangeInclusive<f32> {
        10.0..=250.0
    }

    pub fn get_pred_size_range() -> std::ops::RangeInclusive<f32> {
        5.0..=25.0
    }

    pub fn get_pred_speed_range() -> std::ops::RangeInclusive<f32> {
        1.0..=15.0
    }

    pub fn get_chase_range() -> std::ops::RangeInclusive<f32> {
        1.0..=50.0
    }

    pub fn get_obstacle_size_range() -> std::ops::RangeInclusive<f32> {
        5.0..=50.0
    }
}

// Initial composition of the gas tank
#[derive(Debug, Clone, PartialEq)]
pub struct GasParams {
    pub templates: Vec<ParticleTemplate>,
    // How many particles of each template to spawn at start
    pub counts: Vec<usize>,
}

impl Default for GasParams {
    fn default() -> Self {
        Self {
            templates: vec![
                ParticleTemplate { mass: 10.0, radius: 7.0, color: [0, 0, 255] },
                ParticleTemplate { mass: 25.0, radius: 10.0, color: [0, 255, 0] },
                ParticleTemplate { mass: 50.0, radius: 13.0, color: [255, 0, 0] },
            ],
            counts: vec![25, 25, 25],
        }
    }
}

impl GasParams {
    // Build from parallel lists of counts, masses and radii, cycling colours
    pub fn from_lists(counts: &[usize], masses: &[f32], radii: &[f32]) -> Result<Self> {
        const PALETTE: [[u8; 3]; 3] = [[0, 0, 255], [0, 255, 0], [255, 0, 0]];

        if counts.len() != masses.len() || masses.len() != radii.len() {
            return Err(Error::InvalidParam(format!(
                "gas lists differ in length: {} counts, {} masses, {} radii",
                counts.len(),
                masses.len(),
                radii.len()
            )));
        }

        let templates = masses
            .iter()
            .zip(radii)
            .enumerate()
            .map(|(i, (&mass, &radius))| ParticleTemplate::new(mass, radius, PALETTE[i % PALETTE.len()]))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            templates,
            counts: counts.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;

    #[test]
    fn configure_uses_role_specific_values() {
        let params = EnvironmentParams {
            boid_size: 9.0,
            pred_size: 20.0,
            chase: 3.0,
            ..EnvironmentParams::default()
        };

        let mut prey = Boid::prey(Vector::ZERO, Vector::ZERO);
        let mut predator = Boid::predator(Vector::ZERO, Vector::ZERO);
        params.configure(&mut prey);
        params.configure(&mut predator);

        assert_eq!(prey.size, 9.0);
        assert_eq!(predator.size, 20.0);
        assert_eq!(predator.max_speed, params.pred_max_speed);
        assert_eq!(prey.weights.chase, 3.0);
    }

    #[test]
    fn spawn_role_follows_toggle() {
        let mut params = EnvironmentParams::default();
        assert_eq!(params.spawn_role(), Role::Prey);
        params.spawn_predator = true;
        assert_eq!(params.spawn_role(), Role::Predator);
    }

    #[test]
    fn gas_params_from_lists() -> Result<()> {
        let params = GasParams::from_lists(&[5, 6], &[1.0, 2.0], &[3.0, 4.0])?;
        assert_eq!(params.templates.len(), 2);
        assert_eq!(params.templates[1].radius, 4.0);
        assert_eq!(params.counts, vec![5, 6]);
        assert!(GasParams::from_lists(&[1], &[0.0], &[1.0]).is_err());
        Ok(())
    }

    #[test]
    fn gas_params_reject_mismatched_lists() {
        let short_radii = GasParams::from_lists(&[5, 6], &[1.0, 2.0], &[3.0]);
        assert!(matches!(short_radii, Err(Error::InvalidParam(_))));
        let extra_count = GasParams::from_lists(&[5, 6, 7], &[1.0, 2.0], &[3.0, 4.0]);
        assert!(matches!(extra_count, Err(Error::InvalidParam(_))));
    }
}
