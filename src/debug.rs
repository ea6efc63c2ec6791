/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and population statistics to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Population counts for the active scene
 * - Prey caught so far and total kinetic energy of the gas
 */

use std::time::Duration;

use crate::environment::Environment;
use crate::gas_tank::GasTank;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub tick: u64,
    pub prey: usize,
    pub predators: usize,
    pub obstacles: usize,
    pub caught_total: usize,
    pub particles: usize,
    pub kinetic_energy: f32,
}

impl DebugInfo {
    // Pull the latest counts out of both simulations
    pub fn refresh(&mut self, environment: &Environment, tank: &GasTank) {
        self.tick = environment.tick();
        self.prey = environment.prey().len();
        self.predators = environment.predators().len();
        self.obstacles = environment.obstacles().len();
        self.caught_total = environment.caught_total();
        self.particles = tank.particles().len();
        self.kinetic_energy = tank.total_kinetic_energy();
    }
}
