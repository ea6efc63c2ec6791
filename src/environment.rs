/*
 * Environment Module
 *
 * Owns the prey, predator and obstacle populations and drives one
 * simulation tick at a time:
 *   for every prey, then every predator:
 *     push the current tunables, steer, integrate, contain
 *   then remove every prey a predator has caught.
 *
 * Agents read the live collections while they are being updated, so a boid
 * early in the list has already moved by the time a later boid looks at it.
 * This order dependence is part of the model.
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::boid::{Boid, Role};
use crate::boundary::{BoundaryPolicy, Bounds};
use crate::obstacle::Obstacle;
use crate::params::EnvironmentParams;
use crate::vector::Vector;

// Inset from the walls for randomly placed boids
pub const SPAWN_MARGIN: f32 = 10.0;
// A prey is caught when its centre is within this multiple of the predator's size
pub const CATCH_RADIUS_SCALE: f32 = 1.0;

// Flocking pairs with bounce containment, predator/prey with redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationMode {
    Flocking,
    PredatorPrey,
}

impl SimulationMode {
    pub fn boundary_policy(self) -> BoundaryPolicy {
        match self {
            SimulationMode::Flocking => BoundaryPolicy::Bounce,
            SimulationMode::PredatorPrey => BoundaryPolicy::redirect(),
        }
    }
}

pub struct Environment<R: Rng = StdRng> {
    pub params: EnvironmentParams,
    bounds: Bounds,
    mode: SimulationMode,
    policy: BoundaryPolicy,
    prey: Vec<Boid>,
    predators: Vec<Boid>,
    obstacles: Vec<Obstacle>,
    rng: R,
    tick: u64,
    caught_total: usize,
}

impl Environment<StdRng> {
    // Deterministic environment for a given seed
    pub fn seeded(bounds: Bounds, mode: SimulationMode, seed: u64) -> Self {
        Environment::new(bounds, mode, EnvironmentParams::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Environment<R> {
    pub fn new(bounds: Bounds, mode: SimulationMode, params: EnvironmentParams, rng: R) -> Self {
        Self {
            params,
            bounds,
            mode,
            policy: mode.boundary_policy(),
            prey: Vec::new(),
            predators: Vec::new(),
            obstacles: Vec::new(),
            rng,
            tick: 0,
            caught_total: 0,
        }
    }

    // Replace the policy picked by the mode (e.g. a different redirect speed)
    pub fn with_boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.policy = policy;
        self
    }

    // Spawn the starting populations at random positions inside the spawn margin
    pub fn initialize(&mut self, num_prey: usize, num_predators: usize) {
        for _ in 0..num_prey {
            let position = self.bounds.random_point(&mut self.rng, SPAWN_MARGIN);
            let boid = self.spawn(position, Role::Prey);
            self.prey.push(boid);
        }
        for _ in 0..num_predators {
            let position = self.bounds.random_point(&mut self.rng, SPAWN_MARGIN);
            let boid = self.spawn(position, Role::Predator);
            self.predators.push(boid);
        }

        info!(
            prey = self.prey.len(),
            predators = self.predators.len(),
            mode = ?self.mode,
            "Initialized environment"
        );
    }

    // Advance one tick
    pub fn update(&mut self) {
        for i in 0..self.prey.len() {
            let mut boid = self.prey[i];
            self.params.configure(&mut boid);
            boid.update(&self.prey, &self.predators, &self.obstacles);
            self.policy.apply(&mut boid, &self.bounds);
            self.prey[i] = boid;
        }

        for i in 0..self.predators.len() {
            let mut boid = self.predators[i];
            self.params.configure(&mut boid);
            boid.update(&self.prey, &self.predators, &self.obstacles);
            self.policy.apply(&mut boid, &self.bounds);
            self.predators[i] = boid;
        }

        self.check_predator_catch();
        self.tick += 1;

        trace!(
            tick = self.tick,
            prey = self.prey.len(),
            predators = self.predators.len(),
            "Environment tick"
        );
    }

    // Remove every prey within catch range of any predator. Returns how many were caught.
    pub fn check_predator_catch(&mut self) -> usize {
        let before = self.prey.len();

        for predator in &self.predators {
            let catch_radius = CATCH_RADIUS_SCALE * predator.size;
            self.prey
                .retain(|prey| predator.position.distance(&prey.position) > catch_radius);
        }

        let caught = before - self.prey.len();
        if caught > 0 {
            self.caught_total += caught;
            debug!(caught, remaining = self.prey.len(), "Predators caught prey");
        }
        caught
    }

    // Spawn one boid of the selected role at a point strictly inside the bounds
    pub fn add_boid(&mut self, point: Vector) {
        if !self.bounds.contains(&point) {
            return;
        }

        let role = self.params.spawn_role();
        let boid = self.spawn(point, role);
        match role {
            Role::Prey => self.prey.push(boid),
            Role::Predator => self.predators.push(boid),
        }
        debug!(?role, x = point.x, y = point.y, "Spawned boid");
    }

    // Place an obstacle if it fits entirely inside the bounds
    pub fn add_obstacle(&mut self, point: Vector) {
        let radius = self.params.obstacle_size;
        if !self.bounds.contains_inset(&point, radius) {
            return;
        }

        self.obstacles.push(Obstacle::new(point, radius));
        debug!(x = point.x, y = point.y, radius, "Placed obstacle");
    }

    pub fn clear(&mut self) {
        self.prey.clear();
        self.predators.clear();
        self.obstacles.clear();
        info!("Cleared environment");
    }

    pub fn prey(&self) -> &[Boid] {
        &self.prey
    }

    pub fn predators(&self) -> &[Boid] {
        &self.predators
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn caught_total(&self) -> usize {
        self.caught_total
    }

    // New boid with the role's tunables and a random velocity whose
    // components lie in [-max_speed, max_speed]
    fn spawn(&mut self, position: Vector, role: Role) -> Boid {
        let max_speed = self.params.max_speed_for(role);
        let velocity = Vector::xy(
            self.rng.gen_range(-max_speed..=max_speed),
            self.rng.gen_range(-max_speed..=max_speed),
        );

        let mut boid = Boid::new(position, velocity, role);
        self.params.configure(&mut boid);
        boid
    }

    #[cfg(test)]
    fn push_boid(&mut self, boid: Boid) {
        match boid.role {
            Role::Prey => self.prey.push(boid),
            Role::Predator => self.predators.push(boid),
        }
    }
}
