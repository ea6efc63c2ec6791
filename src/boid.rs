/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * A boid is either prey or a predator. Prey follow three flocking rules
 * and flee from predators:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * Predators ignore each other and chase the closest visible prey.
 * Both steer around obstacles.
 */

use crate::boundary::Contained;
use crate::obstacle::Obstacle;
use crate::steering;
use crate::vector::{Axis, Vector};
use crate::{Rgb, BOID_MAX_SPEED, BOID_SIZE, BOID_VISION};

// Which population a boid belongs to. The role decides which rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Prey,
    Predator,
}

impl Role {
    // Only prey flock; predators hunt alone
    pub fn flocks(self) -> bool {
        matches!(self, Role::Prey)
    }

    // Prey flee at double strength, predators pursue at unit strength
    pub fn chase_factor(self) -> f32 {
        match self {
            Role::Prey => -2.0,
            Role::Predator => 1.0,
        }
    }

    /// Split the two populations into (same role, opposite role) from the
    /// point of view of a boid with this role.
    pub fn split<'a>(self, prey: &'a [Boid], predators: &'a [Boid]) -> (&'a [Boid], &'a [Boid]) {
        match self {
            Role::Prey => (prey, predators),
            Role::Predator => (predators, prey),
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Role::Prey => [255, 255, 255],
            Role::Predator => [255, 40, 40],
        }
    }
}

// Scale factors for each steering contribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringWeights {
    pub separation: f32,
    pub alignment: f32,
    pub cohesion: f32,
    pub chase: f32,
}

impl Default for SteeringWeights {
    fn default() -> Self {
        Self {
            separation: 1.0,
            alignment: 1.0,
            cohesion: 1.0,
            chase: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vector,
    pub velocity: Vector,
    pub size: f32,
    pub vision_radius: f32,
    pub max_speed: f32,
    pub role: Role,
    pub weights: SteeringWeights,
    pub color: Rgb,
}

impl Boid {
    pub fn new(position: Vector, velocity: Vector, role: Role) -> Self {
        Self {
            position,
            velocity,
            size: BOID_SIZE,
            vision_radius: BOID_VISION,
            max_speed: BOID_MAX_SPEED,
            role,
            weights: SteeringWeights::default(),
            color: role.color(),
        }
    }

    pub fn prey(position: Vector, velocity: Vector) -> Self {
        Self::new(position, velocity, Role::Prey)
    }

    pub fn predator(position: Vector, velocity: Vector) -> Self {
        Self::new(position, velocity, Role::Predator)
    }

    // Steer against the current state of both populations and the obstacles, then move
    pub fn update(&mut self, prey: &[Boid], predators: &[Boid], obstacles: &[Obstacle]) {
        let delta = steering::steer(self, prey, predators, obstacles);
        self.apply_steering(delta);
    }

    // Add a velocity increment, cap the speed and move one step.
    // This is the only place the speed limit is enforced.
    pub fn apply_steering(&mut self, delta: Vector) {
        self.velocity += delta;

        // Limit speed
        if self.velocity.length() > self.max_speed {
            self.velocity.change_magnitude(self.max_speed);
        }

        // Update position
        self.position += self.velocity;
    }

    // Reverse the velocity along one axis
    pub fn wall_collide(&mut self, axis: Axis) {
        self.velocity[axis] = -self.velocity[axis];
    }

    // Unit direction of travel for drawing; zero when standing still
    pub fn heading(&self) -> Vector {
        self.velocity.normalized()
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

impl Contained for Boid {
    fn position(&self) -> Vector {
        self.position
    }

    fn velocity_mut(&mut self) -> &mut Vector {
        &mut self.velocity
    }

    fn margin(&self) -> f32 {
        self.size
    }

    fn wall_collide(&mut self, axis: Axis) {
        Boid::wall_collide(self, axis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_capped_after_steering() {
        let mut boid = Boid::prey(Vector::ZERO, Vector::xy(1.0, 0.0));
        boid.max_speed = 4.0;
        boid.apply_steering(Vector::xy(99.0, 100.0));
        assert!(boid.speed() <= 4.0 + 1e-4);
        // direction of the clamped velocity is the direction of the sum
        assert!((boid.velocity.x - boid.velocity.y).abs() < 1e-4);
    }

    #[test]
    fn enormous_velocity_is_capped_not_zeroed() {
        let mut boid = Boid::prey(Vector::ZERO, Vector::xy(3e19, 3e19));
        boid.apply_steering(Vector::ZERO);
        assert!((boid.speed() - boid.max_speed).abs() < 1e-4);
        assert!(boid.velocity.x > 0.0 && boid.velocity.y > 0.0);
    }

    #[test]
    fn lone_boid_moves_by_its_velocity() {
        let mut boid = Boid::prey(Vector::xy(50.0, 60.0), Vector::xy(2.0, -3.0));
        boid.update(&[], &[], &[]);
        assert_eq!(boid.position, Vector::xy(52.0, 57.0));
        assert_eq!(boid.velocity, Vector::xy(2.0, -3.0));
    }

    #[test]
    fn wall_collide_negates_one_axis() {
        let mut boid = Boid::prey(Vector::ZERO, Vector::new(1.0, 2.0, 3.0));
        boid.wall_collide(Axis::X);
        assert_eq!(boid.velocity, Vector::new(-1.0, 2.0, 3.0));
        boid.wall_collide(Axis::Y);
        boid.wall_collide(Axis::Z);
        assert_eq!(boid.velocity, Vector::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn heading_of_still_boid_is_zero() {
        let boid = Boid::predator(Vector::ZERO, Vector::ZERO);
        assert_eq!(boid.heading(), Vector::ZERO);
    }

    #[test]
    fn role_split_orders_kin_first() {
        let prey = [Boid::prey(Vector::ZERO, Vector::ZERO)];
        let predators = [Boid::predator(Vector::ZERO, Vector::ZERO); 2];
        let (kin, others) = Role::Predator.split(&prey, &predators);
        assert_eq!(kin.len(), 2);
        assert_eq!(others.len(), 1);
    }
}
