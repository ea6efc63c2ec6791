/*
 * Obstacle Module
 *
 * Static circular obstacles that boids steer around. They are placed by the
 * host and only ever removed by clearing the environment.
 */

use crate::vector::Vector;
use crate::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vector,
    pub radius: f32,
    pub color: Rgb,
}

impl Obstacle {
    pub fn new(position: Vector, radius: f32) -> Self {
        Self {
            position,
            radius,
            color: [10, 10, 255],
        }
    }
}
