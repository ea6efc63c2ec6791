/*
 * Steering Module
 *
 * Computes the velocity increments that drive a boid each tick.
 * Every rule is a free function of one focal boid and a read-only view of
 * the other agents, so each can be tested on its own:
 * - separation, alignment, cohesion against same-role neighbors
 * - chase against the opposite role (pursue or flee depending on role)
 * - obstacle avoidance against static obstacles
 *
 * Contributions are added straight onto velocity (no acceleration stage and
 * no per-rule force cap). The speed cap is applied once, by the boid.
 */

use crate::boid::Boid;
use crate::obstacle::Obstacle;
use crate::vector::Vector;

// Separation reach as a multiple of the boid's size
pub const SEPARATION_RANGE: f32 = 2.5;
pub const ALIGNMENT_DAMPING: f32 = 4.0;
pub const COHESION_DAMPING: f32 = 35.0;
// Avoidance output is small, so it is scaled up before being applied
pub const OBSTACLE_WEIGHT: f32 = 20.0;
pub const AVOIDANCE_FALLOFF: f32 = 1.35;

// Push away from every neighbor closer than the separation range.
// The raw sum is returned; crowded boids get a proportionally larger push.
pub fn separation(boid: &Boid, flock: &[Boid]) -> Vector {
    let range = SEPARATION_RANGE * boid.size;
    let mut steering = Vector::ZERO;

    for other in flock {
        let d = boid.position.distance(&other.position);

        // d == 0 is the boid itself
        if d > 0.0 && d <= range {
            steering += boid.position - other.position;
        }
    }

    steering
}

// Steer towards the average heading of visible neighbors
pub fn alignment(boid: &Boid, flock: &[Boid]) -> Vector {
    let mut heading = Vector::ZERO;
    let mut count = 0;

    for other in flock {
        let d = boid.position.distance(&other.position);
        if d > 0.0 && d <= boid.vision_radius {
            heading += other.velocity;
            count += 1;
        }
    }

    if count == 0 {
        return Vector::ZERO;
    }

    heading /= count as f32;
    (heading - boid.velocity) / ALIGNMENT_DAMPING
}

// Steer towards the centre of visible neighbors
pub fn cohesion(boid: &Boid, flock: &[Boid]) -> Vector {
    let mut center = Vector::ZERO;
    let mut count = 0;

    for other in flock {
        let d = boid.position.distance(&other.position);
        if d > 0.0 && d <= boid.vision_radius {
            center += other.position;
            count += 1;
        }
    }

    if count == 0 {
        return Vector::ZERO;
    }

    center /= count as f32;
    (center - boid.position) / COHESION_DAMPING
}

// Head for (predator) or away from (prey) the closest visible member of the
// opposite role. Only the single closest candidate matters.
pub fn chase(boid: &Boid, others: &[Boid]) -> Vector {
    let closest = others
        .iter()
        .map(|other| (other, boid.position.distance(&other.position)))
        .filter(|&(_, d)| d <= boid.vision_radius)
        .min_by(|a, b| a.1.total_cmp(&b.1));

    match closest {
        Some((target, _)) => (target.position - boid.position) * boid.role.chase_factor(),
        None => Vector::ZERO,
    }
}

// Predict collisions along the current heading and steer away from every
// obstacle the boid would pass closer than its radius plus the boid's size.
pub fn avoid_obstacles(boid: &Boid, obstacles: &[Obstacle]) -> Vector {
    let mut avoidance = Vector::ZERO;

    let speed = boid.velocity.length();
    if speed == 0.0 {
        // No heading to project onto
        return avoidance;
    }

    for obstacle in obstacles {
        let difference = obstacle.position - boid.position;

        // Closing distance along the heading and the perpendicular miss distance
        let k = difference.dot(&boid.velocity) / speed;
        let t = (difference.length_squared() - k * k).max(0.0).sqrt();

        if t < obstacle.radius + boid.size {
            let falloff = difference.length().powf(AVOIDANCE_FALLOFF) + 1.0;
            avoidance -= (obstacle.position - (boid.velocity + boid.position)) / falloff;
        }
    }

    avoidance
}

// Weighted sum of the neighbor rules that apply to this boid's role
pub fn neighbor_forces(boid: &Boid, prey: &[Boid], predators: &[Boid]) -> Vector {
    let (kin, others) = boid.role.split(prey, predators);
    let weights = &boid.weights;
    let mut delta = Vector::ZERO;

    if boid.role.flocks() {
        delta += separation(boid, kin) * weights.separation;
        delta += alignment(boid, kin) * weights.alignment;
        delta += cohesion(boid, kin) * weights.cohesion;
    }
    delta += chase(boid, others) * weights.chase;

    delta
}

/// The full velocity increment for one tick.
///
/// Neighbor forces are applied first; obstacle avoidance then looks along
/// the velocity that already includes them, exactly as if the two were
/// added to the boid one after the other.
pub fn steer(boid: &Boid, prey: &[Boid], predators: &[Boid], obstacles: &[Obstacle]) -> Vector {
    let flocking = neighbor_forces(boid, prey, predators);

    let mut probe = *boid;
    probe.velocity += flocking;
    let avoidance = avoid_obstacles(&probe, obstacles) * OBSTACLE_WEIGHT;

    flocking + avoidance
}
