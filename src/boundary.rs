/*
 * Boundary Module
 *
 * The rectangle a population lives in, and the two policies that keep
 * agents inside it:
 * - Bounce: reflect the velocity component as soon as a body is within its
 *   margin of a wall and still moving towards it (anticipatory).
 * - Redirect: once a body has reached or crossed a wall, force the matching
 *   velocity component to a fixed inward speed (reactive).
 *   The other component is left alone, so a redirected boid can end the
 *   tick faster than its speed cap.
 */

use rand::Rng;

use crate::vector::{Axis, Vector};

// Axis-aligned rectangle given by its top-left corner and its extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top_left: Vector,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(top_left: Vector, width: f32, height: f32) -> Self {
        Self { top_left, width, height }
    }

    pub fn left(&self) -> f32 {
        self.top_left.x
    }

    pub fn right(&self) -> f32 {
        self.top_left.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.top_left.y
    }

    pub fn bottom(&self) -> f32 {
        self.top_left.y + self.height
    }

    pub fn center(&self) -> Vector {
        Vector::xy(self.left() + self.width / 2.0, self.top() + self.height / 2.0)
    }

    // Strictly inside the rectangle shrunk by `inset` on every side
    pub fn contains_inset(&self, point: &Vector, inset: f32) -> bool {
        point.x > self.left() + inset
            && point.x < self.right() - inset
            && point.y > self.top() + inset
            && point.y < self.bottom() - inset
    }

    pub fn contains(&self, point: &Vector) -> bool {
        self.contains_inset(point, 0.0)
    }

    // Uniform point inside the rectangle shrunk by `margin`. When the
    // rectangle is too small for the margin the coordinate collapses to the centre.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R, margin: f32) -> Vector {
        let center = self.center();
        Vector::xy(
            sample_span(rng, self.left() + margin, self.right() - margin, center.x),
            sample_span(rng, self.top() + margin, self.bottom() - margin, center.y),
        )
    }
}

fn sample_span<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32, fallback: f32) -> f32 {
    if low < high {
        rng.gen_range(low..high)
    } else {
        fallback
    }
}

// Anything that can be kept inside a Bounds: boids and gas particles
pub trait Contained {
    fn position(&self) -> Vector;
    fn velocity_mut(&mut self) -> &mut Vector;
    // Distance from a wall at which the bounce policy reacts (size or radius)
    fn margin(&self) -> f32;
    fn wall_collide(&mut self, axis: Axis);
}

pub const DEFAULT_REDIRECT_SPEED: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryPolicy {
    Bounce,
    Redirect { speed: f32 },
}

impl BoundaryPolicy {
    pub fn redirect() -> Self {
        BoundaryPolicy::Redirect { speed: DEFAULT_REDIRECT_SPEED }
    }

    pub fn apply<B: Contained + ?Sized>(&self, body: &mut B, bounds: &Bounds) {
        match *self {
            BoundaryPolicy::Bounce => bounce(body, bounds),
            BoundaryPolicy::Redirect { speed } => redirect(body, bounds, speed),
        }
    }
}

fn bounce<B: Contained + ?Sized>(body: &mut B, bounds: &Bounds) {
    let position = body.position();
    let margin = body.margin();
    let velocity = *body.velocity_mut();

    // Close to the left wall and moving left, or close to the right wall and moving right
    if (position.x - bounds.left() < margin && velocity.x < 0.0)
        || (bounds.right() - position.x < margin && velocity.x > 0.0)
    {
        body.wall_collide(Axis::X);
    }

    // Same for the top and bottom walls
    if (position.y - bounds.top() < margin && velocity.y < 0.0)
        || (bounds.bottom() - position.y < margin && velocity.y > 0.0)
    {
        body.wall_collide(Axis::Y);
    }
}

fn redirect<B: Contained + ?Sized>(body: &mut B, bounds: &Bounds, speed: f32) {
    let position = body.position();
    let velocity = body.velocity_mut();

    if position.x <= bounds.left() {
        velocity.x = speed;
    } else if position.x >= bounds.right() {
        velocity.x = -speed;
    }

    if position.y <= bounds.top() {
        velocity.y = speed;
    } else if position.y >= bounds.bottom() {
        velocity.y = -speed;
    }
}
