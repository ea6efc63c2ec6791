/*
 * Vector Module
 *
 * A small 3-component vector used by every part of the simulation.
 * 2D agents simply keep z = 0.
 *
 * Degenerate geometry policy: dividing by a zero scalar and normalizing a
 * zero-length vector are no-ops, so a zero vector stays zero and no NaN
 * or infinity ever leaks into the physics.
 */

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Error, Result};

/// Component axis of a [`Vector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(Error::IndexOutOfRange { index }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Planar vector with z = 0.
    pub const fn xy(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Component by index; anything other than 0, 1 or 2 is an error.
    pub fn get(&self, index: usize) -> Result<f32> {
        Axis::try_from(index).map(|axis| self[axis])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut f32> {
        let axis = Axis::try_from(index)?;
        Ok(&mut self[axis])
    }

    pub fn set(&mut self, other: &Vector) {
        *self = *other;
    }

    pub fn zero(&mut self) {
        *self = Vector::ZERO;
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean norm.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scale to unit length in place. A zero vector is left untouched.
    pub fn normalize(&mut self) {
        // Bring the largest component to 1 first so length_squared cannot overflow
        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        *self /= largest;
        let length = self.length();
        *self /= length;
    }

    /// Non-mutating [`Vector::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Keep the direction, set the length to `magnitude`.
    pub fn change_magnitude(&mut self, magnitude: f32) {
        self.normalize();
        *self *= magnitude;
    }

    /// Keep the direction, take the length of `other`.
    pub fn match_magnitude(&mut self, other: &Vector) {
        self.change_magnitude(other.length());
    }

    /// Keep the length, point along `direction`. A zero direction is ignored.
    pub fn change_direction(&mut self, direction: &Vector) {
        if direction.is_zero() {
            return;
        }
        let magnitude = self.length();
        *self = direction.normalized() * magnitude;
    }

    pub fn distance(&self, other: &Vector) -> f32 {
        (*self - *other).length()
    }

    /// Angle in radians between the two vectors, 0 if either is zero.
    pub fn angle(&self, other: &Vector) -> f32 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        let cos = self.normalized().dot(&other.normalized());
        // rounding can push the cosine just outside [-1, 1]
        cos.clamp(-1.0, 1.0).acos()
    }

    pub fn dot(&self, other: &Vector) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Index<Axis> for Vector {
    type Output = f32;

    fn index(&self, axis: Axis) -> &f32 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for Vector {
    fn index_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f32) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector * self
    }
}

impl MulAssign<f32> for Vector {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Div<f32> for Vector {
    type Output = Vector;

    // Dividing by zero leaves the vector unchanged
    fn div(self, scalar: f32) -> Vector {
        if scalar == 0.0 {
            return self;
        }
        Vector::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl DivAssign<f32> for Vector {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}
