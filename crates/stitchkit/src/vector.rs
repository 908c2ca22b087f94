//! 2D vector algebra for the geometry kernel.
//!
//! `Vector` is a small `Copy` value type: every operation returns a new
//! vector, nothing is mutated in place. Component-wise arithmetic goes
//! through the standard operator traits so call sites read like the math.

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// A 2D vector (or point) with x,y components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// Create a vector from x,y coordinates.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians, measured counter-clockwise from
    /// the x axis.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    /// 2D scalar cross product: `self.x * other.y - self.y * other.x`.
    #[inline]
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Rotate counter-clockwise by `angle` radians.
    ///
    /// Treats the angle as the unit vector `u = (cos a, sin a)` and applies
    /// the standard rotation matrix.
    #[inline]
    pub fn rotate(self, angle: f64) -> Vector {
        let u = Vector::from_angle(angle);
        Vector::new(self.x * u.x - self.y * u.y, self.x * u.y + self.y * u.x)
    }

    /// Multiply both components by a scalar.
    #[inline]
    pub fn scale(self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }

    /// Length of the vector: `sqrt(dot(self, self))`.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another vector.
    #[inline]
    pub fn distance_to(self, other: Vector) -> f64 {
        (self - other).length()
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

/// Error from parsing a vector out of text.
///
/// The input was not two comma-separated finite numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVectorError {
    text: String,
}

impl fmt::Display for ParseVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid vector format: {:?} (expected \"x,y\")",
            self.text
        )
    }
}

impl std::error::Error for ParseVectorError {}

impl FromStr for Vector {
    type Err = ParseVectorError;

    /// Parse `"x,y"` into a vector.
    ///
    /// Exactly two comma-separated fields; each must be a finite number.
    /// `"nan"` parses as a float but is rejected rather than stored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVectorError {
            text: s.to_string(),
        };

        let mut fields = s.split(',');
        let (Some(x_text), Some(y_text), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid());
        };

        let x: f64 = x_text.trim().parse().map_err(|_| invalid())?;
        let y: f64 = y_text.trim().parse().map_err(|_| invalid())?;
        if !x.is_finite() || !y.is_finite() {
            return Err(invalid());
        }

        Ok(Vector::new(x, y))
    }
}
