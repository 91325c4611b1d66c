use std::fmt::{self, Display};

use glam::IVec2;

use crate::util::scale_length;

/// Behaviour shared by every leaf primitive.
pub trait Shape {
    /// Returns the anchor of the shape
    fn position(&self) -> IVec2;

    /// Set the shape's anchor.
    fn set_position(&mut self, position: IVec2);

    /// Shifts the anchor by `delta`, wrapping on overflow. Size is left
    /// untouched.
    fn translate(&mut self, delta: IVec2) {
        let position = self.position().wrapping_add(delta);
        self.set_position(position)
    }

    /// Multiplies every size attribute by `factor`, truncating toward zero.
    /// The anchor does not move.
    fn scale(&mut self, factor: f32);
}

/// A circle anchored at its center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    position: IVec2,
    radius: i32,
}

impl Circle {
    pub fn new(position: IVec2, radius: i32) -> Self {
        Self { position, radius }
    }

    /// Get the circle's radius.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Set the circle's radius.
    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
    }
}

impl Shape for Circle {
    fn position(&self) -> IVec2 {
        self.position
    }

    fn set_position(&mut self, position: IVec2) {
        self.position = position
    }

    fn scale(&mut self, factor: f32) {
        self.radius = scale_length(self.radius, factor);
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Draw a circle at ({}, {}) with radius {}",
            self.position.x, self.position.y, self.radius
        )
    }
}

/// An axis aligned rectangle. Width and height scale independently of each
/// other, but always by the same factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    position: IVec2,
    width: i32,
    height: i32,
}

impl Rectangle {
    pub fn new(position: IVec2, width: i32, height: i32) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Get the rectangle's width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Get the rectangle's height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Set the rectangle's width and height.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}

impl Shape for Rectangle {
    fn position(&self) -> IVec2 {
        self.position
    }

    fn set_position(&mut self, position: IVec2) {
        self.position = position
    }

    fn scale(&mut self, factor: f32) {
        self.width = scale_length(self.width, factor);
        self.height = scale_length(self.height, factor);
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Draw a rectangle at ({}, {}) with width {} and height {}",
            self.position.x, self.position.y, self.width, self.height
        )
    }
}

/// An equilateral triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    position: IVec2,
    side_length: i32,
}

impl Triangle {
    pub fn new(position: IVec2, side_length: i32) -> Self {
        Self {
            position,
            side_length,
        }
    }

    /// Get the triangle's side length.
    pub fn side_length(&self) -> i32 {
        self.side_length
    }

    /// Set the triangle's side length.
    pub fn set_side_length(&mut self, side_length: i32) {
        self.side_length = side_length;
    }
}

impl Shape for Triangle {
    fn position(&self) -> IVec2 {
        self.position
    }

    fn set_position(&mut self, position: IVec2) {
        self.position = position
    }

    fn scale(&mut self, factor: f32) {
        self.side_length = scale_length(self.side_length, factor);
    }
}

impl Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Draw a triangle at ({}, {}) with side length {}",
            self.position.x, self.position.y, self.side_length
        )
    }
}
