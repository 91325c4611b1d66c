use std::fmt::{self, Display};

use glam::IVec2;

use crate::{Circle, Group, PrimitiveIndex, Rectangle, Shape, Triangle};

/// Any drawable entity: a leaf shape or a group of other primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Group(Group),
}

/// The variant of a primitive, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Circle,
    Rectangle,
    Triangle,
    Group,
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Circle(_) => PrimitiveKind::Circle,
            Self::Rectangle(_) => PrimitiveKind::Rectangle,
            Self::Triangle(_) => PrimitiveKind::Triangle,
            Self::Group(_) => PrimitiveKind::Group,
        }
    }

    pub fn position(&self) -> IVec2 {
        match self {
            Self::Circle(v) => v.position(),
            Self::Rectangle(v) => v.position(),
            Self::Triangle(v) => v.position(),
            Self::Group(v) => v.position(),
        }
    }

    /// Set the primitive's anchor.
    pub fn set_position(&mut self, position: IVec2) {
        match self {
            Self::Circle(v) => v.set_position(position),
            Self::Rectangle(v) => v.set_position(position),
            Self::Triangle(v) => v.set_position(position),
            Self::Group(v) => v.set_position(position),
        }
    }

    /// Returns the leaf shape, or None for groups
    pub fn as_shape(&self) -> Option<&dyn Shape> {
        match self {
            Self::Circle(v) => Some(v),
            Self::Rectangle(v) => Some(v),
            Self::Triangle(v) => Some(v),
            Self::Group(_) => None,
        }
    }

    pub fn as_shape_mut(&mut self) -> Option<&mut dyn Shape> {
        match self {
            Self::Circle(v) => Some(v),
            Self::Rectangle(v) => Some(v),
            Self::Triangle(v) => Some(v),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    pub(crate) fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Applies the local part of a move. Children are handled by the scene.
    pub(crate) fn translate(&mut self, delta: IVec2) {
        match self {
            Self::Circle(v) => v.translate(delta),
            Self::Rectangle(v) => v.translate(delta),
            Self::Triangle(v) => v.translate(delta),
            Self::Group(v) => v.translate(delta),
        }
    }

    /// Applies the local part of a scale. A group has no size of its own.
    pub(crate) fn scale(&mut self, factor: f32) {
        if let Some(shape) = self.as_shape_mut() {
            shape.scale(factor)
        }
    }
}

/// Mutable access to a primitive that is already part of a scene.
///
/// Leaves are handed out directly. A group only exposes its anchor, so its
/// children can not be replaced behind the scene's back.
#[derive(Debug)]
pub enum PrimitiveMut<'a> {
    Circle(&'a mut Circle),
    Rectangle(&'a mut Rectangle),
    Triangle(&'a mut Triangle),
    Group(GroupMut<'a>),
}

impl<'a> PrimitiveMut<'a> {
    pub(crate) fn new(primitive: &'a mut Primitive) -> Self {
        match primitive {
            Primitive::Circle(v) => Self::Circle(v),
            Primitive::Rectangle(v) => Self::Rectangle(v),
            Primitive::Triangle(v) => Self::Triangle(v),
            Primitive::Group(group) => Self::Group(GroupMut { group }),
        }
    }

    pub fn position(&self) -> IVec2 {
        match self {
            Self::Circle(v) => v.position(),
            Self::Rectangle(v) => v.position(),
            Self::Triangle(v) => v.position(),
            Self::Group(v) => v.position(),
        }
    }

    /// Set the primitive's anchor.
    pub fn set_position(&mut self, position: IVec2) {
        match self {
            Self::Circle(v) => v.set_position(position),
            Self::Rectangle(v) => v.set_position(position),
            Self::Triangle(v) => v.set_position(position),
            Self::Group(v) => v.set_position(position),
        }
    }
}

#[derive(Debug)]
pub struct GroupMut<'a> {
    group: &'a mut Group,
}

impl GroupMut<'_> {
    /// Get the group's anchor.
    pub fn position(&self) -> IVec2 {
        self.group.position()
    }

    /// Set the group's anchor.
    pub fn set_position(&mut self, position: IVec2) {
        self.group.set_position(position)
    }

    pub fn children(&self) -> &[PrimitiveIndex] {
        self.group.children()
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle(v) => v.fmt(f),
            Self::Rectangle(v) => v.fmt(f),
            Self::Triangle(v) => v.fmt(f),
            Self::Group(v) => v.fmt(f),
        }
    }
}

impl From<Circle> for Primitive {
    fn from(v: Circle) -> Self {
        Self::Circle(v)
    }
}

impl From<Rectangle> for Primitive {
    fn from(v: Rectangle) -> Self {
        Self::Rectangle(v)
    }
}

impl From<Triangle> for Primitive {
    fn from(v: Triangle) -> Self {
        Self::Triangle(v)
    }
}

impl From<Group> for Primitive {
    fn from(v: Group) -> Self {
        Self::Group(v)
    }
}
