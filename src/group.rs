use std::fmt::{self, Display};

use glam::IVec2;
use smallvec::SmallVec;

use crate::PrimitiveIndex;

pub(crate) type Children = SmallVec<[PrimitiveIndex; 4]>;

/// A composite primitive.
///
/// The anchor is independent state and is never derived from the children.
/// Children are shared handles into a [`crate::Scene`], so the same primitive
/// may appear in several groups, or several times in one group.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    position: IVec2,
    children: Children,
}

impl Group {
    pub fn new(position: IVec2) -> Self {
        Self {
            position,
            children: Children::new(),
        }
    }

    /// Get the group's anchor.
    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// Set the group's anchor.
    pub fn set_position(&mut self, position: IVec2) {
        self.position = position
    }

    /// Returns the children in insertion order
    pub fn children(&self) -> &[PrimitiveIndex] {
        &self.children
    }

    /// Appends without any checks. Cycle rejection happens in the scene, which
    /// is the only place that can see the whole graph.
    pub(crate) fn clear(&mut self) {
        self.children.clear()
    }

    pub(crate) fn push(&mut self, child: PrimitiveIndex) {
        self.children.push(child)
    }

    pub(crate) fn translate(&mut self, delta: IVec2) {
        self.position = self.position.wrapping_add(delta);
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Draw a group at ({}, {})",
            self.position.x, self.position.y
        )
    }
}
