use glam::IVec2;
use itertools::Itertools;
use slotmap::*;

use crate::{Canvas, Error, Primitive, PrimitiveMut, Result};

pub use descendants::*;

mod descendants;

type Primitives = SlotMap<PrimitiveIndex, Primitive>;

new_key_type! {
    pub struct PrimitiveIndex;
}

/// Owns every primitive and hands out shared handles to them.
///
/// Groups refer to their children by [`PrimitiveIndex`], so a primitive can be
/// reachable from any number of groups at once. Operations started on a group
/// reach a shared primitive once for every path leading to it.
#[derive(Default, Debug, Clone)]
pub struct Scene {
    primitives: Primitives,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a primitive and returns the handle to it.
    ///
    /// A group always enters the scene without children, even when cloned
    /// from one that had some. Membership is built with
    /// [`Scene::add_to_group`].
    pub fn insert(&mut self, primitive: impl Into<Primitive>) -> PrimitiveIndex {
        let mut primitive = primitive.into();
        if let Some(group) = primitive.as_group_mut() {
            if !group.children().is_empty() {
                log::debug!("Dropping {} children of inserted group", group.children().len());
                group.clear();
            }
        }

        self.primitives.insert(primitive)
    }

    pub fn get(&self, index: PrimitiveIndex) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    /// Mutable access for the setters of each primitive.
    /// Group membership can only be changed through [`Scene::add_to_group`].
    pub fn get_mut(&mut self, index: PrimitiveIndex) -> Option<PrimitiveMut> {
        self.primitives.get_mut(index).map(PrimitiveMut::new)
    }

    pub fn contains(&self, index: PrimitiveIndex) -> bool {
        self.primitives.contains_key(index)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Appends `child` to the children of `group`.
    ///
    /// Duplicates are allowed. Fails if `group` is not a group, or if `group`
    /// is reachable from `child`, as that would make traversal unbounded.
    pub fn add_to_group(&mut self, group: PrimitiveIndex, child: PrimitiveIndex) -> Result<()> {
        if !self.contains(child) {
            return Err(Error::MissingPrimitive(child));
        }

        match self.get(group) {
            None => return Err(Error::MissingPrimitive(group)),
            Some(Primitive::Group(_)) => {}
            Some(_) => return Err(Error::NotAGroup(group)),
        }

        if self.reaches(child, group) {
            log::debug!("Rejected adding {child:?} to {group:?}: cycle");
            return Err(Error::Cycle { group, child });
        }

        if let Some(target) = self.primitives[group].as_group_mut() {
            target.push(child);
        }

        log::debug!("Added {child:?} to {group:?}");
        Ok(())
    }

    /// Returns true if `target` is `from` or one of its descendants
    fn reaches(&self, from: PrimitiveIndex, target: PrimitiveIndex) -> bool {
        let mut visited = SecondaryMap::new();
        let mut stack = vec![from];

        while let Some(index) = stack.pop() {
            if index == target {
                return true;
            }

            if visited.insert(index, ()).is_some() {
                continue;
            }

            if let Some(group) = self.primitives[index].as_group() {
                stack.extend_from_slice(group.children());
            }
        }

        false
    }

    /// Iterates `index` and everything below it, depth first
    pub fn descendants(&self, index: PrimitiveIndex) -> Result<DescendantsIter> {
        if !self.contains(index) {
            return Err(Error::MissingPrimitive(index));
        }

        Ok(DescendantsIter {
            primitives: &self.primitives,
            stack: vec![(index, 0)],
        })
    }

    /// Reports the primitive, then recursively every child in insertion order
    pub fn draw(&self, index: PrimitiveIndex, canvas: &mut impl Canvas) -> Result<()> {
        for (_, depth, primitive) in self.descendants(index)? {
            canvas.draw(primitive, depth);
        }

        Ok(())
    }

    /// Moves the primitive by `delta`. A group moves its own anchor and every
    /// child by the very same delta.
    pub fn translate(&mut self, index: PrimitiveIndex, delta: IVec2) -> Result<()> {
        let visits = self.visits(index)?;
        log::trace!("Translating {} primitives by {delta}", visits.len());

        for visit in visits {
            self.primitives[visit].translate(delta);
        }

        Ok(())
    }

    /// Scales the size of every leaf reachable from the primitive.
    /// Positions, including group anchors, do not change.
    pub fn scale(&mut self, index: PrimitiveIndex, factor: f32) -> Result<()> {
        let visits = self.visits(index)?;
        log::trace!("Scaling {} primitives by {factor}", visits.len());

        for visit in visits {
            self.primitives[visit].scale(factor);
        }

        Ok(())
    }

    fn visits(&self, index: PrimitiveIndex) -> Result<Vec<PrimitiveIndex>> {
        Ok(self
            .descendants(index)?
            .map(|(visit, _, _)| visit)
            .collect_vec())
    }
}
