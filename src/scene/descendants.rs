use crate::Primitive;

use super::{Primitives, PrimitiveIndex};

/// Depth first, pre-order traversal starting at one primitive.
///
/// Children are visited in insertion order. A primitive reachable through
/// several paths is yielded once per path.
pub struct DescendantsIter<'a> {
    pub(super) primitives: &'a Primitives,
    pub(super) stack: Vec<(PrimitiveIndex, usize)>,
}

impl<'a> Iterator for DescendantsIter<'a> {
    type Item = (PrimitiveIndex, usize, &'a Primitive);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, depth) = self.stack.pop()?;

        // Child handles are validated when added and primitives are never
        // removed
        let primitive = &self.primitives[index];
        if let Primitive::Group(group) = primitive {
            self.stack.extend(
                group
                    .children()
                    .iter()
                    .rev()
                    .map(|&child| (child, depth + 1)),
            );
        }

        Some((index, depth, primitive))
    }
}
