use crate::{Canvas, Error, Primitive, PrimitiveIndex, Result, Scene};

/// The top level collection a caller interacts with.
///
/// Owns the [`Scene`] every primitive lives in, and an ordered list of
/// handles to draw. A handle may be listed more than once, and may also be
/// reachable through a listed group.
#[derive(Default, Debug, Clone)]
pub struct Editor {
    scene: Scene,
    primitives: Vec<PrimitiveIndex>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a primitive without listing it at the top level
    pub fn insert(&mut self, primitive: impl Into<Primitive>) -> PrimitiveIndex {
        self.scene.insert(primitive)
    }

    /// Creates a primitive and lists it at the top level
    pub fn add(&mut self, primitive: impl Into<Primitive>) -> PrimitiveIndex {
        let index = self.scene.insert(primitive);
        self.primitives.push(index);
        index
    }

    /// Lists an existing primitive at the top level
    pub fn add_primitive(&mut self, index: PrimitiveIndex) -> Result<()> {
        if !self.scene.contains(index) {
            return Err(Error::MissingPrimitive(index));
        }

        self.primitives.push(index);
        Ok(())
    }

    /// Draws every top level primitive in the order they were added
    pub fn draw_all(&self, canvas: &mut impl Canvas) -> Result<()> {
        for &index in &self.primitives {
            self.scene.draw(index, canvas)?;
        }

        Ok(())
    }

    /// Get a reference to the editor's scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Get a mutable reference to the editor's scene.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Get the top level primitives.
    pub fn primitives(&self) -> &[PrimitiveIndex] {
        &self.primitives
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use crate::{Circle, Editor, Error, Group, Scene, Triangle};

    #[test]
    fn duplicates_are_drawn_twice() {
        let mut editor = Editor::new();
        let tri = editor.add(Triangle::new(IVec2::new(1, 2), 3));
        editor.add_primitive(tri).unwrap();

        let mut lines: Vec<String> = Vec::new();
        editor.draw_all(&mut lines).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
        assert_eq!(editor.primitives(), [tri, tri]);
    }

    #[test]
    fn inserted_primitives_are_not_listed() {
        let mut editor = Editor::new();
        let circle = editor.insert(Circle::new(IVec2::ZERO, 1));
        let group = editor.add(Group::new(IVec2::new(4, 4)));
        editor.scene_mut().add_to_group(group, circle).unwrap();

        let mut lines: Vec<String> = Vec::new();
        editor.draw_all(&mut lines).unwrap();

        assert_eq!(
            lines,
            [
                "Draw a group at (4, 4)",
                "Draw a circle at (0, 0) with radius 1",
            ]
        );
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let mut scene = Scene::new();
        scene.insert(Circle::new(IVec2::ZERO, 1));
        let foreign = scene.insert(Circle::new(IVec2::ZERO, 1));

        let mut editor = Editor::new();
        assert_eq!(
            editor.add_primitive(foreign),
            Err(Error::MissingPrimitive(foreign))
        );
        assert!(editor.primitives().is_empty());
    }

    #[test]
    fn empty_editor_draws_nothing() {
        let editor = Editor::new();
        let mut lines: Vec<String> = Vec::new();
        editor.draw_all(&mut lines).unwrap();

        assert!(lines.is_empty());
    }
}
