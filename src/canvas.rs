use crate::Primitive;

/// Receives one report per drawn primitive, in traversal order.
/// `depth` is 0 for the primitive a draw was started from and increases by
/// one for every group entered.
pub trait Canvas {
    fn draw(&mut self, primitive: &Primitive, depth: usize);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw(&mut self, primitive: &Primitive, depth: usize) {
        (**self).draw(primitive, depth)
    }
}

/// Collects the reports as lines, without indentation
impl Canvas for Vec<String> {
    fn draw(&mut self, primitive: &Primitive, _: usize) {
        self.push(primitive.to_string())
    }
}

/// Emits every report at info level
#[derive(Default, Debug, Clone, Copy)]
pub struct LogCanvas;

impl Canvas for LogCanvas {
    fn draw(&mut self, primitive: &Primitive, depth: usize) {
        log::info!("{:indent$}{}", "", primitive, indent = depth * 2);
    }
}
