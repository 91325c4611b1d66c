mod canvas;
mod editor;
mod error;
mod group;
mod primitive;
mod scene;
mod shape;
pub mod util;

pub use canvas::*;
pub use editor::*;
pub use error::*;
pub use group::*;
pub use primitive::*;
pub use scene::*;
pub use shape::*;
