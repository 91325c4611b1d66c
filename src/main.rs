use glam::IVec2;
use primitive_editor::{Circle, Editor, Group, LogCanvas, Rectangle, Result, Triangle};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut editor = Editor::new();

    let circle = editor.add(Circle::new(IVec2::new(10, 10), 5));
    let rect = editor.add(Rectangle::new(IVec2::new(20, 20), 8, 6));
    editor.add(Triangle::new(IVec2::new(30, 30), 7));

    let group = editor.insert(Group::new(IVec2::new(50, 50)));
    editor.scene_mut().add_to_group(group, circle)?;
    editor.scene_mut().add_to_group(group, rect)?;
    editor.add_primitive(group)?;

    editor.draw_all(&mut LogCanvas)?;

    editor.scene_mut().scale(circle, 2.0)?;
    editor.draw_all(&mut LogCanvas)?;

    Ok(())
}
