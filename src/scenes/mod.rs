//! Module providing the `Scene` trait and one scene per exercise.
//!
//! Each exercise is a self-contained scene. The number keys rebuild the
//! target scene from its shader files on disk, so shader edits can be
//! picked up without restarting the program.

use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use glow::HasContext;
use sdl2::keyboard::Keycode;

use crate::abs::{ShaderError, Vertex};
use crate::other::UpdateContext;

pub mod pulse;
pub mod rectangle;
pub mod triangle;
pub mod vertex_colors;

pub enum SceneSwitch {
    None,
    Replace(Box<dyn Scene>),
    Quit,
}

/// The Scene trait defines the common interface for all exercise scenes.
pub trait Scene {
    /// Updates the scene state.
    fn update(&mut self, gl: &Arc<glow::Context>, ctx: &UpdateContext) -> SceneSwitch;

    /// Renders the scene.
    fn render(&mut self, gl: &Arc<glow::Context>);
}

/// Holds the active scene and applies scene transitions.
pub struct SceneManager {
    scene: Box<dyn Scene>,
}

impl SceneManager {
    /// Creates a new SceneManager with the initial scene.
    pub fn new(initial_scene: Box<dyn Scene>) -> Self {
        Self {
            scene: initial_scene,
        }
    }

    /// Updates the current scene and manages scene transitions. Returns
    /// `false` when the application should quit.
    pub fn update(&mut self, gl: &Arc<glow::Context>, ctx: &UpdateContext) -> bool {
        match self.scene.update(gl, ctx) {
            SceneSwitch::None => {}
            SceneSwitch::Replace(new_scene) => self.scene = new_scene,
            SceneSwitch::Quit => return false,
        }
        true
    }

    /// Renders the current scene.
    pub fn render(&mut self, gl: &Arc<glow::Context>) {
        self.scene.render(gl);
    }
}

/// A vertex carrying only a position.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct PositionVertex {
    pub position: Vec3,
}

impl Vertex for PositionVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<PositionVertex>() as i32;

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        }
    }
}

/// A vertex carrying a position and a color.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex for ColorVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<ColorVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Color attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);
        }
    }
}

/// Constructs the scene for the given exercise number. Numbers outside the
/// known range fall back to the first exercise.
pub fn make_exercise(
    gl: &Arc<glow::Context>,
    number: u32,
    shaders_dir: &Path,
) -> Result<Box<dyn Scene>, ShaderError> {
    log::info!("Loading exercise {number}");
    Ok(match number {
        2 => Box::new(rectangle::RectangleScene::new(gl, shaders_dir)?),
        3 => Box::new(vertex_colors::VertexColorsScene::new(gl, shaders_dir)?),
        4 => Box::new(pulse::PulseScene::new(gl, shaders_dir)?),
        other => {
            if other != 1 {
                log::warn!("No exercise {other}, starting exercise 1");
            }
            Box::new(triangle::TriangleScene::new(gl, shaders_dir)?)
        }
    })
}

/// Maps a number key to its exercise.
pub fn exercise_for_key(keycode: Keycode) -> Option<u32> {
    match keycode {
        Keycode::Num1 => Some(1),
        Keycode::Num2 => Some(2),
        Keycode::Num3 => Some(3),
        Keycode::Num4 => Some(4),
        _ => None,
    }
}

/// Hotkey handling shared by every scene: `Escape` quits, the number keys
/// switch exercises. A scene that fails to build leaves the current one
/// running.
fn handle_hotkeys(
    gl: &Arc<glow::Context>,
    ctx: &UpdateContext,
    shaders_dir: &Path,
) -> Option<SceneSwitch> {
    if ctx.keyboard.down.contains(&Keycode::Escape) {
        return Some(SceneSwitch::Quit);
    }
    for keycode in &ctx.keyboard.pressed {
        if let Some(number) = exercise_for_key(*keycode) {
            match make_exercise(gl, number, shaders_dir) {
                Ok(scene) => return Some(SceneSwitch::Replace(scene)),
                Err(err) => {
                    log::error!("Failed to load exercise {number}: {err}");
                    return None;
                }
            }
        }
    }
    None
}

/// Twice the signed area of a triangle projected onto the XY plane.
/// Positive for counter-clockwise winding.
#[cfg(test)]
pub(crate) fn signed_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_strides() {
        assert_eq!(size_of::<PositionVertex>(), 12);
        assert_eq!(size_of::<ColorVertex>(), 24);
    }

    #[test]
    fn test_color_vertex_offsets() {
        assert_eq!(std::mem::offset_of!(ColorVertex, position), 0);
        assert_eq!(std::mem::offset_of!(ColorVertex, color), 12);
    }

    #[test]
    fn test_exercise_keys() {
        assert_eq!(exercise_for_key(Keycode::Num1), Some(1));
        assert_eq!(exercise_for_key(Keycode::Num2), Some(2));
        assert_eq!(exercise_for_key(Keycode::Num3), Some(3));
        assert_eq!(exercise_for_key(Keycode::Num4), Some(4));
        assert_eq!(exercise_for_key(Keycode::Num5), None);
        assert_eq!(exercise_for_key(Keycode::Escape), None);
    }
}
