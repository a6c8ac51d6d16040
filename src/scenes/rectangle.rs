//! Exercise 2: a rectangle drawn through an index buffer.
//!
//! Four vertices are enough for the two triangles once an element buffer
//! supplies the shared corners.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec3;

use crate::abs::{Mesh, ShaderError, ShaderProgram};
use crate::other::UpdateContext;

use super::{PositionVertex, Scene, SceneSwitch};

pub const RECTANGLE_VERTICES: [PositionVertex; 4] = [
    PositionVertex {
        position: Vec3::new(-0.5, -0.5, 0.0), // bottom left
    },
    PositionVertex {
        position: Vec3::new(0.5, -0.5, 0.0), // bottom right
    },
    PositionVertex {
        position: Vec3::new(0.5, 0.5, 0.0), // top right
    },
    PositionVertex {
        position: Vec3::new(-0.5, 0.5, 0.0), // top left
    },
];

/// Two counter-clockwise triangles sharing the diagonal.
pub const RECTANGLE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// The [`RectangleScene`] draws an indexed rectangle with `draw_elements`.
pub struct RectangleScene {
    shaders_dir: PathBuf,
    program: ShaderProgram,
    mesh: Mesh,
}

impl RectangleScene {
    /// Creates a new [`RectangleScene`], loading its shader program from disk.
    pub fn new(gl: &Arc<glow::Context>, shaders_dir: &Path) -> Result<Self, ShaderError> {
        let program = ShaderProgram::load(gl, &shaders_dir.join("rectangle"))?;
        let mesh = Mesh::with_indices(gl, &RECTANGLE_VERTICES, &RECTANGLE_INDICES, glow::TRIANGLES);

        Ok(Self {
            shaders_dir: shaders_dir.to_path_buf(),
            program,
            mesh,
        })
    }
}

impl Scene for RectangleScene {
    fn update(&mut self, gl: &Arc<glow::Context>, ctx: &UpdateContext) -> SceneSwitch {
        super::handle_hotkeys(gl, ctx, &self.shaders_dir).unwrap_or(SceneSwitch::None)
    }

    fn render(&mut self, _gl: &Arc<glow::Context>) {
        self.program.use_program();
        self.mesh.draw();
    }
}
