//! Exercise 1: a triangle drawn from a plain vertex buffer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec3;

use crate::abs::{Mesh, ShaderError, ShaderProgram};
use crate::other::UpdateContext;

use super::{PositionVertex, Scene, SceneSwitch};

/// Counter-clockwise, so the rendered face points towards the viewer.
pub const TRIANGLE_VERTICES: [PositionVertex; 3] = [
    PositionVertex {
        position: Vec3::new(-0.5, -0.5, 0.0), // bottom left
    },
    PositionVertex {
        position: Vec3::new(0.5, -0.5, 0.0), // bottom right
    },
    PositionVertex {
        position: Vec3::new(0.0, 0.5, 0.0), // top centre
    },
];

/// The [`TriangleScene`] draws a solid-color triangle with `draw_arrays`.
pub struct TriangleScene {
    shaders_dir: PathBuf,
    program: ShaderProgram,
    mesh: Mesh,
}

impl TriangleScene {
    /// Creates a new [`TriangleScene`], loading its shader program from disk.
    pub fn new(gl: &Arc<glow::Context>, shaders_dir: &Path) -> Result<Self, ShaderError> {
        let program = ShaderProgram::load(gl, &shaders_dir.join("triangle"))?;
        let mesh = Mesh::new(gl, &TRIANGLE_VERTICES, glow::TRIANGLES);

        Ok(Self {
            shaders_dir: shaders_dir.to_path_buf(),
            program,
            mesh,
        })
    }
}

impl Scene for TriangleScene {
    fn update(&mut self, gl: &Arc<glow::Context>, ctx: &UpdateContext) -> SceneSwitch {
        super::handle_hotkeys(gl, ctx, &self.shaders_dir).unwrap_or(SceneSwitch::None)
    }

    fn render(&mut self, _gl: &Arc<glow::Context>) {
        self.program.use_program();
        self.mesh.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::signed_area;

    #[test]
    fn test_triangle_winding_is_counter_clockwise() {
        let [a, b, c] = TRIANGLE_VERTICES.map(|v| v.position);
        assert!(signed_area(a, b, c) > 0.0);
    }

    #[test]
    fn test_triangle_fits_in_clip_space() {
        for vertex in TRIANGLE_VERTICES {
            assert!(vertex.position.abs().max_element() <= 1.0);
            assert_eq!(vertex.position.z, 0.0);
        }
    }
}
