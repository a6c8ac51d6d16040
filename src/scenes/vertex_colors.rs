//! Exercise 3: per-vertex colors.
//!
//! The triangle's vertices interleave a color next to each position; the
//! rasterizer interpolates between them across the face.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec3;

use crate::abs::{Mesh, ShaderError, ShaderProgram};
use crate::other::UpdateContext;

use super::{ColorVertex, Scene, SceneSwitch};

pub const COLORED_VERTICES: [ColorVertex; 3] = [
    ColorVertex {
        position: Vec3::new(-0.5, -0.5, 0.0),
        color: Vec3::new(1.0, 0.0, 0.0), // red
    },
    ColorVertex {
        position: Vec3::new(0.5, -0.5, 0.0),
        color: Vec3::new(0.0, 1.0, 0.0), // green
    },
    ColorVertex {
        position: Vec3::new(0.0, 0.5, 0.0),
        color: Vec3::new(0.0, 0.0, 1.0), // blue
    },
];

/// The [`VertexColorsScene`] draws a triangle with interpolated colors.
pub struct VertexColorsScene {
    shaders_dir: PathBuf,
    program: ShaderProgram,
    mesh: Mesh,
}

impl VertexColorsScene {
    /// Creates a new [`VertexColorsScene`], loading its shader program from disk.
    pub fn new(gl: &Arc<glow::Context>, shaders_dir: &Path) -> Result<Self, ShaderError> {
        let program = ShaderProgram::load(gl, &shaders_dir.join("vertex_colors"))?;
        let mesh = Mesh::new(gl, &COLORED_VERTICES, glow::TRIANGLES);

        Ok(Self {
            shaders_dir: shaders_dir.to_path_buf(),
            program,
            mesh,
        })
    }
}

impl Scene for VertexColorsScene {
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
    fn test_winding_is_counter_clockwise() {
        let [a, b, c] = COLORED_VERTICES.map(|v| v.position);
        assert!(signed_area(a, b, c) > 0.0);
    }

    #[test]
    fn test_each_corner_gets_a_primary_color() {
        for vertex in COLORED_VERTICES {
            assert_eq!(vertex.color.min_element(), 0.0);
            assert_eq!(vertex.color.max_element(), 1.0);
            assert_eq!(vertex.color.element_sum(), 1.0);
        }
    }
}
