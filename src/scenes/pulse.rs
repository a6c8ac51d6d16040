//! Exercise 4: a uniform-driven color animation.
//!
//! The fragment color is computed on the CPU each frame and handed to the
//! shader through a `vec4` uniform.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec4;

use crate::abs::{Mesh, ShaderError, ShaderProgram};
use crate::other::UpdateContext;

use super::{Scene, SceneSwitch, triangle::TRIANGLE_VERTICES};

/// Fragment color for the given elapsed time. The green channel swings
/// over `[0, 1]` with a two-pi-second period.
pub fn pulse_color(elapsed: f32) -> Vec4 {
    let green = elapsed.sin() / 2.0 + 0.5;
    Vec4::new(0.0, green, 0.0, 1.0)
}

/// The [`PulseScene`] draws the triangle with an animated uniform color.
pub struct PulseScene {
    shaders_dir: PathBuf,
    program: ShaderProgram,
    mesh: Mesh,
    elapsed: f32,
}

impl PulseScene {
    /// Creates a new [`PulseScene`], loading its shader program from disk.
    pub fn new(gl: &Arc<glow::Context>, shaders_dir: &Path) -> Result<Self, ShaderError> {
        let program = ShaderProgram::load(gl, &shaders_dir.join("pulse"))?;
        let mesh = Mesh::new(gl, &TRIANGLE_VERTICES, glow::TRIANGLES);

        Ok(Self {
            shaders_dir: shaders_dir.to_path_buf(),
            program,
            mesh,
            elapsed: 0.0,
        })
    }
}

impl Scene for PulseScene {
    fn update(&mut self, gl: &Arc<glow::Context>, ctx: &UpdateContext) -> SceneSwitch {
        self.elapsed += ctx.delta_time;
        super::handle_hotkeys(gl, ctx, &self.shaders_dir).unwrap_or(SceneSwitch::None)
    }

    fn render(&mut self, _gl: &Arc<glow::Context>) {
        self.program.use_program();
        self.program.set_uniform("u_color", pulse_color(self.elapsed));
        self.mesh.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_pulse_starts_at_half_green() {
        let color = pulse_color(0.0);
        assert_eq!(color, Vec4::new(0.0, 0.5, 0.0, 1.0));
    }

    #[test]
    fn test_pulse_peaks_at_quarter_period() {
        assert!((pulse_color(FRAC_PI_2).y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pulse_bottoms_out_at_three_quarter_period() {
        assert!(pulse_color(3.0 * FRAC_PI_2).y < 1e-6);
    }

    #[test]
    fn test_pulse_green_stays_in_range() {
        for i in 0..1000 {
            let color = pulse_color(i as f32 * 0.1);
            assert!((0.0..=1.0).contains(&color.y));
            assert_eq!(color.x, 0.0);
            assert_eq!(color.z, 0.0);
            assert_eq!(color.w, 1.0);
        }
    }
}
