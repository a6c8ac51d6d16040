//! OpenGL shader compilation and linking.
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for
//! managing OpenGL shaders, the [`Uniform`] trait for setting uniform
//! variables, and [`ShaderError`], which carries the driver's info log when
//! a stage fails to compile or a program fails to link.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec4;
use glow::HasContext;

/// Error type for shader loading, compilation and linking.
#[derive(Debug)]
pub enum ShaderError {
    /// Reading a shader source file from disk failed.
    Io(PathBuf, io::Error),
    /// A shader stage failed to compile. Carries the driver's info log.
    Compile { stage: &'static str, log: String },
    /// The program failed to link. Carries the driver's info log.
    Link(String),
    /// The driver refused to create a shader or program object.
    Gl(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Io(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
            ShaderError::Compile { stage, log } => {
                write!(f, "{} shader failed to compile:\n{}", stage, log)
            }
            ShaderError::Link(log) => write!(f, "shader program failed to link:\n{}", log),
            ShaderError::Gl(msg) => write!(f, "OpenGL error: {}", msg),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

/// Reads a shader source file from disk.
pub fn read_source(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|err| ShaderError::Io(path.to_path_buf(), err))
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(
        gl: &Arc<glow::Context>,
        shader_type: u32,
        source: &str,
    ) -> Result<Self, ShaderError> {
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(ShaderError::Gl)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(ShaderError::Compile {
                    stage: stage_name(shader_type),
                    log,
                });
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents a uniform variable in a shader program.
pub trait Uniform {
    /// Sets the value of the uniform variable in the given shader program.
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str);
}

impl Uniform for Vec4 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            let location = gl.get_uniform_location(program, name);
            if let Some(loc) = location {
                gl.uniform_4_f32(Some(&loc), self.x, self.y, self.z, self.w);
            }
        }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, ShaderError> {
        unsafe {
            let program = gl.create_program().map_err(ShaderError::Gl)?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link(log));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Reads `vert.glsl` and `frag.glsl` from the given directory, compiles
    /// both stages and links them into a program.
    pub fn load(gl: &Arc<glow::Context>, dir: &Path) -> Result<Self, ShaderError> {
        let vert_source = read_source(&dir.join("vert.glsl"))?;
        let frag_source = read_source(&dir.join("frag.glsl"))?;
        let vert = Shader::new(gl, glow::VERTEX_SHADER, &vert_source)?;
        let frag = Shader::new(gl, glow::FRAGMENT_SHADER, &frag_source)?;
        Self::new(gl, &[&vert, &frag])
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform variable in the shader program.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        value.set_uniform(&self.gl, self.id, name);
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_stage_names() {
        assert_eq!(stage_name(glow::VERTEX_SHADER), "vertex");
        assert_eq!(stage_name(glow::FRAGMENT_SHADER), "fragment");
        assert_eq!(stage_name(glow::GEOMETRY_SHADER), "unknown");
    }

    #[test]
    fn test_read_source() {
        let path = std::env::temp_dir().join("glstarter_test_read_source.glsl");
        std::fs::write(&path, "#version 330 core\n").unwrap();
        let source = read_source(&path).unwrap();
        assert_eq!(source, "#version 330 core\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_source_missing_file() {
        let path = std::env::temp_dir().join("glstarter_test_no_such_file.glsl");
        let err = read_source(&path).unwrap_err();
        match &err {
            ShaderError::Io(p, e) => {
                assert_eq!(p, &path);
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io variant, got {:?}", other),
        }
        assert!(err.source().is_some());
    }

    #[test]
    fn test_compile_error_display() {
        let err = ShaderError::Compile {
            stage: "vertex",
            log: "0:3(2): error: syntax error".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("vertex shader failed to compile"));
        assert!(msg.contains("syntax error"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_link_error_display() {
        let err = ShaderError::Link("error: unresolved symbol".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("failed to link"));
        assert!(msg.contains("unresolved symbol"));
    }
}
