//! GPU mesh management.
//!
//! This module defines the [`Mesh`] struct for storing vertex data on the
//! GPU side. Vertices should implement the [`Vertex`] trait.

use std::sync::Arc;

use glow::HasContext;

/// Trait that defines the necessary methods for a vertex.
pub trait Vertex {
    /// Sets up the vertex attribute pointers for the vertex.
    fn vertex_attribs(gl: &glow::Context);
}

/// Represents a mesh stored on the GPU side.
///
/// A mesh either owns an index buffer and is drawn with `draw_elements`,
/// or is a plain vertex run drawn with `draw_arrays`. Data is uploaded
/// once at creation and never rewritten.
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    count: i32,
}

impl Mesh {
    /// Creates a non-indexed mesh from the given vertex data.
    pub fn new<V: Vertex>(gl: &Arc<glow::Context>, vertices: &[V], draw_mode: u32) -> Self {
        Self::build(gl, vertices, None, draw_mode)
    }

    /// Creates an indexed mesh from the given vertex and index data.
    pub fn with_indices<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: &[u32],
        draw_mode: u32,
    ) -> Self {
        Self::build(gl, vertices, Some(indices), draw_mode)
    }

    fn build<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: Option<&[u32]>,
        draw_mode: u32,
    ) -> Self {
        unsafe {
            let vao = gl.create_vertex_array().unwrap();
            let vbo = gl.create_buffer().unwrap();

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                std::slice::from_raw_parts(
                    vertices.as_ptr() as *const u8,
                    vertices.len() * std::mem::size_of::<V>(),
                ),
                glow::STATIC_DRAW,
            );

            let mut count = vertices.len();
            let mut ebo = None;
            if let Some(indices) = indices {
                let buffer = gl.create_buffer().unwrap();
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(buffer));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    std::slice::from_raw_parts(
                        indices.as_ptr() as *const u8,
                        indices.len() * std::mem::size_of::<u32>(),
                    ),
                    glow::STATIC_DRAW,
                );
                count = indices.len();
                ebo = Some(buffer);
            }

            V::vertex_attribs(gl);

            // The VAO must be unbound first so it keeps the element buffer
            // binding.
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            if ebo.is_some() {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
            }

            Self {
                gl: Arc::clone(gl),
                draw_mode,
                vao,
                vbo,
                ebo,
                count: count as i32,
            }
        }
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            match self.ebo {
                Some(_) => {
                    self.gl
                        .draw_elements(self.draw_mode, self.count, glow::UNSIGNED_INT, 0)
                }
                None => self.gl.draw_arrays(self.draw_mode, 0, self.count),
            }
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
