//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Scene palette (sRGB values lifted from the page design)
pub mod colors {
    /// Near-black backdrop (#0a0a0f)
    pub const BACKGROUND: [f32; 4] = [0.039, 0.039, 0.059, 1.0];
    /// Threat body (#2a0a0d)
    pub const MONSTER_BODY: [f32; 4] = [0.165, 0.039, 0.051, 1.0];
    /// Threat eyes (#5a171b)
    pub const MONSTER_EYES: [f32; 4] = [0.353, 0.090, 0.106, 1.0];
    /// Threat mouth (#a31c22)
    pub const MONSTER_MOUTH: [f32; 4] = [0.639, 0.110, 0.133, 1.0];
}
