//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

/// Colors for game elements
pub mod colors {
    pub const HAZARD: [f32; 4] = [0.94, 0.27, 0.27, 1.0];
    pub const PLATFORM_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.25];
    pub const PORTAL_FRAME: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PORTAL_LOCKED: [f32; 4] = [0.94, 0.27, 0.27, 1.0];
    pub const PORTAL_OPEN: [f32; 4] = [0.29, 0.87, 0.5, 1.0];
    pub const ENEMY_FLASH: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HP_BAR_BACK: [f32; 4] = [0.2, 0.0, 0.0, 0.8];
    pub const HP_BAR: [f32; 4] = [0.13, 0.77, 0.37, 1.0];
    pub const FACE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const DAMAGE_NUMBER: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
    pub const DAMAGE_FLASH: [f32; 4] = [0.86, 0.15, 0.15, 0.3];

    /// Clear colour per world (sky)
    pub fn sky(world: u32) -> [f32; 4] {
        match world {
            1 => [0.38, 0.75, 0.95, 1.0],
            2 => [0.19, 0.11, 0.42, 1.0],
            3 => [0.42, 0.12, 0.06, 1.0],
            _ => [0.05, 0.0, 0.1, 1.0],
        }
    }
}
