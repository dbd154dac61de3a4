use bytemuck::{Pod, Zeroable};

use crate::components::layer::DrawBand;
use crate::systems::compose::WorldTransform;

/// Per-part placement handed to the rasterizer.
/// Must match the consumer's layout: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PartInstance {
    /// X of the part's pivot in world space.
    pub x: f32,
    /// Y of the part's pivot in world space.
    pub y: f32,
    /// Accumulated rotation in degrees.
    pub rotation: f32,
    /// Draw band as a float, or -1.0 for parts that are not drawn.
    pub band: f32,
}

impl PartInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_world(transform: &WorldTransform) -> Self {
        Self {
            x: transform.position.x,
            y: transform.position.y,
            rotation: transform.rotation,
            band: DrawBand::for_part(&transform.name).map_or(-1.0, |b| b.as_u8() as f32),
        }
    }
}

/// Flat frame data: one instance per part, names kept in the same order.
pub struct FrameBuffer {
    pub instances: Vec<PartInstance>,
    pub names: Vec<String>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(32),
            names: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.names.clear();
    }

    /// Replace the buffer contents with a composed frame.
    pub fn fill(&mut self, transforms: &[WorldTransform]) {
        self.clear();
        for transform in transforms {
            self.instances.push(PartInstance::from_world(transform));
            self.names.push(transform.name.clone());
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Instances viewed as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
