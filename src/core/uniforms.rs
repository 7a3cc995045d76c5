use super::constants::{UNIFORM_BLUE, UNIFORM_GREEN, UNIFORM_RED};
use glam::Mat4;

/// Scalars the mesh shader reads every draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderUniforms {
    pub time: f32,
    pub frequency: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Default for ShaderUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            frequency: 0.0,
            red: UNIFORM_RED,
            green: UNIFORM_GREEN,
            blue: UNIFORM_BLUE,
        }
    }
}

impl ShaderUniforms {
    /// Overwrite the per-frame fields. Time never moves backwards.
    pub fn refresh(&mut self, elapsed_sec: f32, frequency: f32) {
        if elapsed_sec.is_finite() && elapsed_sec > self.time {
            self.time = elapsed_sec;
        }
        self.frequency = if frequency.is_finite() { frequency } else { 0.0 };
    }

    pub fn pack(&self, view_proj: Mat4) -> MeshUniforms {
        MeshUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            time: self.time,
            frequency: self.frequency,
            red: self.red,
            green: self.green,
            blue: self.blue,
            _pad: [0.0; 3],
        }
    }
}

/// GPU layout of the mesh uniform block (96 bytes, std140 compatible).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub time: f32,
    pub frequency: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub _pad: [f32; 3],
}
