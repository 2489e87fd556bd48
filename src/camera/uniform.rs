use crate::camera::controller::OrbitCamera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view matrix and camera metadata.
pub struct ViewUniform {
    /// World-to-camera matrix, column-major 4×4.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position around the live pivot.
    pub position: [f32; 3],
    /// Distance from the live pivot to the camera.
    pub orbit_distance: f32,
    /// Camera forward direction (the frame's `-z`).
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewUniform {
    /// Identity view looking down `-z` from the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: glam::Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            orbit_distance: 0.0,
            forward: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Update fields from the camera's current state.
    pub fn update_from(&mut self, camera: &OrbitCamera) {
        self.view = camera.view_matrix().to_mat4().to_cols_array_2d();
        self.position = camera.camera_position().to_array();
        self.orbit_distance = camera.orbit_distance();
        self.forward = (-camera.frame().z).to_array();
    }

    /// Raw bytes for a buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
