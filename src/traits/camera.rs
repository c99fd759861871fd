use glam::{Mat4, Vec3};

/// Camera abstraction consumed by the render-facing uniforms
pub trait CameraController {
    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4;

    /// Get the projection matrix for the current aspect ratio
    fn projection_matrix(&self) -> Mat4;

    /// Get the camera position in world space
    fn position(&self) -> Vec3;

    /// Get the camera forward direction
    fn forward(&self) -> Vec3;
}
