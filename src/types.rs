use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::config::LightingConfig;
use crate::scene::{LogoSnapshot, ParticleSnapshot, RenderSnapshot, StarfieldSnapshot};
use crate::traits::CameraController;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub time: f32, // Scene time for shader-side distortion
}

impl CameraUniform {
    pub fn from_camera(camera: &dyn CameraController, time: f32) -> Self {
        Self {
            view_proj: (camera.projection_matrix() * camera.view_matrix()).to_cols_array_2d(),
            position: camera.position().to_array(),
            time,
        }
    }
}

/// Per-instance data for one wireframe shape or the logo
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub opacity: f32,
    pub geometry: u32, // ShapeKind index, LOGO_GEOMETRY for the icosahedron
    pub _pad: [u32; 3],
}

/// Geometry slot of the logo's icosahedron in the instance stream
pub const LOGO_GEOMETRY: u32 = 3;

impl MeshInstance {
    pub fn logo(logo: &LogoSnapshot) -> Self {
        let [x, y, z] = logo.rotation;
        let model = Mat4::from_scale_rotation_translation(
            Vec3::splat(logo.scale * logo.material.radius),
            Quat::from_euler(EulerRot::XYZ, x, y, z),
            Vec3::new(0.0, logo.offset, 0.0),
        );

        Self {
            model: model.to_cols_array_2d(),
            color: logo.color.to_array(),
            opacity: 1.0,
            geometry: LOGO_GEOMETRY,
            _pad: [0; 3],
        }
    }
}

/// Point cloud draw parameters
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub size: f32,
    pub opacity: f32,
    pub size_attenuation: u32,
    pub _pad: [f32; 2],
}

impl ParticleUniform {
    pub fn new(particles: &ParticleSnapshot) -> Self {
        Self {
            model: Mat4::from_rotation_y(particles.rotation).to_cols_array_2d(),
            color: particles.color.to_array(),
            size: particles.size,
            opacity: particles.opacity,
            size_attenuation: 1,
            _pad: [0.0; 2],
        }
    }
}

/// Light rig for the lit materials
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub spot_position: [f32; 3],
    pub spot_intensity: f32,
    pub spot_direction: [f32; 3],
    pub spot_angle: f32,
    pub point_position: [f32; 3],
    pub point_intensity: f32,
    pub ambient: f32,
    pub spot_penumbra: f32,
    pub spot_casts_shadow: u32,
    pub _pad: u32,
}

impl LightsUniform {
    pub fn new(lighting: &LightingConfig) -> Self {
        let spot = &lighting.spot;
        Self {
            spot_position: spot.position,
            spot_intensity: spot.intensity,
            spot_direction: spot.direction(),
            spot_angle: spot.angle,
            point_position: lighting.point.position,
            point_intensity: lighting.point.intensity,
            ambient: lighting.ambient,
            spot_penumbra: spot.penumbra,
            spot_casts_shadow: spot.cast_shadow as u32,
            _pad: 0,
        }
    }
}

/// Star backdrop shader parameters; per-star data lives in vertex buffers
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarUniform {
    pub time: f32,
    pub fade: u32,
    pub _pad: [u32; 2],
}

impl StarUniform {
    pub fn new(stars: &StarfieldSnapshot) -> Self {
        Self {
            time: stars.time,
            fade: stars.fade as u32,
            _pad: [0; 2],
        }
    }
}

/// Instance stream for a snapshot: the logo first, then every shape
pub fn mesh_instances(snapshot: &RenderSnapshot) -> Vec<MeshInstance> {
    std::iter::once(MeshInstance::logo(&snapshot.logo))
        .chain(snapshot.shapes.iter().map(|shape| {
            let model = Mat4::from_scale_rotation_translation(
                Vec3::ONE,
                Quat::from_euler(EulerRot::XYZ, shape.rotation.x, shape.rotation.y, 0.0),
                shape.position,
            );
            MeshInstance {
                model: model.to_cols_array_2d(),
                color: shape.color().to_array(),
                opacity: snapshot.shape_opacity,
                geometry: shape.kind.index(),
                _pad: [0; 3],
            }
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_struct_sizes_are_16_byte_multiples() {
        assert_eq!(std::mem::size_of::<CameraUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<MeshInstance>() % 16, 0);
        assert_eq!(std::mem::size_of::<ParticleUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<LightsUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<StarUniform>() % 16, 0);
    }

    #[test]
    fn test_lights_uniform_packs_rig() {
        let lights = LightsUniform::new(&LightingConfig::default());
        assert_eq!(lights.spot_position, [10.0, 10.0, 10.0]);
        assert_eq!(lights.spot_casts_shadow, 1);
        assert_eq!(lights.point_intensity, 0.5);
        assert_eq!(lights.ambient, 0.5);
        assert!(lights.spot_direction[0] < 0.0);
    }

    #[test]
    fn test_instances_cast_to_bytes() {
        let instances: [MeshInstance; 2] = [bytemuck::Zeroable::zeroed(); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&instances[..]);
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<MeshInstance>());
    }
}
