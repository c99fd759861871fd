// config.rs - Scene configuration loaded from JSON
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::Rgb;
use crate::scroll::{presets, TimelineEntry};

/// How the per-tick shape rotation step is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Fixed step every tick; speed follows the refresh rate
    #[default]
    PerTick,
    /// Step is scaled as if the scene ran at 60 Hz
    PerSecond,
}

/// Decorative shape field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub count: usize,
    /// Edge length of the cube positions are sampled in
    pub extent: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub saturation: f32,
    pub lightness: f32,
    /// Radians added to both rotation axes per step
    pub rotation_step: f32,
    pub rotation_policy: RotationPolicy,
    pub bob_amplitude: f32,
    pub opacity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 20,
            extent: 20.0,
            min_scale: 0.2,
            max_scale: 0.7,
            saturation: 0.7,
            lightness: 0.5,
            rotation_step: 0.01,
            rotation_policy: RotationPolicy::PerTick,
            bob_amplitude: 0.001,
            opacity: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub extent: f32,
    /// Radians per second around the vertical axis
    pub spin_rate: f32,
    pub size: f32,
    pub color: Rgb,
    pub opacity: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            extent: 30.0,
            spin_rate: 0.05,
            size: 0.05,
            color: Rgb::from_u32(0x06b6d4),
            opacity: 0.6,
        }
    }
}

/// Idle hover-in-place motion layered over the logo's own rotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatConfig {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_intensity: 0.5,
            float_intensity: 0.5,
        }
    }
}

/// Distorted icosahedron surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoMaterial {
    pub radius: f32,
    /// Icosahedron subdivision level
    pub detail: u32,
    pub distortion: f32,
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for LogoMaterial {
    fn default() -> Self {
        Self {
            radius: 1.0,
            detail: 1,
            distortion: 0.4,
            roughness: 0.2,
            metalness: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub idle_scale: f32,
    pub hover_scale: f32,
    pub idle_color: Rgb,
    pub hover_color: Rgb,
    pub material: LogoMaterial,
    pub float: FloatConfig,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            idle_scale: 1.0,
            hover_scale: 1.2,
            idle_color: Rgb::from_u32(0xa855f7),
            hover_color: Rgb::from_u32(0x00ffff),
            material: LogoMaterial::default(),
            float: FloatConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub position: [f32; 3],
    pub near: f32,
    pub far: f32,
    /// One full orbit takes `60 / auto_rotate_speed` seconds
    pub auto_rotate_speed: f32,
    pub drag_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            position: [0.0, 0.0, 5.0],
            near: 0.1,
            far: 1000.0,
            auto_rotate_speed: 0.5,
            drag_speed: 1.0,
        }
    }
}

/// Distant star backdrop on a spherical shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Inner radius of the shell
    pub radius: f32,
    /// Shell thickness; stars sit between `radius` and `radius + depth`
    pub depth: f32,
    pub count: usize,
    /// Point size multiplier
    pub factor: f32,
    pub saturation: f32,
    /// Soften point edges in the shader
    pub fade: bool,
    /// Twinkle time scale
    pub speed: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 5000,
            factor: 4.0,
            saturation: 0.0,
            fade: true,
            speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotLight {
    pub position: [f32; 3],
    /// Cone half-angle in radians
    pub angle: f32,
    pub penumbra: f32,
    pub intensity: f32,
    pub cast_shadow: bool,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: [10.0, 10.0, 10.0],
            angle: 0.15,
            penumbra: 1.0,
            intensity: 1.0,
            cast_shadow: true,
        }
    }
}

impl SpotLight {
    /// Unit direction from the light towards the origin
    pub fn direction(&self) -> [f32; 3] {
        (-glam::Vec3::from_array(self.position)).normalize_or_zero().to_array()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLight {
    pub position: [f32; 3],
    pub intensity: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: [-10.0, -10.0, -10.0],
            intensity: 0.5,
        }
    }
}

/// Ambient fill, a shadow-casting key spot and an opposing point light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient: f32,
    pub spot: SpotLight,
    pub point: PointLight,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            spot: SpotLight::default(),
            point: PointLight::default(),
        }
    }
}

/// Image-based lighting preset loaded before the first render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentPreset {
    Apartment,
    City,
    Dawn,
    Forest,
    Lobby,
    #[default]
    Night,
    Park,
    Studio,
    Sunset,
    Warehouse,
}

impl EnvironmentPreset {
    pub fn name(self) -> &'static str {
        match self {
            EnvironmentPreset::Apartment => "apartment",
            EnvironmentPreset::City => "city",
            EnvironmentPreset::Dawn => "dawn",
            EnvironmentPreset::Forest => "forest",
            EnvironmentPreset::Lobby => "lobby",
            EnvironmentPreset::Night => "night",
            EnvironmentPreset::Park => "park",
            EnvironmentPreset::Studio => "studio",
            EnvironmentPreset::Sunset => "sunset",
            EnvironmentPreset::Warehouse => "warehouse",
        }
    }
}

/// Complete scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for the shape field and particle cloud
    pub seed: u64,
    /// Upper bound on the delta fed to time-scaled motion
    pub max_delta: f32,
    pub field: FieldConfig,
    pub particles: ParticleConfig,
    pub logo: LogoConfig,
    pub camera: CameraConfig,
    pub stars: StarfieldConfig,
    pub lighting: LightingConfig,
    pub environment: EnvironmentPreset,
    pub intro: Vec<TimelineEntry>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            max_delta: 0.1,
            field: FieldConfig::default(),
            particles: ParticleConfig::default(),
            logo: LogoConfig::default(),
            camera: CameraConfig::default(),
            stars: StarfieldConfig::default(),
            lighting: LightingConfig::default(),
            environment: EnvironmentPreset::Night,
            intro: presets::hero_intro(),
        }
    }
}

impl SceneConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if !(self.field.extent.is_finite() && self.field.extent >= 0.0) {
            return invalid("field.extent must be a finite non-negative number");
        }
        if !(self.particles.extent.is_finite() && self.particles.extent >= 0.0) {
            return invalid("particles.extent must be a finite non-negative number");
        }
        if !(self.field.min_scale > 0.0 && self.field.min_scale <= self.field.max_scale) {
            return invalid("field scale range must satisfy 0 < min_scale <= max_scale");
        }
        if !(self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0) {
            return invalid("camera.fov_degrees must be within (0, 180)");
        }
        if !(self.camera.near > 0.0 && self.camera.near < self.camera.far) {
            return invalid("camera clip planes must satisfy 0 < near < far");
        }
        if !(self.logo.material.radius > 0.0) {
            return invalid("logo.material.radius must be positive");
        }
        if !(self.stars.radius.is_finite() && self.stars.radius >= 0.0) {
            return invalid("stars.radius must be a finite non-negative number");
        }
        if !(self.stars.depth.is_finite() && self.stars.depth >= 0.0) {
            return invalid("stars.depth must be a finite non-negative number");
        }
        if !(self.max_delta > 0.0) {
            return invalid("max_delta must be positive");
        }
        Ok(())
    }
}
