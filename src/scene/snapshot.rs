use glam::Vec3;
use serde::Serialize;

use super::Shape;
use crate::config::{EnvironmentPreset, LightingConfig, LogoMaterial};
use crate::math::Rgb;

/// What the renderer draws this frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderFrame {
    /// Resources still loading; the host shows its progress indicator
    Loading { progress: f32 },
    Scene(RenderSnapshot),
}

impl RenderFrame {
    pub fn snapshot(&self) -> Option<&RenderSnapshot> {
        match self {
            RenderFrame::Scene(snapshot) => Some(snapshot),
            RenderFrame::Loading { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraSnapshot {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoSnapshot {
    /// Euler XYZ, base rotation plus float envelope
    pub rotation: [f32; 3],
    pub offset: f32,
    pub scale: f32,
    pub color: Rgb,
    pub hovered: bool,
    pub material: LogoMaterial,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleSnapshot {
    pub count: usize,
    pub rotation: f32,
    pub color: Rgb,
    pub size: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarfieldSnapshot {
    pub count: usize,
    /// Twinkle time, `t * speed`
    pub time: f32,
    pub fade: bool,
}

/// Read-only copy of the scene state at one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    pub time: f32,
    pub camera: CameraSnapshot,
    pub logo: LogoSnapshot,
    pub shapes: Vec<Shape>,
    pub shape_opacity: f32,
    pub particles: ParticleSnapshot,
    pub stars: StarfieldSnapshot,
    pub lighting: LightingConfig,
    pub environment: EnvironmentPreset,
}
