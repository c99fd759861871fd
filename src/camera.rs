use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::frame::FrameInfo;
use crate::traits::{Animated, CameraController};

/// Keeps the orbit away from the poles where the up vector degenerates
const POLAR_EPSILON: f32 = 1e-3;

/// Orbit input state
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DragState {
    pub active: bool,
}

/// Orbiting perspective camera
///
/// Auto-rotates around the target at a constant angular rate and yields to
/// the user while a drag is in progress. Zoom and pan are disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    target: Vec3,
    radius: f32,
    /// Angle around the vertical axis, 0 looks down -Z from +Z
    azimuth: f32,
    /// Angle from +Y
    polar: f32,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    auto_rotate_speed: f32,
    drag_speed: f32,
    max_delta: f32,
    drag: DragState,
}

impl ViewportController {
    pub fn new(config: &CameraConfig, aspect: f32, max_delta: f32) -> Self {
        let target = Vec3::ZERO;
        let offset = Vec3::from_array(config.position) - target;
        let radius = offset.length();
        let (azimuth, polar) = if radius > 0.0 {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, PI / 2.0)
        };

        Self {
            target,
            radius,
            azimuth,
            polar: polar.clamp(POLAR_EPSILON, PI - POLAR_EPSILON),
            fov_y: config.fov_degrees.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
            auto_rotate_speed: config.auto_rotate_speed,
            drag_speed: config.drag_speed,
            max_delta,
            drag: DragState::default(),
        }
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Radians of auto-rotation for a tick
    fn auto_rotation(&self, frame: &FrameInfo) -> f32 {
        TAU / 60.0 * self.auto_rotate_speed * frame.clamped_delta(self.max_delta)
    }

    /// Orbit by a pointer drag of `dx`, `dy` pixels on a surface `height` pixels tall
    pub fn on_drag(&mut self, dx: f32, dy: f32, height: u32) {
        if height == 0 || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.drag.active = true;

        let per_pixel = TAU / height as f32 * self.drag_speed;
        self.azimuth -= dx * per_pixel;
        self.polar = (self.polar - dy * per_pixel).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
    }

    pub fn on_drag_end(&mut self) {
        self.drag.active = false;
    }

    /// Zoom is disabled; the request is refused and nothing changes
    pub fn zoom(&mut self, _factor: f32) -> bool {
        log::debug!("zoom request ignored: zoom disabled");
        false
    }

    /// Pan is disabled; the request is refused and nothing changes
    pub fn pan(&mut self, _dx: f32, _dy: f32) -> bool {
        log::debug!("pan request ignored: pan disabled");
        false
    }

    /// Recompute the aspect ratio; a collapsed surface keeps the previous one
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring resize to {width}x{height}");
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

impl Animated for ViewportController {
    fn update(&self, frame: &FrameInfo) -> Self {
        let mut next = self.clone();
        if !self.drag.active {
            next.azimuth -= self.auto_rotation(frame);
        }
        next
    }
}

impl CameraController for ViewportController {
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    fn position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target + self.radius * Vec3::new(sin_polar * sin_az, cos_polar, sin_polar * cos_az)
    }

    fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize_or_zero()
    }
}
