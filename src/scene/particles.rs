use std::sync::Arc;

use glam::Mat4;
use rand::Rng;

use crate::frame::FrameInfo;
use crate::traits::Animated;

/// Default spin around the vertical axis, radians per second
pub const DEFAULT_SPIN_RATE: f32 = 0.05;

/// Point cloud rotated as one rigid body
///
/// Positions are generated once and shared; only the aggregate angle changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    positions: Arc<[f32]>,
    rotation: f32,
    spin_rate: f32,
}

impl ParticleField {
    /// `count` points uniform in a cube of edge `|extent|`, flattened as xyz triples
    pub fn generate(count: usize, extent: f32, rng: &mut impl Rng) -> Self {
        // Non-finite extents collapse to the origin
        let half = if extent.is_finite() { extent.abs() / 2.0 } else { 0.0 };
        let positions: Arc<[f32]> = (0..count * 3).map(|_| rng.gen_range(-half..=half)).collect();

        Self {
            positions,
            rotation: 0.0,
            spin_rate: DEFAULT_SPIN_RATE,
        }
    }

    pub fn with_spin_rate(self, spin_rate: f32) -> Self {
        Self { spin_rate, ..self }
    }

    pub fn positions(&self) -> &Arc<[f32]> {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Aggregate angle around the vertical axis
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Transform applied to every point at render time
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation)
    }
}

impl Animated for ParticleField {
    fn update(&self, frame: &FrameInfo) -> Self {
        Self {
            positions: Arc::clone(&self.positions),
            rotation: frame.time * self.spin_rate,
            spin_rate: self.spin_rate,
        }
    }
}
