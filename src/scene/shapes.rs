use glam::{Vec2, Vec3};
use rand::Rng;
use serde::Serialize;

use super::EntityId;
use crate::config::{FieldConfig, RotationPolicy};
use crate::core::ResourceId;
use crate::frame::FrameInfo;
use crate::math::{hsl_to_rgb, Rgb};
use crate::traits::Animated;

/// Reference refresh rate for time-scaled rotation
const REFERENCE_HZ: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cube,
    Sphere,
    Torus,
}

/// Dimensions of a shape's mesh, derived from its scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Box { size: f32 },
    Sphere { radius: f32, segments: u32 },
    Torus { radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32 },
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cube, ShapeKind::Sphere, ShapeKind::Torus];

    pub const fn index(self) -> u32 {
        match self {
            ShapeKind::Cube => 0,
            ShapeKind::Sphere => 1,
            ShapeKind::Torus => 2,
        }
    }

    pub fn geometry(self, scale: f32) -> Geometry {
        match self {
            ShapeKind::Cube => Geometry::Box { size: scale },
            ShapeKind::Sphere => Geometry::Sphere {
                radius: scale * 0.5,
                segments: 16,
            },
            ShapeKind::Torus => Geometry::Torus {
                radius: scale * 0.3,
                tube: scale * 0.1,
                radial_segments: 16,
                tubular_segments: 32,
            },
        }
    }

    pub fn resource(self) -> ResourceId {
        match self {
            ShapeKind::Cube => "geometry/box".into(),
            ShapeKind::Sphere => "geometry/sphere".into(),
            ShapeKind::Torus => "geometry/torus".into(),
        }
    }
}

/// Decorative wireframe shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub id: EntityId,
    pub position: Vec3,
    pub scale: f32,
    pub kind: ShapeKind,
    /// Hue, saturation, lightness in [0, 1]
    pub hsl: [f32; 3],
    pub rotation: Vec2,
}

impl Shape {
    pub fn color(&self) -> Rgb {
        let [h, s, l] = self.hsl;
        hsl_to_rgb(h, s, l).into()
    }

    pub fn geometry(&self) -> Geometry {
        self.kind.geometry(self.scale)
    }

    /// Next state: spin both axes and bob vertically, phased by the x coordinate
    pub fn update(&self, frame: &FrameInfo, motion: &FieldMotion) -> Shape {
        let steps = motion.steps(frame);
        let spin = motion.rotation_step * steps;
        let bob = (frame.time + self.position.x).sin() * motion.bob_amplitude * steps;

        Shape {
            rotation: self.rotation + Vec2::splat(spin),
            position: self.position + Vec3::new(0.0, bob, 0.0),
            ..self.clone()
        }
    }
}

/// Per-tick motion parameters shared by every shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMotion {
    pub rotation_step: f32,
    pub bob_amplitude: f32,
    pub policy: RotationPolicy,
    pub max_delta: f32,
}

impl FieldMotion {
    pub fn from_config(config: &FieldConfig, max_delta: f32) -> Self {
        Self {
            rotation_step: config.rotation_step,
            bob_amplitude: config.bob_amplitude,
            policy: config.rotation_policy,
            max_delta,
        }
    }

    /// How many reference steps this tick is worth
    fn steps(&self, frame: &FrameInfo) -> f32 {
        match self.policy {
            RotationPolicy::PerTick => 1.0,
            RotationPolicy::PerSecond => frame.clamped_delta(self.max_delta) * REFERENCE_HZ,
        }
    }
}

impl Default for FieldMotion {
    fn default() -> Self {
        Self::from_config(&FieldConfig::default(), 0.1)
    }
}

/// Generate `count` shapes inside a cube of edge `extent` centred on the origin
pub fn generate(count: usize, extent: f32, rng: &mut impl Rng) -> Vec<Shape> {
    let config = FieldConfig {
        count,
        extent,
        ..FieldConfig::default()
    };
    generate_with(&config, rng)
}

/// Generate from a full field config; extent sign and scale bound order are ignored
pub fn generate_with(config: &FieldConfig, rng: &mut impl Rng) -> Vec<Shape> {
    // Non-finite extents collapse to the origin
    let half = if config.extent.is_finite() { config.extent.abs() / 2.0 } else { 0.0 };
    let (min_scale, max_scale) = if config.min_scale <= config.max_scale {
        (config.min_scale, config.max_scale)
    } else {
        (config.max_scale, config.min_scale)
    };

    (0..config.count)
        .map(|i| {
            let position = Vec3::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            );
            let scale = rng.gen_range(min_scale..=max_scale);
            let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
            let hue = rng.gen_range(0.0..=1.0);

            Shape {
                id: EntityId(i as u32 + 1),
                position,
                scale,
                kind,
                hsl: [hue, config.saturation, config.lightness],
                rotation: Vec2::ZERO,
            }
        })
        .collect()
}

/// The fixed set of shapes plus their shared motion
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeField {
    shapes: Box<[Shape]>,
    motion: FieldMotion,
}

impl ShapeField {
    pub fn new(shapes: Vec<Shape>, motion: FieldMotion) -> Self {
        Self {
            shapes: shapes.into_boxed_slice(),
            motion,
        }
    }

    pub fn generate(config: &FieldConfig, max_delta: f32, rng: &mut impl Rng) -> Self {
        Self::new(generate_with(config, rng), FieldMotion::from_config(config, max_delta))
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Animated for ShapeField {
    fn update(&self, frame: &FrameInfo) -> Self {
        Self {
            shapes: self.shapes.iter().map(|s| s.update(frame, &self.motion)).collect(),
            motion: self.motion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_shapes_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let shapes = generate(20, 20.0, &mut rng);

        assert_eq!(shapes.len(), 20);
        for shape in &shapes {
            for axis in shape.position.to_array() {
                assert!((-10.0..=10.0).contains(&axis), "{shape:?}");
            }
            assert!((0.2..=0.7).contains(&shape.scale));
            assert!(shape.kind.index() <= 2);
            assert_eq!(shape.hsl[1], 0.7);
            assert_eq!(shape.hsl[2], 0.5);
            assert!((0.0..=1.0).contains(&shape.hsl[0]));
            assert_eq!(shape.rotation, Vec2::ZERO);
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        let a = generate(20, 20.0, &mut StdRng::seed_from_u64(99));
        let b = generate(20, 20.0, &mut StdRng::seed_from_u64(99));
        let c = generate(20, 20.0, &mut StdRng::seed_from_u64(100));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ids_are_unique_and_skip_logo() {
        let shapes = generate(20, 20.0, &mut StdRng::seed_from_u64(3));
        let mut ids: Vec<_> = shapes.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert!(!ids.contains(&EntityId::LOGO));
    }

    #[test]
    fn test_per_tick_rotation_ignores_delta() {
        let shape = generate(1, 20.0, &mut StdRng::seed_from_u64(5)).remove(0);
        let motion = FieldMotion::default();

        let slow = shape.update(&FrameInfo::new(1, 1.0, 0.5), &motion);
        let fast = shape.update(&FrameInfo::new(1, 1.0, 0.001), &motion);

        assert_eq!(slow.rotation, Vec2::splat(0.01));
        assert_eq!(fast.rotation, slow.rotation);
    }

    #[test]
    fn test_per_second_rotation_scales_with_clamped_delta() {
        let shape = generate(1, 20.0, &mut StdRng::seed_from_u64(5)).remove(0);
        let motion = FieldMotion {
            policy: RotationPolicy::PerSecond,
            ..FieldMotion::default()
        };

        let half_speed = shape.update(&FrameInfo::new(1, 1.0, 1.0 / 120.0), &motion);
        let stalled = shape.update(&FrameInfo::new(1, 1.0, 30.0), &motion);

        assert!((half_speed.rotation.x - 0.005).abs() < 1e-6);
        assert!((stalled.rotation.x - 0.01 * 0.1 * 60.0).abs() < 1e-5);
    }

    #[test]
    fn test_bob_is_phased_by_x() {
        let mut shape = generate(1, 20.0, &mut StdRng::seed_from_u64(8)).remove(0);
        shape.position = Vec3::new(1.5, 2.0, 0.0);
        let frame = FrameInfo::new(4, 0.25, 1.0 / 60.0);

        let next = shape.update(&frame, &FieldMotion::default());

        let expected = 2.0 + (0.25f32 + 1.5).sin() * 0.001;
        assert!((next.position.y - expected).abs() < 1e-6);
        assert_eq!(next.position.x, 1.5);
        assert_eq!(next.position.z, 0.0);
    }

    #[test]
    fn test_field_update_keeps_count() {
        let mut rng = StdRng::seed_from_u64(2);
        let field = ShapeField::generate(&FieldConfig::default(), 0.1, &mut rng);
        let next = field.update(&FrameInfo::new(1, 0.016, 0.016));
        assert_eq!(next.len(), 20);
        assert!(next.shapes().iter().all(|s| s.rotation == Vec2::splat(0.01)));
    }

    #[test]
    fn test_negative_extent_uses_magnitude() {
        let shapes = generate(10, -20.0, &mut StdRng::seed_from_u64(6));
        assert_eq!(shapes.len(), 10);
        assert!(shapes.iter().all(|s| s.position.abs().max_element() <= 10.0));
    }

    #[test]
    fn test_swapped_scale_bounds_do_not_panic() {
        let config = FieldConfig {
            min_scale: 0.7,
            max_scale: 0.2,
            ..FieldConfig::default()
        };
        let shapes = generate_with(&config, &mut StdRng::seed_from_u64(6));
        assert!(shapes.iter().all(|s| (0.2..=0.7).contains(&s.scale)));
    }

    #[test]
    fn test_geometry_follows_scale() {
        assert_eq!(ShapeKind::Cube.geometry(0.5), Geometry::Box { size: 0.5 });
        match ShapeKind::Torus.geometry(0.5) {
            Geometry::Torus { radius, tube, .. } => {
                assert!((radius - 0.15).abs() < 1e-6);
                assert!((tube - 0.05).abs() < 1e-6);
            }
            other => panic!("unexpected geometry {other:?}"),
        }
    }
}
