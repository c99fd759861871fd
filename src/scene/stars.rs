use std::f32::consts::TAU;
use std::sync::Arc;

use rand::Rng;

use crate::config::StarfieldConfig;
use crate::frame::FrameInfo;
use crate::math::hsl_to_rgb;
use crate::traits::Animated;

/// Star lightness; hue walks the wheel by index and saturation comes from config
const STAR_LIGHTNESS: f32 = 0.9;

/// Backdrop of point stars on a spherical shell
///
/// Buffers are generated once. Per tick only the shader time moves, which
/// drives the twinkle; stars never change position.
#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    positions: Arc<[f32]>,
    colors: Arc<[f32]>,
    sizes: Arc<[f32]>,
    time: f32,
    speed: f32,
}

impl Starfield {
    /// Shell of `config.count` stars between `radius` and `radius + depth`
    ///
    /// Each star steps inward from the outer edge by a random fraction of
    /// `depth / count`, so the innermost one never passes `radius`.
    pub fn generate(config: &StarfieldConfig, rng: &mut impl Rng) -> Self {
        let count = config.count;
        let radius = config.radius.abs();
        let depth = config.depth.abs();
        let increment = if count == 0 { 0.0 } else { depth / count as f32 };

        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);
        let mut sizes = Vec::with_capacity(count);
        let mut r = radius + depth;

        for i in 0..count {
            r -= increment * rng.gen::<f32>();

            let polar = (1.0 - 2.0 * rng.gen::<f32>()).clamp(-1.0, 1.0).acos();
            let azimuth = rng.gen::<f32>() * TAU;
            let (sin_polar, cos_polar) = polar.sin_cos();
            positions.extend([
                r * sin_polar * azimuth.sin(),
                r * cos_polar,
                r * sin_polar * azimuth.cos(),
            ]);

            colors.extend(hsl_to_rgb(i as f32 / count as f32, config.saturation, STAR_LIGHTNESS));
            sizes.push((0.5 + 0.5 * rng.gen::<f32>()) * config.factor);
        }

        Self {
            positions: positions.into(),
            colors: colors.into(),
            sizes: sizes.into(),
            time: 0.0,
            speed: config.speed,
        }
    }

    /// Flattened xyz triples
    pub fn positions(&self) -> &Arc<[f32]> {
        &self.positions
    }

    /// Flattened rgb triples
    pub fn colors(&self) -> &Arc<[f32]> {
        &self.colors
    }

    pub fn sizes(&self) -> &Arc<[f32]> {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Shader time, `t * speed`
    pub fn time(&self) -> f32 {
        self.time
    }
}

impl Animated for Starfield {
    fn update(&self, frame: &FrameInfo) -> Self {
        Self {
            positions: Arc::clone(&self.positions),
            colors: Arc::clone(&self.colors),
            sizes: Arc::clone(&self.sizes),
            time: frame.time * self.speed,
            speed: self.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stars(seed: u64) -> Starfield {
        Starfield::generate(&StarfieldConfig::default(), &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_stars_sit_inside_the_shell() {
        let field = stars(4);

        assert_eq!(field.len(), 5000);
        assert_eq!(field.positions().len(), 15000);
        for star in field.positions().chunks_exact(3) {
            let r = (star[0] * star[0] + star[1] * star[1] + star[2] * star[2]).sqrt();
            assert!((100.0 - 1e-3..=150.0 + 1e-3).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn test_zero_saturation_gives_grey_stars() {
        let field = stars(4);
        for rgb in field.colors().chunks_exact(3) {
            assert!((rgb[0] - 0.9).abs() < 1e-5);
            assert_eq!(rgb[0], rgb[1]);
            assert_eq!(rgb[1], rgb[2]);
        }
    }

    #[test]
    fn test_sizes_scale_with_factor() {
        let field = stars(9);
        assert!(field.sizes().iter().all(|s| (2.0..=4.0).contains(s)));
    }

    #[test]
    fn test_same_seed_same_sky() {
        assert_eq!(stars(1), stars(1));
        assert_ne!(stars(1).positions(), stars(2).positions());
    }

    #[test]
    fn test_update_only_moves_time() {
        let field = stars(3);
        let next = field.update(&FrameInfo::new(5, 2.5, 0.016));

        assert!(Arc::ptr_eq(next.positions(), field.positions()));
        assert!(Arc::ptr_eq(next.colors(), field.colors()));
        assert_eq!(next.time(), 2.5);
    }

    #[test]
    fn test_empty_starfield() {
        let config = StarfieldConfig {
            count: 0,
            ..StarfieldConfig::default()
        };
        let field = Starfield::generate(&config, &mut StdRng::seed_from_u64(0));
        assert!(field.is_empty());
        assert!(field.positions().is_empty());
    }
}
