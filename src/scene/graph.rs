use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::logo::{InteractiveLogo, PointerEvent};
use super::particles::ParticleField;
use super::shapes::{ShapeField, ShapeKind};
use super::snapshot::{
    CameraSnapshot, LogoSnapshot, ParticleSnapshot, RenderFrame, RenderSnapshot, StarfieldSnapshot,
};
use super::stars::Starfield;
use super::EntityId;
use crate::camera::ViewportController;
use crate::config::{EnvironmentPreset, LightingConfig, ParticleConfig, SceneConfig};
use crate::core::{DisplayContext, ReadinessGate, ResourceId};
use crate::frame::FrameInfo;
use crate::traits::{Animated, CameraController};

/// Fallback aspect when mounted into a collapsed container
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// The whole decorative scene: camera, logo, shape field, particles and the
/// star backdrop under a fixed light rig
#[derive(Debug, Clone)]
pub struct SceneGraph {
    camera: ViewportController,
    logo: InteractiveLogo,
    field: ShapeField,
    particles: ParticleField,
    particle_style: ParticleConfig,
    shape_opacity: f32,
    stars: Starfield,
    star_fade: bool,
    lighting: LightingConfig,
    environment: EnvironmentPreset,
    gate: ReadinessGate,
    last_frame: FrameInfo,
}

impl SceneGraph {
    /// Build from config, seeding generation from `config.seed`
    pub fn build(config: &SceneConfig, display: DisplayContext) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::build_with_rng(config, display, &mut rng)
    }

    pub fn build_with_rng(
        config: &SceneConfig,
        display: DisplayContext,
        rng: &mut impl Rng,
    ) -> Self {
        let aspect = display.aspect().unwrap_or(DEFAULT_ASPECT);
        let field = ShapeField::generate(&config.field, config.max_delta, rng);
        let particles =
            ParticleField::generate(config.particles.count, config.particles.extent, rng)
                .with_spin_rate(config.particles.spin_rate);
        let stars = Starfield::generate(&config.stars, rng);

        log::info!(
            "scene built: {} shapes, {} particles, {} stars, {} environment (seed {})",
            field.len(),
            particles.len(),
            stars.len(),
            config.environment.name(),
            config.seed
        );

        Self {
            camera: ViewportController::new(&config.camera, aspect, config.max_delta),
            logo: InteractiveLogo::new(config.logo.clone()),
            field,
            particles,
            particle_style: config.particles.clone(),
            shape_opacity: config.field.opacity,
            stars,
            star_fade: config.stars.fade,
            lighting: config.lighting,
            environment: config.environment,
            gate: ReadinessGate::new(Self::declared_resources(config.environment)),
            last_frame: FrameInfo::default(),
        }
    }

    /// Geometries, materials and the environment map that must be ready
    /// before the first render
    pub fn declared_resources(environment: EnvironmentPreset) -> Vec<ResourceId> {
        ShapeKind::ALL
            .iter()
            .map(|kind| kind.resource())
            .chain(
                [
                    "geometry/icosahedron",
                    "geometry/points",
                    "material/distort",
                    "material/wireframe",
                    "material/points",
                    "geometry/stars",
                    "material/stars",
                ]
                .map(ResourceId::from),
            )
            .chain([ResourceId::new(format!("environment/{}", environment.name()))])
            .collect()
    }

    /// Advance every entity to `frame`: camera, logo, shapes, particles, stars
    pub fn update(&mut self, frame: &FrameInfo) {
        self.camera = self.camera.update(frame);
        self.logo = self.logo.update(frame);
        self.field = self.field.update(frame);
        self.particles = self.particles.update(frame);
        self.stars = self.stars.update(frame);
        self.last_frame = *frame;
    }

    /// Route a pointer event; returns false if `id` is not interactive
    pub fn on_pointer(&mut self, id: EntityId, event: PointerEvent) -> bool {
        if id != InteractiveLogo::ID {
            log::debug!("pointer {event:?} on non-interactive entity {id:?}");
            return false;
        }
        self.logo.on_pointer(event);
        true
    }

    /// Placeholder until the gate opens, then the current scene state
    pub fn render(&self) -> RenderFrame {
        if self.gate.is_ready() {
            RenderFrame::Scene(self.snapshot())
        } else {
            RenderFrame::Loading {
                progress: self.gate.progress(),
            }
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            frame: self.last_frame.number,
            time: self.last_frame.time,
            camera: CameraSnapshot {
                position: self.camera.position(),
                target: self.camera.target(),
                fov_y: self.camera.fov_y(),
                aspect: self.camera.aspect(),
            },
            logo: LogoSnapshot {
                rotation: self.logo.world_rotation().to_array(),
                offset: self.logo.world_offset(),
                scale: self.logo.scale(),
                color: self.logo.color(),
                hovered: self.logo.hovered(),
                material: self.logo.material(),
            },
            shapes: self.field.shapes().to_vec(),
            shape_opacity: self.shape_opacity,
            particles: ParticleSnapshot {
                count: self.particles.len(),
                rotation: self.particles.rotation(),
                color: self.particle_style.color,
                size: self.particle_style.size,
                opacity: self.particle_style.opacity,
            },
            stars: StarfieldSnapshot {
                count: self.stars.len(),
                time: self.stars.time(),
                fade: self.star_fade,
            },
            lighting: self.lighting,
            environment: self.environment,
        }
    }

    pub fn camera(&self) -> &ViewportController {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut ViewportController {
        &mut self.camera
    }

    pub fn logo(&self) -> &InteractiveLogo {
        &self.logo
    }

    pub fn field(&self) -> &ShapeField {
        &self.field
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn stars(&self) -> &Starfield {
        &self.stars
    }

    pub fn lighting(&self) -> &LightingConfig {
        &self.lighting
    }

    pub fn environment(&self) -> EnvironmentPreset {
        self.environment
    }

    /// Resources this scene's gate is waiting on
    pub fn resources(&self) -> Vec<ResourceId> {
        Self::declared_resources(self.environment)
    }

    pub fn gate(&self) -> &ReadinessGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut ReadinessGate {
        &mut self.gate
    }
}
