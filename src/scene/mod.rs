mod graph;
mod logo;
mod particles;
mod shapes;
mod snapshot;
mod stars;

use serde::Serialize;

pub use graph::SceneGraph;
pub use logo::{FloatPose, HoverState, InteractiveLogo, LogoState, PointerEvent};
pub use particles::ParticleField;
pub use shapes::{generate, FieldMotion, Geometry, Shape, ShapeField, ShapeKind};
pub use snapshot::{
    CameraSnapshot, LogoSnapshot, ParticleSnapshot, RenderFrame, RenderSnapshot, StarfieldSnapshot,
};
pub use stars::Starfield;

/// Identifier of a pickable scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntityId(pub u32);

impl EntityId {
    pub const LOGO: EntityId = EntityId(0);
}
