pub mod clock;
pub mod display_context;
pub mod readiness;

pub use clock::FrameClock;
pub use display_context::DisplayContext;
pub use readiness::{ReadinessGate, ResourceId};
