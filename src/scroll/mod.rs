//! Scroll-driven and one-shot entrance animations for page elements
//!
//! Bindings map a scroll reference point onto progress in [0, 1] and write
//! interpolated visual properties to an [`ElementHost`]. The intro timeline
//! plays hero entrances once per mount on the frame clock instead.

mod binding;
mod host;
mod orchestrator;
pub mod presets;
mod timeline;

pub use binding::{BindingMode, BindingSpec, Property, PropertyTrack, ScrollBinding, TargetRef};
pub use host::{ElementHost, MemoryHost};
pub use orchestrator::{BindingHandle, ScrollAnimationOrchestrator};
pub use timeline::{EntryState, IntroTimeline, TimelineEntry};
