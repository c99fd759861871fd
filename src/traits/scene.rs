use crate::frame::FrameInfo;

/// Per-frame state transition for a scene entity
///
/// Entities never mutate themselves on tick; the owning scene replaces each
/// one with the state this returns.
pub trait Animated: Sized {
    fn update(&self, frame: &FrameInfo) -> Self;
}
