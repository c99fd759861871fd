use serde::{Deserialize, Serialize};

/// Easing curves mapping linear progress in [0, 1] to eased progress
///
/// Every curve maps 0 to 0 and 1 to 1; `BackOut` overshoots past 1 in between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    /// Cubic deceleration
    Power3Out,
    /// Cubic acceleration then deceleration
    Power3InOut,
    /// Decelerates past the target then settles back
    BackOut { overshoot: f32 },
}

impl Easing {
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power3Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::BackOut { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u * u * u + overshoot * u * u
            }
        }
    }
}
