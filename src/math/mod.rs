mod color;
mod easing;
mod interp;

pub use color::{hsl_to_rgb, Rgb};
pub use easing::Easing;
pub use interp::{inverse_lerp_clamped, lerp};
