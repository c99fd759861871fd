pub mod camera;
pub mod scene;

pub use camera::*;
pub use scene::*;
