pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod frame;
pub mod math;
pub mod scene;
pub mod scroll;
pub mod traits;
pub mod types;

pub use config::SceneConfig;
pub use engine::{mount, SceneHandle};
pub use error::{BindingError, ConfigError};
