pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod input;
pub mod projection;
pub mod traits;
pub mod types;
pub mod view_manager;
pub mod window;

pub use camera::{Camera, CameraMovement};
pub use config::ViewConfig;
pub use projection::ProjectionMode;
pub use view_manager::{FrameMatrices, ViewManager};
