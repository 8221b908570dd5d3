pub mod controller;
pub mod shader;
pub mod window;

pub use controller::*;
pub use shader::*;
pub use window::*;
