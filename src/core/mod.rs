pub mod camera;
pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod cursor;
pub mod overlay;
pub mod progress;
pub mod scene;
pub mod smoothing;
pub mod stage;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use progress::*;
pub use scene::*;
pub use stage::*;

// Shaders bundled as string constants
pub static TUNNEL_WGSL: &str = include_str!("../../shaders/tunnel.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
