pub mod color;
pub mod config;
pub mod constants;
pub mod effects;
pub mod frame_rate;
pub mod interaction;
pub mod motion;
pub mod particle;
pub mod prefs;
pub mod render;
pub mod sim;
pub mod surface;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use effects::*;
pub use frame_rate::*;
pub use interaction::*;
pub use motion::*;
pub use particle::*;
pub use prefs::*;
pub use render::*;
pub use sim::*;
pub use surface::*;
