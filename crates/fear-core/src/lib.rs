pub mod color;
pub mod constants;
pub mod error;
pub mod fear;
pub mod mapping;
pub mod noise_field;
pub mod palette;
pub mod particle;
pub mod sketch;
pub mod surface;

pub use color::*;
pub use constants::*;
pub use error::*;
pub use fear::*;
pub use mapping::*;
pub use noise_field::*;
pub use palette::*;
pub use particle::*;
pub use sketch::*;
pub use surface::*;
