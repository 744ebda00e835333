pub mod error;
pub mod generator;
pub mod load;
pub mod palette;
pub mod render;

pub use error::GenError;
pub use generator::{generate, Generator};
pub use palette::{deriveIdentifier, ColorRecord, Rgb};
