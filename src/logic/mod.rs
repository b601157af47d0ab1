pub mod airplanes;
pub mod filter;
pub mod products;

pub use airplanes::*;
pub use filter::*;
pub use products::*;
