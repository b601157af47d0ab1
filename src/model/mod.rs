pub mod airplane;
pub mod common;
pub mod product;

pub use airplane::*;
pub use common::*;
pub use product::*;
