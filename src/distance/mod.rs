pub mod haversine;
pub mod matrix;

pub use haversine::*;
pub use matrix::*;
