pub mod provinces;
pub mod types;

pub use provinces::*;
pub use types::*;
