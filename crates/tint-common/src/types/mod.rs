mod color;
mod mode;

pub use color::*;
pub use mode::*;
