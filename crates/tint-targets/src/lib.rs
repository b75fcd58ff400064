//! Target generators.
//!
//! Each [`Target`] turns a [`GeneratorInput`] (fully resolved palettes, the
//! active token map and style tokens) into the text of one artifact. The
//! mapping data lives in [`tables`]; generators only assemble and serialize.

pub mod generators;
pub mod input;
pub mod sanitize;
pub mod tables;
pub mod target;


pub use input::{GeneratorInput, StyleTokens};
pub use target::{Generator, Target};
