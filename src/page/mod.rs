//! Page - Rendering Surfaces Outside the Browser

mod memory;

pub use memory::*;
