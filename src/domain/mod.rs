//! Domain - Pure Data Structures
//!
//! These types don't depend on any rendering surface.

pub mod config;
pub mod page;
