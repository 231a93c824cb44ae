//! CPU-side UI mesh buffers
//!
//! Handles construction of flat UI geometry and collection of curved output.

mod buffer;

pub use buffer::*;
