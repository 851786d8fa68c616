//! Filter operations
//!
//! This module provides neighbourhood filters: a random-displacement blur and
//! Sobel edge detection.

/// Filter kernels
pub mod kernels;

mod blur;
mod edges;

pub use blur::{blur, blur_with_seed};
pub use edges::detect_edges;
