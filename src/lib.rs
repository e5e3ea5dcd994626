//! Float helpers with the arithmetic semantics of the WebAssembly `fmin`,
//! `fmax` and `nearest` numeric instructions.
//!
//! The std counterparts (`f64::min`, `f64::max`, `f64::round`) disagree with
//! the Wasm spec on NaN propagation, the sign of zero, and tie-breaking, so
//! runtimes need these variants instead.

pub mod float;

pub use float::{wasm_max, wasm_min, wasm_nearest_f32, wasm_nearest_f64};
