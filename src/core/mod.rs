//! Core building blocks shared by every other module
//!
//! - math/  - Vector and rotation Matrix
//! - utils/ - console logging macro and the deterministic RNG

#[macro_use]
pub mod utils;
pub mod math;
