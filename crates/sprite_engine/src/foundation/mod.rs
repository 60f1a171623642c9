//! Foundation module
//!
//! Building blocks shared by the batching core and the frame loop:
//! - [`math`]: nalgebra aliases and 2D rotation helpers
//! - [`time`]: FPS averaging and frame-rate limiting
//! - [`logging`]: `env_logger` setup over the `log` facade

pub mod logging;
pub mod math;
pub mod time;
