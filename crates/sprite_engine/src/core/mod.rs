//! # Core Engine Module
//!
//! Shared configuration consumed by the batching core and the frame loop.
//!
//! ## Organization
//!
//! - **Config**: Engine, batching and timing settings
//! - **Foundation**: Low-level utilities (math, time, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{BatchConfig, EngineConfig, TimingConfig};
