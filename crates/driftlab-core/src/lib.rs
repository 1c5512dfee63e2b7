//! driftlab Core
//!
//! Core types and error handling shared across driftlab components.
//!
//! This crate provides:
//! - The validated `Instruction` newtype
//! - Run configuration (risk profile, compression level)
//! - Stage results and the rendered outputs of both pipelines
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    CompressionLevel, CurrentOutputs, DriftReport, Instruction, RiskProfile, RunConfig,
    StabilizedOutputs, StabilizedReport, Stage, StageLayout, StageResult,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        CompressionLevel, DriftReport, Instruction, RiskProfile, RunConfig, StabilizedReport,
        Stage, StageResult,
    };
}
