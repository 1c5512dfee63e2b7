//! driftlab Pipelines
//!
//! Two four-stage pipelines over the same classified instruction:
//!
//! - The drifting ("current") pipeline threads text through safety, policy,
//!   memory and reasoning stages, each of which may narrow or drop
//!   constraints, and explains every loss in a note.
//! - The stabilized pipeline attaches an explicit intent contract and carries
//!   every constraint sentence verbatim to the reasoning input.
//!
//! Both are pure functions of the instruction and run configuration.

pub mod drift;
pub mod notes;
pub mod rule;
pub mod settings;
pub mod simulator;
pub mod stabilized;

pub use drift::DriftPipeline;
pub use rule::{default_removal_rules, Removal, RemovalRule, RemovalRuleSet};
pub use settings::{DriftSettings, SimulatorSettings, DEFAULT_SENSITIVE_WORDS};
pub use simulator::{Comparison, Simulator};
pub use stabilized::{IntentContract, StabilizationPipeline};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::drift::DriftPipeline;
    pub use crate::settings::SimulatorSettings;
    pub use crate::simulator::{Comparison, Simulator};
    pub use crate::stabilized::StabilizationPipeline;
    pub use driftlab_core::prelude::*;
}
