//! The stabilized pipeline
//!
//! Produces its four outputs straight from the classified text. No stage
//! reads another stage's output.

use driftlab_classifiers::ClassifiedText;
use driftlab_core::{Instruction, Result, Stage, StageResult, StabilizedReport};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::notes;

/// Explicit intent contract attached to every task
///
/// Independent of the instruction text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentContract {
    pub intent_type: String,
    pub risk_tolerance: String,
    pub style: String,
}

impl Default for IntentContract {
    fn default() -> Self {
        Self {
            intent_type: "analysis".to_string(),
            risk_tolerance: "literal".to_string(),
            style: "direct".to_string(),
        }
    }
}

/// Stabilized pipeline
pub struct StabilizationPipeline {
    contract: IntentContract,
    contract_json: String,
}

impl StabilizationPipeline {
    /// Create a pipeline with the standard contract
    pub fn new() -> Result<Self> {
        Self::with_contract(IntentContract::default())
    }

    /// Create a pipeline with a specific contract
    pub fn with_contract(contract: IntentContract) -> Result<Self> {
        let contract_json = serde_json::to_string_pretty(&contract)?;
        Ok(Self {
            contract,
            contract_json,
        })
    }

    pub fn contract(&self) -> &IntentContract {
        &self.contract
    }

    /// Produce all four outputs
    pub fn run(&self, instruction: &Instruction, classified: &ClassifiedText) -> StabilizedReport {
        let constraints = classified.constraints();

        debug!(
            constraints = constraints.len(),
            "Stabilized pipeline preserving constraints"
        );
        metrics::counter!("driftlab_simulations_total", "pipeline" => "stabilized").increment(1);

        StabilizedReport {
            intent_contract: self.intent_contract_stage(),
            safety: self.safety_stage(),
            memory: self.memory_stage(&constraints),
            reasoning: self.reasoning_stage(instruction, classified.core_text(), &constraints),
        }
    }

    /// The contract, pretty-printed under a header
    pub fn intent_contract_stage(&self) -> StageResult {
        StageResult::note_first(
            Stage::IntentContract,
            notes::CONTRACT_HEADER,
            self.contract_json.clone(),
        )
    }

    /// Safe content passes through unchanged
    pub fn safety_stage(&self) -> StageResult {
        StageResult::note_only(Stage::Safety, notes::STABLE_SAFETY)
    }

    /// Every constraint, verbatim and in order
    pub fn memory_stage(&self, constraints: &[&str]) -> StageResult {
        if constraints.is_empty() {
            StageResult::note_only(Stage::Memory, notes::STABLE_MEMORY_NONE)
        } else {
            StageResult::note_first(
                Stage::Memory,
                notes::STABLE_MEMORY_CONSTRAINTS,
                format!("Constraints:\n{}", bullet_list(constraints)),
            )
        }
    }

    /// Core instruction plus every constraint
    pub fn reasoning_stage(
        &self,
        instruction: &Instruction,
        core_text: &str,
        constraints: &[&str],
    ) -> StageResult {
        let core = if core_text.is_empty() {
            instruction.as_str()
        } else {
            core_text
        };
        let preserved = if constraints.is_empty() {
            notes::NO_CONSTRAINTS_MARKER.to_string()
        } else {
            bullet_list(constraints)
        };

        StageResult::text_first(
            Stage::FinalReasoning,
            format!(
                "Core instruction:\n{}\n\nPreserved constraints:\n{}",
                core, preserved
            ),
            notes::STABLE_REASONING,
        )
    }
}

fn bullet_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
