//! Entry points tying classification to both pipelines

use driftlab_classifiers::{ClassifiedText, ConstraintClassifier};
use driftlab_core::{
    CompressionLevel, DriftReport, Instruction, Result, RiskProfile, RunConfig, StabilizedReport,
};
use serde::Serialize;
use tracing::info;

use crate::drift::DriftPipeline;
use crate::settings::SimulatorSettings;
use crate::stabilized::StabilizationPipeline;

/// Classifier plus both pipelines, built once and reused
///
/// Holds no mutable state; every run depends only on its arguments.
pub struct Simulator {
    classifier: ConstraintClassifier,
    drift: DriftPipeline,
    stabilized: StabilizationPipeline,
}

/// Both pipelines run over one shared classification
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub instruction: Instruction,
    pub classification: ClassifiedText,
    pub current: DriftReport,
    pub stabilized: StabilizedReport,
}

impl Simulator {
    /// Build a simulator from settings
    pub fn new(settings: &SimulatorSettings) -> Result<Self> {
        Ok(Self {
            classifier: ConstraintClassifier::new(&settings.classifier)?,
            drift: DriftPipeline::new(settings.drift.clone())?,
            stabilized: StabilizationPipeline::new()?,
        })
    }

    /// Build a simulator with default settings
    pub fn standard() -> Result<Self> {
        Self::new(&SimulatorSettings::default())
    }

    pub fn classifier(&self) -> &ConstraintClassifier {
        &self.classifier
    }

    pub fn drift_pipeline(&self) -> &DriftPipeline {
        &self.drift
    }

    pub fn stabilization_pipeline(&self) -> &StabilizationPipeline {
        &self.stabilized
    }

    /// Segment and classify an instruction
    pub fn classify(&self, instruction: &Instruction) -> ClassifiedText {
        self.classifier.classify(instruction.as_str())
    }

    /// Run the drifting pipeline
    pub fn simulate_current(
        &self,
        instruction: &Instruction,
        risk_profile: RiskProfile,
        compression_level: CompressionLevel,
    ) -> DriftReport {
        let classified = self.classify(instruction);
        self.drift.run(
            instruction,
            &classified,
            RunConfig::new(risk_profile, compression_level),
        )
    }

    /// Run the stabilized pipeline
    pub fn simulate_stabilized(&self, instruction: &Instruction) -> StabilizedReport {
        let classified = self.classify(instruction);
        self.stabilized.run(instruction, &classified)
    }

    /// Run both pipelines from a single classification
    pub fn compare(&self, instruction: &Instruction, config: RunConfig) -> Comparison {
        let classification = self.classify(instruction);
        let current = self.drift.run(instruction, &classification, config);
        let stabilized = self.stabilized.run(instruction, &classification);

        info!(
            risk_profile = %config.risk_profile,
            compression = %config.compression_level,
            sentences = classification.sentences().len(),
            constraints = classification.constraint_count(),
            dropped = current.dropped_constraints.len(),
            truncated = current.truncated,
            "Simulation complete"
        );

        Comparison {
            instruction: instruction.clone(),
            classification,
            current,
            stabilized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_matches_individual_runs() {
        let simulator = Simulator::standard().unwrap();
        let instruction =
            Instruction::new("Summarize the report. Keep headings. Never use emojis.").unwrap();
        let config = RunConfig::new(RiskProfile::High, CompressionLevel::Aggressive);

        let comparison = simulator.compare(&instruction, config);
        assert_eq!(
            comparison.current,
            simulator.simulate_current(&instruction, RiskProfile::High, CompressionLevel::Aggressive)
        );
        assert_eq!(
            comparison.stabilized,
            simulator.simulate_stabilized(&instruction)
        );
        assert_eq!(comparison.classification, simulator.classify(&instruction));
    }

    #[test]
    fn test_custom_settings_flow_through() {
        let settings = SimulatorSettings::from_yaml(
            "classifier:\n  keywords: [\"bullet\"]\ndrift:\n  light_limit: 10\n",
        )
        .unwrap();
        let simulator = Simulator::new(&settings).unwrap();
        let instruction = Instruction::new("Use three bullets. Keep it short.").unwrap();

        let report =
            simulator.simulate_current(&instruction, RiskProfile::Normal, CompressionLevel::Light);
        assert_eq!(report.policy.text, "Keep it short. Use three bullets.");
        assert!(report.truncated);
        assert_eq!(report.memory.text, "Keep it sh … [light truncation]");
    }

    #[test]
    fn test_invalid_settings_fail_construction() {
        let settings = SimulatorSettings::from_yaml("classifier:\n  keywords: []\n").unwrap();
        assert!(Simulator::new(&settings).is_err());
    }

    #[test]
    fn test_simulator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Simulator>();
    }
}
