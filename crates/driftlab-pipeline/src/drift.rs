//! The drifting ("current") pipeline
//!
//! Four stages, each feeding its text to the next:
//! - Safety: under high risk, may swap the instruction for its core text
//! - Policy: keeps the core text and only the first constraint
//! - Memory: truncates past a character limit
//! - Reasoning: strips formatting and tone phrases
//!
//! Every stage also emits a fixed note explaining what it may have lost.

use aho_corasick::AhoCorasick;
use driftlab_classifiers::ClassifiedText;
use driftlab_core::{
    CompressionLevel, DriftReport, Error, Instruction, Result, RiskProfile, RunConfig, Stage,
    StageResult,
};
use tracing::debug;

use crate::notes;
use crate::rule::RemovalRuleSet;
use crate::settings::DriftSettings;

/// Drifting pipeline with compiled matchers
pub struct DriftPipeline {
    settings: DriftSettings,
    sensitive: AhoCorasick,
    removals: RemovalRuleSet,
}

impl DriftPipeline {
    /// Create a pipeline from settings
    pub fn new(settings: DriftSettings) -> Result<Self> {
        settings.validate()?;

        let sensitive = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&settings.sensitive_words)
            .map_err(|e| {
                Error::pipeline(format!("Failed to build sensitive word matcher: {}", e))
            })?;

        let removals = RemovalRuleSet::compile(&settings.removal_rules)?;

        Ok(Self {
            settings,
            sensitive,
            removals,
        })
    }

    /// Create a pipeline with default settings
    pub fn standard() -> Result<Self> {
        Self::new(DriftSettings::default())
    }

    pub fn settings(&self) -> &DriftSettings {
        &self.settings
    }

    /// Whether the text contains a sensitive word
    pub fn is_sensitive(&self, text: &str) -> bool {
        self.sensitive.is_match(text)
    }

    /// Run all four stages
    pub fn run(
        &self,
        instruction: &Instruction,
        classified: &ClassifiedText,
        config: RunConfig,
    ) -> DriftReport {
        let safety = self.safety_stage(instruction, classified, config.risk_profile);
        let policy = self.policy_stage(&safety.text, classified);
        let (memory, truncated) = self.memory_stage(&policy.text, config.compression_level);
        let (reasoning, removed_by) = self.reasoning_stage(&memory.text);

        let dropped_constraints: Vec<String> = classified
            .constraints()
            .into_iter()
            .skip(1)
            .map(str::to_string)
            .collect();

        metrics::counter!("driftlab_simulations_total", "pipeline" => "current").increment(1);
        metrics::counter!("driftlab_constraints_dropped_total")
            .increment(dropped_constraints.len() as u64);

        DriftReport {
            config,
            safety,
            policy,
            memory,
            reasoning,
            dropped_constraints,
            truncated,
            removed_by,
        }
    }

    /// Safety stage: may reframe or trim the instruction under high risk
    pub fn safety_stage(
        &self,
        instruction: &Instruction,
        classified: &ClassifiedText,
        risk_profile: RiskProfile,
    ) -> StageResult {
        let text = instruction.as_str();
        let core_or = |fallback: &str| -> String {
            if classified.core_text().is_empty() {
                fallback.to_string()
            } else {
                classified.core_text().to_string()
            }
        };

        let (note, output) = match risk_profile {
            RiskProfile::Normal => (notes::SAFETY_NORMAL, text.to_string()),
            RiskProfile::High if self.is_sensitive(text) => {
                (notes::SAFETY_HIGH_SENSITIVE, core_or(text))
            }
            RiskProfile::High if instruction.char_len() > self.settings.long_input_threshold => (
                notes::SAFETY_HIGH_LONG,
                core_or(take_chars(text, self.settings.safety_trim_chars)),
            ),
            RiskProfile::High => (notes::SAFETY_HIGH_ALLOWED, text.to_string()),
        };

        debug!(
            risk_profile = %risk_profile,
            rewritten = (output != text),
            "Safety stage complete"
        );

        StageResult::note_first(Stage::Safety, note, output)
    }

    /// Policy stage: core text plus the first constraint, nothing else
    pub fn policy_stage(&self, safety_text: &str, classified: &ClassifiedText) -> StageResult {
        let constraints = classified.constraints();

        match constraints.first() {
            Some(kept) => {
                let text = format!("{} {}", classified.core_text(), kept)
                    .trim()
                    .to_string();

                debug!(
                    kept = %kept,
                    dropped = constraints.len() - 1,
                    "Policy stage narrowed constraints"
                );

                StageResult::note_first(Stage::Policy, notes::POLICY_SUBSET, text)
            }
            None => StageResult::note_first(Stage::Policy, notes::POLICY_PASSTHROUGH, safety_text),
        }
    }

    /// Memory stage: truncate past the compression limit
    ///
    /// Returns the stage result and whether truncation happened.
    pub fn memory_stage(&self, text: &str, level: CompressionLevel) -> (StageResult, bool) {
        let limit = self.settings.limit_for(level);
        let truncated = text.chars().count() > limit;

        let output = if truncated {
            format!("{}{}", take_chars(text, limit), notes::truncation_marker(level))
        } else {
            text.to_string()
        };

        debug!(
            compression = %level,
            limit,
            truncated,
            "Memory stage complete"
        );

        (
            StageResult::note_first(Stage::Memory, notes::memory_note(level, truncated), output),
            truncated,
        )
    }

    /// Reasoning stage: delete formatting and tone phrases
    ///
    /// Returns the stage result and the names of the rules that fired.
    pub fn reasoning_stage(&self, text: &str) -> (StageResult, Vec<String>) {
        let removal = self.removals.apply(text);

        debug!(rules = ?removal.fired, "Reasoning stage complete");

        (
            StageResult::text_first(Stage::FinalReasoning, removal.text, notes::REASONING_DRIFT),
            removal.fired,
        )
    }
}

/// Prefix of at most `n` characters
fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
