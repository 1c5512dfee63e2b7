//! Core types for driftlab

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A user instruction, trimmed and guaranteed non-empty
///
/// Empty input is rejected here so the pipelines never see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Instruction(String);

impl Instruction {
    /// Validate and wrap raw instruction text
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyInstruction);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the instruction text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl TryFrom<String> for Instruction {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Instruction> for String {
    fn from(value: Instruction) -> Self {
        value.0
    }
}

impl FromStr for Instruction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Instruction {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How aggressively the safety stage treats the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    #[default]
    Normal,
    High,
}

impl RiskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

impl FromStr for RiskProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            other => Err(Error::config(format!(
                "unknown risk profile '{}': expected normal or high",
                other
            ))),
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How hard the memory stage compresses its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    #[default]
    Light,
    Aggressive,
}

impl CompressionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Aggressive => "aggressive",
        }
    }
}

impl FromStr for CompressionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(Error::config(format!(
                "unknown compression level '{}': expected light or aggressive",
                other
            ))),
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-invocation configuration for the drift pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunConfig {
    /// Safety stage sensitivity
    #[serde(default)]
    pub risk_profile: RiskProfile,

    /// Memory stage compression
    #[serde(default)]
    pub compression_level: CompressionLevel,
}

impl RunConfig {
    /// Create a new run configuration
    pub fn new(risk_profile: RiskProfile, compression_level: CompressionLevel) -> Self {
        Self {
            risk_profile,
            compression_level,
        }
    }
}

/// Name of a pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Explicit intent contract (stabilized pipeline only)
    IntentContract,
    Safety,
    Policy,
    Memory,
    /// Input handed to the reasoning layer
    FinalReasoning,
}

impl Stage {
    /// Short label used by front ends
    pub fn label(&self) -> &'static str {
        match self {
            Self::IntentContract => "eic",
            Self::Safety => "safety",
            Self::Policy => "policy",
            Self::Memory => "memory",
            Self::FinalReasoning => "final",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a stage's note and text combine into the displayed string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageLayout {
    /// Note, blank line, text
    NoteFirst,
    /// Text, blank line, note
    TextFirst,
    /// Note alone; text is ignored
    NoteOnly,
}

/// Output of one stage of one pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResult {
    /// Which stage produced this
    pub stage: Stage,

    /// Explanatory rationale for the stage's behavior
    pub note: String,

    /// Text handed to the next stage
    pub text: String,

    /// Rendering layout
    pub layout: StageLayout,
}

impl StageResult {
    /// Stage whose note precedes its text
    pub fn note_first(stage: Stage, note: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            stage,
            note: note.into(),
            text: text.into(),
            layout: StageLayout::NoteFirst,
        }
    }

    /// Stage whose text precedes its note
    pub fn text_first(stage: Stage, text: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            stage,
            note: note.into(),
            text: text.into(),
            layout: StageLayout::TextFirst,
        }
    }

    /// Stage that only explains itself
    pub fn note_only(stage: Stage, note: impl Into<String>) -> Self {
        Self {
            stage,
            note: note.into(),
            text: String::new(),
            layout: StageLayout::NoteOnly,
        }
    }

    /// Externally observed string for this stage
    pub fn render(&self) -> String {
        match self.layout {
            StageLayout::NoteFirst => format!("{}\n\n{}", self.note, self.text),
            StageLayout::TextFirst => format!("{}\n\n{}", self.text, self.note),
            StageLayout::NoteOnly => self.note.clone(),
        }
    }
}

/// Four stage results of the drifting ("current") pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftReport {
    /// Configuration the run used
    pub config: RunConfig,

    pub safety: StageResult,
    pub policy: StageResult,
    pub memory: StageResult,
    pub reasoning: StageResult,

    /// Constraint sentences the policy stage discarded, in original order
    pub dropped_constraints: Vec<String>,

    /// Whether the memory stage truncated its input
    pub truncated: bool,

    /// Names of the removal rules that deleted text in the reasoning stage
    pub removed_by: Vec<String>,
}

impl DriftReport {
    /// Stage results in pipeline order
    pub fn stages(&self) -> [&StageResult; 4] {
        [&self.safety, &self.policy, &self.memory, &self.reasoning]
    }

    /// Rendered stage strings
    pub fn outputs(&self) -> CurrentOutputs {
        CurrentOutputs {
            safety: self.safety.render(),
            policy: self.policy.render(),
            memory: self.memory.render(),
            final_reasoning: self.reasoning.render(),
        }
    }
}

/// Rendered strings of the drifting pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentOutputs {
    pub safety: String,
    pub policy: String,
    pub memory: String,
    #[serde(rename = "final")]
    pub final_reasoning: String,
}

/// Four stage results of the stabilized pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilizedReport {
    pub intent_contract: StageResult,
    pub safety: StageResult,
    pub memory: StageResult,
    pub reasoning: StageResult,
}

impl StabilizedReport {
    /// Stage results in pipeline order
    pub fn stages(&self) -> [&StageResult; 4] {
        [
            &self.intent_contract,
            &self.safety,
            &self.memory,
            &self.reasoning,
        ]
    }

    /// Rendered stage strings
    pub fn outputs(&self) -> StabilizedOutputs {
        StabilizedOutputs {
            eic: self.intent_contract.render(),
            safety: self.safety.render(),
            memory: self.memory.render(),
            final_reasoning: self.reasoning.render(),
        }
    }
}

/// Rendered strings of the stabilized pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilizedOutputs {
    pub eic: String,
    pub safety: String,
    pub memory: String,
    #[serde(rename = "final")]
    pub final_reasoning: String,
}
