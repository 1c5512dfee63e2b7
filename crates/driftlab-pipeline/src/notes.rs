//! Fixed rationale notes emitted by each stage

use driftlab_core::CompressionLevel;

pub const SAFETY_NORMAL: &str = "Normal mode: input allowed. No explicit blocking, but constraints may still be softened downstream.";

pub const SAFETY_HIGH_SENSITIVE: &str = "High-sensitivity mode: input flagged as potentially risky. Task is reframed toward generic explanation.";

pub const SAFETY_HIGH_LONG: &str = "High-sensitivity mode: long input. Context trimmed for safety review, style constraints treated as secondary.";

pub const SAFETY_HIGH_ALLOWED: &str = "High-sensitivity mode: input allowed, but constraints are deprioritized relative to core task.";

pub const POLICY_SUBSET: &str = "Policy pass: global rules emphasize core task and retain only a subset of constraints (e.g., the first one). Other style/formatting rules are implicitly treated as optional.";

pub const POLICY_PASSTHROUGH: &str = "Policy pass: no explicit constraints detected; input forwarded as-is after safety processing.";

pub const MEMORY_AGGRESSIVE_TRUNCATED: &str = "Aggressive memory compression: prompt truncated for summary. Lower-priority details (often formatting and style) are dropped.";

pub const MEMORY_AGGRESSIVE_KEPT: &str = "Aggressive memory compression: text is short enough, but future expansions might ignore subtle formatting rules.";

pub const MEMORY_LIGHT_TRUNCATED: &str = "Light memory compression: small truncation applied. Most constraints preserved, but some nuance may be lost.";

pub const MEMORY_LIGHT_KEPT: &str = "Light memory compression: input preserved. Any loss now will likely come from reasoning shortcuts, not memory.";

pub const AGGRESSIVE_TRUNCATION_MARKER: &str = " … [truncated for summary]";

pub const LIGHT_TRUNCATION_MARKER: &str = " … [light truncation]";

pub const REASONING_DRIFT: &str = "Reasoning sees a simplified version of the request. The main content intent is preserved, but format and tone constraints may be partially or fully lost, producing visible meaning drift.";

pub const CONTRACT_HEADER: &str = "Explicit Intent Contract attached to this task:";

pub const STABLE_SAFETY: &str = "Safety check operates in block/allow mode. For safe content, it passes the user instruction through unchanged, without reinterpretation.";

pub const STABLE_MEMORY_CONSTRAINTS: &str =
    "Memory invariant: all detected constraint sentences are preserved verbatim across summaries.";

pub const STABLE_MEMORY_NONE: &str = "Memory invariant: no explicit constraints detected, so the full user instruction is preserved as-is.";

pub const STABLE_REASONING: &str =
    "This is what the reasoning layer sees – a stable combination of task + constraints.";

pub const NO_CONSTRAINTS_MARKER: &str = "(none detected)";

/// Note for the memory stage
pub fn memory_note(level: CompressionLevel, truncated: bool) -> &'static str {
    match (level, truncated) {
        (CompressionLevel::Aggressive, true) => MEMORY_AGGRESSIVE_TRUNCATED,
        (CompressionLevel::Aggressive, false) => MEMORY_AGGRESSIVE_KEPT,
        (CompressionLevel::Light, true) => MEMORY_LIGHT_TRUNCATED,
        (CompressionLevel::Light, false) => MEMORY_LIGHT_KEPT,
    }
}

/// Suffix appended to truncated memory text
pub fn truncation_marker(level: CompressionLevel) -> &'static str {
    match level {
        CompressionLevel::Aggressive => AGGRESSIVE_TRUNCATION_MARKER,
        CompressionLevel::Light => LIGHT_TRUNCATION_MARKER,
    }
}
