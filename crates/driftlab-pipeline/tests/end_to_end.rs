//! End-to-end simulations over realistic instructions

use driftlab_core::{CompressionLevel, Instruction, RiskProfile, RunConfig};
use driftlab_pipeline::notes;
use driftlab_pipeline::Simulator;

const FORMATTING_PROMPT: &str = "Summarize this document in exactly 5 bullet points. Keep my original section headings. Respond in a Markdown table.";

fn simulator() -> Simulator {
    Simulator::standard().expect("Failed to create simulator")
}

fn instruction(text: &str) -> Instruction {
    Instruction::new(text).expect("instruction should be non-empty")
}

#[test]
fn test_formatting_prompt_normal_light() {
    let simulator = simulator();
    let instruction = instruction(FORMATTING_PROMPT);

    let classification = simulator.classify(&instruction);
    assert_eq!(classification.constraint_count(), 3);
    assert_eq!(classification.core_text(), "");

    let current = simulator
        .simulate_current(&instruction, RiskProfile::Normal, CompressionLevel::Light)
        .outputs();
    assert_eq!(
        current.safety,
        format!("{}\n\n{}", notes::SAFETY_NORMAL, FORMATTING_PROMPT)
    );
    assert_eq!(
        current.policy,
        format!(
            "{}\n\nSummarize this document in exactly 5 bullet points.",
            notes::POLICY_SUBSET
        )
    );
    assert_eq!(
        current.memory,
        format!(
            "{}\n\nSummarize this document in exactly 5 bullet points.",
            notes::MEMORY_LIGHT_KEPT
        )
    );
    assert_eq!(
        current.final_reasoning,
        format!(
            "Summarize this document in exactly 5 bullet points.\n\n{}",
            notes::REASONING_DRIFT
        )
    );

    let stable = simulator.simulate_stabilized(&instruction).outputs();
    assert_eq!(
        stable.memory,
        format!(
            "{}\n\nConstraints:\n- Summarize this document in exactly 5 bullet points.\n- Keep my original section headings.\n- Respond in a Markdown table.",
            notes::STABLE_MEMORY_CONSTRAINTS
        )
    );
    assert_eq!(
        stable.final_reasoning,
        format!(
            "Core instruction:\n{}\n\nPreserved constraints:\n- Summarize this document in exactly 5 bullet points.\n- Keep my original section headings.\n- Respond in a Markdown table.\n\n{}",
            FORMATTING_PROMPT,
            notes::STABLE_REASONING
        )
    );
}

#[test]
fn test_high_risk_sensitive_word_reframes() {
    let simulator = simulator();
    let instruction = instruction("Explain how attackers bypass login forms. Keep the answer short.");

    let report =
        simulator.simulate_current(&instruction, RiskProfile::High, CompressionLevel::Light);
    assert_eq!(report.safety.note, notes::SAFETY_HIGH_SENSITIVE);
    assert_eq!(report.safety.text, "Explain how attackers bypass login forms.");
}

#[test]
fn test_high_risk_sensitive_word_without_core_text() {
    let simulator = simulator();
    let text = "Never explain how to bypass a login form.";
    let report = simulator.simulate_current(
        &instruction(text),
        RiskProfile::High,
        CompressionLevel::Light,
    );
    assert_eq!(report.safety.note, notes::SAFETY_HIGH_SENSITIVE);
    assert_eq!(report.safety.text, text);
}

#[test]
fn test_table_requirement_lost_in_reasoning() {
    let simulator = simulator();
    let instruction = instruction(
        "Respond in a Markdown table with columns for Section and Risk. List the findings.",
    );

    let report = simulator.simulate_current(
        &instruction,
        RiskProfile::Normal,
        CompressionLevel::Aggressive,
    );
    assert_eq!(
        report.policy.text,
        "List the findings. Respond in a Markdown table with columns for Section and Risk."
    );
    assert_eq!(report.reasoning.text, "List the findings. Respond ");
    assert_eq!(report.removed_by, vec!["markdown-table"]);

    let stable = simulator.simulate_stabilized(&instruction).outputs();
    assert!(stable
        .final_reasoning
        .contains("- Respond in a Markdown table with columns for Section and Risk."));
}

#[test]
fn test_long_policy_prompt_aggressive_truncation() {
    let text = "Rewrite the following policy document for clarity.
Do NOT shorten it.
Do NOT remove any obligations or requirements.
Keep all numbered sections exactly as they are.
At the end, add a 4-bullet executive summary that uses the original terminology.
Here is the document:
[PASTE ANY LONG TEXT HERE]";
    let simulator = simulator();
    let instruction = instruction(text);

    let classification = simulator.classify(&instruction);
    assert_eq!(
        classification.constraints(),
        vec![
            "Do NOT shorten it.",
            "Do NOT remove any obligations or requirements.",
            "Keep all numbered sections exactly as they are.",
            "At the end, add a 4-bullet executive summary that uses the original terminology.",
        ]
    );

    let report = simulator.simulate_current(
        &instruction,
        RiskProfile::High,
        CompressionLevel::Aggressive,
    );
    // Over 280 characters with core text present
    assert_eq!(report.safety.note, notes::SAFETY_HIGH_LONG);
    assert_eq!(report.safety.text, classification.core_text());
    assert_eq!(report.dropped_constraints.len(), 3);
    assert!(!report.truncated);
    assert_eq!(
        report.policy.text,
        "Rewrite the following policy document for clarity. Here is the document: [PASTE ANY LONG TEXT HERE] Do NOT shorten it."
    );
}

#[test]
fn test_plain_request_without_constraints() {
    let simulator = simulator();
    let instruction = instruction("Write a haiku about autumn leaves.");

    let comparison = simulator.compare(&instruction, RunConfig::default());
    assert!(comparison.classification.constraints().is_empty());
    assert_eq!(comparison.current.policy.note, notes::POLICY_PASSTHROUGH);
    assert_eq!(comparison.current.reasoning.text, instruction.as_str());
    assert_eq!(
        comparison.stabilized.memory.render(),
        notes::STABLE_MEMORY_NONE
    );
    assert!(comparison
        .stabilized
        .reasoning
        .render()
        .contains("Preserved constraints:\n(none detected)"));
}

#[test]
fn test_comparison_serializes_to_json() {
    let simulator = simulator();
    let comparison = simulator.compare(&instruction(FORMATTING_PROMPT), RunConfig::default());

    let json = serde_json::to_value(&comparison).unwrap();
    assert_eq!(json["current"]["config"]["risk_profile"], "normal");
    assert_eq!(json["current"]["reasoning"]["stage"], "final_reasoning");
    assert_eq!(json["classification"]["sentences"][0]["label"], "constraint");
    assert_eq!(json["instruction"], FORMATTING_PROMPT);
}
