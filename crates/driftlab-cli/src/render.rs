//! Text and JSON rendering of simulation results

use driftlab_classifiers::{ClassifiedText, SentenceLabel};
use driftlab_core::StageResult;
use driftlab_pipeline::Comparison;
use serde_json::{json, Map, Value};

use crate::catalog::ExamplePrompt;
use crate::cli::PipelineSelection;

pub const STATUS_LINE: &str =
    "Simulation complete. Compare the drifted reasoning input above with the stabilized version below.";

/// Human-readable comparison
pub fn comparison_text(comparison: &Comparison, selection: PipelineSelection) -> String {
    let mut out = String::new();

    if selection.includes_current() {
        let config = comparison.current.config;
        out.push_str(&format!(
            "== Current pipeline (risk: {}, compression: {}) ==\n",
            config.risk_profile, config.compression_level
        ));
        for stage in comparison.current.stages() {
            push_stage(&mut out, stage);
        }
    }

    if selection.includes_stabilized() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("== Stabilized pipeline ==\n");
        for stage in comparison.stabilized.stages() {
            push_stage(&mut out, stage);
        }
    }

    if selection == PipelineSelection::Both {
        out.push('\n');
        out.push_str(STATUS_LINE);
        out.push('\n');
    }

    out
}

fn push_stage(out: &mut String, stage: &StageResult) {
    out.push_str(&format!("\n[{}]\n{}\n", stage.stage, stage.render()));
}

/// Machine-readable comparison
///
/// Stage strings sit under `current` and `stabilized`, keyed by stage label.
pub fn comparison_json(comparison: &Comparison, selection: PipelineSelection) -> Value {
    let mut root = Map::new();
    root.insert("instruction".into(), json!(comparison.instruction));
    root.insert("config".into(), json!(comparison.current.config));

    if selection.includes_current() {
        let report = &comparison.current;
        root.insert("current".into(), json!(report.outputs()));
        root.insert(
            "drift".into(),
            json!({
                "dropped_constraints": report.dropped_constraints,
                "truncated": report.truncated,
                "removed_by": report.removed_by,
            }),
        );
    }

    if selection.includes_stabilized() {
        root.insert("stabilized".into(), json!(comparison.stabilized.outputs()));
    }

    Value::Object(root)
}

/// Human-readable sentence labels
pub fn classification_text(classified: &ClassifiedText) -> String {
    let mut out = String::new();

    for sentence in classified.sentences() {
        match (sentence.label, &sentence.keyword) {
            (SentenceLabel::Constraint, Some(keyword)) => {
                out.push_str(&format!("[constraint] {}  ({})\n", sentence.text, keyword));
            }
            (SentenceLabel::Constraint, None) => {
                out.push_str(&format!("[constraint] {}\n", sentence.text));
            }
            (SentenceLabel::Core, _) => {
                out.push_str(&format!("[core]       {}\n", sentence.text));
            }
        }
    }

    out.push_str(&format!(
        "\n{} sentences, {} constraints\n",
        classified.sentences().len(),
        classified.constraint_count()
    ));
    out.push_str(&format!("Core text: {}\n", classified.core_text()));

    out
}

pub fn classification_json(classified: &ClassifiedText) -> Value {
    json!({
        "sentences": classified.sentences(),
        "core_text": classified.core_text(),
        "constraints": classified.constraints(),
    })
}

/// One line per example
pub fn example_list(examples: &[ExamplePrompt]) -> String {
    let mut out = String::new();
    for example in examples {
        out.push_str(&format!("{:<10} {}\n", example.id, example.title));
    }
    out
}

pub fn example_detail(example: &ExamplePrompt) -> String {
    format!(
        "{}\n\n{}\n\nWhat to watch for: {}\n",
        example.title, example.prompt, example.watch_for
    )
}
