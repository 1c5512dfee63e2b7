//! Full simulation benchmarks
//!
//! Run with: cargo bench -p driftlab-pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use driftlab_core::{CompressionLevel, Instruction, RiskProfile, RunConfig};
use driftlab_pipeline::Simulator;

const PROMPT: &str = "Summarize this document in exactly 5 bullet points.
Keep my original section headings.
Do NOT change the tone at all.
Respond in a Markdown table with columns for Section, Key Insight, and Risk.";

fn benchmark_compare(c: &mut Criterion) {
    let simulator = Simulator::standard().expect("Failed to create simulator");
    let instruction = Instruction::new(PROMPT).expect("prompt is non-empty");

    let configs = [
        ("normal_light", RunConfig::new(RiskProfile::Normal, CompressionLevel::Light)),
        ("high_aggressive", RunConfig::new(RiskProfile::High, CompressionLevel::Aggressive)),
    ];

    let mut group = c.benchmark_group("Simulation");
    for (name, config) in configs {
        group.bench_with_input(BenchmarkId::new("compare", name), &config, |b, config| {
            b.iter(|| simulator.compare(black_box(&instruction), *config));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_compare);
criterion_main!(benches);
