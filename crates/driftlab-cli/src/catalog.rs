//! Built-in example prompts

use serde::Serialize;

/// A ready-made instruction and what to look for in its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExamplePrompt {
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub watch_for: &'static str,
}

pub const EXAMPLES: &[ExamplePrompt] = &[
    ExamplePrompt {
        id: "example1",
        title: "Example 1 — Formatting, tone, and structure",
        prompt: "Summarize this document in exactly 5 bullet points.
Keep my original section headings.
Do NOT change the tone at all.
Respond in a Markdown table with columns for Section, Key Insight, and Risk.",
        watch_for: "Current: table, tone and headings often dropped. Stabilized: all constraints preserved verbatim.",
    },
    ExamplePrompt {
        id: "example2",
        title: "Example 2 — Sensitive but safe content",
        prompt: "Analyze the communication mistakes in this fictional scenario:
\"Alice accused Bob of lying about the report due date, but Bob genuinely misunderstood the instructions.\"
Focus only on interpersonal patterns.
Do NOT provide legal or psychological advice.
Present the output in 3 short bullets using neutral tone.",
        watch_for: "Current: may over-apply safety and drift into generic relationship advice. Stabilized: bullet count, tone and \"no psychology\" all preserved.",
    },
    ExamplePrompt {
        id: "example3",
        title: "Example 3 — Long instruction with constraints at the edges",
        prompt: "Rewrite the following policy document for clarity.
Do NOT shorten it.
Do NOT remove any obligations or requirements.
Keep all numbered sections exactly as they are.
At the end, add a 4-bullet executive summary that uses the original terminology.
Here is the document:
[PASTE ANY LONG TEXT HERE]",
        watch_for: "Current: memory compression drops early and late constraints. Stabilized: all constraints retained as explicit inputs.",
    },
    ExamplePrompt {
        id: "example4",
        title: "Example 4 — Design prompt with tight style rules",
        prompt: "Generate 3 brand taglines for a new wellness app.
Tone: soft, minimal, elegant.
Format each tagline as \"Tagline — short rationale\".
Do NOT use emojis or exclamation marks.
Keep the output under 20 words total.",
        watch_for: "Current: stylistic tone preserved, hard limits usually lost. Stabilized: tone, limits and formatting preserved.",
    },
    ExamplePrompt {
        id: "example5",
        title: "Example 5 — All-around interpretation drift scenario",
        prompt: "Provide a 4-step troubleshooting flow for the following situation:
\"My team keeps misunderstanding each other's Slack messages.\"
Keep the tone calm and neutral.
Do NOT include psychological advice.
Use a Markdown numbered list.
After the list, include a 1-sentence meta-summary that starts with: \"Interpretation drift occurs when...\"",
        watch_for: "Current: Markdown and meta-summary often lost. Stabilized: structure and constraints preserved cleanly.",
    },
];

/// Look up an example by id
pub fn find_example(id: &str) -> Option<&'static ExamplePrompt> {
    EXAMPLES.iter().find(|ex| ex.id.eq_ignore_ascii_case(id.trim()))
}

/// Look up an example by id, falling back to the first one
pub fn example_or_first(id: &str) -> &'static ExamplePrompt {
    find_example(id).unwrap_or(&EXAMPLES[0])
}
