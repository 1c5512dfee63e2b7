//! Instruction input resolution

use anyhow::{bail, Context};
use driftlab_core::Instruction;
use std::io::{IsTerminal, Read};
use tracing::warn;

use crate::catalog;
use crate::cli::InputArgs;

const NO_INSTRUCTION: &str =
    "no instruction supplied; pass --text, --file or --example, or pipe an instruction on stdin";

impl InputArgs {
    /// Read, trim and validate the instruction
    pub fn resolve(&self) -> anyhow::Result<Instruction> {
        let raw = if let Some(text) = &self.text {
            text.clone()
        } else if let Some(path) = &self.file {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read instruction from {}", path.display()))?
        } else if let Some(id) = &self.example {
            if catalog::find_example(id).is_none() {
                warn!(requested = %id, "Unknown example, using the first one");
            }
            catalog::example_or_first(id).prompt.to_string()
        } else {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                bail!(NO_INSTRUCTION);
            }
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read instruction from stdin")?;
            buf
        };

        Instruction::new(raw).context(NO_INSTRUCTION)
    }
}
