use clap::{Args, Parser, Subcommand};
use driftlab_core::{CompressionLevel, RiskProfile};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "driftlab")]
#[command(
    author,
    version,
    about = "Compare how drifting and stabilized pipelines treat instruction constraints"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an instruction through both pipelines
    Simulate {
        #[command(flatten)]
        input: InputArgs,

        /// Safety stage sensitivity: normal or high
        #[arg(short, long, value_parser = parse_risk)]
        risk: Option<RiskProfile>,

        /// Memory compression: light or aggressive
        #[arg(short, long, value_parser = parse_compression)]
        compression: Option<CompressionLevel>,

        /// Which pipeline to show: current, stabilized or both
        #[arg(short, long, default_value = "both", value_parser = parse_pipeline)]
        pipeline: PipelineSelection,

        /// Output format: text or json
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,

        /// Settings file path
        #[arg(long, env = "DRIFTLAB_CONFIG", default_value = "./driftlab.yaml")]
        config: PathBuf,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how each sentence of an instruction is labelled
    Classify {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: text or json
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,

        /// Settings file path
        #[arg(long, env = "DRIFTLAB_CONFIG", default_value = "./driftlab.yaml")]
        config: PathBuf,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the built-in example prompts
    Examples {
        /// Show a single example
        #[arg(long)]
        id: Option<String>,
    },
}

/// Where the instruction comes from; stdin when nothing is given
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Instruction text
    #[arg(short, long, conflicts_with_all = ["file", "example"])]
    pub text: Option<String>,

    /// Read the instruction from a file
    #[arg(short, long, conflicts_with = "example")]
    pub file: Option<PathBuf>,

    /// Use a built-in example prompt (example1 to example5)
    #[arg(short, long)]
    pub example: Option<String>,
}

/// Pipelines to include in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineSelection {
    Current,
    Stabilized,
    #[default]
    Both,
}

impl PipelineSelection {
    pub fn includes_current(&self) -> bool {
        matches!(self, Self::Current | Self::Both)
    }

    pub fn includes_stabilized(&self) -> bool {
        matches!(self, Self::Stabilized | Self::Both)
    }
}

impl FromStr for PipelineSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "current" => Ok(Self::Current),
            "stabilized" => Ok(Self::Stabilized),
            "both" => Ok(Self::Both),
            other => Err(format!(
                "unknown pipeline '{}': expected current, stabilized or both",
                other
            )),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{}': expected text or json", other)),
        }
    }
}

fn parse_risk(s: &str) -> Result<RiskProfile, String> {
    s.parse().map_err(|e: driftlab_core::Error| e.to_string())
}

fn parse_compression(s: &str) -> Result<CompressionLevel, String> {
    s.parse().map_err(|e: driftlab_core::Error| e.to_string())
}

fn parse_pipeline(s: &str) -> Result<PipelineSelection, String> {
    s.parse()
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}
