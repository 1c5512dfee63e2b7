use anyhow::Context;
use clap::Parser;
use driftlab_cli::cli::{Cli, Commands, OutputFormat};
use driftlab_cli::config::AppConfig;
use driftlab_cli::{catalog, render};
use driftlab_pipeline::Simulator;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            input,
            risk,
            compression,
            pipeline,
            format,
            config,
            verbose,
        } => {
            init_logging(verbose);
            describe_metrics();

            let app_config = AppConfig::load(&config, risk, compression)
                .with_context(|| format!("failed to load settings from {}", config.display()))?;
            let simulator = Simulator::new(&app_config.simulator)?;
            let instruction = input.resolve()?;

            info!(
                chars = instruction.char_len(),
                risk_profile = %app_config.defaults.risk_profile,
                compression = %app_config.defaults.compression_level,
                "Simulating instruction"
            );

            let comparison = simulator.compare(&instruction, app_config.defaults);

            match format {
                OutputFormat::Text => print!("{}", render::comparison_text(&comparison, pipeline)),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&render::comparison_json(&comparison, pipeline))?
                ),
            }
        }

        Commands::Classify {
            input,
            format,
            config,
            verbose,
        } => {
            init_logging(verbose);

            let app_config = AppConfig::load(&config, None, None)
                .with_context(|| format!("failed to load settings from {}", config.display()))?;
            let simulator = Simulator::new(&app_config.simulator)?;
            let instruction = input.resolve()?;
            let classified = simulator.classify(&instruction);

            match format {
                OutputFormat::Text => print!("{}", render::classification_text(&classified)),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&render::classification_json(&classified))?
                ),
            }
        }

        Commands::Examples { id } => {
            init_logging(false);

            match id {
                Some(id) => {
                    if catalog::find_example(&id).is_none() {
                        warn!(requested = %id, "Unknown example, showing the first one");
                    }
                    print!("{}", render::example_detail(catalog::example_or_first(&id)));
                }
                None => print!("{}", render::example_list(catalog::EXAMPLES)),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "driftlab=debug,driftlab_cli=debug,driftlab_classifiers=debug,driftlab_pipeline=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn describe_metrics() {
    metrics::describe_counter!(
        "driftlab_simulations_total",
        "Total number of pipeline runs by pipeline"
    );
    metrics::describe_counter!(
        "driftlab_constraints_dropped_total",
        "Total number of constraint sentences dropped by the policy stage"
    );
}
