pub mod catalog;
pub mod cli;
pub mod config;
pub mod input;
pub mod render;

pub use catalog::{example_or_first, find_example, ExamplePrompt, EXAMPLES};
pub use cli::*;
pub use config::AppConfig;
