pub mod commands;

pub use commands::{AliasMode, Cli, OutputFormat, generate_report, run};
