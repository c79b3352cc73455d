pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{
    AnalyzeArgs, CliArgs, Commands, ConfigArgs, EdgeArgs, InstallArgs, ListArgs, StackArgs,
};
pub use output::{OutputFormat, OutputFormatter};
