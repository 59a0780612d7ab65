use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl From<formrow_config::OutputFormat> for OutputFormat {
    fn from(format: formrow_config::OutputFormat) -> Self {
        match format {
            formrow_config::OutputFormat::Json => Self::Json,
            formrow_config::OutputFormat::Table => Self::Table,
            formrow_config::OutputFormat::Raw => Self::Raw,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    /// `None` defers to `output.format` from configuration.
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}
