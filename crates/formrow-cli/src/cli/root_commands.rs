use clap::{Args, Subcommand, ValueEnum};
use formrow_core::UncheckedPolicy;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract every attribute row of a saved form page.
    Extract(ExtractArgs),
    /// Extract a single row; the whole input is the row fragment.
    Row(RowArgs),
    /// Print the JSON Schema of command output.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// HTML file to read, or `-` for stdin.
    pub input: String,

    /// CSS selector for attribute rows (overrides `layout.row_selector`).
    #[arg(long)]
    pub rows: Option<String>,

    /// Unchecked checkbox/radio groups: preserve (empty list) or sentinel.
    #[arg(long)]
    pub unchecked: Option<UncheckedPolicy>,

    /// One report per row (name source, control, resolved flag) instead of
    /// the merged attribute table.
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RowArgs {
    /// HTML file holding one row, or `-` for stdin.
    pub input: String,

    /// Unchecked checkbox/radio groups: preserve (empty list) or sentinel.
    #[arg(long)]
    pub unchecked: Option<UncheckedPolicy>,

    /// Print the row report instead of the `{name: values}` mapping.
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which output shape to describe.
    #[arg(value_enum, default_value = "table")]
    pub kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    /// `formrow extract` output.
    Table,
    /// `formrow row` output.
    Row,
    /// `--detailed` output of a single row.
    Report,
}
