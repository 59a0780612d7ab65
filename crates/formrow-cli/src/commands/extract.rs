use anyhow::Context;
use formrow_config::FormrowConfig;
use formrow_core::{AttributeTable, RowReport};
use formrow_extract::{AttributeExtractor, RowLayout, parse_document};
use serde::Serialize;

use crate::bootstrap::output_format;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::commands::input::read_source;
use crate::output::output;

/// Output of `formrow extract`: the merged table, or one report per row.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ExtractOutput {
    Table(AttributeTable),
    Reports(Vec<RowReport>),
}

/// Handle `formrow extract`.
pub fn handle(args: &ExtractArgs, config: &FormrowConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = read_source(&args.input)?;
    let result = run(&source, args, config)?;
    output(&result, output_format(flags, config))
}

/// Extract every row of `source` with the configured layout and policy,
/// after applying command-line overrides.
pub fn run(source: &str, args: &ExtractArgs, config: &FormrowConfig) -> anyhow::Result<ExtractOutput> {
    let mut layout =
        RowLayout::from_config(&config.layout).context("invalid layout configuration")?;
    if let Some(rows) = args.rows.as_deref() {
        layout = layout
            .with_row_selector(rows)
            .context("invalid --rows selector")?;
    }

    let policy = args.unchecked.unwrap_or(config.extract.unchecked);
    let extractor = AttributeExtractor::new(layout).with_policy(policy);
    let document = parse_document(source);

    if args.detailed {
        Ok(ExtractOutput::Reports(extractor.report_document(&document)))
    } else {
        Ok(ExtractOutput::Table(extractor.extract_document(&document)))
    }
}
