use formrow_config::FormrowConfig;
use formrow_core::{ExtractionResult, RowReport};
use formrow_extract::{AttributeExtractor, parse_row, row_root};
use serde::Serialize;

use crate::bootstrap::output_format;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::RowArgs;
use crate::commands::input::read_source;
use crate::output::output;

/// Output of `formrow row`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RowOutput {
    Result(ExtractionResult),
    Report(RowReport),
}

/// Handle `formrow row`.
pub fn handle(args: &RowArgs, config: &FormrowConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = read_source(&args.input)?;
    let result = run(&source, args, config)?;
    output(&result, output_format(flags, config))
}

/// Treat all of `source` as one row fragment and extract it.
pub fn run(source: &str, args: &RowArgs, config: &FormrowConfig) -> anyhow::Result<RowOutput> {
    let policy = args.unchecked.unwrap_or(config.extract.unchecked);
    let extractor = AttributeExtractor::from_config(config)?.with_policy(policy);

    let document = parse_row(source);
    let row = row_root(&document);

    if args.detailed {
        Ok(RowOutput::Report(extractor.report(row)))
    } else {
        Ok(RowOutput::Result(extractor.extract(row)))
    }
}
