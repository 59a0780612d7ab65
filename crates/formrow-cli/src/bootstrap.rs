use anyhow::Context;
use formrow_config::FormrowConfig;

use crate::cli::{GlobalFlags, OutputFormat};

/// Load `.env`, then the layered configuration plus any `--config` file.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FormrowConfig> {
    let config = FormrowConfig::load_with_dotenv_from(flags.config.as_deref())
        .context("failed to load formrow configuration")?;
    tracing::debug!(
        rows = %config.layout.row_selector,
        unchecked = %config.extract.unchecked,
        "configuration loaded"
    );
    Ok(config)
}

/// `--format` wins over `output.format`.
pub fn output_format(flags: &GlobalFlags, config: &FormrowConfig) -> OutputFormat {
    flags
        .format
        .unwrap_or_else(|| OutputFormat::from(config.output.format))
}

#[cfg(test)]
mod tests {
    use formrow_config::FormrowConfig;

    use super::output_format;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(format: Option<OutputFormat>) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet: false,
            verbose: false,
            config: None,
        }
    }

    #[test]
    fn flag_overrides_configured_format() {
        let mut config = FormrowConfig::default();
        config.output.format = formrow_config::OutputFormat::Table;
        assert_eq!(output_format(&flags(Some(OutputFormat::Raw)), &config), OutputFormat::Raw);
    }

    #[test]
    fn configured_format_applies_without_flag() {
        let mut config = FormrowConfig::default();
        config.output.format = formrow_config::OutputFormat::Table;
        assert_eq!(output_format(&flags(None), &config), OutputFormat::Table);
    }

    #[test]
    fn default_format_is_json() {
        assert_eq!(
            output_format(&flags(None), &FormrowConfig::default()),
            OutputFormat::Json
        );
    }
}
