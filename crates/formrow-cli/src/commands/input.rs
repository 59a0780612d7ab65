use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Marker argument for reading markup from stdin.
pub const STDIN: &str = "-";

/// Read markup from a file path, or from stdin when `input` is `-`.
pub fn read_source(input: &str) -> anyhow::Result<String> {
    if input == STDIN {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read markup from stdin")?;
        tracing::debug!(bytes = source.len(), "read markup from stdin");
        return Ok(source);
    }

    let path = Path::new(input);
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read markup");
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::read_source;

    #[test]
    fn reads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("row.html");
        std::fs::write(&path, "<tr></tr>").unwrap();

        let source = read_source(path.to_str().unwrap()).unwrap();
        assert_eq!(source, "<tr></tr>");
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.html");

        let error = read_source(path.to_str().unwrap()).unwrap_err();
        assert!(format!("{error:#}").contains("missing.html"));
    }
}
