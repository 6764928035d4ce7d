//! Output hygiene for written files.

use std::path::Path;

use anyhow::{bail, Context};

/// Check that writing `output` won't clobber the input or an existing file.
pub fn check_writable(input: &Path, output: &Path, force: bool) -> anyhow::Result<()> {
    if let (Ok(canonical_in), Ok(canonical_out)) = (input.canonicalize(), output.canonicalize()) {
        if canonical_in == canonical_out {
            bail!("output would overwrite input: {}", input.display());
        }
    }

    if output.exists() && !force {
        bail!(
            "output already exists: {}\nUse --force to overwrite",
            output.display()
        );
    }

    Ok(())
}

/// Create parent directories for the output path.
pub fn ensure_parent(output: &Path) -> anyhow::Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Format a byte size into a human-readable string.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_format_by_magnitude() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
