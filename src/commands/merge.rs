use crate::commands::format_size;
use pagecut::pdf::{merge::merge_paths, PdfDocument};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn run(inputs: &[PathBuf], output: &Path, sort: bool) -> Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("No input files specified");
    }

    let mut ordered = inputs.to_vec();
    if sort {
        ordered.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));
    }

    if ordered.len() == 1 {
        // Just copy the single file
        std::fs::copy(&ordered[0], output).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                ordered[0].display(),
                output.display()
            )
        })?;
        println!("Copied 1 file to {}", output.display());
        return Ok(());
    }

    let mut merged = merge_paths(&ordered)?;
    let total_pages = merged.get_pages().len();
    PdfDocument::save(&mut merged, output)?;

    let size = std::fs::metadata(output)
        .with_context(|| format!("Failed to stat {}", output.display()))?
        .len();

    println!(
        "Merged {} files ({} pages, {}) into {}",
        ordered.len(),
        total_pages,
        format_size(size),
        output.display()
    );

    Ok(())
}
