use crate::commands::format_size;
use pagecut::pdf::compress::compress_bytes;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let original = std::fs::read(input)
        .with_context(|| format!("Failed to read PDF: {}", input.display()))?;

    match compress_bytes(&original)? {
        Some(compressed) => {
            let reduction = 100.0 * (1.0 - compressed.len() as f64 / original.len() as f64);
            std::fs::write(output, &compressed)
                .with_context(|| format!("Failed to write PDF: {}", output.display()))?;
            println!(
                "Compressed {} -> {} ({:.1}% smaller) into {}",
                format_size(original.len() as u64),
                format_size(compressed.len() as u64),
                reduction,
                output.display()
            );
        }
        None => {
            std::fs::write(output, &original)
                .with_context(|| format!("Failed to write PDF: {}", output.display()))?;
            println!(
                "No size reduction found; copied original ({}) to {}",
                format_size(original.len() as u64),
                output.display()
            );
        }
    }

    Ok(())
}
