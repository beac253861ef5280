use anyhow::{Context, Result};
use lopdf::Document;

/// Recompress a document's streams and return the re-serialized bytes,
/// or `None` when compression does not shrink the input.
pub fn compress_bytes(bytes: &[u8]) -> Result<Option<Vec<u8>>> {
    let mut doc = Document::load_mem(bytes).context("Failed to parse PDF")?;
    doc.compress();

    let mut out = Vec::with_capacity(bytes.len());
    doc.save_to(&mut out)
        .context("Failed to serialize recompressed PDF")?;

    if out.is_empty() || out.len() >= bytes.len() {
        return Ok(None);
    }
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::sample_document;

    #[test]
    fn test_garbage_input_is_an_error() {
        assert!(compress_bytes(b"not a pdf").is_err());
        assert!(compress_bytes(&[]).is_err());
    }

    #[test]
    fn test_output_is_valid_and_never_larger() {
        let mut doc = sample_document(3);
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();

        match compress_bytes(&bytes).unwrap() {
            Some(compressed) => {
                assert!(compressed.len() < bytes.len());
                let reloaded = Document::load_mem(&compressed).unwrap();
                assert_eq!(reloaded.get_pages().len(), 3);
            }
            // A minimal document may already be as small as it gets
            None => {}
        }
    }
}
