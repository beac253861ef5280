use anyhow::{Context, Result};
use lopdf::{Document, Object};
use std::collections::HashSet;
use std::path::Path;

pub struct PdfDocument {
    pub doc: Document,
    pub path: String,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let doc =
            Document::load(&path).with_context(|| format!("Failed to open PDF: {}", path_str))?;
        Ok(PdfDocument {
            doc,
            path: path_str,
        })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Metadata for display: page count plus the common text fields from
    /// the info dictionary.
    pub fn info(&self) -> PdfInfo {
        let mut info = PdfInfo {
            page_count: self.page_count(),
            title: None,
            author: None,
        };

        if let Ok(Object::Reference(info_ref)) = self.doc.trailer.get(b"Info") {
            if let Ok(Object::Dictionary(dict)) = self.doc.get_object(*info_ref) {
                info.title = text_field(dict, b"Title");
                info.author = text_field(dict, b"Author");
            }
        }

        info
    }

    /// Build a new document containing exactly the pages named by `plan`
    /// (0-based, ascending), by deleting the complement.
    pub fn retain_pages(&self, plan: &[usize]) -> Result<Document> {
        let total = self.page_count();

        for &index in plan {
            if index >= total {
                anyhow::bail!(
                    "Page index {} is out of range (document has {} pages)",
                    index,
                    total
                );
            }
        }

        // lopdf numbers pages from 1
        let kept: HashSet<u32> = plan.iter().map(|&index| index as u32 + 1).collect();
        let doomed: Vec<u32> = (1..=total as u32)
            .filter(|number| !kept.contains(number))
            .collect();

        let mut new_doc = self.doc.clone();
        if !doomed.is_empty() {
            new_doc.delete_pages(&doomed);
        }

        Ok(new_doc)
    }

    /// Save to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct PdfInfo {
    pub page_count: usize,
    pub title: Option<String>,
    pub author: Option<String>,
}

fn text_field(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key) {
        Ok(Object::String(bytes, _)) => Some(decode_text(bytes)),
        _ => None,
    }
}

/// PDF text strings are UTF-16BE when prefixed with a BOM, otherwise
/// (approximately) Latin-1.
fn decode_text(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::sample_document;

    fn saved_to_disk(doc: &mut Document) -> tempfile::TempPath {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.into_temp_path();
        doc.save(&path).unwrap();
        path
    }

    #[test]
    fn test_open_and_page_count() {
        let path = saved_to_disk(&mut sample_document(5));
        let doc = PdfDocument::open(&path).unwrap();
        assert_eq!(doc.page_count(), 5);
    }

    #[test]
    fn test_retain_pages_keeps_plan_order() {
        let path = saved_to_disk(&mut sample_document(5));
        let doc = PdfDocument::open(&path).unwrap();

        let kept = doc.retain_pages(&[0, 2, 4]).unwrap();
        assert_eq!(kept.get_pages().len(), 3);
    }

    #[test]
    fn test_retain_pages_full_plan_is_identity() {
        let path = saved_to_disk(&mut sample_document(3));
        let doc = PdfDocument::open(&path).unwrap();

        let kept = doc.retain_pages(&[0, 1, 2]).unwrap();
        assert_eq!(kept.get_pages().len(), 3);
    }

    #[test]
    fn test_retain_pages_rejects_out_of_range() {
        let path = saved_to_disk(&mut sample_document(3));
        let doc = PdfDocument::open(&path).unwrap();

        assert!(doc.retain_pages(&[0, 3]).is_err());
    }

    #[test]
    fn test_retained_document_round_trips() {
        let path = saved_to_disk(&mut sample_document(4));
        let doc = PdfDocument::open(&path).unwrap();

        let mut kept = doc.retain_pages(&[1, 3]).unwrap();
        let out = saved_to_disk(&mut kept);

        let reloaded = PdfDocument::open(&out).unwrap();
        assert_eq!(reloaded.page_count(), 2);
    }

    #[test]
    fn test_decode_text_utf16() {
        let bytes = [0xFE, 0xFF, 0x00, b'H', 0x00, b'i'];
        assert_eq!(decode_text(&bytes), "Hi");
    }

    #[test]
    fn test_decode_text_latin1() {
        assert_eq!(decode_text(b"Report"), "Report");
    }
}
