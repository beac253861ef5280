use pagecut::pdf::PdfDocument;
use pagecut::selection::{retention_plan, RetentionMode, SelectionStore};
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>>(path: P, pages: &str, mode: RetentionMode) -> Result<()> {
    let doc = PdfDocument::open(&path)?;

    let mut store = SelectionStore::new();
    store.load(doc.page_count());
    store.set_from_text(pages);

    let plan = retention_plan(store.page_count(), store.selected(), mode);

    println!("File: {}", path.as_ref().display());
    println!("Pages: {}", store.page_count());
    println!("Selected: {}", store.selected_count());
    println!("Remaining: {}", store.remaining_count());

    match mode {
        RetentionMode::KeepSelected => {
            println!("Mode: keep only the selected pages");
        }
        RetentionMode::RemoveSelected => {
            println!("Mode: remove the selected pages");
        }
    }

    if plan.is_empty() {
        println!("Nothing would be kept; the output would have no pages");
    } else {
        println!("Would keep {} page(s): {}", plan.len(), page_numbers(&plan));
    }

    Ok(())
}

/// Render a plan as 1-based page numbers, the way users typed them in.
fn page_numbers(plan: &[usize]) -> String {
    plan.iter()
        .map(|&index| (index + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_numbers_are_one_based() {
        assert_eq!(page_numbers(&[0, 2, 6]), "1, 3, 7");
        assert_eq!(page_numbers(&[]), "");
    }
}
