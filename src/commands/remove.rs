use pagecut::pdf::PdfDocument;
use pagecut::selection::{retention_plan, RetentionMode, SelectionStore};
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    pages: &str,
    output: Q,
    mode: RetentionMode,
) -> Result<()> {
    let doc = PdfDocument::open(&input)?;

    let mut store = SelectionStore::new();
    store.load(doc.page_count());
    store.set_from_text(pages);

    if store.selected_count() == 0 {
        anyhow::bail!(
            "No valid pages in selection '{}' (document has {} pages)",
            pages,
            store.page_count()
        );
    }

    let plan = retention_plan(store.page_count(), store.selected(), mode);
    if plan.is_empty() {
        anyhow::bail!("Selection keeps no pages; refusing to write an empty document");
    }

    let mut new_doc = doc.retain_pages(&plan)?;
    PdfDocument::save(&mut new_doc, &output)?;

    println!(
        "Kept {} of {} page(s) in {}",
        plan.len(),
        store.page_count(),
        output.as_ref().display()
    );

    Ok(())
}
