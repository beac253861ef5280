use std::collections::BTreeSet;

/// How the selected set is interpreted when producing the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionMode {
    /// Drop the selected pages and keep everything else.
    RemoveSelected,
    /// Keep only the selected pages.
    KeepSelected,
}

/// Compute the 0-based page indices to retain, strictly ascending.
///
/// The plan is derived on demand from the current state and never stored;
/// an empty plan under `KeepSelected` means nothing was selected, and the
/// call site decides whether to report that before writing anything.
pub fn retention_plan(
    page_count: usize,
    selection: &BTreeSet<usize>,
    mode: RetentionMode,
) -> Vec<usize> {
    match mode {
        RetentionMode::KeepSelected => selection
            .iter()
            .copied()
            .filter(|&index| index < page_count)
            .collect(),
        RetentionMode::RemoveSelected => (0..page_count)
            .filter(|index| !selection.contains(index))
            .collect(),
    }
}
