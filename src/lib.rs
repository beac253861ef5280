//! PDF page selection and document utilities.
//!
//! The [`selection`] module models which pages of a loaded document are
//! chosen and which pages the output should retain; the [`pdf`] module
//! applies those plans to real documents with lopdf, and also provides
//! merging and stream recompression.

pub mod pdf;
pub mod selection;
