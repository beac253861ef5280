//! Page selection model: parse user-entered range expressions, track the
//! selected set for the loaded document, and derive the ordered list of
//! pages to retain in the output.

pub mod parser;
pub mod plan;
pub mod store;

pub use parser::parse_selection;
pub use plan::{retention_plan, RetentionMode};
pub use store::{SelectionError, SelectionStore};
