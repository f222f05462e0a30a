//! Gettext catalog (`.po`) handling.
//!
//! ## Module Structure
//!
//! - `blocks`: Splitting raw text into entry blocks and separators
//! - `entry`: The parsed `Entry` view
//! - `escape`: Quoting, unescaping and line wrapping of string literals
//! - `parser`: Catalog text to entries (read-only)
//! - `editor`: In-place patching of translations (import)

pub mod blocks;
pub mod editor;
pub mod entry;
pub mod escape;
pub mod parser;

pub use editor::{CatalogEditor, UpdateStats};
pub use entry::{Entry, FUZZY_FLAG};
pub use parser::{parse_block, parse_catalog, parse_file};
