//! Rule implementations for pofill.
//!
//! Pure functions over parsed entries. Each takes only the inputs it needs
//! (entries, exclusions, locale flags) and returns issues or tasks.
//!
//! ## Module Structure
//!
//! - `untranslated`: Empty and copied translation detection
//! - `extract`: Building the task file for export

pub mod extract;
pub mod untranslated;

pub use extract::extract_tasks;
pub use untranslated::{check_entry, check_untranslated};
