//! Pofill - gettext catalog completeness tool
//!
//! Pofill is a CLI tool and library for finding incomplete translations in
//! gettext `.po` catalogs, exporting them to a JSON task file for translators,
//! and merging the translated task file back into the catalog.
//!
//! ## Module Structure
//!
//! - `catalog`: `.po` parsing and in-place catalog editing
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `error`: Error types for catalog, task file and exclusion I/O
//! - `exclusions`: Technical-term exclusion rules
//! - `issues`: Issue type definitions
//! - `project`: Locale directory layout and catalog discovery
//! - `rules`: Completeness checks and task extraction
//! - `task`: Translation task file format

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod exclusions;
pub mod issues;
pub mod project;
pub mod rules;
pub mod task;
