#![forbid(unsafe_code)]
//! script-combiner — filter a project tree and combine its files into one
//! text document, ready to paste into an LLM prompt.

pub mod cli;
pub mod error;
pub mod filter;
pub mod ignore;
pub mod output;
pub mod preset;
pub mod project;
pub mod render;
pub mod tree;

pub use error::{Error, Result};
pub use filter::{ExtensionCategory, ExtensionFilter};
pub use ignore::{IgnorePattern, IgnoreSet};
pub use preset::{Preset, ProjectType};
pub use project::Project;
pub use tree::{Entry, ProjectNode, ScanConfig};
