//! Go source parsing and declaration lookup using tree-sitter

pub mod go_parser;
pub mod locator;
pub mod utils;

// Re-export commonly used items
pub use go_parser::{GoParser, ParsedFile};
pub use locator::{Declaration, DeclarationLocator};
pub use utils::{is_exported, node_text, node_to_position};
