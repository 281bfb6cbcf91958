//! mockf-core - Generates function adapters for single-method Go interfaces
//!
//! This crate provides functionality to:
//! - Resolve a Go package from a directory or an import path
//! - Locate an interface declaration and check it has exactly one method
//! - Qualify the method's types and name its anonymous parameters
//! - Render a `type xFunc func(...)` adapter with its wrapper method
pub mod config;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod signature;
pub mod source;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result, ResultExt};
pub use types::*;

// Re-export main API components
pub use config::GoEnv;
pub use pipeline::{describe_dir, describe_package, fill_interface};
pub use render::render;
pub use source::{GoBuildResolver, SourcePackage, SourceResolver};
