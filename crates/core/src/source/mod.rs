//! Turning a directory or import path into the Go files of one package

pub mod constraints;
pub mod resolver;

pub use resolver::{GoBuildResolver, SourceResolver};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The buildable Go files of one package, in a stable order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePackage {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
    /// Name from the `package` clause, used to qualify exported identifiers
    pub name: String,
}

impl SourcePackage {
    pub fn new(dir: impl Into<PathBuf>, files: Vec<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            files,
            name: name.into(),
        }
    }
}
