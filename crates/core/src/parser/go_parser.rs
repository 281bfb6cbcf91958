use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

use super::utils::node_text;

pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| Error::ParseError("Failed to parse source code".to_string()))
    }

    /// Parses `source` as the contents of `path`, rejecting trees with syntax errors
    pub fn parse_source(&mut self, path: &Path, source: String) -> Result<ParsedFile> {
        let tree = self.parse(&source)?;
        if tree.root_node().has_error() {
            return Err(Error::ParseError(format!(
                "syntax error in {}",
                path.display()
            )));
        }
        Ok(ParsedFile {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedFile> {
        let source = std::fs::read_to_string(path)?;
        self.parse_source(path, source)
    }
}

/// A Go source file together with its syntax tree
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: String,
    pub tree: Tree,
}

impl ParsedFile {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }
}

/// Reads the `package` clause, even from a tree that contains syntax errors elsewhere
pub fn package_clause_name<'a>(tree: &Tree, source: &'a str) -> Option<&'a str> {
    let root = tree.root_node();
    let mut cursor = root.walk();
    let clause = root
        .named_children(&mut cursor)
        .find(|child| child.kind() == "package_clause")?;
    let mut cursor = clause.walk();
    let ident = clause
        .named_children(&mut cursor)
        .find(|child| child.kind() == "package_identifier")?;
    Some(node_text(&ident, source))
}
