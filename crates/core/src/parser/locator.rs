use super::{
    GoParser, ParsedFile,
    utils::{node_text, node_to_position},
};
use crate::{
    error::{Error, Result},
    source::SourcePackage,
    types::Position,
};
use std::ops::Range;
use tree_sitter::Node;

/// A top-level type declaration found in one of the package files
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: String,
    pub position: Position,
    file: ParsedFile,
    range: Range<usize>,
}

impl Declaration {
    pub fn file(&self) -> &ParsedFile {
        &self.file
    }

    /// The `type_spec` or `type_alias` node of the declaration
    pub fn node(&self) -> Node<'_> {
        let root = self.file.root();
        let mut node = root
            .descendant_for_byte_range(self.range.start, self.range.end)
            .unwrap_or(root);
        while !is_type_spec(&node) {
            match node.parent() {
                Some(parent) => node = parent,
                None => break,
            }
        }
        node
    }

    pub fn source(&self) -> &str {
        &self.file.source
    }
}

pub struct DeclarationLocator {
    parser: GoParser,
}

impl DeclarationLocator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: GoParser::new()?,
        })
    }

    /// Scans the package files in order and returns the first type declaration named `name`.
    ///
    /// Files that cannot be read or contain syntax errors are skipped.
    pub fn locate(&mut self, package: &SourcePackage, name: &str) -> Result<Declaration> {
        for path in &package.files {
            let file = match self.parser.parse_file(path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            let found = find_type_spec(file.root(), &file.source, name)
                .map(|node| (node.byte_range(), node_to_position(&node)));

            if let Some((range, position)) = found {
                tracing::debug!("Found type {} at {}:{}", name, path.display(), position);
                return Ok(Declaration {
                    name: name.to_string(),
                    position,
                    file,
                    range,
                });
            }
        }

        Err(Error::NotFound {
            name: name.to_string(),
            package: package.name.clone(),
        })
    }
}

fn is_type_spec(node: &Node) -> bool {
    matches!(node.kind(), "type_spec" | "type_alias")
}

/// Finds a top-level `type name ...` declaration, grouped or not
pub fn find_type_spec<'t>(root: Node<'t>, source: &str, name: &str) -> Option<Node<'t>> {
    let mut cursor = root.walk();
    for decl in root.named_children(&mut cursor) {
        if decl.kind() != "type_declaration" {
            continue;
        }

        let mut decl_cursor = decl.walk();
        for spec in decl.named_children(&mut decl_cursor) {
            if !is_type_spec(&spec) {
                continue;
            }
            let matches = spec
                .child_by_field_name("name")
                .is_some_and(|ident| node_text(&ident, source) == name);
            if matches {
                return Some(spec);
            }
        }
    }
    None
}
