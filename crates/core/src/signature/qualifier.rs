use crate::{
    parser::utils::{is_exported, node_text, syntax_children},
    types::{ChanDir, Field, GoType},
};
use tree_sitter::Node;

/// Rewrites the types of one package so they can be spelled from outside it.
///
/// Exported identifiers get the package name in front, `pkg.Type` selectors
/// are kept exactly as written and never descended into.
pub struct TypeQualifier<'a> {
    package: &'a str,
    source: &'a str,
}

impl<'a> TypeQualifier<'a> {
    pub fn new(package: &'a str, source: &'a str) -> Self {
        Self { package, source }
    }

    pub fn qualify(&self, node: Node) -> GoType {
        match node.kind() {
            "type_identifier" | "identifier" => self.identifier(self.text(&node)),
            "qualified_type" => {
                match (
                    node.child_by_field_name("package"),
                    node.child_by_field_name("name"),
                ) {
                    (Some(package), Some(name)) => {
                        GoType::selector(self.text(&package), self.text(&name))
                    }
                    _ => self.verbatim(&node),
                }
            }
            "pointer_type" => match syntax_children(&node).first() {
                Some(inner) => GoType::Pointer(Box::new(self.qualify(*inner))),
                None => self.verbatim(&node),
            },
            "slice_type" => GoType::Slice(Box::new(self.field(&node, "element"))),
            "array_type" => GoType::Array {
                len: self.array_length(&node),
                elem: Box::new(self.field(&node, "element")),
            },
            "map_type" => GoType::Map {
                key: Box::new(self.field(&node, "key")),
                value: Box::new(self.field(&node, "value")),
            },
            "channel_type" => GoType::Chan {
                dir: channel_direction(&node),
                elem: Box::new(self.field(&node, "value")),
            },
            "function_type" => GoType::Func {
                params: node
                    .child_by_field_name("parameters")
                    .map(|list| self.qualify_fields(list))
                    .unwrap_or_default(),
                results: self.qualify_result(node.child_by_field_name("result")),
            },
            "parenthesized_type" => match syntax_children(&node).first() {
                Some(inner) => GoType::Paren(Box::new(self.qualify(*inner))),
                None => self.verbatim(&node),
            },
            _ => self.verbatim(&node),
        }
    }

    /// Qualifies every group of a `parameter_list`
    pub fn qualify_fields(&self, list: Node) -> Vec<Field> {
        syntax_children(&list)
            .into_iter()
            .filter_map(|decl| match decl.kind() {
                "parameter_declaration" => {
                    let mut cursor = decl.walk();
                    let names = decl
                        .children_by_field_name("name", &mut cursor)
                        .map(|n| self.text(&n).to_string())
                        .collect();
                    Some(Field {
                        names,
                        ty: self.field(&decl, "type"),
                    })
                }
                "variadic_parameter_declaration" => Some(Field {
                    names: decl
                        .child_by_field_name("name")
                        .map(|n| vec![self.text(&n).to_string()])
                        .unwrap_or_default(),
                    ty: GoType::Variadic(Box::new(self.field(&decl, "type"))),
                }),
                _ => None,
            })
            .collect()
    }

    /// Results are either a `parameter_list` or one bare type
    pub fn qualify_result(&self, result: Option<Node>) -> Vec<Field> {
        match result {
            None => Vec::new(),
            Some(list) if list.kind() == "parameter_list" => self.qualify_fields(list),
            Some(ty) => vec![Field::unnamed(self.qualify(ty))],
        }
    }

    fn identifier(&self, name: &str) -> GoType {
        GoType::Named {
            package: is_exported(name).then(|| self.package.to_string()),
            name: name.to_string(),
        }
    }

    fn field(&self, node: &Node, name: &str) -> GoType {
        match node.child_by_field_name(name) {
            Some(child) => self.qualify(child),
            None => self.verbatim(node),
        }
    }

    // `[Size]T` refers to a constant of the same package
    fn array_length(&self, node: &Node) -> String {
        match node.child_by_field_name("length") {
            Some(len) if len.kind() == "identifier" => self.identifier(self.text(&len)).to_string(),
            Some(len) => normalize_whitespace(self.text(&len)),
            None => String::new(),
        }
    }

    fn verbatim(&self, node: &Node) -> GoType {
        GoType::Verbatim(normalize_whitespace(self.text(node)))
    }

    fn text(&self, node: &Node) -> &'a str {
        node_text(node, self.source)
    }
}

fn channel_direction(node: &Node) -> ChanDir {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|child| !child.is_named())
        .map(|child| child.kind())
        .collect();
    match tokens.as_slice() {
        ["<-", ..] => ChanDir::Recv,
        [_, "<-", ..] => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
