use crate::types::Position;
use tree_sitter::Node;

/// Start of the node
pub fn node_to_position(node: &Node) -> Position {
    let point = node.start_position();
    Position {
        line: point.row as u32,
        character: point.column as u32,
    }
}

pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

/// Named children that carry syntax, skipping comments
pub fn syntax_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

/// Go exports an identifier when its first character is an upper-case letter
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
