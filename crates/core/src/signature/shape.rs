use crate::{
    error::{Error, Result},
    parser::utils::{node_text, syntax_children},
};
use tree_sitter::Node;

/// The single method of an interface, ready for signature extraction
#[derive(Debug, Clone, Copy)]
pub struct MethodShape<'t> {
    pub parameters: Node<'t>,
    pub result: Option<Node<'t>>,
}

/// Checks that `spec` declares an interface with exactly one named method.
///
/// Returns the method name together with its parameter and result nodes.
pub fn validate<'t>(spec: Node<'t>, source: &str) -> Result<(String, MethodShape<'t>)> {
    let type_name = spec
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default();

    let ty = spec
        .child_by_field_name("type")
        .filter(|ty| ty.kind() == "interface_type")
        .ok_or_else(|| Error::NotInterface(type_name.clone()))?;

    if spec.child_by_field_name("type_parameters").is_some() {
        return Err(Error::GenericUnsupported(type_name));
    }

    let members = syntax_children(&ty);
    let method = match members.as_slice() {
        [] => return Err(Error::EmptyInterface(type_name)),
        [single] => *single,
        _ => return Err(Error::MultiMethodUnsupported),
    };

    if method.kind() != "method_elem" {
        return Err(Error::EmbeddedUnsupported(
            node_text(&method, source).to_string(),
        ));
    }

    let name = method
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .ok_or_else(|| Error::EmbeddedUnsupported(node_text(&method, source).to_string()))?;
    let parameters = method
        .child_by_field_name("parameters")
        .ok_or_else(|| Error::ParseError(format!("method {name} has no parameter list")))?;

    Ok((
        name,
        MethodShape {
            parameters,
            result: method.child_by_field_name("result"),
        },
    ))
}
