use super::{namer::NameRegistry, qualifier::TypeQualifier, shape::MethodShape};
use crate::types::{Field, Parameter};

/// Parameters and results of one method, with every parameter named
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    pub params: Vec<Parameter>,
    pub results: Vec<Parameter>,
}

impl Signature {
    pub fn has_return(&self) -> bool {
        !self.results.is_empty()
    }
}

fn is_blank(name: &str) -> bool {
    name.is_empty() || name == "_"
}

/// Qualifies the method types and names every parameter.
///
/// Names written in the interface are kept. Blank and missing names are
/// generated from the parameter type, after all written names have been
/// registered so a generated name never shadows one of them.
pub fn extract(
    shape: &MethodShape,
    qualifier: &TypeQualifier,
    registry: &mut NameRegistry,
) -> Signature {
    let fields = qualifier.qualify_fields(shape.parameters);
    for name in fields.iter().flat_map(|field| &field.names) {
        if !is_blank(name) {
            registry.insert(name.clone());
        }
    }

    let mut params = Vec::new();
    for Field { names, ty } in fields {
        let (ty, variadic) = ty.into_variadic_parts();
        let ty = ty.to_string();

        if names.is_empty() {
            let name = registry.name_for(&ty);
            params.push(Parameter::named(name, &ty).variadic(variadic));
            continue;
        }

        for name in names {
            let name = if is_blank(&name) {
                registry.name_for(&ty)
            } else {
                name
            };
            params.push(Parameter::named(name, &ty).variadic(variadic));
        }
    }

    let results = qualifier
        .qualify_result(shape.result)
        .into_iter()
        .flat_map(|field| {
            let count = field.names.len().max(1);
            let ty = field.ty.to_string();
            std::iter::repeat_n(Parameter::result(ty), count)
        })
        .collect();

    Signature { params, results }
}
