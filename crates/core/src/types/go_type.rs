use std::fmt;

/// Direction of a channel type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// A parameter or result group inside a function type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: GoType,
}

impl Field {
    pub fn unnamed(ty: GoType) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }
}

/// A Go type expression after qualification.
///
/// Built from the syntax tree as a fresh value; nothing in the parsed
/// source is touched. `Display` produces the canonical gofmt spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoType {
    /// A bare identifier, `package` set when it was qualified
    Named {
        package: Option<String>,
        name: String,
    },
    /// `pkg.Type` as written in the source, never rewritten
    Selector { package: String, name: String },
    Pointer(Box<GoType>),
    Slice(Box<GoType>),
    Array { len: String, elem: Box<GoType> },
    Map { key: Box<GoType>, value: Box<GoType> },
    Chan { dir: ChanDir, elem: Box<GoType> },
    Func {
        params: Vec<Field>,
        results: Vec<Field>,
    },
    Variadic(Box<GoType>),
    Paren(Box<GoType>),
    /// Struct and interface literals, generic instantiations
    Verbatim(String),
}

impl GoType {
    pub fn named(name: impl Into<String>) -> Self {
        GoType::Named {
            package: None,
            name: name.into(),
        }
    }

    pub fn selector(package: impl Into<String>, name: impl Into<String>) -> Self {
        GoType::Selector {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Splits off a top-level `...`, returning the element type and whether it was there
    pub fn into_variadic_parts(self) -> (GoType, bool) {
        match self {
            GoType::Variadic(inner) => (*inner, true),
            other => (other, false),
        }
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoType::Named {
                package: Some(package),
                name,
            } => write!(f, "{package}.{name}"),
            GoType::Named { package: None, name } => f.write_str(name),
            GoType::Selector { package, name } => write!(f, "{package}.{name}"),
            GoType::Pointer(inner) => write!(f, "*{inner}"),
            GoType::Slice(elem) => write!(f, "[]{elem}"),
            GoType::Array { len, elem } => write!(f, "[{len}]{elem}"),
            GoType::Map { key, value } => write!(f, "map[{key}]{value}"),
            GoType::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "chan {elem}"),
                ChanDir::Send => write!(f, "chan<- {elem}"),
                ChanDir::Recv => write!(f, "<-chan {elem}"),
            },
            GoType::Func { params, results } => {
                f.write_str("func(")?;
                write_fields(f, params)?;
                f.write_str(")")?;
                write_results(f, results)
            }
            GoType::Variadic(elem) => write!(f, "...{elem}"),
            GoType::Paren(inner) => write!(f, "({inner})"),
            GoType::Verbatim(text) => f.write_str(text),
        }
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[Field]) -> fmt::Result {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        if !field.names.is_empty() {
            write!(f, "{} ", field.names.join(", "))?;
        }
        write!(f, "{}", field.ty)?;
    }
    Ok(())
}

// gofmt drops the parentheses around a single unnamed result
fn write_results(f: &mut fmt::Formatter<'_>, results: &[Field]) -> fmt::Result {
    match results {
        [] => Ok(()),
        [single] if single.names.is_empty() => write!(f, " {}", single.ty),
        _ => {
            f.write_str(" (")?;
            write_fields(f, results)?;
            f.write_str(")")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(ty: GoType) -> Box<GoType> {
        Box::new(ty)
    }

    #[test]
    fn test_display_wrappers() {
        let request = GoType::Named {
            package: Some("http".to_string()),
            name: "Request".to_string(),
        };
        assert_eq!(GoType::Pointer(boxed(request.clone())).to_string(), "*http.Request");
        assert_eq!(GoType::Slice(boxed(GoType::named("byte"))).to_string(), "[]byte");
        assert_eq!(
            GoType::Variadic(boxed(GoType::selector("io", "Reader"))).to_string(),
            "...io.Reader"
        );
        assert_eq!(
            GoType::Array {
                len: "4".to_string(),
                elem: boxed(GoType::named("int")),
            }
            .to_string(),
            "[4]int"
        );
        assert_eq!(
            GoType::Map {
                key: boxed(GoType::named("string")),
                value: boxed(request),
            }
            .to_string(),
            "map[string]http.Request"
        );
    }

    #[test]
    fn test_display_channels() {
        let elem = || boxed(GoType::named("int"));
        let chan = |dir| GoType::Chan { dir, elem: elem() };
        assert_eq!(chan(ChanDir::Both).to_string(), "chan int");
        assert_eq!(chan(ChanDir::Send).to_string(), "chan<- int");
        assert_eq!(chan(ChanDir::Recv).to_string(), "<-chan int");
    }

    #[test]
    fn test_display_func_results() {
        let no_results = GoType::Func {
            params: vec![Field::unnamed(GoType::named("int"))],
            results: vec![],
        };
        assert_eq!(no_results.to_string(), "func(int)");

        let single = GoType::Func {
            params: vec![],
            results: vec![Field::unnamed(GoType::named("error"))],
        };
        assert_eq!(single.to_string(), "func() error");

        let named = GoType::Func {
            params: vec![Field {
                names: vec!["a".to_string(), "b".to_string()],
                ty: GoType::named("string"),
            }],
            results: vec![Field {
                names: vec!["err".to_string()],
                ty: GoType::named("error"),
            }],
        };
        assert_eq!(named.to_string(), "func(a, b string) (err error)");

        let pair = GoType::Func {
            params: vec![],
            results: vec![
                Field::unnamed(GoType::named("int")),
                Field::unnamed(GoType::named("error")),
            ],
        };
        assert_eq!(pair.to_string(), "func() (int, error)");
    }

    #[test]
    fn test_into_variadic_parts() {
        let (elem, variadic) =
            GoType::Variadic(boxed(GoType::selector("io", "Reader"))).into_variadic_parts();
        assert!(variadic);
        assert_eq!(elem.to_string(), "io.Reader");

        let (elem, variadic) = GoType::named("int").into_variadic_parts();
        assert!(!variadic);
        assert_eq!(elem, GoType::named("int"));
    }
}
