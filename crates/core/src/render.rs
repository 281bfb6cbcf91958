use crate::{
    error::{Error, Result},
    signature::RECEIVER,
    types::{InterfaceDescription, Parameter},
};
use std::fmt::{self, Write};

/// Renders the adapter function type and its single method as gofmt would print them
pub fn render(iface: &InterfaceDescription) -> Result<String> {
    if iface.method_name.is_empty() {
        return Err(Error::RenderFailure(format!(
            "interface {} has no method name",
            iface.name
        )));
    }

    let mut out = String::new();
    write_adapter(&mut out, iface).map_err(|e| Error::RenderFailure(e.to_string()))?;

    tracing::debug!("Rendered {} for {}.{}", iface.adapter_name(), iface.name, iface.method_name);
    Ok(out)
}

fn write_adapter(out: &mut String, iface: &InterfaceDescription) -> fmt::Result {
    let adapter = iface.adapter_name();
    let receiver = receiver_name(&iface.params);
    let results = results_suffix(&iface.results);

    let spellings = join(iface.params.iter().map(Parameter::spelling));
    let declared = join(iface.params.iter().map(|p| format!("{} {}", p.name, p.spelling())));

    writeln!(out, "type {adapter} func({spellings}){results}")?;
    writeln!(out)?;
    writeln!(
        out,
        "func ({receiver} {adapter}) {}({declared}){results} {{",
        iface.method_name
    )?;
    let ret = if iface.has_return() { "return " } else { "" };
    writeln!(out, "\t{ret}{receiver}({})", call_arguments(&iface.params))?;
    writeln!(out, "}}")
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// `f`, unless a parameter already uses that name
fn receiver_name(params: &[Parameter]) -> String {
    let taken = |name: &str| params.iter().any(|p| p.name == name);
    if !taken(RECEIVER) {
        return RECEIVER.to_string();
    }
    std::iter::once("fn".to_string())
        .chain((2..).map(|i| format!("fn{i}")))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| "fn".to_string())
}

fn results_suffix(results: &[Parameter]) -> String {
    match results {
        [] => String::new(),
        [single] => format!(" {}", single.ty),
        many => format!(" ({})", join(many.iter().map(|r| r.ty.clone()))),
    }
}

// Only the last argument can carry the spread marker
fn call_arguments(params: &[Parameter]) -> String {
    let last = params.len().saturating_sub(1);
    join(params.iter().enumerate().map(|(i, p)| {
        if i == last && p.variadic {
            format!("{}...", p.name)
        } else {
            p.name.clone()
        }
    }))
}
