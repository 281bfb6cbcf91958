//! The stages from a package to an [`InterfaceDescription`], each wrapping its
//! failure with the stage name.

use crate::{
    error::{Result, ResultExt},
    parser::DeclarationLocator,
    signature::{self, NameRegistry, TypeQualifier},
    source::{SourcePackage, SourceResolver},
    types::InterfaceDescription,
};
use std::path::Path;

/// Finds `name` in the package and describes its single method
pub fn fill_interface(package: &SourcePackage, name: &str) -> Result<InterfaceDescription> {
    let mut locator = DeclarationLocator::new()?;
    let declaration = locator.locate(package, name).stage("find interface")?;

    tracing::debug!(
        "Describing {} declared at {}:{}",
        name,
        declaration.file().path.display(),
        declaration.position
    );

    let source = declaration.source();
    let (method_name, shape) = signature::validate(declaration.node(), source)?;

    let qualifier = TypeQualifier::new(&package.name, source);
    let mut registry = NameRegistry::for_adapter();
    let sig = signature::extract(&shape, &qualifier, &mut registry);

    tracing::debug!(
        "{}.{} has {} parameters and {} results",
        name,
        method_name,
        sig.params.len(),
        sig.results.len()
    );

    Ok(InterfaceDescription {
        name: name.to_string(),
        method_name,
        params: sig.params,
        results: sig.results,
    })
}

/// Describes interface `name` of the package in `dir`
pub fn describe_dir(
    resolver: &dyn SourceResolver,
    dir: &Path,
    name: &str,
) -> Result<InterfaceDescription> {
    let package = resolver.import_dir(dir).stage("import dir")?;
    fill_interface(&package, name).stage("fill interface")
}

/// Describes interface `name` of the package at `import_path`
pub fn describe_package(
    resolver: &dyn SourceResolver,
    import_path: &str,
    name: &str,
) -> Result<InterfaceDescription> {
    let package = resolver
        .import(import_path)
        .stage(&format!("couldn't find package {import_path}"))?;
    fill_interface(&package, name).stage("fill interface")
}
