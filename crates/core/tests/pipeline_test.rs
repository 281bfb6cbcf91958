//! End-to-end tests from a Go package on disk to the rendered adapter

use mockf_core::{Error, GoBuildResolver, GoEnv, describe_dir, describe_package, render};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn resolver() -> GoBuildResolver {
    GoBuildResolver::new(GoEnv {
        goroot: None,
        gopath: Vec::new(),
        goos: "linux".to_string(),
        goarch: "amd64".to_string(),
    })
}

fn package(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(temp.path().join(name), contents).unwrap();
    }
    temp
}

fn generate(dir: &Path, name: &str) -> String {
    let iface = describe_dir(&resolver(), dir, name).unwrap();
    render(&iface).unwrap()
}

/// Joins an error with its sources the way the command line prints it
fn chain(err: &Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut current: &dyn std::error::Error = err;
    while let Some(next) = current.source() {
        parts.push(next.to_string());
        current = next;
    }
    parts.join(": ")
}

const MAIN: &str = r#"package main

import (
	"io"
	"net/http"
)

type variadic interface {
	Func(...io.Reader)
}

type sameNames interface {
	Func(http.Request, http.Request)
}

type multi interface {
	One()
	Two()
}

type Local interface {
	Apply(Option, *Config) (Result, error)
}

type Option int
type Config struct{}
type Result struct{}

func main() {}
"#;

#[test]
fn test_variadic_spreads_last_argument() {
    let temp = package(&[("main.go", MAIN)]);
    let expected = "\
type variadicFunc func(...io.Reader)

func (f variadicFunc) Func(r ...io.Reader) {
\tf(r...)
}
";
    assert_eq!(generate(temp.path(), "variadic"), expected);
}

#[test]
fn test_same_types_get_distinct_names() {
    let temp = package(&[("main.go", MAIN)]);
    let out = generate(temp.path(), "sameNames");
    assert!(out.contains("Func(r http.Request, re http.Request) {\n"));
    assert!(out.contains("\tf(r, re)\n"));
}

#[test]
fn test_local_types_are_qualified() {
    let temp = package(&[("main.go", MAIN)]);
    let expected = "\
type localFunc func(main.Option, *main.Config) (main.Result, error)

func (f localFunc) Apply(o main.Option, c *main.Config) (main.Result, error) {
\treturn f(o, c)
}
";
    assert_eq!(generate(temp.path(), "Local"), expected);
}

#[test]
fn test_unknown_interface() {
    let temp = package(&[("main.go", MAIN)]);
    let err = describe_dir(&resolver(), temp.path(), "unknown").unwrap_err();
    assert_eq!(
        chain(&err),
        "fill interface: find interface: type unknown not found in: main"
    );
}

#[test]
fn test_multi_method_interface() {
    let temp = package(&[("main.go", MAIN)]);
    let err = describe_dir(&resolver(), temp.path(), "multi").unwrap_err();
    assert!(matches!(err.root(), Error::MultiMethodUnsupported));
}

#[test]
fn test_declaration_in_later_file() {
    let temp = package(&[
        ("a.go", "package shapes\n\ntype Unit int\n"),
        (
            "b.go",
            "package shapes\n\ntype Sizer interface {\n\tSize(scale float64) Unit\n}\n",
        ),
        ("b_test.go", "package shapes\n\ntype Sizer interface {\n\tBroken()\n}\n"),
    ]);
    let expected = "\
type sizerFunc func(float64) shapes.Unit

func (f sizerFunc) Size(scale float64) shapes.Unit {
\treturn f(scale)
}
";
    assert_eq!(generate(temp.path(), "Sizer"), expected);
}

#[test]
fn test_package_from_gopath() {
    let gopath = TempDir::new().unwrap();
    let dir = gopath.path().join("src/example.com/store");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("store.go"),
        "package store\n\nimport \"context\"\n\ntype Getter interface {\n\tGet(context.Context, Key) ([]byte, error)\n}\n\ntype Key string\n",
    )
    .unwrap();

    let resolver = GoBuildResolver::new(GoEnv {
        gopath: vec![gopath.path().to_path_buf()],
        ..resolver().env().clone()
    });
    let iface = describe_package(&resolver, "example.com/store", "Getter").unwrap();
    let out = render(&iface).unwrap();

    assert!(out.starts_with("type getterFunc func(context.Context, store.Key) ([]byte, error)\n"));
    assert!(out.contains("Get(c context.Context, k store.Key) ([]byte, error) {\n"));
    assert!(out.contains("\treturn f(c, k)\n"));
}

#[test]
fn test_missing_package() {
    let err = describe_package(&resolver(), "example.com/nowhere", "X").unwrap_err();
    let message = chain(&err);
    assert!(message.starts_with("couldn't find package example.com/nowhere: "));
    assert!(matches!(err.root(), Error::SourceImportFailure { .. }));
}

#[test]
fn test_import_dir_failure() {
    let temp = TempDir::new().unwrap();
    let err = describe_dir(&resolver(), temp.path(), "X").unwrap_err();
    assert!(chain(&err).starts_with("import dir: no buildable Go source files in"));
}
