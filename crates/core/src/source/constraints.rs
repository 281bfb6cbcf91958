//! File selection rules borrowed from `go build`: test files, hidden files,
//! `_GOOS`/`_GOARCH` file name suffixes and `ignore` build tags.

use regex::Regex;
use std::sync::LazyLock;

const KNOWN_OS: &[&str] = &[
    "aix", "android", "darwin", "dragonfly", "freebsd", "hurd", "illumos", "ios", "js", "linux",
    "nacl", "netbsd", "openbsd", "plan9", "solaris", "wasip1", "windows", "zos",
];

const KNOWN_ARCH: &[&str] = &[
    "386", "amd64", "amd64p32", "arm", "armbe", "arm64", "arm64be", "loong64", "mips", "mipsle",
    "mips64", "mips64le", "mips64p32", "mips64p32le", "ppc", "ppc64", "ppc64le", "riscv",
    "riscv64", "s390", "s390x", "sparc", "sparc64", "wasm",
];

static IGNORE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^//\s*(go:build|\+build)\s+ignore\s*$").expect("ignore tag pattern is valid")
});

/// Whether `name` is a non-test, non-hidden Go source file name
pub fn is_go_source_name(name: &str) -> bool {
    name.ends_with(".go")
        && !name.ends_with("_test.go")
        && !name.starts_with('_')
        && !name.starts_with('.')
}

/// Applies the `name_GOOS_GOARCH.go` convention for the given target
pub fn matches_target(name: &str, goos: &str, goarch: &str) -> bool {
    let stem = name.strip_suffix(".go").unwrap_or(name);
    let Some(first_underscore) = stem.find('_') else {
        return true;
    };

    let mut parts: Vec<&str> = stem[first_underscore..].split('_').collect();
    if parts.last() == Some(&"test") {
        parts.pop();
    }

    let is_os = |s: &str| KNOWN_OS.iter().any(|known| *known == s);
    let is_arch = |s: &str| KNOWN_ARCH.iter().any(|known| *known == s);

    match parts.as_slice() {
        [.., os, arch] if is_os(*os) && is_arch(*arch) => {
            os_matches(*os, goos) && *arch == goarch
        }
        [.., last] if is_os(*last) => os_matches(*last, goos),
        [.., last] if is_arch(*last) => *last == goarch,
        _ => true,
    }
}

// android, illumos and ios also build the files of the system they extend
fn os_matches(file_os: &str, goos: &str) -> bool {
    file_os == goos
        || (file_os == "linux" && goos == "android")
        || (file_os == "solaris" && goos == "illumos")
        || (file_os == "darwin" && goos == "ios")
}

/// Whether the file header carries an `ignore` build constraint
pub fn is_ignored(source: &str) -> bool {
    source
        .lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("package "))
        .any(|line| IGNORE_TAG.is_match(line))
}
