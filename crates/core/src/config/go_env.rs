use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// The subset of `go env` that package lookup depends on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GoEnv {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goroot: Option<PathBuf>,
    #[serde(default)]
    pub gopath: Vec<PathBuf>,
    pub goos: String,
    pub goarch: String,
}

impl Default for GoEnv {
    fn default() -> Self {
        Self {
            goroot: None,
            gopath: Vec::new(),
            goos: host_goos().to_string(),
            goarch: host_goarch().to_string(),
        }
    }
}

impl GoEnv {
    /// Reads the process environment, asking the `go` tool for GOROOT when it is unset
    pub fn from_env() -> Self {
        let mut env = Self::from_lookup(|key| std::env::var_os(key));
        if env.goroot.is_none() {
            env.goroot = detect_goroot();
        }
        tracing::debug!("Go environment: {:?}", env);
        env
    }

    /// Builds the environment from an arbitrary variable lookup, without running `go`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let goroot = non_empty("GOROOT").map(PathBuf::from);

        let mut gopath: Vec<PathBuf> = non_empty("GOPATH")
            .map(|value| {
                std::env::split_paths(&value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if gopath.is_empty() {
            if let Some(home) = non_empty("HOME").or_else(|| non_empty("USERPROFILE")) {
                gopath.push(PathBuf::from(home).join("go"));
            }
        }

        let goos = non_empty("GOOS")
            .and_then(|v| v.into_string().ok())
            .unwrap_or_else(|| host_goos().to_string());
        let goarch = non_empty("GOARCH")
            .and_then(|v| v.into_string().ok())
            .unwrap_or_else(|| host_goarch().to_string());

        Self {
            goroot,
            gopath,
            goos,
            goarch,
        }
    }
}

fn detect_goroot() -> Option<PathBuf> {
    let output = Command::new("go").args(["env", "GOROOT"]).output().ok()?;
    if !output.status.success() {
        tracing::debug!("`go env GOROOT` exited with {}", output.status);
        return None;
    }
    let root = String::from_utf8(output.stdout).ok()?;
    let root = root.trim();
    if root.is_empty() {
        None
    } else {
        Some(PathBuf::from(root))
    }
}

/// Go's name for the operating system this binary was built for
pub fn host_goos() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}

/// Go's name for the architecture this binary was built for
pub fn host_goarch() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "powerpc64" if cfg!(target_endian = "little") => "ppc64le",
        "powerpc64" => "ppc64",
        "mips64" if cfg!(target_endian = "little") => "mips64le",
        "mips" if cfg!(target_endian = "little") => "mipsle",
        "wasm32" => "wasm",
        "loongarch64" => "loong64",
        other => other,
    }
}
