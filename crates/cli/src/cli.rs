use anyhow::Result;
use clap::Parser;
use mockf_core::GoEnv;
use std::path::PathBuf;

use crate::commands::generate_command;

/// Printed on stderr when the positional arguments do not fit
pub const USAGE: &str = "mockf [package] <interface>
mockf generates type func to implement interface.
Examples:
mockf io Reader
mockf iface
";

#[derive(Parser, Debug)]
#[command(name = "mockf")]
#[command(version, about = "Generates a function type implementing a single-method Go interface", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Mockf {
    /// Interface name, or the package when an interface follows
    pub first: String,

    /// Interface name inside the package given first
    pub second: Option<String>,

    /// Go installation root searched for standard library packages
    #[arg(long, env = "GOROOT", value_name = "DIR")]
    pub goroot: Option<PathBuf>,

    /// Workspace list searched after GOROOT, separated like PATH
    #[arg(long, env = "GOPATH", value_name = "DIRS")]
    pub gopath: Option<String>,

    /// Target operating system for file name constraints
    #[arg(long, env = "GOOS")]
    pub goos: Option<String>,

    /// Target architecture for file name constraints
    #[arg(long, env = "GOARCH")]
    pub goarch: Option<String>,

    /// Print the interface description as JSON instead of Go source
    #[arg(long)]
    pub json: bool,
}

/// What to look up, derived from the positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// An interface of the package in the current directory
    CurrentDir { interface: String },
    /// An interface of a package given by import path or directory
    Package { path: String, interface: String },
}

impl Mockf {
    pub fn target(&self) -> Target {
        match &self.second {
            None => Target::CurrentDir {
                interface: self.first.clone(),
            },
            Some(interface) => Target::Package {
                path: self.first.clone(),
                interface: interface.clone(),
            },
        }
    }

    /// The process Go environment with command line overrides applied
    pub fn go_env(&self) -> GoEnv {
        let mut env = if self.goroot.is_some() {
            GoEnv::from_lookup(|key| std::env::var_os(key))
        } else {
            GoEnv::from_env()
        };

        if let Some(goroot) = &self.goroot {
            env.goroot = Some(goroot.clone());
        }
        if let Some(gopath) = &self.gopath {
            let entries: Vec<PathBuf> = std::env::split_paths(gopath)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            if !entries.is_empty() {
                env.gopath = entries;
            }
        }
        if let Some(goos) = self.goos.as_ref().filter(|s| !s.is_empty()) {
            env.goos = goos.clone();
        }
        if let Some(goarch) = self.goarch.as_ref().filter(|s| !s.is_empty()) {
            env.goarch = goarch.clone();
        }
        env
    }

    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let env = self.go_env();
        generate_command(&self.target(), env, self.json)
    }
}
