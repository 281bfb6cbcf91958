use super::{SourcePackage, constraints};
use crate::{
    config::GoEnv,
    error::{Error, Result},
    parser::{GoParser, go_parser::package_clause_name},
};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Locates the Go files that make up a package
pub trait SourceResolver {
    /// The package whose files live directly in `dir`
    fn import_dir(&self, dir: &Path) -> Result<SourcePackage>;

    /// The package named by an import path such as `net/http` or `./internal/api`
    fn import(&self, import_path: &str) -> Result<SourcePackage>;
}

/// Resolves packages the way `go build` does in GOPATH mode
#[derive(Debug, Clone, Default)]
pub struct GoBuildResolver {
    env: GoEnv,
}

impl GoBuildResolver {
    pub fn new(env: GoEnv) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &GoEnv {
        &self.env
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| Error::SourceImportFailure {
                reason: format!("cannot read {}: {e}", dir.display()),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !constraints::is_go_source_name(name) {
                continue;
            }
            if !constraints::matches_target(name, &self.env.goos, &self.env.goarch) {
                tracing::trace!("Skipping {} for {}/{}", name, self.env.goos, self.env.goarch);
                continue;
            }
            // Unreadable files stay in the list; the locator skips them later
            if let Ok(source) = std::fs::read_to_string(entry.path()) {
                if constraints::is_ignored(&source) {
                    tracing::trace!("Skipping {} (ignore build tag)", name);
                    continue;
                }
            }

            files.push(entry.into_path());
        }

        Ok(files)
    }

    fn package_name(&self, dir: &Path, files: &[PathBuf]) -> Result<String> {
        let mut parser = GoParser::new()?;
        let mut found: Option<(String, &PathBuf)> = None;

        for file in files {
            let Ok(source) = std::fs::read_to_string(file) else {
                continue;
            };
            let Ok(tree) = parser.parse(&source) else {
                continue;
            };
            let Some(name) = package_clause_name(&tree, &source) else {
                continue;
            };
            if name == "documentation" {
                continue;
            }

            if let Some((first, first_file)) = &found {
                if first != name {
                    return Err(Error::SourceImportFailure {
                        reason: format!(
                            "found packages {} ({}) and {} ({}) in {}",
                            first,
                            file_label(first_file),
                            name,
                            file_label(file),
                            dir.display()
                        ),
                    });
                }
            } else {
                found = Some((name.to_string(), file));
            }
        }

        found
            .map(|(name, _)| name)
            .ok_or_else(|| Error::SourceImportFailure {
                reason: format!("no buildable Go source files in {}", dir.display()),
            })
    }

    /// Directories searched for a non-local import path, with the variable that named them
    fn candidates(&self, import_path: &str) -> Vec<(PathBuf, &'static str)> {
        let mut candidates = Vec::new();
        if let Some(goroot) = &self.env.goroot {
            candidates.push((goroot.join("src").join(import_path), "$GOROOT"));
        }
        for entry in &self.env.gopath {
            candidates.push((entry.join("src").join(import_path), "$GOPATH"));
        }
        candidates
    }
}

impl SourceResolver for GoBuildResolver {
    fn import_dir(&self, dir: &Path) -> Result<SourcePackage> {
        tracing::debug!("Importing directory {}", dir.display());

        let files = self.list_files(dir)?;
        let name = self.package_name(dir, &files)?;

        tracing::debug!("Package {} has {} source files", name, files.len());
        Ok(SourcePackage::new(dir, files, name))
    }

    fn import(&self, import_path: &str) -> Result<SourcePackage> {
        if is_local_import(import_path) {
            return self.import_dir(Path::new(import_path));
        }

        let candidates = self.candidates(import_path);
        if candidates.is_empty() {
            return Err(Error::SourceImportFailure {
                reason: format!("cannot find package \"{import_path}\": GOROOT and GOPATH are not set"),
            });
        }

        match candidates.iter().find(|(dir, _)| dir.is_dir()) {
            Some((dir, origin)) => {
                tracing::debug!("Resolved {} to {} (from {})", import_path, dir.display(), origin);
                self.import_dir(dir)
            }
            None => {
                let searched = candidates
                    .iter()
                    .map(|(dir, origin)| format!("{} (from {origin})", dir.display()))
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(Error::SourceImportFailure {
                    reason: format!("cannot find package \"{import_path}\" in any of: {searched}"),
                })
            }
        }
    }
}

fn is_local_import(import_path: &str) -> bool {
    import_path == "."
        || import_path == ".."
        || import_path.starts_with("./")
        || import_path.starts_with("../")
        || Path::new(import_path).is_absolute()
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
