use anyhow::Result;
use mockf_core::{GoBuildResolver, GoEnv, describe_dir, describe_package, render};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::cli::Target;

/// Describes the requested interface and writes the adapter, or its JSON description, to stdout
pub fn generate_command(target: &Target, env: GoEnv, json: bool) -> Result<()> {
    let resolver = GoBuildResolver::new(env);

    let iface = match target {
        Target::CurrentDir { interface } => {
            debug!("Looking up {} in the current directory", interface);
            describe_dir(&resolver, Path::new("."), interface)?
        }
        Target::Package { path, interface } => {
            debug!("Looking up {} in package {}", interface, path);
            describe_package(&resolver, path, interface)?
        }
    };

    let output = if json {
        let mut text = iface.to_json()?;
        text.push('\n');
        text
    } else {
        render(&iface)?
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
