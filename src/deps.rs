//! Select a binary's shared-library dependencies for bundling
//!
//! Runs `ldd` and keeps the resolved paths of libraries whose file name
//! contains one of the allow-listed fragments.

use crate::config::DependencyWhitelist;
use crate::error::{Result, WadError};
use std::path::Path;
use std::process::Command;

const LDD: &str = "ldd";
const MAPPING: &str = " => ";

/// Filters `ldd` output against an allow-list
#[derive(Debug, Clone)]
pub struct DependencyFilter {
    whitelist: DependencyWhitelist,
}

impl DependencyFilter {
    pub fn new(whitelist: DependencyWhitelist) -> Self {
        Self { whitelist }
    }

    /// Whether a library file name matches any allow-list fragment
    pub fn is_allowed(&self, library: &str) -> bool {
        self.whitelist
            .libraries
            .iter()
            .any(|fragment| library.contains(fragment.as_str()))
    }

    /// Resolved paths of allow-listed libraries, in `ldd` order.
    ///
    /// Lines without a `=>` mapping (the vDSO, the loader) are ignored.
    pub fn filter(&self, ldd_output: &str) -> Vec<String> {
        let mut deps = Vec::new();
        for line in ldd_output.lines() {
            // Drop the load address: "libfoo.so.1 => /usr/lib/libfoo.so.1 (0x7f...)"
            let line = match line.find(" (") {
                Some(idx) => &line[..idx],
                None => line,
            };

            let Some((library, resolved)) = line.split_once(MAPPING) else {
                continue;
            };

            let library = library.trim();
            let basename = library.rsplit('/').next().unwrap_or(library);
            if !self.is_allowed(basename) {
                continue;
            }

            let resolved = resolved.trim();
            if resolved.is_empty() || resolved == "not found" {
                tracing::warn!("Allow-listed dependency {} was not found", library);
                continue;
            }

            tracing::debug!("Keeping {} ({})", basename, resolved);
            deps.push(resolved.to_string());
        }
        deps
    }
}

/// Run `ldd` on an executable and return its standard output.
pub fn list_dependencies<P: AsRef<Path>>(executable: P) -> Result<String> {
    let executable = executable.as_ref();
    let output = Command::new(LDD)
        .arg(executable)
        .output()
        .map_err(|e| WadError::CommandFailed(format!("failed to run {}: {}", LDD, e)))?;

    if !output.status.success() {
        return Err(WadError::CommandFailed(format!(
            "{} {} exited with {}: {}",
            LDD,
            executable.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// List and filter an executable's dependencies in one step.
pub fn prune_dependencies<P: AsRef<Path>>(
    executable: P,
    whitelist: DependencyWhitelist,
) -> Result<Vec<String>> {
    let output = list_dependencies(executable)?;
    Ok(DependencyFilter::new(whitelist).filter(&output))
}
