// src/project/packages.rs
//! npm manifest dependencies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::types::SourceFile;

pub const MANIFEST: &str = "package.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyKind {
    Dependency,
    DevDependency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDependency {
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default)]
    dev_dependencies: Map<String, Value>,
}

/// Parses `dependencies` then `devDependencies`, each in manifest order.
///
/// # Errors
/// Returns error if `json` is not a valid manifest object.
pub fn parse(json: &str) -> Result<Vec<PackageDependency>> {
    let manifest: Manifest = serde_json::from_str(json)?;
    let runtime = manifest
        .dependencies
        .into_iter()
        .map(|(name, v)| entry(name, &v, DependencyKind::Dependency));
    let dev = manifest
        .dev_dependencies
        .into_iter()
        .map(|(name, v)| entry(name, &v, DependencyKind::DevDependency));
    Ok(runtime.chain(dev).collect())
}

fn entry(name: String, version: &Value, kind: DependencyKind) -> PackageDependency {
    let version = match version {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    PackageDependency { name, version, kind }
}

/// Dependencies from the first file named `package.json`; a malformed
/// manifest is logged and yields nothing.
#[must_use]
pub fn from_files(files: &[SourceFile]) -> Vec<PackageDependency> {
    let Some(manifest) = files.iter().find(|f| f.path.ends_with(MANIFEST)) else {
        return Vec::new();
    };
    parse(&manifest.code).unwrap_or_else(|e| {
        log::warn!("ignoring malformed {}: {e}", manifest.path);
        Vec::new()
    })
}
