use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Sidecar written next to every sampled artifact so a CSV can be traced back
/// to the path and arguments that produced it.
#[derive(Serialize, Debug)]
pub struct Provenance {
    pub code_rev: String,
    pub library_version: &'static str,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(params: Value, artifact: &Path) -> Self {
        Self {
            code_rev: current_git_rev(),
            library_version: smoothpath::VERSION,
            params,
            outputs: vec![artifact.to_string_lossy().into_owned()],
        }
    }
}

/// Write `<artifact stem>.provenance.json` beside `artifact`.
pub fn write_sidecar(artifact: &Path, params: Value) -> Result<PathBuf> {
    let provenance_path = provenance_path(artifact);
    let doc = Provenance::new(params, artifact);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance written");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("samples"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then the runtime variable, else `"unknown"`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}
