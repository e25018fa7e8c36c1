// src/config.rs
use crate::error::{GradecovError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";

/// Repository configuration read from `.gradecov/config.json`.
///
/// Every section is optional; a missing file means defaults (no threshold,
/// no tool toggles, nothing ignored).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub threshold: Option<String>,
    pub security: SecurityTools,
    pub quality: QualityTools,
    pub safety_critical: SafetyCriticalTools,
    pub ignore: IgnoreRules,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityTools {
    pub owasp: bool,
    pub cwe: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityTools {
    pub solid: bool,
    pub pr_ready: bool,
    pub clean_code: bool,
    pub complexity: bool,
    pub complexity_pro: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SafetyCriticalTools {
    pub misra_cpp: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IgnoreRules {
    pub files: Vec<IgnoredFile>,
    pub folders: Vec<String>,
}

/// A single file excluded from reporting, as `path` + `name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IgnoredFile {
    pub name: String,
    pub path: String,
}

impl Config {
    /// Loads `config.json` from the data directory.
    ///
    /// A missing file yields the default config so a bare history directory
    /// still reports.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or decoded.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(|e| GradecovError::io(e, &path))?;
        serde_json::from_str(&raw).map_err(|source| GradecovError::ConfigDecode { path, source })
    }

    /// Canonical tool names enabled by the config toggles.
    #[must_use]
    pub fn enabled_tools(&self) -> Vec<String> {
        let toggles = [
            (self.security.owasp, "OWASP-Top-10"),
            (self.security.cwe, "CWE-Top-25"),
            (self.quality.solid, "SOLID"),
            (self.quality.pr_ready, "PR-Ready"),
            (self.quality.clean_code, "Clean-Code"),
            (self.quality.complexity, "Complexity"),
            (self.quality.complexity_pro, "Complexity-Pro"),
            (self.safety_critical.misra_cpp, "MISRA-CPP"),
        ];
        toggles
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, name)| (*name).to_string())
            .collect()
    }
}
