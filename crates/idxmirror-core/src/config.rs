use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default index root shared by the built-in sources.
pub const DEFAULT_BASE_URL: &str = "https://mcfp.felk.cvut.cz/publicDatasets";

/// One named source: a path below `base_url` and the prefix its top-level entries must carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Path relative to `base_url` (empty = the base listing itself).
    #[serde(default)]
    pub path: String,
    /// Only top-level entries starting with this prefix are mirrored.
    #[serde(default)]
    pub prefix: String,
}

impl SourceEntry {
    fn new(path: &str, prefix: &str) -> Self {
        Self {
            path: path.to_string(),
            prefix: prefix.to_string(),
        }
    }
}

/// HTTP transport settings (optional section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header; libcurl sends none when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Connect timeout in seconds. None = no timeout.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Follow 3xx redirects (default true).
    #[serde(default)]
    pub follow_redirects: Option<bool>,
}

/// Global configuration loaded from `~/.config/idxmirror/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Root URL every source path is joined onto.
    pub base_url: String,
    /// Named sources selectable from the command line.
    pub sources: BTreeMap<String, SourceEntry>,
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        let mut sources = BTreeMap::new();
        sources.insert(
            "android".to_string(),
            SourceEntry::new("Android-Mischief-Dataset/AndroidMischiefDataset_v2/", "RAT"),
        );
        sources.insert(
            "malware".to_string(),
            SourceEntry::new("", "CTU-Malware-Capture-Botnet"),
        );
        sources.insert("normal".to_string(), SourceEntry::new("", "CTU-Normal"));
        sources.insert(
            "iot".to_string(),
            SourceEntry::new("IoT-23-Dataset-v2/", "CTU-"),
        );
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sources,
            http: None,
        }
    }
}

impl MirrorConfig {
    /// HTTP settings, falling back to defaults when the section is missing.
    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("idxmirror")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MirrorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MirrorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file (no default file is created).
pub fn load_from_path(path: &Path) -> Result<MirrorConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: MirrorConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
