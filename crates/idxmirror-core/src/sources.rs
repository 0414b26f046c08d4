//! Named mirror sources, built from configuration at startup.

use crate::config::MirrorConfig;
use crate::error::MirrorError;
use crate::url_model::{join_url, last_path_segment};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unknown source `{name}`; choose one of: {known}")]
    Unknown { name: String, known: String },
    #[error("cannot derive a folder name from {url}; pass one explicitly")]
    NoName { url: String },
    #[error(transparent)]
    InvalidUrl(#[from] MirrorError),
}

/// A resolved mirror root: listing URL, top-level prefix filter, and local folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub url: String,
    pub prefix: String,
}

impl Source {
    /// A source given directly on the command line instead of from the catalog.
    /// The folder name defaults to the URL's last path segment.
    pub fn ad_hoc(
        url: &str,
        prefix: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, SourceError> {
        // Validates the URL; an empty join returns it unchanged.
        let url = join_url(url, "")?;
        let name = match name {
            Some(n) => n.to_string(),
            None => last_path_segment(&url).ok_or_else(|| SourceError::NoName { url: url.clone() })?,
        };
        Ok(Self {
            name,
            url,
            prefix: prefix.unwrap_or_default().to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SourceCatalog {
    sources: BTreeMap<String, Source>,
}

impl SourceCatalog {
    pub fn from_config(cfg: &MirrorConfig) -> Result<Self, SourceError> {
        let mut sources = BTreeMap::new();
        for (name, entry) in &cfg.sources {
            let url = join_url(&cfg.base_url, &entry.path)?;
            sources.insert(
                name.clone(),
                Source {
                    name: name.clone(),
                    url,
                    prefix: entry.prefix.clone(),
                },
            );
        }
        Ok(Self { sources })
    }

    pub fn resolve(&self, name: &str) -> Result<&Source, SourceError> {
        self.sources.get(name).ok_or_else(|| SourceError::Unknown {
            name: name.to_string(),
            known: self.names().join(", "),
        })
    }

    pub fn names(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.values()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_urls() {
        let catalog = SourceCatalog::from_config(&MirrorConfig::default()).unwrap();
        assert_eq!(catalog.names(), ["android", "iot", "malware", "normal"]);

        let iot = catalog.resolve("iot").unwrap();
        assert_eq!(
            iot.url,
            "https://mcfp.felk.cvut.cz/publicDatasets/IoT-23-Dataset-v2/"
        );
        assert_eq!(iot.prefix, "CTU-");

        let malware = catalog.resolve("malware").unwrap();
        assert_eq!(malware.url, "https://mcfp.felk.cvut.cz/publicDatasets");
        assert_eq!(malware.prefix, "CTU-Malware-Capture-Botnet");
    }

    #[test]
    fn unknown_source_lists_choices() {
        let catalog = SourceCatalog::from_config(&MirrorConfig::default()).unwrap();
        let err = catalog.resolve("zeus").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("zeus"), "{msg}");
        assert!(msg.contains("android, iot, malware, normal"), "{msg}");
    }

    #[test]
    fn invalid_base_url_rejected() {
        let mut cfg = MirrorConfig::default();
        cfg.base_url = "not a url".to_string();
        assert!(matches!(
            SourceCatalog::from_config(&cfg),
            Err(SourceError::InvalidUrl(_))
        ));
    }

    #[test]
    fn ad_hoc_source_names() {
        let s = Source::ad_hoc("http://h/pub/IoT-23/", Some("CTU-"), None).unwrap();
        assert_eq!(s.name, "IoT-23");
        assert_eq!(s.url, "http://h/pub/IoT-23/");
        assert_eq!(s.prefix, "CTU-");

        let named = Source::ad_hoc("http://h/", None, Some("root")).unwrap();
        assert_eq!(named.name, "root");
        assert_eq!(named.prefix, "");

        assert!(matches!(
            Source::ad_hoc("http://h/", None, None),
            Err(SourceError::NoName { .. })
        ));
    }
}
