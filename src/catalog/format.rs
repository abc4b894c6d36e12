// SPDX-License-Identifier: PMPL-1.0-or-later

//! File formats a catalog can be read from or exported to

use clap::ValueEnum;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(CatalogFormat::Json),
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            _ => None,
        }
    }

    /// Pick the format from a file extension; anything unrecognised is JSON.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .unwrap_or(CatalogFormat::Json)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            CatalogFormat::Json => "json",
            CatalogFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("catalogs/sv.yml")),
            CatalogFormat::Yaml
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("catalogs/sv.YAML")),
            CatalogFormat::Yaml
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("catalogs/sv.json")),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("catalogs/sv")),
            CatalogFormat::Json
        );
    }
}
