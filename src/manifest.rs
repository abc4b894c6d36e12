// SPDX-License-Identifier: PMPL-1.0-or-later

//! Project manifest (`flag-catalog.yaml`)
//!
//! Names the flags directory and the countries files to generate. Without a
//! manifest the quiz's own layout is assumed: flags under
//! `assets/flags/svg`, one countries file per bundled locale under `data/`.

use crate::catalog::Catalog;
use crate::inventory::ScanOrder;
use crate::locale::{self, is_valid_iso639_1, Locale};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST: &str = "flag-catalog.yaml";
pub const DEFAULT_FLAGS_DIR: &str =
    "game-modes/geography-games/world-flag-championships/assets/flags/svg";
pub const DEFAULT_DATA_DIR: &str = "game-modes/geography-games/world-flag-championships/data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub flags_dir: PathBuf,
    #[serde(default)]
    pub ordering: ScanOrder,
    pub targets: Vec<Target>,
}

/// One countries file to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    pub locale: String,
    pub output: PathBuf,
    /// Catalog file replacing the bundled table for this locale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Target {
    pub fn bundled(locale: Locale) -> Self {
        Self {
            locale: locale.code().to_string(),
            output: Path::new(DEFAULT_DATA_DIR).join(locale.output_file_name()),
            catalog: None,
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.catalog else {
            return Catalog::bundled_code(&self.locale);
        };

        let catalog = Catalog::load(path)?;
        if catalog.locale() != self.locale {
            bail!(
                "catalog {} declares locale {}, target expects {}",
                path.display(),
                catalog.locale(),
                self.locale
            );
        }
        Ok(catalog)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            flags_dir: PathBuf::from(DEFAULT_FLAGS_DIR),
            ordering: ScanOrder::default(),
            targets: Locale::all().iter().copied().map(Target::bundled).collect(),
        }
    }
}

impl Manifest {
    /// Load `flag-catalog.yaml` from the working directory, or fall back to
    /// the built-in layout when there is none.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_MANIFEST);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load a manifest file. Relative paths inside it resolve against the
    /// manifest's own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        let mut manifest =
            Self::parse(&raw).with_context(|| format!("parsing manifest {}", path.display()))?;
        if let Some(base) = path.parent() {
            manifest.resolve_paths(base);
        }
        Ok(manifest)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let manifest: Manifest = serde_yaml::from_str(raw)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            bail!("manifest lists no targets");
        }

        let mut outputs = HashSet::new();
        for target in &self.targets {
            if !is_valid_iso639_1(&target.locale) {
                bail!("target locale {:?} is not an ISO 639-1 code", target.locale);
            }
            if !outputs.insert(&target.output) {
                bail!(
                    "output {} is used by more than one target",
                    target.output.display()
                );
            }
        }
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        self.flags_dir = base.join(&self.flags_dir);
        for target in &mut self.targets {
            target.output = base.join(&target.output);
            if let Some(catalog) = &mut target.catalog {
                *catalog = base.join(&*catalog);
            }
        }
    }

    pub fn target(&self, locale: &str) -> Option<&Target> {
        self.targets.iter().find(|target| target.locale == locale)
    }

    /// Output path for a locale the manifest has no target for: next to the
    /// first target's output.
    pub fn default_output(&self, locale: &str) -> PathBuf {
        let data_dir = self
            .targets
            .first()
            .and_then(|target| target.output.parent())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        data_dir.join(locale::output_file_name(locale))
    }
}
