// SPDX-License-Identifier: PMPL-1.0-or-later

//! Asset inventory: which flags are present on disk
//!
//! Every `<CODE>.svg` file directly inside the flags directory makes `CODE`
//! a candidate country. Other files and subdirectories are ignored.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Extension of flag files, matched case-sensitively
pub const FLAG_EXTENSION: &str = "svg";

/// Order in which candidate codes are visited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanOrder {
    /// Sorted by file name, stable across platforms
    #[default]
    Sorted,
    /// Whatever order the filesystem lists entries in
    Listing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetInventory {
    codes: Vec<String>,
}

impl AssetInventory {
    /// Read the flags directory. A missing or unreadable directory is an error.
    pub fn scan(dir: &Path, order: ScanOrder) -> Result<Self> {
        let metadata = fs::metadata(dir)
            .with_context(|| format!("reading flags directory {}", dir.display()))?;
        if !metadata.is_dir() {
            bail!("flags path {} is not a directory", dir.display());
        }

        let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
        if order == ScanOrder::Sorted {
            walker = walker.sort_by_file_name();
        }

        let mut codes = Vec::new();
        for entry in walker {
            let entry =
                entry.with_context(|| format!("listing flags directory {}", dir.display()))?;
            let Some(code) = flag_code(entry.path()) else {
                continue;
            };
            // Follows symlinks; dangling links and directories are not flags
            if entry.path().is_file() {
                codes.push(code.to_string());
            }
        }

        Ok(Self { codes })
    }

    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Candidate codes in scan order
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Codes as a set, for membership checks against a catalog
    pub fn code_set(&self) -> HashSet<&str> {
        self.codes.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Country code for a flag file, or `None` if the file is not a flag.
///
/// A bare `.svg` has no extension to `Path`, and non-UTF-8 names cannot be
/// codes; both are skipped.
fn flag_code(path: &Path) -> Option<&str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(FLAG_EXTENSION) => path.file_stem().and_then(|stem| stem.to_str()),
        _ => None,
    }
}
