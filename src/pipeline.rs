// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pipeline: scan flags, generate, write
//!
//! A [`Job`] is one countries file: a catalog, the flags directory it is
//! matched against, and the output path. Jobs come from manifest targets,
//! narrowed by whatever the command line overrides.

use crate::catalog::Catalog;
use crate::generator::{self, Generation};
use crate::inventory::{AssetInventory, ScanOrder};
use crate::locale::Locale;
use crate::manifest::{Manifest, Target};
use crate::report::{self, DocumentDiff};
use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Job {
    pub catalog: Catalog,
    pub flags_dir: PathBuf,
    pub order: ScanOrder,
    pub output: PathBuf,
}

/// Command-line overrides applied on top of the manifest
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locale: Option<String>,
    pub catalog: Option<PathBuf>,
    pub flags_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub order: Option<ScanOrder>,
}

impl Job {
    pub fn for_target(target: &Target, flags_dir: PathBuf, order: ScanOrder) -> Result<Self> {
        Ok(Self {
            catalog: target.load_catalog()?,
            flags_dir,
            order,
            output: target.output.clone(),
        })
    }

    /// Generate in memory without touching the output file
    pub fn plan(&self) -> Result<Generation> {
        let inventory = AssetInventory::scan(&self.flags_dir, self.order)?;
        Ok(generator::generate(&self.catalog, &inventory))
    }

    /// Generate and overwrite the output file
    pub fn run(&self) -> Result<Generation> {
        let generation = self.plan()?;
        report::write_document(&generation.document, &self.output)?;
        Ok(generation)
    }

    /// Compare the existing output file with a fresh generation
    pub fn verify(&self) -> Result<DocumentDiff> {
        let generation = self.plan()?;
        let existing = report::load_document(&self.output)?;
        Ok(DocumentDiff::between(&existing, &generation.document))
    }
}

/// Resolve the jobs to run.
///
/// Without a locale or catalog override every manifest target runs. With
/// one, a single job runs; its output comes from the matching manifest
/// target, or sits next to the other outputs when there is none.
pub fn select_jobs(manifest: &Manifest, overrides: &Overrides) -> Result<Vec<Job>> {
    let flags_dir = overrides
        .flags_dir
        .clone()
        .unwrap_or_else(|| manifest.flags_dir.clone());
    let order = overrides.order.unwrap_or(manifest.ordering);

    // Aliases such as `nb` name the same table as their bundled locale
    let locale = overrides
        .locale
        .as_deref()
        .map(|code| Locale::from_code(code).map_or(code, |locale| locale.code()));

    let catalog = match (&overrides.catalog, locale) {
        (Some(path), _) => Catalog::load(path)?,
        (None, Some(locale)) => match manifest.target(locale) {
            Some(target) => target.load_catalog()?,
            None => Catalog::bundled_code(locale)?,
        },
        (None, None) => return every_target(manifest, overrides, flags_dir, order),
    };

    if let Some(locale) = locale {
        if locale != catalog.locale() {
            bail!(
                "catalog declares locale {}, but --locale {} was requested",
                catalog.locale(),
                locale
            );
        }
    }

    let output = match &overrides.output {
        Some(output) => output.clone(),
        None => manifest
            .target(catalog.locale())
            .map(|target| target.output.clone())
            .unwrap_or_else(|| manifest.default_output(catalog.locale())),
    };

    Ok(vec![Job {
        catalog,
        flags_dir,
        order,
        output,
    }])
}

fn every_target(
    manifest: &Manifest,
    overrides: &Overrides,
    flags_dir: PathBuf,
    order: ScanOrder,
) -> Result<Vec<Job>> {
    if overrides.output.is_some() && manifest.targets.len() > 1 {
        bail!("--output needs a single target; pass --locale or --catalog");
    }
    manifest
        .targets
        .iter()
        .map(|target| {
            let mut target = target.clone();
            if let Some(output) = &overrides.output {
                target.output = output.clone();
            }
            Job::for_target(&target, flags_dir.clone(), order)
        })
        .collect()
}
