// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog generation logic
//!
//! Intersects a catalog with an asset inventory. Candidates are visited in
//! inventory order; each one the catalog knows becomes a country entry and
//! joins its continent bucket. Candidates the catalog does not know are
//! collected, sorted, for the missing-countries warning.

use crate::catalog::Catalog;
use crate::inventory::AssetInventory;
use crate::types::*;
use std::collections::{BTreeSet, HashSet};

/// How many unmatched codes the console warning lists
pub const UNMATCHED_PREVIEW: usize = 10;

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub document: OutputDocument,
    /// Inventory codes with no catalog entry, sorted
    pub unmatched: Vec<String>,
}

impl Generation {
    pub fn breakdown(&self) -> StatusBreakdown {
        self.document.status_breakdown()
    }

    /// The first `limit` unmatched codes, and whether more were cut off
    pub fn unmatched_preview(&self, limit: usize) -> (&[String], bool) {
        let shown = self.unmatched.len().min(limit);
        (&self.unmatched[..shown], self.unmatched.len() > limit)
    }
}

pub struct CatalogGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn generate(&self, inventory: &AssetInventory) -> Generation {
        let mut document = OutputDocument::default();
        let mut unmatched = BTreeSet::new();
        let mut seen = HashSet::new();

        for code in inventory.codes() {
            if !seen.insert(code.as_str()) {
                continue;
            }

            match self.catalog.get(code) {
                Some(record) => {
                    document.countries.push(CountryEntry::from(record));
                    document.continents.push(&record.continent, &record.code);
                }
                None => {
                    unmatched.insert(code.clone());
                }
            }
        }

        Generation {
            document,
            unmatched: unmatched.into_iter().collect(),
        }
    }
}

/// Generate the output document for `catalog` from the flags in `inventory`
pub fn generate(catalog: &Catalog, inventory: &AssetInventory) -> Generation {
    CatalogGenerator::new(catalog).generate(inventory)
}
