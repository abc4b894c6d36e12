// SPDX-License-Identifier: PMPL-1.0-or-later

//! flag-catalog: country data generator for the world-flag-championships quiz.
//!
//! Matches a country catalog (ISO alpha-3 code -> localized name, continent,
//! political status) against the flag SVGs present on disk and writes the
//! countries file the quiz loads at startup.
//!
//! PIPELINE:
//! 1. **Inventory**: list `<CODE>.svg` files in the flags directory.
//! 2. **Generate**: keep the codes the catalog knows, group them by
//!    continent, and collect the ones it does not.
//! 3. **Report**: write the JSON document and print a status breakdown.

pub mod catalog;
pub mod diagnostics;
pub mod generator;
pub mod inventory;
pub mod locale;
pub mod manifest;
pub mod pipeline;
pub mod report;
pub mod types;
