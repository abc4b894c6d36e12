// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report output: the countries file and the console summary

pub mod diff;
pub mod formatter;
pub mod output;

use crate::generator::Generation;
use std::path::Path;

pub use diff::DocumentDiff;
pub use formatter::ReportFormatter;
pub use output::{load_document, to_json, write_document};

/// Print the summary for a finished run
pub fn print_report(generation: &Generation, output: &Path, verbose: bool) {
    ReportFormatter::new().verbose(verbose).print(generation, output);
}
