// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console summary for a generation run

use crate::generator::{Generation, UNMATCHED_PREVIEW};
use crate::types::Status;
use colored::*;
use std::path::Path;

pub struct ReportFormatter {
    verbose: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn print(&self, generation: &Generation, output: &Path) {
        for line in self.render(generation, output) {
            println!("{}", line);
        }
    }

    /// Summary lines, without trailing newlines
    pub fn render(&self, generation: &Generation, output: &Path) -> Vec<String> {
        let document = &generation.document;
        let mut lines = vec![format!(
            "Created {} with {} countries across {} continents",
            output.display().to_string().bold(),
            document.countries.len(),
            document.continents.len()
        )];

        lines.push(String::new());
        lines.push(format!("{}", "Status breakdown:".bold()));
        let breakdown = generation.breakdown();
        for status in Status::all() {
            lines.push(format!("  {}: {}", status.label(), breakdown.count(status)));
        }

        if self.verbose && !document.continents.is_empty() {
            lines.push(String::new());
            lines.push(format!("{}", "Continents:".bold()));
            for (continent, codes) in document.continents.iter() {
                lines.push(format!("  {}: {}", continent, codes.len()));
            }
        }

        if let Some(warning) = unmatched_warning(generation) {
            lines.push(String::new());
            lines.push(format!("{}", warning.yellow()));
        }

        lines
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Warning line for flags with no catalog entry, if there are any
pub fn unmatched_warning(generation: &Generation) -> Option<String> {
    if generation.unmatched.is_empty() {
        return None;
    }
    let (shown, truncated) = generation.unmatched_preview(UNMATCHED_PREVIEW);
    Some(format!(
        "⚠️  Missing countries for these flag codes: {}{}",
        shown.join(", "),
        if truncated { "..." } else { "" }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::generator::generate;
    use crate::inventory::AssetInventory;
    use crate::types::CountryRecord;

    fn generation(codes: &[&str]) -> Generation {
        let catalog = Catalog::new(
            "en",
            vec![
                CountryRecord::new("NOR", "Norway", "Europe", Status::Official),
                CountryRecord::new("SWE", "Sweden", "Europe", Status::Official),
                CountryRecord::new("PSE", "Palestine", "Asia", Status::Observer),
            ],
        )
        .unwrap();
        generate(&catalog, &AssetInventory::from_codes(codes.iter().copied()))
    }

    fn plain(lines: Vec<String>) -> String {
        lines.join("\n")
    }

    #[test]
    fn summary_lists_every_status() {
        colored::control::set_override(false);
        let text = plain(
            ReportFormatter::new()
                .render(&generation(&["NOR", "SWE", "PSE"]), Path::new("out.json")),
        );
        assert!(text.contains("Created out.json with 3 countries across 2 continents"));
        assert!(text.contains("  Official UN members: 2"));
        assert!(text.contains("  Territories: 0"));
        assert!(text.contains("  UN observers: 1"));
        assert!(text.contains("  Disputed territories: 0"));
        assert!(!text.contains("Missing countries"));
        assert!(!text.contains("Continents:"));
    }

    #[test]
    fn verbose_summary_lists_continent_sizes() {
        colored::control::set_override(false);
        let text = plain(
            ReportFormatter::new()
                .verbose(true)
                .render(&generation(&["NOR", "SWE", "PSE"]), Path::new("out.json")),
        );
        assert!(text.contains("  Europe: 2"));
        assert!(text.contains("  Asia: 1"));
    }

    #[test]
    fn warning_names_unmatched_codes() {
        let warning = unmatched_warning(&generation(&["NOR", "XYZ", "ABC"])).unwrap();
        assert!(warning.ends_with("flag codes: ABC, XYZ"));
        assert!(unmatched_warning(&generation(&["NOR"])).is_none());
    }

    #[test]
    fn long_warning_is_truncated() {
        let codes: Vec<String> = (0..11).map(|i| format!("Q{:02}", i)).collect();
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        let warning = unmatched_warning(&generation(&refs)).unwrap();
        assert!(warning.contains("Q09..."));
        assert!(!warning.contains("Q10"));
    }
}
