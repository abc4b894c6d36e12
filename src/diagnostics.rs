// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor`: check that every manifest target can be generated

use crate::inventory::AssetInventory;
use crate::locale::language_name;
use crate::manifest::{Manifest, Target};
use anyhow::{anyhow, Result};
use colored::*;
use std::path::Path;

pub fn run_diagnostics(manifest: &Manifest, source: Option<&Path>) -> Result<()> {
    println!("flag-catalog diagnostics");

    let checks = collect(manifest, source);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect(manifest: &Manifest, source: Option<&Path>) -> Vec<Diagnostic> {
    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("flag-catalog {}", env!("CARGO_PKG_VERSION")),
    )];

    checks.push(match source {
        Some(path) => Diagnostic::ok(
            "manifest",
            format!("{} ({} targets)", path.display(), manifest.targets.len()),
        ),
        None => Diagnostic::ok("manifest", "none found, using built-in layout".to_string()),
    });

    let inventory = match AssetInventory::scan(&manifest.flags_dir, manifest.ordering) {
        Ok(inventory) => {
            checks.push(Diagnostic::ok(
                "flags directory",
                format!(
                    "{} ({} flags)",
                    manifest.flags_dir.display(),
                    inventory.len()
                ),
            ));
            Some(inventory)
        }
        Err(err) => {
            checks.push(Diagnostic::error("flags directory", format!("{:#}", err)));
            None
        }
    };

    for target in &manifest.targets {
        checks.extend(check_target(target, inventory.as_ref()));
    }

    checks
}

fn check_target(target: &Target, inventory: Option<&AssetInventory>) -> Vec<Diagnostic> {
    let label = format!("{} catalog", target.locale);
    let mut checks = Vec::new();

    let catalog = match target.load_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            checks.push(Diagnostic::error(label, format!("{:#}", err)));
            return checks;
        }
    };

    let source = match &target.catalog {
        Some(path) => path.display().to_string(),
        None => "bundled".to_string(),
    };
    let language = language_name(&target.locale).unwrap_or("custom locale");
    checks.push(Diagnostic::ok(
        label.clone(),
        format!("{} entries, {} ({})", catalog.len(), language, source),
    ));

    checks.push(check_output_dir(&target.locale, &target.output));

    if let Some(inventory) = inventory {
        let unmatched = inventory
            .codes()
            .iter()
            .filter(|code| !catalog.contains(code))
            .count();
        let flags = inventory.code_set();
        let flagless = catalog.codes().filter(|code| !flags.contains(code)).count();

        if unmatched > 0 {
            checks.push(Diagnostic::warning(
                label,
                format!("{} flags have no catalog entry", unmatched),
            ));
        } else {
            checks.push(Diagnostic::ok(
                label,
                format!(
                    "every flag matched, {} catalog entries have no flag",
                    flagless
                ),
            ));
        }
    }

    checks
}

fn check_output_dir(locale: &str, output: &Path) -> Diagnostic {
    let label = format!("{} output", locale);
    let dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    if dir.is_dir() {
        Diagnostic::ok(label, output.display().to_string())
    } else if dir.exists() {
        Diagnostic::error(label, format!("{} is not a directory", dir.display()))
    } else {
        Diagnostic::error(
            label,
            format!(
                "{} missing (create with mkdir -p {})",
                dir.display(),
                dir.display()
            ),
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

struct Diagnostic {
    label: String,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:18} {}", self.level.tag(), self.label, self.detail);
    }
}
