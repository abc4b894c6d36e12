// SPDX-License-Identifier: PMPL-1.0-or-later

//! flag-catalog: generate the countries files for the world-flag-championships quiz
//!
//! Matches the bundled (or a custom) country catalog against the flag SVGs on
//! disk and writes one JSON file per locale.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use flag_catalog::catalog::{Catalog, CatalogFormat};
use flag_catalog::diagnostics;
use flag_catalog::inventory::ScanOrder;
use flag_catalog::locale::Locale;
use flag_catalog::manifest::{Manifest, DEFAULT_MANIFEST};
use flag_catalog::pipeline::{self, Overrides};
use flag_catalog::report;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "flag-catalog")]
#[command(version)]
#[command(about = "Generate country data files for the world-flag-championships quiz")]
#[command(long_about = None)]
struct Cli {
    /// Project manifest (default: ./flag-catalog.yaml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate countries files (every manifest target unless narrowed)
    Generate {
        #[command(flatten)]
        selection: Selection,

        /// Also print the number of countries per continent
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check that existing countries files match what would be generated
    Verify {
        #[command(flatten)]
        selection: Selection,
    },

    /// Print a bundled catalog, e.g. as a starting point for a custom one
    Catalog {
        /// Bundled locale to print
        #[arg(short, long, value_enum, default_value = "en")]
        locale: LocaleArg,

        /// Output format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: CatalogFormat,
    },

    /// Check the flags directory, catalogs and output paths
    Doctor,
}

#[derive(Args)]
struct Selection {
    /// Only this locale (ISO 639-1 code)
    #[arg(short, long, value_name = "CODE")]
    locale: Option<String>,

    /// Catalog file to use instead of the bundled table
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Directory holding <CODE>.svg flag files
    #[arg(short, long, value_name = "DIR")]
    flags_dir: Option<PathBuf>,

    /// Countries file to write or verify (single target only)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Visit flags in directory listing order instead of by file name
    #[arg(long)]
    listing_order: bool,
}

impl From<Selection> for Overrides {
    fn from(selection: Selection) -> Self {
        Overrides {
            locale: selection.locale,
            catalog: selection.catalog,
            flags_dir: selection.flags_dir,
            output: selection.output,
            order: selection.listing_order.then_some(ScanOrder::Listing),
        }
    }
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LocaleArg {
    En,
    No,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::No => Locale::No,
        }
    }
}

fn load_manifest(path: Option<&Path>) -> Result<(Manifest, Option<PathBuf>)> {
    match path {
        Some(path) => Ok((Manifest::load(path)?, Some(path.to_path_buf()))),
        None => {
            let default = Path::new(DEFAULT_MANIFEST);
            let source = default.exists().then(|| default.to_path_buf());
            Ok((Manifest::load_default()?, source))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { selection, verbose } => {
            let (manifest, _) = load_manifest(cli.manifest.as_deref())?;
            let jobs = pipeline::select_jobs(&manifest, &selection.into())?;

            for (i, job) in jobs.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                let generation = job.run()?;
                report::print_report(&generation, &job.output, verbose);
            }
        }

        Commands::Verify { selection } => {
            let (manifest, _) = load_manifest(cli.manifest.as_deref())?;
            let jobs = pipeline::select_jobs(&manifest, &selection.into())?;

            let mut stale = 0;
            for job in &jobs {
                let diff = job.verify()?;
                let text = diff.format(&job.output.display().to_string());
                if diff.is_empty() {
                    println!("{}", text.green());
                } else {
                    stale += 1;
                    println!("{}", text.red());
                }
            }

            if stale > 0 {
                bail!(
                    "{} of {} countries files are out of date; run `flag-catalog generate`",
                    stale,
                    jobs.len()
                );
            }
        }

        Commands::Catalog { locale, format } => {
            let catalog = Catalog::bundled(locale.into())?;
            print!("{}", catalog.render(format)?);
        }

        Commands::Doctor => {
            let (manifest, source) = load_manifest(cli.manifest.as_deref())?;
            diagnostics::run_diagnostics(&manifest, source.as_deref())?;
        }
    }

    Ok(())
}
