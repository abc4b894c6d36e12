// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locales with a bundled country catalog.
//!
//! | Code | Language  | Default output       |
//! |------|-----------|----------------------|
//! | en   | English   | `countries.json`     |
//! | no   | Norwegian | `countries_no.json`  |
//!
//! The tables live under `data/catalogs/` and are embedded at compile time,
//! so the binary runs without the data directory. Custom catalogs for other
//! languages can still be loaded from disk; their locale code only has to be
//! a valid ISO 639-1 code.
//!
//! ## Bundling a new locale
//!
//! 1. Add `data/catalogs/xx.yaml`
//! 2. Add a variant to [`Locale`] and arms to `code()`, `from_code()`,
//!    `output_file_name()` and `catalog_source()`

mod iso639;

pub use iso639::{is_valid_iso639_1, language_name};

use serde::{Deserialize, Serialize};

/// A locale shipped with a bundled catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    No,
}

impl Locale {
    /// ISO 639-1 code for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::No => "no",
        }
    }

    /// Parse an ISO 639-1 code into a bundled locale.
    ///
    /// Bokmål (`nb`) maps to the Norwegian table. Case-sensitive.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "no" | "nb" => Some(Locale::No),
            _ => None,
        }
    }

    /// All bundled locales, in generation order.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::No]
    }

    /// File name the quiz expects for this locale's countries file.
    pub fn output_file_name(&self) -> &'static str {
        match self {
            Locale::En => "countries.json",
            Locale::No => "countries_no.json",
        }
    }

    pub(crate) fn catalog_source(&self) -> &'static str {
        match self {
            Locale::En => include_str!("../../data/catalogs/en.yaml"),
            Locale::No => include_str!("../../data/catalogs/no.yaml"),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Output file name for any locale code, bundled or not.
pub fn output_file_name(code: &str) -> String {
    match Locale::from_code(code) {
        Some(locale) => locale.output_file_name().to_string(),
        None => format!("countries_{}.json", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(*locale));
            assert!(is_valid_iso639_1(locale.code()));
        }
    }

    #[test]
    fn bokmal_resolves_to_norwegian() {
        assert_eq!(Locale::from_code("nb"), Some(Locale::No));
        assert_eq!(Locale::from_code("NO"), None);
        assert_eq!(Locale::from_code("sv"), None);
    }

    #[test]
    fn output_names_match_quiz_data_files() {
        assert_eq!(output_file_name("en"), "countries.json");
        assert_eq!(output_file_name("no"), "countries_no.json");
        assert_eq!(output_file_name("de"), "countries_de.json");
    }

    #[test]
    fn bundled_sources_declare_their_locale() {
        for locale in Locale::all() {
            let expected = format!("locale: \"{}\"", locale.code());
            assert!(locale.catalog_source().contains(&expected));
        }
    }
}
