// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country catalog: the code -> {name, continent, status} table.
//!
//! A catalog is plain data. The bundled tables are YAML files embedded at
//! compile time; custom tables are loaded from YAML or JSON files, picked by
//! extension. Both go through the same validation: the locale must be an
//! ISO 639-1 code and every country code must be unique.

mod format;

pub use format::CatalogFormat;

use crate::locale::{is_valid_iso639_1, Locale};
use crate::types::CountryRecord;
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// On-disk shape of a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    locale: String,
    countries: Vec<CountryRecord>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    locale: String,
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>, records: Vec<CountryRecord>) -> Result<Self> {
        let locale = locale.into();
        if !is_valid_iso639_1(&locale) {
            bail!("catalog locale {:?} is not an ISO 639-1 code", locale);
        }

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.code.clone(), position).is_some() {
                bail!(
                    "duplicate country code {} in {} catalog",
                    record.code,
                    locale
                );
            }
        }

        Ok(Self {
            locale,
            records,
            index,
        })
    }

    /// The table shipped with the binary for `locale`.
    pub fn bundled(locale: Locale) -> Result<Self> {
        let catalog = Self::parse(locale.catalog_source(), CatalogFormat::Yaml)
            .with_context(|| format!("parsing bundled {} catalog", locale))?;
        if catalog.locale != locale.code() {
            return Err(anyhow!(
                "bundled {} catalog declares locale {}",
                locale,
                catalog.locale
            ));
        }
        Ok(catalog)
    }

    /// The bundled table for a locale code, e.g. `"no"` or `"nb"`.
    pub fn bundled_code(code: &str) -> Result<Self> {
        let locale = Locale::from_code(code).ok_or_else(|| {
            anyhow!(
                "no bundled catalog for locale {}; pass a catalog file instead",
                code
            )
        })?;
        Self::bundled(locale)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let format = CatalogFormat::from_path(path);
        Self::parse(&content, format)
            .with_context(|| format!("parsing {} catalog {}", format, path.display()))
    }

    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self> {
        let file: CatalogFile = match format {
            CatalogFormat::Json => serde_json::from_str(content)?,
            CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Self::new(file.locale, file.countries)
    }

    /// Render the catalog back into its file form, e.g. to export a bundled table.
    pub fn render(&self, format: CatalogFormat) -> Result<String> {
        let file = CatalogFile {
            locale: self.locale.clone(),
            countries: self.records.clone(),
        };
        let rendered = match format {
            CatalogFormat::Json => serde_json::to_string_pretty(&file)? + "\n",
            CatalogFormat::Yaml => serde_yaml::to_string(&file)?,
        };
        Ok(rendered)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        self.index.get(code).map(|&position| &self.records[position])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Records in file order
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;
    use std::collections::HashSet;

    const SMALL_YAML: &str = r#"
locale: "no"
countries:
  - { code: NOR, name: "Norge", continent: "Europe", status: official }
  - { code: SJM, name: "Svalbard og Jan Mayen", continent: "Europe", status: territory }
"#;

    #[test]
    fn parses_yaml_catalog() {
        let catalog = Catalog::parse(SMALL_YAML, CatalogFormat::Yaml).unwrap();
        assert_eq!(catalog.locale(), "no");
        assert_eq!(catalog.len(), 2);
        let svalbard = catalog.get("SJM").unwrap();
        assert_eq!(svalbard.name, "Svalbard og Jan Mayen");
        assert_eq!(svalbard.status, Status::Territory);
        assert!(!catalog.contains("nor"));
    }

    #[test]
    fn parses_json_catalog() {
        let json = r#"{"locale":"en","countries":[
            {"code":"TWN","name":"Taiwan","continent":"Asia","status":"disputed"}]}"#;
        let catalog = Catalog::parse(json, CatalogFormat::Json).unwrap();
        assert_eq!(catalog.get("TWN").map(|r| r.status), Some(Status::Disputed));
    }

    #[test]
    fn rejects_duplicate_codes() {
        let records = vec![
            CountryRecord::new("NOR", "Norway", "Europe", Status::Official),
            CountryRecord::new("NOR", "Norge", "Europe", Status::Official),
        ];
        let err = Catalog::new("en", records).unwrap_err();
        assert!(err.to_string().contains("duplicate country code NOR"));
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(Catalog::new("xx", Vec::new()).is_err());
    }

    #[test]
    fn rejects_unknown_status() {
        let yaml = r#"
locale: "en"
countries:
  - { code: XKX, name: "Kosovo", continent: "Europe", status: partial }
"#;
        assert!(Catalog::parse(yaml, CatalogFormat::Yaml).is_err());
    }

    #[test]
    fn bundled_catalogs_load() {
        for locale in Locale::all() {
            let catalog = Catalog::bundled(*locale).unwrap();
            assert_eq!(catalog.locale(), locale.code());
            assert!(catalog.len() > 240, "{} catalog too small", locale);
            assert!(catalog.records().iter().all(|r| r.code.len() == 3));
        }
    }

    #[test]
    fn bundled_catalogs_share_continent_labels() {
        let english = Catalog::bundled(Locale::En).unwrap();
        let norwegian = Catalog::bundled(Locale::No).unwrap();

        let mut regrouped = Vec::new();
        for record in english.records() {
            let other = norwegian
                .get(&record.code)
                .unwrap_or_else(|| panic!("{} missing from no catalog", record.code));
            assert_eq!(record.status, other.status, "{}", record.code);
            if record.continent != other.continent {
                regrouped.push(record.code.as_str());
            }
        }
        // The Norwegian quiz groups Greenland with Europe.
        assert_eq!(regrouped, vec!["GRL"]);

        let english_codes: HashSet<&str> = english.codes().collect();
        let extra: Vec<&str> = norwegian
            .codes()
            .filter(|code| !english_codes.contains(code))
            .collect();
        assert!(extra.contains(&"CMR"));
    }

    #[test]
    fn bundled_names_are_localized() {
        let english = Catalog::bundled(Locale::En).unwrap();
        let norwegian = Catalog::bundled(Locale::No).unwrap();
        assert_eq!(english.get("NOR").unwrap().name, "Norway");
        assert_eq!(norwegian.get("NOR").unwrap().name, "Norge");
        assert_eq!(norwegian.get("FRO").unwrap().name, "Færøyene");
    }

    #[test]
    fn render_round_trips_through_both_formats() {
        let catalog = Catalog::bundled(Locale::No).unwrap();
        for format in [CatalogFormat::Json, CatalogFormat::Yaml] {
            let rendered = catalog.render(format).unwrap();
            let reparsed = Catalog::parse(&rendered, format).unwrap();
            assert_eq!(reparsed.locale(), "no");
            assert_eq!(reparsed.records(), catalog.records());
        }
    }
}
