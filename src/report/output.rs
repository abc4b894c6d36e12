// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reading and writing the countries file

use crate::types::OutputDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Two-space indented JSON with non-ASCII left unescaped, ending in a newline.
pub fn to_json(document: &OutputDocument) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(document).context("serializing countries document")?;
    json.push('\n');
    Ok(json)
}

/// Write the document, replacing any previous file.
///
/// The document is serialized before the file is touched, so a
/// serialization failure leaves the old file in place.
pub fn write_document(document: &OutputDocument, path: &Path) -> Result<()> {
    let json = to_json(document)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

pub fn load_document(path: &Path) -> Result<OutputDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;
    use tempfile::TempDir;

    fn document() -> OutputDocument {
        let mut document = OutputDocument::default();
        for record in [
            CountryRecord::new("REU", "Réunion", "Africa", Status::Territory),
            CountryRecord::new("STP", "São Tomé og Príncipe", "Africa", Status::Official),
        ] {
            document.continents.push(&record.continent, &record.code);
            document.countries.push(CountryEntry::from(&record));
        }
        document
    }

    #[test]
    fn json_layout_matches_quiz_format() {
        let json = to_json(&document()).unwrap();
        let expected = r#"{
  "continents": {
    "Africa": [
      "REU",
      "STP"
    ]
  },
  "countries": [
    {
      "id": "REU",
      "name": "Réunion",
      "continent": "Africa",
      "flagPath": "assets/flags/svg/REU.svg",
      "status": "territory"
    },
    {
      "id": "STP",
      "name": "São Tomé og Príncipe",
      "continent": "Africa",
      "flagPath": "assets/flags/svg/STP.svg",
      "status": "official"
    }
  ]
}
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn written_file_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("countries.json");
        write_document(&document(), &path).unwrap();
        assert_eq!(load_document(&path).unwrap(), document());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("countries.json");
        let err = write_document(&document(), &path).unwrap_err();
        assert!(err.to_string().starts_with("writing "));
        assert!(!path.exists());
    }
}
