// SPDX-License-Identifier: PMPL-1.0-or-later

//! Diff between an existing countries file and a fresh generation.
//!
//! Ordering is ignored: two documents are equal when they hold the same
//! entries and every continent lists the same codes.

use crate::types::*;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentDiff {
    /// Codes only in the fresh document
    pub added: Vec<String>,
    /// Codes only in the existing document
    pub removed: Vec<String>,
    /// Codes in both whose entries differ
    pub changed: Vec<String>,
    /// Continents whose code sets differ
    pub continents: Vec<String>,
}

impl DocumentDiff {
    pub fn between(existing: &OutputDocument, fresh: &OutputDocument) -> Self {
        let before = entries_by_code(existing);
        let after = entries_by_code(fresh);

        let added = after
            .keys()
            .filter(|code| !before.contains_key(*code))
            .map(|code| code.to_string())
            .collect();
        let removed = before
            .keys()
            .filter(|code| !after.contains_key(*code))
            .map(|code| code.to_string())
            .collect();
        let changed = before
            .iter()
            .filter(|(code, entry)| after.get(*code).is_some_and(|other| other != *entry))
            .map(|(code, _)| code.to_string())
            .collect();

        let buckets_before = buckets(existing);
        let buckets_after = buckets(fresh);
        let names: BTreeSet<&str> = buckets_before
            .keys()
            .chain(buckets_after.keys())
            .copied()
            .collect();
        let continents = names
            .into_iter()
            .filter(|name| buckets_before.get(name) != buckets_after.get(name))
            .map(str::to_string)
            .collect();

        Self {
            added,
            removed,
            changed,
            continents,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.changed.is_empty()
            && self.continents.is_empty()
    }

    pub fn format(&self, existing_label: &str) -> String {
        if self.is_empty() {
            return format!("{} is up to date", existing_label);
        }

        let mut lines = vec![format!("{} is out of date", existing_label)];
        push_codes(&mut lines, "Added", &self.added);
        push_codes(&mut lines, "Removed", &self.removed);
        push_codes(&mut lines, "Changed", &self.changed);
        push_codes(&mut lines, "Continents", &self.continents);
        lines.join("\n")
    }
}

fn entries_by_code(document: &OutputDocument) -> BTreeMap<&str, &CountryEntry> {
    document
        .countries
        .iter()
        .map(|entry| (entry.id.as_str(), entry))
        .collect()
}

fn buckets(document: &OutputDocument) -> BTreeMap<&str, BTreeSet<&str>> {
    document
        .continents
        .iter()
        .map(|(name, codes)| {
            let codes: BTreeSet<&str> = codes.iter().map(String::as_str).collect();
            (name, codes)
        })
        .collect()
}

fn push_codes(lines: &mut Vec<String>, label: &str, codes: &[String]) {
    if !codes.is_empty() {
        lines.push(format!("  {} ({}): {}", label, codes.len(), codes.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(records: &[CountryRecord]) -> OutputDocument {
        let mut document = OutputDocument::default();
        for record in records {
            document.continents.push(&record.continent, &record.code);
            document.countries.push(CountryEntry::from(record));
        }
        document
    }

    fn norway() -> CountryRecord {
        CountryRecord::new("NOR", "Norway", "Europe", Status::Official)
    }

    fn sweden() -> CountryRecord {
        CountryRecord::new("SWE", "Sweden", "Europe", Status::Official)
    }

    #[test]
    fn reordered_documents_are_equal() {
        let a = document(&[norway(), sweden()]);
        let b = document(&[sweden(), norway()]);
        let diff = DocumentDiff::between(&a, &b);
        assert!(diff.is_empty());
        assert_eq!(diff.format("countries.json"), "countries.json is up to date");
    }

    #[test]
    fn added_and_removed_codes_are_reported() {
        let existing = document(&[norway()]);
        let fresh = document(&[sweden()]);
        let diff = DocumentDiff::between(&existing, &fresh);
        assert_eq!(diff.added, vec!["SWE".to_string()]);
        assert_eq!(diff.removed, vec!["NOR".to_string()]);
        assert_eq!(diff.continents, vec!["Europe".to_string()]);
    }

    #[test]
    fn renamed_entry_is_changed() {
        let existing = document(&[norway()]);
        let fresh = document(&[CountryRecord::new(
            "NOR",
            "Norge",
            "Europe",
            Status::Official,
        )]);
        let diff = DocumentDiff::between(&existing, &fresh);
        assert_eq!(diff.changed, vec!["NOR".to_string()]);
        assert!(diff.continents.is_empty());

        let text = diff.format("countries_no.json");
        assert!(text.starts_with("countries_no.json is out of date"));
        assert!(text.contains("  Changed (1): NOR"));
    }
}
