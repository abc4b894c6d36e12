// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for flag-catalog
//!
//! The output types mirror the JSON consumed by the quiz front end, so field
//! names and ordering here are part of the file format.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Prefix of every synthesized flag path, relative to the game directory
pub const FLAG_PATH_PREFIX: &str = "assets/flags/svg";

/// Political recognition of a country or territory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// UN member state
    Official,
    /// Dependent area
    Territory,
    /// UN observer state
    Observer,
    /// Contested sovereignty
    Disputed,
}

impl Status {
    pub fn all() -> [Status; 4] {
        [
            Status::Official,
            Status::Territory,
            Status::Observer,
            Status::Disputed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Official => "official",
            Status::Territory => "territory",
            Status::Observer => "observer",
            Status::Disputed => "disputed",
        }
    }

    /// Heading used in the console status breakdown
    pub fn label(&self) -> &'static str {
        match self {
            Status::Official => "Official UN members",
            Status::Territory => "Territories",
            Status::Observer => "UN observers",
            Status::Disputed => "Disputed territories",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a country catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// ISO alpha-3 code, unique within a catalog
    pub code: String,
    pub name: String,
    pub continent: String,
    pub status: Status,
}

impl CountryRecord {
    pub fn new(code: &str, name: &str, continent: &str, status: Status) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            continent: continent.to_string(),
            status,
        }
    }
}

/// A playable country as written to the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    pub id: String,
    pub name: String,
    pub continent: String,
    pub flag_path: String,
    pub status: Status,
}

impl From<&CountryRecord> for CountryEntry {
    fn from(record: &CountryRecord) -> Self {
        Self {
            id: record.code.clone(),
            name: record.name.clone(),
            continent: record.continent.clone(),
            flag_path: flag_path(&record.code),
            status: record.status,
        }
    }
}

/// Asset path the game uses to load the flag for `code`
pub fn flag_path(code: &str) -> String {
    format!("{}/{}.svg", FLAG_PATH_PREFIX, code)
}

/// Continent buckets, kept in the order continents were first seen.
///
/// Serializes as a JSON object whose keys follow that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinentIndex {
    buckets: Vec<(String, Vec<String>)>,
}

impl ContinentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `code` to the bucket for `continent`, creating it on first sight
    pub fn push(&mut self, continent: &str, code: &str) {
        match self.buckets.iter_mut().find(|(name, _)| name == continent) {
            Some((_, codes)) => codes.push(code.to_string()),
            None => self
                .buckets
                .push((continent.to_string(), vec![code.to_string()])),
        }
    }

    pub fn get(&self, continent: &str) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|(name, _)| name == continent)
            .map(|(_, codes)| codes.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets
            .iter()
            .map(|(name, codes)| (name.as_str(), codes.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Serialize for ContinentIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (name, codes) in &self.buckets {
            map.serialize_entry(name, codes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ContinentIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = ContinentIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of continent names to country code lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut index = ContinentIndex::new();
                while let Some((name, codes)) = access.next_entry::<String, Vec<String>>()? {
                    for code in &codes {
                        index.push(&name, code);
                    }
                }
                Ok(index)
            }
        }

        deserializer.deserialize_map(IndexVisitor)
    }
}

/// The generated countries file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub continents: ContinentIndex,
    pub countries: Vec<CountryEntry>,
}

impl OutputDocument {
    pub fn status_breakdown(&self) -> StatusBreakdown {
        self.countries.iter().map(|entry| entry.status).collect()
    }

    pub fn country(&self, code: &str) -> Option<&CountryEntry> {
        self.countries.iter().find(|entry| entry.id == code)
    }
}

/// Number of emitted countries per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub official: usize,
    pub territory: usize,
    pub observer: usize,
    pub disputed: usize,
}

impl StatusBreakdown {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Official => self.official += 1,
            Status::Territory => self.territory += 1,
            Status::Observer => self.observer += 1,
            Status::Disputed => self.disputed += 1,
        }
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Official => self.official,
            Status::Territory => self.territory,
            Status::Observer => self.observer,
            Status::Disputed => self.disputed,
        }
    }

    pub fn total(&self) -> usize {
        self.official + self.territory + self.observer + self.disputed
    }
}

impl FromIterator<Status> for StatusBreakdown {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        let mut breakdown = StatusBreakdown::default();
        for status in iter {
            breakdown.record(status);
        }
        breakdown
    }
}
