use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

pub const TITLE_FALLBACK: &str = "No Title Available";
pub const PUBLISHER_FALLBACK: &str = "Unknown Publisher";

// BookRecord is the normalized metadata of one book as stored in the cache file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub isbn: String,
    pub title: String,
    pub publisher: String,
    pub release_date: Option<String>,
}

impl BookRecord {
    // blank title or publisher fall back to the fixed defaults
    pub fn new(isbn: &str, title: Option<&str>, publisher: Option<&str>, release_date: Option<String>) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: non_blank(title).unwrap_or(TITLE_FALLBACK).to_string(),
            publisher: non_blank(publisher).unwrap_or(PUBLISHER_FALLBACK).to_string(),
            release_date,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Identifiable for BookRecord {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

// BookCache maps isbn to record. It is rebuilt from scratch on every run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookCache {
    records: BTreeMap<String, BookRecord>,
}

impl BookCache {
    pub fn new() -> Self {
        Self::default()
    }

    // returns the record it replaced when the same isbn was looked up twice
    pub fn insert(&mut self, record: BookRecord) -> Option<BookRecord> {
        self.records.insert(record.id(), record)
    }

    #[cfg(test)]
    pub(crate) fn get(&self, isbn: &str) -> Option<&BookRecord> {
        self.records.get(isbn)
    }

    #[cfg(test)]
    pub(crate) fn isbns(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
