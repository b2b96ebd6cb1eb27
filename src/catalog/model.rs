//! In-memory representation of a loaded course catalog.
//!
//! `Catalog` is a plain hash map keyed by `CourseId`; it carries no ordering of
//! its own. Sorted views are computed on demand by `sorted_ids` and
//! `sorted_records`.

use crate::catalog::identity::CourseId;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
/// One course row: identifier, free-text title, and prerequisite identifiers.
///
/// Prerequisites keep the order they appeared in the source row and are not
/// checked against the catalog.
pub struct CourseRecord {
    pub id: CourseId,
    pub title: String,
    pub prerequisites: Vec<CourseId>,
}

impl CourseRecord {
    pub fn new(id: CourseId, title: impl Into<String>, prerequisites: Vec<CourseId>) -> Self {
        Self {
            id,
            title: title.into(),
            prerequisites,
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Mapping from course identifier to record, built wholesale by one load.
pub struct Catalog {
    courses: HashMap<CourseId, CourseRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier record with the same id.
    pub fn insert(&mut self, record: CourseRecord) -> Option<CourseRecord> {
        self.courses.insert(record.id.clone(), record)
    }

    /// Look up a record from raw user input (trimmed and uppercased first).
    pub fn lookup(&self, raw: &str) -> Option<&CourseRecord> {
        self.get(&CourseId::normalize(raw))
    }

    pub fn get(&self, id: &CourseId) -> Option<&CourseRecord> {
        self.courses.get(id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All identifiers in byte order.
    pub fn sorted_ids(&self) -> Vec<&CourseId> {
        let mut ids: Vec<&CourseId> = self.courses.keys().collect();
        ids.sort();
        ids
    }

    /// All records ordered by identifier.
    pub fn sorted_records(&self) -> Vec<&CourseRecord> {
        self.sorted_ids()
            .into_iter()
            .filter_map(|id| self.courses.get(id))
            .collect()
    }
}
