//! Shared library for the course planner binaries.
//!
//! The crate loads a flat comma-delimited course file into an in-memory
//! catalog and answers two read-only questions about it: the full course list
//! in identifier order, and a single course with its prerequisites. The
//! `course-planner` binary wraps these in an interactive menu; `course-dump`
//! emits the same catalog as JSON.

pub mod catalog;
pub mod menu;
pub mod query;
pub mod runtime;

pub use catalog::{
    Catalog, CatalogRepository, CourseId, CourseRecord, LoadStats, load_catalog_from_path,
    parse_catalog, parse_record,
};
pub use menu::{DEFAULT_CATALOG_FILE, MenuChoice, MenuConfig, load_and_report, run_menu};
pub use query::{
    LookupOutcome, PickOutcome, Selection, format_prerequisites, parse_selection, pick_course,
    render_course_info, render_course_list,
};

/// Field delimiter for course rows.
pub const FIELD_DELIMITER: char = ',';

/// Split one course row into trimmed fields.
///
/// A single trailing empty field is not counted, so `CSCI300,` yields one
/// field rather than an identifier plus an empty title. Inner empty fields are
/// kept; callers decide what an empty field means.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut raw: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if raw.last().is_some_and(|last| last.is_empty()) {
        raw.pop();
    }
    raw.into_iter().map(str::trim).collect()
}

/// Read the integer at the start of `input`, ignoring anything after it.
///
/// Surrounding whitespace is trimmed and an optional sign is accepted, so
/// `3abc` reads as 3 and `2.5` as 2. Returns `None` when no digits lead the
/// input or the value does not fit in an `i32`.
pub fn parse_leading_int(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }
    let digits = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}
