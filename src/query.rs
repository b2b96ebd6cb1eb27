//! Read-only queries over a loaded catalog.
//!
//! Listing and lookup render into any `fmt::Write` so callers can print them or
//! capture them in tests. The interactive picker is the only piece that talks to
//! the console directly; it takes its input and output streams as parameters.
//! None of these functions check load state; the menu refuses to call them
//! before a catalog exists.

use crate::catalog::{Catalog, CourseId, CourseRecord};
use crate::parse_leading_int;
use std::fmt;
use std::io::{self, BufRead};

pub const LIST_HEADER: &str = "Here is a sample schedule:";
pub const NOT_FOUND_MESSAGE: &str = "Course not found.";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input.";
pub const INVALID_SELECTION_MESSAGE: &str = "Invalid selection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of a single-course lookup. A miss is a normal outcome, not an error.
pub enum LookupOutcome {
    Found,
    NotFound,
}

/// Print every course as `ID, Title`, ordered by identifier.
pub fn render_course_list(catalog: &Catalog, writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(writer, "{LIST_HEADER}")?;
    for record in catalog.sorted_records() {
        writeln!(writer, "{}, {}", record.id, record.title)?;
    }
    Ok(())
}

/// Look up raw user input and print the course with its prerequisites.
pub fn render_course_info(
    catalog: &Catalog,
    raw_id: &str,
    writer: &mut impl fmt::Write,
) -> Result<LookupOutcome, fmt::Error> {
    match catalog.lookup(raw_id) {
        Some(record) => {
            render_record(record, writer)?;
            Ok(LookupOutcome::Found)
        }
        None => {
            tracing::debug!(requested = raw_id.trim(), "course lookup missed");
            writeln!(writer, "{NOT_FOUND_MESSAGE}")?;
            Ok(LookupOutcome::NotFound)
        }
    }
}

pub fn render_record(record: &CourseRecord, writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(writer, "{}, {}", record.id, record.title)?;
    writeln!(writer, "{}", format_prerequisites(record))
}

/// `Prerequisites: None` or the prerequisites in their stored order.
pub fn format_prerequisites(record: &CourseRecord) -> String {
    if record.prerequisites.is_empty() {
        return "Prerequisites: None".to_string();
    }
    let joined = record
        .prerequisites
        .iter()
        .map(CourseId::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Prerequisites: {joined}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Parsed picker input.
pub enum Selection {
    Cancel,
    /// Zero-based index into the sorted identifier list.
    Pick(usize),
    OutOfRange(i32),
    Invalid,
}

/// Interpret a 1-based menu selection against a list of `count` entries.
pub fn parse_selection(input: &str, count: usize) -> Selection {
    let Some(value) = parse_leading_int(input) else {
        return Selection::Invalid;
    };
    if value == 0 {
        return Selection::Cancel;
    }
    match usize::try_from(value) {
        Ok(n) if n <= count => Selection::Pick(n - 1),
        _ => Selection::OutOfRange(value),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the interactive picker ended up doing.
pub enum PickOutcome {
    Shown(CourseId),
    Cancelled,
    Rejected(Selection),
}

/// Numbered menu of every course id, read one selection, print the choice.
///
/// There is no retry: bad input is reported once and the picker returns.
pub fn pick_course<R: BufRead, W: io::Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<PickOutcome> {
    let ids = catalog.sorted_ids();
    write_rendered(output, |buf| {
        use fmt::Write as _;
        writeln!(buf, "Select a course from the list:")?;
        for (idx, id) in ids.iter().enumerate() {
            writeln!(buf, "{}) {}", idx + 1, id)?;
        }
        write!(buf, "Enter selection (1-{}, or 0 to cancel): ", ids.len())
    })?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let selection = parse_selection(&line, ids.len());
    let outcome = match selection {
        Selection::Cancel => PickOutcome::Cancelled,
        Selection::Pick(idx) => {
            let id = ids[idx].clone();
            if let Some(record) = catalog.get(&id) {
                write_rendered(output, |buf| render_record(record, buf))?;
            }
            PickOutcome::Shown(id)
        }
        Selection::Invalid => {
            writeln!(output, "{INVALID_INPUT_MESSAGE}")?;
            PickOutcome::Rejected(selection)
        }
        Selection::OutOfRange(_) => {
            writeln!(output, "{INVALID_SELECTION_MESSAGE}")?;
            PickOutcome::Rejected(selection)
        }
    };
    Ok(outcome)
}

/// Render into a scratch buffer and copy it to an `io::Write` sink.
pub fn write_rendered<W, F>(output: &mut W, render: F) -> io::Result<()>
where
    W: io::Write,
    F: FnOnce(&mut String) -> fmt::Result,
{
    let mut buf = String::new();
    render(&mut buf).map_err(|_| io::Error::other("failed to format output"))?;
    output.write_all(buf.as_bytes())
}
