//! Interactive menu loop for the `course-planner` binary.
//!
//! The loop owns no state of its own: the `CatalogRepository` is passed in and
//! survives across turns. Input and output are generic so tests can script a
//! whole session through in-memory buffers.

use crate::catalog::CatalogRepository;
use crate::parse_leading_int;
use crate::query::{
    INVALID_INPUT_MESSAGE, LookupOutcome, pick_course, render_course_info, render_course_list,
    write_rendered,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// File loaded when the user just presses Enter at the file name prompt.
pub const DEFAULT_CATALOG_FILE: &str = "CS 300 ABCU_Advising_Program_Input.csv";

pub const WELCOME_MESSAGE: &str = "Welcome to the course planner.";
pub const FAREWELL_MESSAGE: &str = "Thank you for using the course planner!";
pub const LOAD_FAILED_MESSAGE: &str = "Error: Could not open file.";
pub const NOT_LOADED_MESSAGE: &str = "Please load data first.";

const MENU_LINES: &[&str] = &[
    "1. Load Data Structure.",
    "2. Print Course List.",
    "3. Print Course.",
    "9. Exit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Knobs for a menu session.
pub struct MenuConfig {
    pub default_file: PathBuf,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_CATALOG_FILE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One parsed line of menu input.
pub enum MenuChoice {
    Load,
    List,
    Lookup,
    Exit,
    /// A number that is not on the menu; echoed back to the user.
    Unknown(i32),
    /// Input that does not start with a number.
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match parse_leading_int(input) {
            Some(1) => MenuChoice::Load,
            Some(2) => MenuChoice::List,
            Some(3) => MenuChoice::Lookup,
            Some(9) => MenuChoice::Exit,
            Some(other) => MenuChoice::Unknown(other),
            None => MenuChoice::Invalid,
        }
    }
}

/// Run the menu until the user picks Exit or input runs out.
pub fn run_menu<R: BufRead, W: Write>(
    repo: &mut CatalogRepository,
    config: &MenuConfig,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{WELCOME_MESSAGE}")?;

    loop {
        for line in MENU_LINES {
            writeln!(output, "{line}")?;
        }
        let Some(line) = prompt(input, output, "What would you like to do? ")? else {
            tracing::debug!("input closed at main menu");
            return Ok(());
        };

        let choice = MenuChoice::parse(&line);
        let keep_going = match choice {
            MenuChoice::Load => handle_load(repo, config, input, output)?,
            MenuChoice::List => handle_list(repo, output)?,
            MenuChoice::Lookup => handle_lookup(repo, input, output)?,
            MenuChoice::Exit => {
                writeln!(output, "{FAREWELL_MESSAGE}")?;
                false
            }
            MenuChoice::Unknown(value) => {
                tracing::debug!(value, "unknown menu option");
                writeln!(output, "{value} is not a valid option.")?;
                true
            }
            MenuChoice::Invalid => {
                writeln!(output, "{INVALID_INPUT_MESSAGE}")?;
                true
            }
        };
        if !keep_going {
            return Ok(());
        }
    }
}

/// Load `path` into `repo`, telling the user only when it fails.
pub fn load_and_report<W: Write>(
    repo: &mut CatalogRepository,
    path: &Path,
    output: &mut W,
) -> io::Result<bool> {
    match repo.load_from_path(path) {
        Ok(_) => Ok(true),
        Err(_) => {
            writeln!(output, "{LOAD_FAILED_MESSAGE}")?;
            Ok(false)
        }
    }
}

fn handle_load<R: BufRead, W: Write>(
    repo: &mut CatalogRepository,
    config: &MenuConfig,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let Some(name) = prompt(input, output, "Enter the file name: ")? else {
        return Ok(false);
    };
    let path = if name.trim().is_empty() {
        config.default_file.clone()
    } else {
        PathBuf::from(name)
    };
    load_and_report(repo, &path, output)?;
    Ok(true)
}

fn handle_list<W: Write>(repo: &CatalogRepository, output: &mut W) -> io::Result<bool> {
    match repo.catalog() {
        Some(catalog) => write_rendered(output, |buf| render_course_list(catalog, buf))?,
        None => writeln!(output, "{NOT_LOADED_MESSAGE}")?,
    }
    Ok(true)
}

fn handle_lookup<R: BufRead, W: Write>(
    repo: &CatalogRepository,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let Some(catalog) = repo.catalog() else {
        writeln!(output, "{NOT_LOADED_MESSAGE}")?;
        return Ok(true);
    };
    let Some(requested) = prompt(input, output, "What course do you want to know about? ")? else {
        return Ok(false);
    };
    if requested.trim().is_empty() {
        let outcome = pick_course(catalog, input, output)?;
        tracing::debug!(?outcome, "course picker finished");
    } else {
        let mut outcome = LookupOutcome::NotFound;
        write_rendered(output, |buf| {
            outcome = render_course_info(catalog, &requested, buf)?;
            Ok(())
        })?;
        tracing::debug!(?outcome, requested = requested.trim(), "course lookup finished");
    }
    Ok(true)
}

/// Print `label`, then read one line without its terminator.
///
/// Returns `None` once input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
