//! Non-interactive JSON view of a course file.
//!
//! Loads the file with the same parser as the interactive planner and prints
//! either every record (a JSON array in identifier order) or a single record
//! selected with `--course`. Useful for scripting and for checking what the
//! loader kept from a messy input file.

use anyhow::{Context, Result, anyhow, bail};
use courseplanner::{CourseId, load_catalog_from_path, runtime::init_logging};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    init_logging(cli.verbose);

    let catalog = load_catalog_from_path(&cli.file)
        .with_context(|| format!("Could not load course file {}", cli.file.display()))?;

    let rendered = match cli.course {
        Some(raw) => {
            let record = catalog
                .lookup(&raw)
                .ok_or_else(|| anyhow!("Course not found: {}", CourseId::normalize(&raw)))?;
            serde_json::to_string(record)?
        }
        None => serde_json::to_string(&catalog.sorted_records())?,
    };
    println!("{rendered}");
    Ok(())
}

struct Cli {
    file: PathBuf,
    course: Option<String>,
    verbose: bool,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();
        let mut file = None;
        let mut course = None;
        let mut verbose = false;

        while let Some(arg) = args.next() {
            let arg_str = arg
                .to_str()
                .ok_or_else(|| anyhow!("invalid UTF-8 in argument"))?;
            match arg_str {
                "--file" | "-f" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--file requires a value"))?;
                    file = Some(PathBuf::from(value));
                }
                "--course" | "-c" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--course requires a value"))?;
                    course = Some(
                        value
                            .into_string()
                            .map_err(|_| anyhow!("--course must be valid UTF-8"))?,
                    );
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => usage(0),
                other => bail!("unknown argument: {other}"),
            }
        }

        let Some(file) = file else {
            usage(1);
        };
        Ok(Self {
            file,
            course,
            verbose,
        })
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: course-dump --file PATH [--course ID] [--verbose]\n\nOptions:\n  --file, -f PATH     Course file to load (IDENTIFIER,TITLE[,PREREQ]* per line).\n  --course, -c ID     Emit only this course (case-insensitive).\n  --verbose, -v       Log debug diagnostics to stderr.\n  --help, -h          Show this help text.\n\nWithout --course, prints every course as a JSON array sorted by identifier."
    );
    std::process::exit(code);
}
