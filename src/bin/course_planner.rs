//! Interactive course planner.
//!
//! Presents the load / list / lookup menu on stdin/stdout. Flags only tune the
//! session: `--default-file` changes what an empty file name loads, and
//! `--load` preloads a catalog before the first menu is shown.

use anyhow::{Result, anyhow, bail};
use courseplanner::{
    CatalogRepository, DEFAULT_CATALOG_FILE, MenuConfig, load_and_report, run_menu,
    runtime::init_logging,
};
use std::env;
use std::io::{self, Write};
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

    let config = MenuConfig {
        default_file: cli.default_file,
    };
    let mut repo = CatalogRepository::new();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    if let Some(path) = cli.preload {
        load_and_report(&mut repo, &path, &mut output)?;
    }
    run_menu(&mut repo, &config, &mut input, &mut output)?;
    output.flush()?;
    Ok(())
}

struct Cli {
    default_file: PathBuf,
    preload: Option<PathBuf>,
    verbose: bool,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();
        let mut default_file = PathBuf::from(DEFAULT_CATALOG_FILE);
        let mut preload = None;
        let mut verbose = false;

        while let Some(arg) = args.next() {
            let arg_str = arg
                .to_str()
                .ok_or_else(|| anyhow!("invalid UTF-8 in argument"))?;
            match arg_str {
                "--default-file" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--default-file requires a value"))?;
                    default_file = PathBuf::from(value);
                }
                "--load" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--load requires a value"))?;
                    preload = Some(PathBuf::from(value));
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => usage(0),
                other => bail!("unknown argument: {other}"),
            }
        }

        Ok(Self {
            default_file,
            preload,
            verbose,
        })
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: course-planner [--default-file PATH] [--load PATH] [--verbose]\n\nOptions:\n  --default-file PATH   File loaded when the load prompt is left empty\n                        (default: \"{DEFAULT_CATALOG_FILE}\").\n  --load PATH           Load a course file before showing the menu.\n  --verbose, -v         Log debug diagnostics to stderr (otherwise RUST_LOG applies).\n  --help, -h            Show this help text."
    );
    std::process::exit(code);
}
