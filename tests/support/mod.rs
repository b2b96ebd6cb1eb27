use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

pub fn helper_binary(name: &str) -> PathBuf {
    let path = match name {
        "course-planner" => PathBuf::from(env!("CARGO_BIN_EXE_course-planner")),
        "course-dump" => PathBuf::from(env!("CARGO_BIN_EXE_course-dump")),
        other => panic!("unknown helper binary {other}"),
    };
    assert!(path.is_file(), "helper {} not built at {}", name, path.display());
    path
}

/// Run `cmd` with `stdin` piped in, returning the raw output regardless of status.
pub fn run_with_stdin(mut cmd: Command, stdin: &str) -> Result<Output> {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to spawn command: {:?}", cmd))?;
    let mut pipe = child.stdin.take().context("child stdin unavailable")?;
    // The child may exit before reading everything (e.g. on a bad flag).
    if let Err(err) = pipe.write_all(stdin.as_bytes()) {
        if err.kind() != ErrorKind::BrokenPipe {
            return Err(err.into());
        }
    }
    drop(pipe);
    child
        .wait_with_output()
        .with_context(|| format!("failed to wait for command: {:?}", cmd))
}

/// Like `run_with_stdin`, but fails unless the command exits successfully.
pub fn run_command(cmd: Command, stdin: &str) -> Result<Output> {
    let debug = format!("{:?}", cmd);
    let output = run_with_stdin(cmd, stdin)?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {} failed: status {:?}\nstdout: {}\nstderr: {}",
            debug,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn write_course_file(dir: &Path, name: &str, rows: &[&str]) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut contents = rows.join("\n");
    contents.push('\n');
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
