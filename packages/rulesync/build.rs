//! Build script for rulesync that generates version information.
//!
//! The version is `git describe --always --tags --dirty=-dirty` when the
//! package is built from a git checkout, and the package version otherwise
//! (for example when building from a published source tarball).

use std::env;
use std::iter;
use std::process::Command;

fn main() {
    let version = env::var("RULESYNC_VERSION_OVERRIDE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| git_describe().ok())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=RULESYNC_VERSION={version}");
}

fn run(prog: &str, argv: &[&str]) -> Result<String, String> {
    let invocation = iter::once(prog)
        .chain(argv.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    let output = Command::new(prog)
        .args(argv)
        .output()
        .map_err(|e| format!("failed to execute `{invocation}`: {e}"))?;
    if !output.status.success() {
        return Err(format!("`{invocation}` exited with non-zero status"));
    }

    let output = String::from_utf8(output.stdout)
        .map_err(|e| format!("could not parse output of `{invocation}` as UTF-8: {e}"))?;
    let output = output.trim_end().to_string();
    if output.is_empty() {
        return Err(format!("`{invocation}` produced no output"));
    }

    Ok(output)
}

fn git_describe() -> Result<String, String> {
    run("git", &["describe", "--always", "--tags", "--dirty=-dirty"])
}
