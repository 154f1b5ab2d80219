//! Build identification for the startup log line: `git describe` output,
//! build date and target triple.

use std::path::Path;
use std::process::Command;

fn main() {
    let describe = git_describe().unwrap_or_else(|| "untracked".to_string());
    let build_date = chrono::Utc::now().format("%Y-%m-%d");
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown-target".to_string());

    println!("cargo:rustc-env=X11_BELL_GIT_DESCRIBE={}", describe);
    println!("cargo:rustc-env=X11_BELL_BUILD_DATE={}", build_date);
    println!("cargo:rustc-env=X11_BELL_BUILD_TARGET={}", target);

    // Re-run when the checked-out commit moves, not on every build
    for git_file in ["../.git/HEAD", "../.git/index"] {
        if Path::new(git_file).exists() {
            println!("cargo:rerun-if-changed={}", git_file);
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
}

/// `v0.1.0-3-gdeadbeef-dirty` style description, if built from a checkout
fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
