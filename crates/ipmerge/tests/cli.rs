// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use std::{
    ffi::OsStr,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

static BIN: &str = env!("CARGO_BIN_EXE_ipmerge");
static DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");

fn command_output(args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> Output {
    Command::new(BIN).args(args).output().unwrap()
}

fn stdin_output(input: &[u8]) -> Output {
    let mut child = Command::new(BIN)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

fn snapshot(name: &str) {
    let testname = Path::new(DATA_DIR).join(name);
    let output = command_output([testname.with_extension("txt")]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let output = String::from_utf8(output.stdout).unwrap();
    let mut lines = output.lines();
    let sample = std::fs::read_to_string(testname.with_extension("out")).unwrap();

    for (n, sl) in sample.lines().enumerate() {
        assert_eq!(lines.next().unwrap(), sl, "line {}", n + 1);
    }

    assert_eq!(lines.next(), None);
}

macro_rules! snap {
    ($name:ident) => {
        #[test]
        fn $name() {
            snapshot(stringify!($name));
        }
    };
}

snap!(overlap);
snap!(malformed);
snap!(mixed);
snap!(everything);

#[test]
fn empty() {
    let output = command_output([Path::new(DATA_DIR).join("empty.txt")]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn nothing_valid() {
    let output = command_output([Path::new(DATA_DIR).join("nothing_valid.txt")]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn verbose_mentions_skipped_lines() {
    let output = command_output([
        OsStr::new("-v").to_owned(),
        Path::new(DATA_DIR).join("nothing_valid.txt").into_os_string(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("skipping line"), "{stderr}");
}

#[test]
fn stdin() {
    let output = stdin_output(b"1 - 2\n3 - 4\n0x10 - 0x20\n");
    assert!(output.status.success());
    assert_eq!(
        str::from_utf8(&output.stdout).unwrap(),
        "0.0.0.1 - 0.0.0.4\n0.0.0.16 - 0.0.0.32\nTotal:  2\n"
    );
}

#[test]
fn stdin_empty() {
    let output = stdin_output(b"");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file() {
    let output = command_output([Path::new(DATA_DIR).join("does-not-exist.txt")]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("could not open input"), "{stderr}");
}
