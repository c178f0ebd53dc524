//! End-to-end tests: JSON listing in, narration and object file out.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

const LISTING: &str = r#"{
    "cpu": "toy",
    "insts": [
        {"opcode": 1, "operands": [
            {"kind": "reg", "index": 4},
            {"kind": "imm", "value": 10}
        ]},
        {"opcode": 10}
    ]
}"#;

fn opwatch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_opwatch"))
}

fn write_listing(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("listing.json");
    fs::write(&path, LISTING).unwrap();
    path
}

#[test]
fn narrates_and_summarizes() {
    let dir = tempfile::tempdir().unwrap();
    let output = opwatch().arg(write_listing(dir.path())).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Encoding Op #1 a0, 10\n"), "{stdout}");
    assert!(stdout.contains("\tResult: 01 04 0a 00\n"), "{stdout}");
    assert!(stdout.contains("Encoding Op #10\n"), "{stdout}");
    assert!(
        stdout.contains("Assembled 8 bytes (use -o to save)\n"),
        "{stdout}"
    );
}

#[test]
fn reads_listing_from_stdin() {
    let mut child = opwatch()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(LISTING.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Encoding Op #1 a0, 10"), "{stdout}");
}

#[test]
fn writes_elf_object() {
    let dir = tempfile::tempdir().unwrap();
    let obj_path = dir.path().join("out.o");
    let output = opwatch()
        .arg(write_listing(dir.path()))
        .arg("-o")
        .arg(&obj_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let elf = fs::read(&obj_path).unwrap();
    assert_eq!(&elf[..4], b"\x7fELF");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Assembled 8 bytes -> "), "{stdout}");
    assert!(!stdout.contains("use -o to save"), "{stdout}");
}

#[test]
fn raw_register_names() {
    let dir = tempfile::tempdir().unwrap();
    let output = opwatch()
        .arg(write_listing(dir.path()))
        .arg("--no-register-names")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Encoding Op #1 r4, 10"), "{stdout}");
}

#[test]
fn scheduling_info_appends_descriptor_meta() {
    let dir = tempfile::tempdir().unwrap();
    let output = opwatch()
        .arg(write_listing(dir.path()))
        .arg("--print-scheduling-info")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("; Size: 4, Defs: 1"), "{stdout}");
    assert!(stdout.contains("SchedClass: 1"), "{stdout}");
    assert!(
        stdout.contains("Flags: [MoveImm, Rematerializable, CheapAsAMove]"),
        "{stdout}"
    );
}

#[test]
fn sweep_reencodes_range() {
    let dir = tempfile::tempdir().unwrap();
    let output = opwatch()
        .arg(write_listing(dir.path()))
        .arg("--sweep")
        .arg("1,1,0,4")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let sweep_lines: Vec<&str> = stdout.lines().filter(|l| l.contains(" => ")).collect();
    assert_eq!(sweep_lines.len(), 4, "{stdout}");
    assert!(sweep_lines[0].starts_with("Op #1 a0, 0"), "{stdout}");
    assert!(sweep_lines[0].ends_with("=> 01 04 00 00"), "{stdout}");
    assert!(sweep_lines[3].starts_with("Op #1 a0, 3"), "{stdout}");
    // The primary encode result is unchanged by the sweep.
    assert!(stdout.contains("\tResult: 01 04 0a 00\n"), "{stdout}");
}

#[test]
fn rejects_malformed_sweep_spec() {
    let dir = tempfile::tempdir().unwrap();
    let output = opwatch()
        .arg(write_listing(dir.path()))
        .arg("--sweep")
        .arg("1,2")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("four comma-separated fields"), "{stderr}");
}

#[test]
fn encode_failure_names_the_instruction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"insts": [{"opcode": 10}, {"opcode": 42}]}"#).unwrap();
    let output = opwatch().arg(&path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("encoding instruction 1"), "{stderr}");
    assert!(stderr.contains("unknown opcode #42"), "{stderr}");
}
