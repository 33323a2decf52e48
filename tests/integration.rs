use pretty_assertions::assert_eq;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_doxml2adoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

/// Copy fixtures into a scratch directory so outputs never land in the tree.
fn scratch(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        std::fs::copy(fixture_path(name), dir.path().join(name)).unwrap();
    }
    dir
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

const CLASS_COMPOUND: &str = r#"<doxygen><compounddef id="classfoo" kind="class"><compoundname>Foo</compoundname></compounddef></doxygen>"#;

// -- stdin mode --

#[test]
fn stdin_mode_produces_asciidoc() {
    let assert = cmd().write_stdin(fixture("input_8h.xml")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, fixture("input_8h.expected.adoc"));
}

#[test]
fn stdin_mode_rejects_class_compound() {
    cmd()
        .write_stdin(CLASS_COMPOUND)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("compounddef kind: class"));
}

#[test]
fn stdin_mode_rejects_unknown_root() {
    cmd()
        .write_stdin("<html><body/></html>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown root element: html"));
}

#[test]
fn stdin_mode_rejects_malformed_xml() {
    cmd()
        .write_stdin("<doxygen><compounddef>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a parsable document"));
}

#[test]
fn stdin_index_uses_working_directory_by_default() {
    let dir = scratch(&["input_8h.xml"]);

    cmd()
        .current_dir(dir.path())
        .write_stdin(fixture("index.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("= Index API Documentation\n"))
        .stdout(predicate::str::contains("=== swap\n"));
}

// -- file mode --

#[test]
fn file_mode_writes_adoc_next_to_input() {
    let dir = scratch(&["input_8h.xml"]);

    cmd()
        .arg(path_arg(&dir.path().join("input_8h.xml")))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("input_8h.adoc")).unwrap();
    assert_eq!(output, fixture("input_8h.expected.adoc"));
}

#[test]
fn file_mode_expands_globs() {
    let dir = scratch(&["input_8h.xml"]);
    std::fs::copy(fixture_path("input_8h.xml"), dir.path().join("other_8h.xml")).unwrap();

    cmd()
        .arg(path_arg(&dir.path().join("*_8h.xml")))
        .assert()
        .success();

    assert!(dir.path().join("input_8h.adoc").exists());
    assert!(dir.path().join("other_8h.adoc").exists());
}

#[test]
fn file_mode_index_reads_only_file_compounds() {
    // dir/struct compounds have no XML here: reading them would fail the run
    let dir = scratch(&["index.xml", "input_8h.xml"]);

    cmd()
        .args(["-b", path_arg(dir.path())])
        .arg(path_arg(&dir.path().join("index.xml")))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "unhandled doxygenindex compound kind: page",
        ));

    let output = std::fs::read_to_string(dir.path().join("index.adoc")).unwrap();
    let expected = fixture("input_8h.expected.adoc").replacen(
        "= input.h API Documentation",
        "= Index API Documentation",
        1,
    );
    assert_eq!(output, expected);
}

#[test]
fn file_mode_index_missing_compound_fails_without_output() {
    let dir = scratch(&["index.xml"]);

    cmd()
        .args(["-b", path_arg(dir.path())])
        .arg(path_arg(&dir.path().join("index.xml")))
        .assert()
        .failure()
        .stderr(predicate::str::contains("input_8h.xml"));

    assert!(!dir.path().join("index.adoc").exists());
}

#[test]
fn file_mode_class_compound_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input: PathBuf = dir.path().join("classfoo.xml");
    std::fs::write(&input, CLASS_COMPOUND).unwrap();

    cmd()
        .arg(path_arg(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to convert"));

    assert!(!dir.path().join("classfoo.adoc").exists());
}

// -- options --

#[test]
fn typedefs_flag_adds_section() {
    cmd()
        .arg("--typedefs")
        .write_stdin(fixture("input_8h.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "== Typedefs\n\n=== swap_int\n\n[horizontal]\nint -> swap_int:: Integer type used by swap.\n\n== Enums\n",
        ));
}

#[test]
fn verbose_flag_traces_progress() {
    cmd()
        .arg("-v")
        .write_stdin(fixture("input_8h.xml"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Input root is Doxygen"))
        .stderr(predicate::str::contains("Parsing sectiondef kind func"));
}

#[test]
fn default_run_has_no_traces() {
    cmd()
        .write_stdin(fixture("input_8h.xml"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Input root is Doxygen").not());
}

#[test]
fn var_section_warns_unless_quiet() {
    let input = r#"<doxygen><compounddef id="v" kind="file"><compoundname>v.h</compoundname><sectiondef kind="var"/></compounddef></doxygen>"#;

    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("sectiondef var not implemented"));

    cmd()
        .arg("-q")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
