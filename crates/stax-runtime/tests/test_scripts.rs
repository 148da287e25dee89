//! Script loading and default-script bootstrap

use std::fs;

use stax_runtime::{CaptureOutput, DEFAULT_SCRIPT, Interpreter};

fn session() -> (Interpreter, CaptureOutput) {
    let out = CaptureOutput::new();
    (Interpreter::with_output(out.clone()), out)
}

#[test]
fn test_load_defines_words() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Mixed Case.stax");
    fs::write(&path, "# helpers\ntriple: 3 *\n\nhalf: 2 /\n").unwrap();

    let (mut i, _) = session();
    i.execute_line(&format!("load {}", path.display())).unwrap();
    i.execute_line("4 triple half").unwrap();
    assert_eq!(i.env().render_stack(), "6");
}

#[test]
fn test_load_path_keeps_inner_spacing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a  b.stax");
    fs::write(&path, "spaced: 8\n").unwrap();

    let (mut i, _) = session();
    i.execute_line(&format!("load {}   # two spaces in the name", path.display()))
        .unwrap();
    i.execute_line("spaced").unwrap();
    assert_eq!(i.env().render_stack(), "8");
}

#[test]
fn test_faulty_script_rolls_back_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.stax");
    fs::write(&path, "good: 1\n1 2 3\nnot-a-word\n").unwrap();

    let (mut i, _) = session();
    let before = i.snapshot();
    let err = i
        .execute_line(&format!("load {}", path.display()))
        .unwrap_err();
    assert_eq!(err.kind(), "UnknownWord");
    assert_eq!(i.snapshot(), before);
    assert!(!i.env().contains("good"));
}

#[test]
fn test_bootstrap_creates_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("default.stax");

    let (mut i, _) = session();
    let faults = i.bootstrap(&path).unwrap();
    assert_eq!(faults, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SCRIPT);
    assert_eq!(i.script_path(), Some(path.as_path()));

    i.execute_line("5 fact").unwrap();
    assert_eq!(i.env().render_stack(), "120");
}

#[test]
fn test_bootstrap_skips_faulty_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("default.stax");
    fs::write(&path, "one: 1\nbroken line\ntwo: 2\n").unwrap();

    let (mut i, out) = session();
    let faults = i.bootstrap(&path).unwrap();
    assert_eq!(faults, 1);
    assert!(i.env().contains("one"));
    assert!(i.env().contains("two"));
    assert!(i.env().operand.is_empty());
    assert_eq!(
        out.contents(),
        format!("{}:2: UnknownWord: 'broken'\n", path.display())
    );
}

#[test]
fn test_seed_words() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("default.stax");
    let (mut i, _) = session();
    i.bootstrap(&path).unwrap();

    for (line, expected) in [
        ("1 2 over", "1 2 1"),
        ("1 2 nip", "2"),
        ("1 2 tuck", "2 1 2"),
        ("1 2 2dup", "1 2 1 2"),
        ("3 cube", "27"),
        ("4 neg", "-4"),
        ("2 4 6 avg", "4"),
        ("0 fact", "1"),
        ("1 2 3 clear", ""),
    ] {
        i.execute_line(line).unwrap();
        assert_eq!(i.env().render_stack(), expected, "line {:?}", line);
        i.execute_line("clear").unwrap();
    }
}
