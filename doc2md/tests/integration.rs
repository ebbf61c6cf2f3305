use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_doc2md")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let input = fs::read_to_string(fixture_path("java/geo/Point.java")).unwrap();
    let expected = fs::read_to_string(fixture_path("Point.expected.md")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    assert_eq!(stdout_of(&assert), expected);
}

#[test]
fn stdin_mode_without_comments() {
    cmd()
        .write_stdin("class Empty {}\n")
        .assert()
        .success()
        .stdout("# Documentation\n");
}

#[test]
fn stdin_mode_level_shifts_headings() {
    let input = fs::read_to_string(fixture_path("java/geo/Point.java")).unwrap();

    let assert = cmd().args(["--level", "2"]).write_stdin(input).assert().success();
    let output = stdout_of(&assert);
    assert!(output.starts_with("## Documentation\n\n### `public class Point`"));
    assert!(output.contains("\n\n#### `public Point move(int dx, int dy)`"));
}

#[test]
fn stdin_mode_phpdoc() {
    let input = fs::read_to_string(fixture_path("calc.php")).unwrap();

    let assert = cmd().args(["-f", "phpdoc"]).write_stdin(input).assert().success();
    let output = stdout_of(&assert);
    assert!(output.contains("## `class Calc`"), "{output}");
    assert!(output.contains(" * **Package:** Math"), "{output}");
    assert!(output.contains("### `private $total = 0`\n\n * **Type:** `int`"), "{output}");
    assert!(output.contains(" * **Parameters:** `$n` — `int` — the number to add"), "{output}");
    assert!(output.contains(" * **Returns:** `int` — the new total"), "{output}");
    assert!(
        output.contains(" * **Exceptions:** `\\OverflowException` — when the total overflows"),
        "{output}"
    );
}

#[test]
fn stdin_mode_jsdoc() {
    let input = fs::read_to_string(fixture_path("greet.js")).unwrap();

    let assert = cmd().args(["--flavor", "jsdoc"]).write_stdin(input).assert().success();
    let output = stdout_of(&assert);
    assert!(output.contains("## `function greet(name)`"), "{output}");
    assert!(output.contains(" * **Parameters:** `name` — `string` — who to greet"), "{output}");
    assert!(output.contains(" * **Returns:** `string` — the greeting"), "{output}");
    assert!(output.ends_with(" * **Example:**\n```\ngreet(\"Ada\");\n```\n"), "{output}");
}

#[test]
fn invalid_flavor_errors() {
    cmd()
        .args(["--flavor", "rdoc"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown flavor: rdoc"));
}

// -- directory mode --

#[test]
fn directory_mode_mirrors_layout() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("docs");

    cmd()
        .arg(fixture_path("java"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("creating"));

    let expected = fs::read_to_string(fixture_path("Point.expected.md")).unwrap();
    assert_eq!(fs::read_to_string(out.join("geo/Point.md")).unwrap(), expected);

    let shape = fs::read_to_string(out.join("Shape.md")).unwrap();
    assert!(shape.contains("## `public interface Shape`"));
    assert!(shape.contains("### `double area()`\n\n * **Returns:** the area in square units"));
}

#[test]
fn directory_mode_writes_index() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("docs");

    cmd().arg(fixture_path("java")).arg("-o").arg(&out).assert().success();

    assert_eq!(
        fs::read_to_string(out.join("_index.md")).unwrap(),
        "\n# Documentation\n\n * [Shape.java doc](Shape.md)\n * [geo/Point.java doc](geo/Point.md)\n"
    );
}

#[test]
fn directory_mode_no_index() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("docs");

    cmd()
        .arg(fixture_path("java"))
        .arg("-o")
        .arg(&out)
        .arg("--no-index")
        .assert()
        .success();

    assert!(out.join("Shape.md").exists());
    assert!(!out.join("_index.md").exists());
}

#[test]
fn directory_mode_custom_extension() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(
        src.path().join("util.mjs"),
        "/**\n * @returns {number} zero\n */\nexport function zero() { return 0; }\n",
    )
    .unwrap();

    cmd()
        .arg(src.path())
        .args(["-f", "jsdoc", "-e", "mjs", "-o"])
        .arg(out.path())
        .assert()
        .success();

    let page = fs::read_to_string(out.path().join("util.md")).unwrap();
    assert!(page.contains("## `export function zero()`"), "{page}");
    assert!(page.contains(" * **Returns:** `number` — zero"), "{page}");
}

#[test]
fn directory_mode_dot_relative_source() {
    let work = TempDir::new().unwrap();
    fs::create_dir_all(work.path().join("src/pkg")).unwrap();
    fs::write(
        work.path().join("src/pkg/A.java"),
        "/**\n * An A.\n */\npublic class A {}\n",
    )
    .unwrap();

    cmd()
        .current_dir(work.path())
        .args(["./src", "-o", "./docs"])
        .assert()
        .success();

    let page = fs::read_to_string(work.path().join("docs/pkg/A.md")).unwrap();
    assert!(page.contains("## `public class A`\n\nAn A."), "{page}");
    assert_eq!(
        fs::read_to_string(work.path().join("docs/_index.md")).unwrap(),
        "\n# Documentation\n\n * [pkg/A.java doc](pkg/A.md)\n"
    );
}

#[test]
fn directory_mode_documents_latin1_sources() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let mut latin1 = b"/**\n * Says hello.\n * @author Jos".to_vec();
    latin1.push(0xE9);
    latin1.extend_from_slice(b"\n */\npublic class Greeter {}\n");
    fs::write(src.path().join("Greeter.java"), latin1).unwrap();
    fs::write(src.path().join("Ok.java"), "/** Fine. */\nclass Ok {}\n").unwrap();

    cmd().arg(src.path()).arg("-o").arg(out.path()).assert().success();

    let page = fs::read_to_string(out.path().join("Greeter.md")).unwrap();
    assert!(page.contains("## `public class Greeter`\n\nSays hello."), "{page}");
    assert!(page.contains(" * **Author:** Jos\u{FFFD}"), "{page}");
    let index = fs::read_to_string(out.path().join("_index.md")).unwrap();
    assert!(index.contains("[Greeter.java doc](Greeter.md)"), "{index}");
    assert!(index.contains("[Ok.java doc](Ok.md)"), "{index}");
}

#[test]
fn directory_mode_requires_output() {
    cmd()
        .arg(fixture_path("java"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn directory_mode_without_matching_files() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(fixture_path("java"))
        .args(["-e", "kt", "-o"])
        .arg(dir.path().join("docs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains no .kt files"));
}

#[test]
fn directory_mode_missing_source() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path().join("nope"))
        .arg("-o")
        .arg(dir.path().join("docs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}
